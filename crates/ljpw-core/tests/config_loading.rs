//! Configuration file and environment loading.
//!
//! Only `env_override_applies_over_file` touches process environment, and it
//! uses a key no other test in this binary asserts on.

use std::io::Write;

use ljpw_core::config::{IntegrationMethod, LjpwConfig};
use ljpw_core::LjpwError;
use tempfile::NamedTempFile;

fn toml_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn from_file_round_trip() {
    let mut config = LjpwConfig::euler_preset();
    config.phase.autopoietic_love = 0.75;
    config.oscillator.source_strength = 1.2;

    let file = toml_file(&config.to_toml().unwrap());
    let loaded = LjpwConfig::from_file(file.path()).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn from_file_partial_sections() {
    let file = toml_file(
        r#"
        debug = true

        [integrator]
        method = "euler"
        duration = 12
        "#,
    );
    let loaded = LjpwConfig::from_file(file.path()).unwrap();
    assert!(loaded.debug);
    assert_eq!(loaded.integrator.method, IntegrationMethod::Euler);
    assert_eq!(loaded.integrator.duration, 12.0);
    assert_eq!(loaded.dynamics, LjpwConfig::default().dynamics);
}

#[test]
fn from_file_rejects_invalid_values() {
    let file = toml_file(
        r#"
        [phase]
        entropic_below = 0.9
        autopoietic_harmony = 0.6
        "#,
    );
    let err = LjpwConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, LjpwError::ConfigError(_)));
    assert!(err.to_string().contains("phase"));
}

#[test]
fn from_file_reports_parse_errors() {
    let file = toml_file("[integrator\nstep_size = ");
    let err = LjpwConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, LjpwError::ConfigError(_)));
}

#[test]
fn from_file_missing_path() {
    let err = LjpwConfig::from_file(std::path::Path::new("/nonexistent/ljpw.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn load_without_file_uses_defaults() {
    let loaded = LjpwConfig::load(None).unwrap();
    assert_eq!(loaded.dynamics, LjpwConfig::default().dynamics);
    assert_eq!(loaded.phase, LjpwConfig::default().phase);
}

#[test]
fn load_reads_file() {
    let file = toml_file(
        r#"
        [dynamics]
        beta_w = 0.3

        [oscillator]
        coupling = [
            [0.0, 0.1, 0.1, 0.1],
            [0.1, 0.0, 0.1, 0.1],
            [0.1, 0.1, 0.0, 0.1],
            [0.1, 0.1, 0.1, 0.0],
        ]
        "#,
    );
    let loaded = LjpwConfig::load(Some(file.path())).unwrap();
    assert_eq!(loaded.dynamics.beta_w, 0.3);
    assert_eq!(loaded.oscillator.coupling[2][3], 0.1);
}

#[test]
fn load_missing_file_is_error() {
    let err = LjpwConfig::load(Some(std::path::Path::new("/nonexistent/ljpw.toml"))).unwrap_err();
    assert!(matches!(err, LjpwError::ConfigError(_)));
}

#[test]
fn env_override_applies_over_file() {
    let file = toml_file(
        r#"
        [integrator]
        record_every = 3
        "#,
    );
    std::env::set_var("LJPW_INTEGRATOR__RECORD_EVERY", "7");
    let loaded = LjpwConfig::load(Some(file.path()));
    std::env::remove_var("LJPW_INTEGRATOR__RECORD_EVERY");

    assert_eq!(loaded.unwrap().integrator.record_every, 7);
}
