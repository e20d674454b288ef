//! Command handlers.
//!
//! Every handler returns a process exit code; errors are logged and
//! printed to stderr before being mapped through [`exit_code_for_error`].

pub mod config;
pub mod oscillate;
pub mod score;
pub mod simulate;

use std::path::Path;

use anyhow::Context;
use ljpw_core::LjpwConfig;
use tracing::error;

use crate::error::{exit_code_for_error, CliExitCode};

/// Load configuration from an optional file plus `LJPW_*` environment variables.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<LjpwConfig> {
    let config = LjpwConfig::load(path).with_context(|| match path {
        Some(p) => format!("loading configuration from {}", p.display()),
        None => "loading configuration from environment".to_string(),
    })?;
    Ok(config)
}

/// Convert a handler result into an exit code.
pub fn finish(command: &str, result: anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => CliExitCode::Success.code(),
        Err(e) => {
            let code = exit_code_for_error(&e);
            error!(command, exit_code = code.code(), "{:#}", e);
            eprintln!("Error: {:#}", e);
            code.code()
        }
    }
}
