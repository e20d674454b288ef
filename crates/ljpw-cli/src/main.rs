//! LJPW CLI
//!
//! Command-line front end for LJPW scoring and simulation.
//!
//! # Commands
//!
//! - `score`: means, harmony index, distances and phase of one vector
//! - `simulate`: integrate the coupled first-order model
//! - `oscillate`: run the self-sustaining oscillator and report energy retention
//! - `config`: print or validate the effective configuration
//!
//! Configuration comes from `--config <file>` (TOML) layered under
//! `LJPW_*` environment variables, e.g. `LJPW_INTEGRATOR__STEP_SIZE=0.005`.
//!
//! Exit codes: 0 success, 1 error, 2 invalid input or configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod error;

/// LJPW - vector scoring and coupled-dynamics simulation
#[derive(Parser, Debug)]
#[command(name = "ljpw")]
#[command(version)]
#[command(about = "Score LJPW vectors and simulate their coupled dynamics")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// TOML configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a single vector
    ///
    /// Prints the arithmetic, geometric and harmonic means, the harmony
    /// index, distances to the Anchor Point and Natural Equilibrium, and
    /// the phase label.
    Score(commands::score::ScoreArgs),
    /// Simulate the coupled first-order model with RK4 or Euler
    Simulate(commands::simulate::SimulateArgs),
    /// Run the self-sustaining oscillator
    Oscillate(commands::oscillate::OscillateArgs),
    /// Print or validate the effective configuration
    Config(commands::config::ConfigArgs),
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.as_deref();
    let exit_code = match cli.command {
        Commands::Score(args) => commands::score::handle_score(args, config_path),
        Commands::Simulate(args) => commands::simulate::handle_simulate(args, config_path),
        Commands::Oscillate(args) => commands::oscillate::handle_oscillate(args, config_path),
        Commands::Config(args) => commands::config::handle_config(args, config_path),
    };

    std::process::exit(exit_code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use ljpw_core::config::IntegrationMethod;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_score() {
        let cli = Cli::try_parse_from(["ljpw", "score", "0.7,0.5,0.8,0.75", "--json"]).unwrap();
        match cli.command {
            Commands::Score(args) => {
                assert_eq!(args.vector, "0.7,0.5,0.8,0.75");
                assert!(args.json);
            }
            other => panic!("expected score, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_score_negative_component() {
        let cli = Cli::try_parse_from(["ljpw", "score", "-0.1,0.5,0.5,0.5"]).unwrap();
        assert!(matches!(cli.command, Commands::Score(_)));
    }

    #[test]
    fn test_parse_simulate_options() {
        let cli = Cli::try_parse_from([
            "ljpw",
            "-vv",
            "--config",
            "ljpw.toml",
            "simulate",
            "--initial",
            "0.5,0.5,0.5,0.5",
            "--duration",
            "12.5",
            "--step-size",
            "0.005",
            "--method",
            "euler",
            "--record-every",
            "20",
            "--frozen",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("ljpw.toml")));
        match cli.command {
            Commands::Simulate(args) => {
                assert_eq!(args.initial.as_deref(), Some("0.5,0.5,0.5,0.5"));
                assert_eq!(args.duration, Some(12.5));
                assert_eq!(args.step_size, Some(0.005));
                assert_eq!(args.method, Some(IntegrationMethod::Euler));
                assert_eq!(args.record_every, Some(20));
                assert!(args.frozen);
                assert!(!args.json);
            }
            other => panic!("expected simulate, got {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["ljpw", "config", "--validate-only", "-v"]).unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Config(args) => assert!(args.validate_only),
            other => panic!("expected config, got {other:?}"),
        }
    }

    #[test]
    fn test_samples_requires_json() {
        assert!(Cli::try_parse_from(["ljpw", "simulate", "--samples"]).is_err());
        assert!(Cli::try_parse_from(["ljpw", "simulate", "--json", "--samples"]).is_ok());
    }

    #[test]
    fn test_unknown_method_rejected() {
        assert!(Cli::try_parse_from(["ljpw", "simulate", "--method", "leapfrog"]).is_err());
    }

    #[test]
    fn test_parse_oscillate() {
        let cli =
            Cli::try_parse_from(["ljpw", "oscillate", "--duration", "100", "--no-source"]).unwrap();
        match cli.command {
            Commands::Oscillate(args) => {
                assert_eq!(args.duration, Some(100.0));
                assert!(args.no_source);
            }
            other => panic!("expected oscillate, got {other:?}"),
        }
    }
}
