//! `ljpw config`: print or validate the effective configuration.

use std::path::Path;

use clap::Args;
use tracing::info;

use super::{finish, load_config};

/// Arguments for the config command.
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Only validate; print nothing on success
    #[arg(long)]
    pub validate_only: bool,
}

pub fn handle_config(args: ConfigArgs, config_path: Option<&Path>) -> i32 {
    finish("config", run(&args, config_path))
}

fn run(args: &ConfigArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    info!("configuration valid");
    if !args.validate_only {
        print!("{}", config.to_toml()?);
    }
    Ok(())
}
