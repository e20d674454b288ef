//! `ljpw oscillate`: run the self-sustaining oscillator and report energy retention.

use std::path::Path;

use anyhow::anyhow;
use clap::Args;
use ljpw_core::{LjpwConfig, LjpwOscillator, OscillatorReport};
use tracing::debug;

use super::{finish, load_config};

/// Arguments for the oscillate command.
#[derive(Args, Debug, Default)]
pub struct OscillateArgs {
    /// Simulated time
    #[arg(long)]
    pub duration: Option<f64>,

    /// Fixed RK4 step size
    #[arg(long)]
    pub step_size: Option<f64>,

    /// Disable the Love source and the anchor-ward boost
    #[arg(long)]
    pub no_source: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn handle_oscillate(args: OscillateArgs, config_path: Option<&Path>) -> i32 {
    finish("oscillate", run(&args, config_path))
}

pub(crate) fn apply_overrides(args: &OscillateArgs, mut config: LjpwConfig) -> LjpwConfig {
    let osc = &mut config.oscillator;
    if let Some(duration) = args.duration {
        osc.duration = duration;
    }
    if let Some(step_size) = args.step_size {
        osc.step_size = step_size;
    }
    if args.no_source {
        osc.source_strength = 0.0;
        osc.boost = 0.0;
    }
    config
}

fn run(args: &OscillateArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = apply_overrides(args, load_config(config_path)?);
    config.validate()?;
    debug!(
        duration = config.oscillator.duration,
        step_size = config.oscillator.step_size,
        "oscillate"
    );

    let oscillator = LjpwOscillator::new(config.oscillator.clone())?;
    let run = oscillator.run()?;
    let report =
        OscillatorReport::new(&run).ok_or_else(|| anyhow!("oscillator run recorded no samples"))?;

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", render(&report));
    }
    Ok(())
}

pub(crate) fn render(report: &OscillatorReport) -> String {
    let e = &report.energy;
    let mut out = String::new();
    out.push_str(&format!("Run:               {}\n", report.run_id));
    out.push_str(&format!("Initial energy:    {:.5}\n", e.initial));
    out.push_str(&format!("Early mean:        {:.5}\n", e.early_mean));
    out.push_str(&format!("Late mean:         {:.5}\n", e.late_mean));
    out.push_str(&format!("Final energy:      {:.5}\n", e.final_energy));
    out.push_str(&format!("Retention:         {:.1}%\n", e.retention * 100.0));
    out.push_str(&format!(
        "Source active:     {:.1}% of samples\n",
        report.source_active_fraction * 100.0
    ));
    out.push_str(&format!("Final positions:   {}\n", report.final_positions));
    out.push_str(&format!("Final harmony:     {:.4}\n", report.final_harmony));
    out.push_str(&format!("Verdict:           {}\n", e.verdict));
    out
}
