//! `ljpw simulate`: run the coupled first-order model.

use std::path::Path;

use clap::Args;
use ljpw_core::config::{DynamicsConfig, IntegrationMethod};
use ljpw_core::dynamics::{Simulator, TrajectorySummary};
use ljpw_core::{Ljpw, LjpwConfig, LjpwError, SimulationReport, NATURAL_EQUILIBRIUM};
use tracing::debug;

use super::{finish, load_config};

/// Arguments for the simulate command.
#[derive(Args, Debug, Default)]
pub struct SimulateArgs {
    /// Initial vector as "L,J,P,W" (default: Natural Equilibrium)
    #[arg(long, allow_hyphen_values = true)]
    pub initial: Option<String>,

    /// Simulated time
    #[arg(long)]
    pub duration: Option<f64>,

    /// Fixed step size
    #[arg(long)]
    pub step_size: Option<f64>,

    /// Integration method (rk4 or euler)
    #[arg(long)]
    pub method: Option<IntegrationMethod>,

    /// Record one sample every N steps
    #[arg(long)]
    pub record_every: Option<usize>,

    /// Zero every growth, decay and erosion coefficient
    #[arg(long)]
    pub frozen: bool,

    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,

    /// Include every recorded sample in the JSON report
    #[arg(long, requires = "json")]
    pub samples: bool,
}

pub fn handle_simulate(args: SimulateArgs, config_path: Option<&Path>) -> i32 {
    finish("simulate", run(&args, config_path))
}

/// Apply command-line overrides on top of the loaded configuration.
pub(crate) fn apply_overrides(args: &SimulateArgs, mut config: LjpwConfig) -> LjpwConfig {
    if let Some(duration) = args.duration {
        config.integrator.duration = duration;
    }
    if let Some(step_size) = args.step_size {
        config.integrator.step_size = step_size;
    }
    if let Some(method) = args.method {
        config.integrator.method = method;
    }
    if let Some(record_every) = args.record_every {
        config.integrator.record_every = record_every;
    }
    if args.frozen {
        config.dynamics = DynamicsConfig::frozen();
    }
    config
}

fn parse_initial(initial: Option<&str>) -> Result<Ljpw, LjpwError> {
    match initial {
        Some(text) => {
            let v: Ljpw = text.parse()?;
            v.validate_finite()?;
            Ok(v)
        }
        None => Ok(NATURAL_EQUILIBRIUM),
    }
}

fn run(args: &SimulateArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = apply_overrides(args, load_config(config_path)?);
    config.validate()?;
    let initial = parse_initial(args.initial.as_deref())?;
    debug!(initial = %initial, method = %config.integrator.method, "simulate");

    let simulator = Simulator::from_config(&config)?;
    let trajectory = simulator.run(initial)?;

    let report = SimulationReport::new(&config.integrator, trajectory, args.samples);
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", render(&report));
    }
    Ok(())
}

fn render_summary(out: &mut String, summary: &TrajectorySummary) {
    out.push_str(&format!("Steps:            {}\n", summary.steps));
    out.push_str(&format!(
        "Harmony:          initial {:.4}  final {:.4}  mean {:.4}  min {:.4}  max {:.4}\n",
        summary.initial_harmony,
        summary.final_harmony,
        summary.mean_harmony,
        summary.min_harmony,
        summary.max_harmony
    ));
    let o = &summary.occupancy;
    out.push_str(&format!(
        "Phase occupancy:  entropic {:.1}%  homeostatic {:.1}%  autopoietic {:.1}%\n",
        o.entropic * 100.0,
        o.homeostatic * 100.0,
        o.autopoietic * 100.0
    ));
    out.push_str(&format!("Final phase:      {}\n", summary.final_phase));
    if summary.transitions.is_empty() {
        out.push_str("Transitions:      none\n");
    } else {
        out.push_str(&format!("Transitions:      {}\n", summary.transitions.len()));
        for t in &summary.transitions {
            out.push_str(&format!("  t={:<10.3} {} -> {}\n", t.time, t.from, t.to));
        }
    }
}

pub(crate) fn render(report: &SimulationReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Run:              {}\n", report.run_id));
    out.push_str(&format!(
        "Method:           {} (dt={}, duration={})\n",
        report.method, report.step_size, report.duration
    ));
    out.push_str(&format!("Initial state:    {}\n", report.initial));
    out.push_str(&format!("Final state:      {}\n", report.final_state));
    render_summary(&mut out, &report.summary);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overrides() {
        let args = SimulateArgs {
            duration: Some(3.0),
            step_size: Some(0.02),
            method: Some(IntegrationMethod::Euler),
            record_every: Some(5),
            frozen: true,
            ..Default::default()
        };
        let config = apply_overrides(&args, LjpwConfig::default());
        assert_eq!(config.integrator.duration, 3.0);
        assert_eq!(config.integrator.step_size, 0.02);
        assert_eq!(config.integrator.method, IntegrationMethod::Euler);
        assert_eq!(config.integrator.record_every, 5);
        assert_eq!(config.dynamics, DynamicsConfig::frozen());
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let config = apply_overrides(&SimulateArgs::default(), LjpwConfig::euler_preset());
        assert_eq!(config, LjpwConfig::euler_preset());
    }

    #[test]
    fn test_parse_initial_default() {
        assert_eq!(parse_initial(None).unwrap(), NATURAL_EQUILIBRIUM);
        assert!(parse_initial(Some("1,2,3")).is_err());
        assert!(parse_initial(Some("NaN,0,0,0")).is_err());
    }

    #[test]
    fn test_render_frozen_run() {
        let config = apply_overrides(
            &SimulateArgs {
                duration: Some(1.0),
                frozen: true,
                ..Default::default()
            },
            LjpwConfig::default(),
        );
        let trajectory = Simulator::from_config(&config)
            .unwrap()
            .run(NATURAL_EQUILIBRIUM)
            .unwrap();
        let report = SimulationReport::new(&config.integrator, trajectory, false);
        let text = render(&report);
        assert!(text.contains("Steps:            100"));
        assert!(text.contains("Transitions:      none"));
        assert!(text.contains("Homeostatic"));
    }

    #[test]
    fn test_invalid_step_size_exit_code() {
        let args = SimulateArgs {
            step_size: Some(-1.0),
            ..Default::default()
        };
        assert_eq!(handle_simulate(args, None), 2);
    }

    #[test]
    fn test_capacity_exit_code() {
        let args = SimulateArgs {
            duration: Some(1e9),
            step_size: Some(1e-3),
            ..Default::default()
        };
        assert_eq!(handle_simulate(args, None), 1);
    }
}
