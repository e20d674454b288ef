//! Serializable run reports.
//!
//! Each report carries a fresh UUID v4 `run_id` and a UTC `generated_at`
//! timestamp so that saved JSON outputs can be told apart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{IntegrationMethod, IntegratorConfig};
use crate::dynamics::{EnergyReport, OscillatorRun, Trajectory, TrajectorySample, TrajectorySummary};
use crate::error::LjpwResult;
use crate::vector::Ljpw;

/// Report for one first-order simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub method: IntegrationMethod,
    pub step_size: f64,
    pub duration: f64,
    /// Initial state after clamping.
    pub initial: Ljpw,
    pub final_state: Ljpw,
    pub summary: TrajectorySummary,
    /// Recorded samples; empty when the caller asked for a summary only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<TrajectorySample>,
}

impl SimulationReport {
    /// Build a report, keeping the samples only if `include_samples` is set.
    pub fn new(integrator: &IntegratorConfig, trajectory: Trajectory, include_samples: bool) -> Self {
        let initial = trajectory.initial().state;
        let final_state = trajectory.last().state;
        let (samples, summary) = trajectory.into_parts();
        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            method: integrator.method,
            step_size: integrator.step_size,
            duration: integrator.duration,
            initial,
            final_state,
            summary,
            samples: if include_samples { samples } else { Vec::new() },
        }
    }

    pub fn to_json(&self) -> LjpwResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Report for one oscillator run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OscillatorReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub energy: EnergyReport,
    pub source_active_fraction: f64,
    pub final_positions: Ljpw,
    pub final_velocities: Ljpw,
    /// Harmony of the final positions.
    pub final_harmony: f64,
}

impl OscillatorReport {
    /// Build a report from a completed run.
    ///
    /// Returns `None` if the run recorded no samples.
    pub fn new(run: &OscillatorRun) -> Option<Self> {
        let last = run.samples.last()?;
        Some(Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            energy: run.energy,
            source_active_fraction: run.source_active_fraction,
            final_positions: last.state.positions,
            final_velocities: last.state.velocities,
            final_harmony: last.harmony,
        })
    }

    pub fn to_json(&self) -> LjpwResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
