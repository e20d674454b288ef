//! Self-sustaining oscillator parameters.
//!
//! Each dimension is a mass on a spring anchored at its equilibrium value,
//! coupled to the other three, damped, and driven by a Love source term
//! while harmony stays above `harmony_threshold`.

use serde::{Deserialize, Serialize};

use super::integrator::{fixed_step_count, fixed_step_time};
use crate::vector::NUM_DIMENSIONS;

/// Parameters of the second-order LJPW oscillator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OscillatorConfig {
    /// Per-dimension inertia. Must be > 0.
    pub masses: [f64; NUM_DIMENSIONS],

    /// Rest positions of the restoring springs.
    pub equilibrium: [f64; NUM_DIMENSIONS],

    /// Stiffness of the spring pulling each dimension toward equilibrium.
    pub restoring: f64,

    /// Symmetric inter-dimension coupling stiffness (diagonal ignored).
    pub coupling: [[f64; NUM_DIMENSIONS]; NUM_DIMENSIONS],

    /// Per-dimension linear damping.
    pub damping: [f64; NUM_DIMENSIONS],

    /// Strength of the Love source term.
    pub source_strength: f64,

    /// Harmony above which the source terms are active.
    pub harmony_threshold: f64,

    /// Anchor-ward boost applied to Justice, Power and Wisdom while active.
    pub boost: f64,

    /// Weight of |v_L| in the Love source term.
    pub velocity_gain: f64,

    /// Initial positions.
    pub initial_positions: [f64; NUM_DIMENSIONS],

    /// Initial velocities.
    pub initial_velocities: [f64; NUM_DIMENSIONS],

    /// Total simulated time.
    pub duration: f64,

    /// Fixed RK4 step size.
    pub step_size: f64,

    /// Record one sample every `record_every` steps.
    pub record_every: usize,

    /// Upper bound on integration steps for one run.
    pub max_steps: usize,
}

impl Default for OscillatorConfig {
    fn default() -> Self {
        let equilibrium = [0.618, 0.414, 0.718, 0.693];
        Self {
            masses: equilibrium,
            equilibrium,
            restoring: 0.3,
            coupling: [
                [0.0, 0.5, 0.4, 0.6],
                [0.5, 0.0, 0.3, 0.4],
                [0.4, 0.3, 0.0, 0.2],
                [0.6, 0.4, 0.2, 0.0],
            ],
            damping: [0.03, 0.04, 0.04, 0.05],
            source_strength: 1.5,
            harmony_threshold: 0.5,
            boost: 0.02,
            velocity_gain: 0.5,
            initial_positions: [0.75, 0.55, 0.78, 0.75],
            initial_velocities: [0.08, 0.04, 0.05, 0.04],
            duration: 300.0,
            step_size: 0.01,
            record_every: 10,
            max_steps: 10_000_000,
        }
    }
}

impl OscillatorConfig {
    /// Undriven, undamped oscillator: total energy is conserved.
    pub fn conservative() -> Self {
        Self {
            damping: [0.0; NUM_DIMENSIONS],
            source_strength: 0.0,
            boost: 0.0,
            ..Default::default()
        }
    }

    /// Damping without any source: total energy decays.
    pub fn damped() -> Self {
        Self {
            source_strength: 0.0,
            boost: 0.0,
            ..Default::default()
        }
    }

    /// Validate the oscillator configuration.
    pub fn validate(&self) -> Result<(), String> {
        for (i, &m) in self.masses.iter().enumerate() {
            if !m.is_finite() || m <= 0.0 {
                return Err(format!("masses[{}] must be finite and > 0, got {}", i, m));
            }
        }
        for (i, &d) in self.damping.iter().enumerate() {
            if !d.is_finite() || d < 0.0 {
                return Err(format!("damping[{}] must be finite and >= 0, got {}", i, d));
            }
        }
        for i in 0..NUM_DIMENSIONS {
            for j in (i + 1)..NUM_DIMENSIONS {
                let (kij, kji) = (self.coupling[i][j], self.coupling[j][i]);
                if !kij.is_finite() || kij < 0.0 {
                    return Err(format!(
                        "coupling[{}][{}] must be finite and >= 0, got {}",
                        i, j, kij
                    ));
                }
                if (kij - kji).abs() > 1e-12 {
                    return Err(format!(
                        "coupling must be symmetric: [{}][{}]={} but [{}][{}]={}",
                        i, j, kij, j, i, kji
                    ));
                }
            }
        }
        let scalars = [
            ("restoring", self.restoring),
            ("source_strength", self.source_strength),
            ("boost", self.boost),
            ("velocity_gain", self.velocity_gain),
        ];
        for (name, value) in scalars {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be finite and >= 0, got {}", name, value));
            }
        }
        if !(0.0..=1.0).contains(&self.harmony_threshold) {
            return Err(format!(
                "harmony_threshold must be in [0, 1], got {}",
                self.harmony_threshold
            ));
        }
        if self
            .initial_positions
            .iter()
            .chain(self.initial_velocities.iter())
            .chain(self.equilibrium.iter())
            .any(|x| !x.is_finite())
        {
            return Err("initial state and equilibrium must be finite".to_string());
        }
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(format!(
                "step_size must be finite and > 0, got {}",
                self.step_size
            ));
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(format!(
                "duration must be finite and >= 0, got {}",
                self.duration
            ));
        }
        if self.record_every == 0 {
            return Err("record_every must be > 0".to_string());
        }
        if self.max_steps == 0 {
            return Err("max_steps must be > 0".to_string());
        }
        Ok(())
    }

    /// Number of RK4 steps needed to cover `duration`, the last one
    /// shortened if `duration` is not a whole multiple of `step_size`.
    pub fn step_count(&self) -> usize {
        fixed_step_count(self.duration, self.step_size)
    }

    /// Simulation time after `step` steps.
    pub fn time_at(&self, step: usize) -> f64 {
        fixed_step_time(step, self.step_size, self.duration)
    }
}
