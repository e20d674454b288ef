//! Fixed-step integrator settings.

use serde::{Deserialize, Serialize};

use crate::vector::Ljpw;

/// Relative slack under which `duration / step_size` counts as a whole number.
const STEP_RATIO_TOLERANCE: f64 = 1e-9;

/// Number of fixed steps of at most `step_size` needed to reach `duration`.
///
/// A ratio within rounding noise of an integer is taken as exact. Otherwise
/// the count rounds up and the last step is shortened so the run ends at
/// `duration`, never past it.
pub(crate) fn fixed_step_count(duration: f64, step_size: f64) -> usize {
    let ratio = duration / step_size;
    let nearest = ratio.round();
    if (ratio - nearest).abs() <= STEP_RATIO_TOLERANCE * nearest.max(1.0) {
        nearest as usize
    } else {
        ratio.ceil() as usize
    }
}

/// Simulation time after `step` fixed steps, capped at `duration`.
#[inline]
pub(crate) fn fixed_step_time(step: usize, step_size: f64, duration: f64) -> f64 {
    (step as f64 * step_size).min(duration)
}

/// Numerical integration scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationMethod {
    /// Forward Euler, one slope evaluation per step.
    Euler,
    /// Classical 4th-order Runge-Kutta.
    #[default]
    Rk4,
}

impl IntegrationMethod {
    /// Get a human-readable name for this method.
    pub fn name(&self) -> &'static str {
        match self {
            IntegrationMethod::Euler => "euler",
            IntegrationMethod::Rk4 => "rk4",
        }
    }
}

impl std::fmt::Display for IntegrationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for IntegrationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euler" => Ok(IntegrationMethod::Euler),
            "rk4" | "runge-kutta" => Ok(IntegrationMethod::Rk4),
            other => Err(format!("unknown integration method '{}'", other)),
        }
    }
}

/// Fixed-step integrator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegratorConfig {
    /// Integration scheme.
    pub method: IntegrationMethod,

    /// Fixed step size.
    /// Must be > 0.
    pub step_size: f64,

    /// Total simulated time.
    /// Must be >= 0.
    pub duration: f64,

    /// Record one sample every `record_every` steps (the final step is always recorded).
    /// Must be > 0.
    pub record_every: usize,

    /// Lower clamp applied to every component after each step.
    pub lower_bound: f64,

    /// Upper clamp applied to every component after each step.
    pub upper_bound: f64,

    /// Upper limit on the number of steps in one run.
    pub max_steps: usize,
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        Self {
            method: IntegrationMethod::Rk4,
            step_size: 0.01,
            duration: 50.0,
            record_every: 10,
            lower_bound: 0.0,
            upper_bound: 1.5,
            max_steps: 10_000_000,
        }
    }
}

impl IntegratorConfig {
    /// Validate the integrator configuration.
    pub fn validate(&self) -> Result<(), String> {
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
        if !self.lower_bound.is_finite() || !self.upper_bound.is_finite() {
            return Err(format!(
                "bounds must be finite, got [{}, {}]",
                self.lower_bound, self.upper_bound
            ));
        }
        if self.lower_bound >= self.upper_bound {
            return Err(format!(
                "lower_bound ({}) must be < upper_bound ({})",
                self.lower_bound, self.upper_bound
            ));
        }
        if self.max_steps == 0 {
            return Err("max_steps must be > 0".to_string());
        }
        Ok(())
    }

    /// Number of fixed steps needed to cover `duration`.
    ///
    /// When `duration` is not a whole multiple of `step_size` the final step
    /// is shortened, so the run ends exactly at `duration`.
    pub fn step_count(&self) -> usize {
        fixed_step_count(self.duration, self.step_size)
    }

    /// Simulation time after `step` steps.
    pub fn time_at(&self, step: usize) -> f64 {
        fixed_step_time(step, self.step_size, self.duration)
    }

    /// Clamp every component into `[lower_bound, upper_bound]`.
    pub fn clamp_state(&self, state: &Ljpw) -> Ljpw {
        state.clamp(self.lower_bound, self.upper_bound)
    }
}
