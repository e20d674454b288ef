//! Second-order LJPW oscillator with a harmony-gated Love source.
//!
//! ```text
//! F_i = −r·(x_i − x_eq,i) − Σ_{j≠i} k_ij·(x_i − x_j) − γ_i·v_i + S_i
//! S_0 = s·H·((1 − x_0) + g·|v_0|)    when H > H_thr
//! S_i = b·H·(1 − x_i)    (i ≠ 0)     when H > H_thr
//! a_i = F_i / m_i
//! ```
//!
//! Positions are not clamped. With `s = b = 0` and `γ = 0` the system is
//! conservative with
//!
//! ```text
//! E = ½Σ m_i v_i² + ½r·Σ(x_i − x_eq,i)² + Σ_{i<j} ½k_ij·(x_i − x_j)²
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use crate::config::OscillatorConfig;
use crate::error::{LjpwError, LjpwResult};
use crate::scoring::harmony_index;
use crate::vector::{Ljpw, NUM_DIMENSIONS};

use super::energy::EnergyReport;
use super::integrator::{rk4_step, VectorField};

/// Dimension of the flattened `(x, v)` state.
pub const OSCILLATOR_STATE_DIM: usize = 2 * NUM_DIMENSIONS;

/// Positions and velocities of the four masses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OscillatorState {
    pub positions: Ljpw,
    pub velocities: Ljpw,
}

impl OscillatorState {
    pub fn new(positions: Ljpw, velocities: Ljpw) -> Self {
        Self {
            positions,
            velocities,
        }
    }

    /// Flatten as `[x_L, x_J, x_P, x_W, v_L, v_J, v_P, v_W]`.
    pub fn to_array(&self) -> [f64; OSCILLATOR_STATE_DIM] {
        let mut out = [0.0; OSCILLATOR_STATE_DIM];
        out[..NUM_DIMENSIONS].copy_from_slice(&self.positions.to_array());
        out[NUM_DIMENSIONS..].copy_from_slice(&self.velocities.to_array());
        out
    }

    pub fn from_array(a: [f64; OSCILLATOR_STATE_DIM]) -> Self {
        Self {
            positions: Ljpw::new(a[0], a[1], a[2], a[3]),
            velocities: Ljpw::new(a[4], a[5], a[6], a[7]),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.positions.is_finite() && self.velocities.is_finite()
    }

    /// Harmony index of the positions.
    pub fn harmony(&self) -> f64 {
        harmony_index(&self.positions)
    }
}

/// One recorded oscillator sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OscillatorSample {
    pub t: f64,
    pub state: OscillatorState,
    pub harmony: f64,
    pub energy: f64,
    /// Whether the source terms were active at this sample.
    pub source_active: bool,
}

/// Result of an oscillator run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OscillatorRun {
    pub samples: Vec<OscillatorSample>,
    pub energy: EnergyReport,
    /// Fraction of samples with harmony above the source threshold.
    pub source_active_fraction: f64,
}

impl OscillatorRun {
    /// Final recorded state.
    pub fn final_state(&self) -> Option<&OscillatorState> {
        self.samples.last().map(|s| &s.state)
    }
}

/// The self-sustaining LJPW oscillator.
#[derive(Debug, Clone, PartialEq)]
pub struct LjpwOscillator {
    config: OscillatorConfig,
}

impl LjpwOscillator {
    /// Create an oscillator, validating its parameters.
    pub fn new(config: OscillatorConfig) -> LjpwResult<Self> {
        config
            .validate()
            .map_err(|e| LjpwError::ConfigError(format!("oscillator: {}", e)))?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &OscillatorConfig {
        &self.config
    }

    /// Configured initial state.
    pub fn initial_state(&self) -> OscillatorState {
        OscillatorState::new(
            Ljpw::from_array(self.config.initial_positions),
            Ljpw::from_array(self.config.initial_velocities),
        )
    }

    /// Whether the source terms fire at harmony `h`.
    #[inline]
    pub fn source_active(&self, harmony: f64) -> bool {
        harmony > self.config.harmony_threshold
    }

    /// Accelerations for a given state.
    pub fn accelerations(&self, state: &OscillatorState) -> [f64; NUM_DIMENSIONS] {
        let c = &self.config;
        let x = state.positions.to_array();
        let v = state.velocities.to_array();
        let h = state.harmony();
        let active = self.source_active(h);

        let mut a = [0.0; NUM_DIMENSIONS];
        for i in 0..NUM_DIMENSIONS {
            let mut force = -c.restoring * (x[i] - c.equilibrium[i]);
            for j in 0..NUM_DIMENSIONS {
                if i != j {
                    force -= c.coupling[i][j] * (x[i] - x[j]);
                }
            }
            force -= c.damping[i] * v[i];

            if active {
                force += if i == 0 {
                    c.source_strength * h * ((1.0 - x[0]) + c.velocity_gain * v[0].abs())
                } else {
                    c.boost * h * (1.0 - x[i])
                };
            }
            a[i] = force / c.masses[i];
        }
        a
    }

    /// Kinetic energy `½Σ m_i v_i²`.
    pub fn kinetic_energy(&self, state: &OscillatorState) -> f64 {
        self.config
            .masses
            .iter()
            .zip(state.velocities.to_array())
            .map(|(m, v)| 0.5 * m * v * v)
            .sum()
    }

    /// Spring potential energy (restoring plus pairwise coupling).
    pub fn potential_energy(&self, state: &OscillatorState) -> f64 {
        let c = &self.config;
        let x = state.positions.to_array();
        let mut pe: f64 = x
            .iter()
            .zip(c.equilibrium.iter())
            .map(|(xi, eq)| 0.5 * c.restoring * (xi - eq).powi(2))
            .sum();
        for i in 0..NUM_DIMENSIONS {
            for j in (i + 1)..NUM_DIMENSIONS {
                pe += 0.5 * c.coupling[i][j] * (x[i] - x[j]).powi(2);
            }
        }
        pe
    }

    pub fn total_energy(&self, state: &OscillatorState) -> f64 {
        self.kinetic_energy(state) + self.potential_energy(state)
    }

    fn sample(&self, t: f64, state: OscillatorState) -> OscillatorSample {
        let harmony = state.harmony();
        let energy = self.total_energy(&state);
        trace!(t, harmony, energy, "oscillator sample");
        OscillatorSample {
            t,
            state,
            harmony,
            energy,
            source_active: self.source_active(harmony),
        }
    }

    /// Integrate from the configured initial state with RK4.
    ///
    /// # Errors
    ///
    /// - `CapacityError` if the step count exceeds `max_steps`
    /// - `Diverged` if a step produces a non-finite state
    pub fn run(&self) -> LjpwResult<OscillatorRun> {
        self.run_from(self.initial_state())
    }

    /// Integrate from an explicit initial state with RK4.
    pub fn run_from(&self, initial: OscillatorState) -> LjpwResult<OscillatorRun> {
        if !initial.is_finite() {
            return Err(LjpwError::invalid_param(
                "initial_state",
                format!("{:?}", initial),
                "Must be finite",
            ));
        }

        let c = &self.config;
        let steps = c.step_count();
        if steps > c.max_steps {
            return Err(LjpwError::CapacityError(format!(
                "{} oscillator steps requested, limit is {}",
                steps, c.max_steps
            )));
        }

        debug!(
            steps,
            step_size = c.step_size,
            source_strength = c.source_strength,
            harmony_threshold = c.harmony_threshold,
            "starting oscillator run"
        );

        let mut samples = Vec::with_capacity(steps / c.record_every + 2);
        samples.push(self.sample(0.0, initial));

        let mut state = initial.to_array();
        for step in 1..=steps {
            let t_prev = c.time_at(step - 1);
            let t = c.time_at(step);
            state = rk4_step(self, t_prev, &state, t - t_prev);
            if state.iter().any(|x| !x.is_finite()) {
                warn!(step, time = t, "oscillator diverged");
                return Err(LjpwError::Diverged { step, time: t });
            }
            if step % c.record_every == 0 || step == steps {
                samples.push(self.sample(t, OscillatorState::from_array(state)));
            }
        }

        let energies: Vec<f64> = samples.iter().map(|s| s.energy).collect();
        let energy = EnergyReport::from_energies(&energies).ok_or_else(|| {
            LjpwError::CapacityError("oscillator run recorded no samples".to_string())
        })?;
        let active = samples.iter().filter(|s| s.source_active).count();
        let source_active_fraction = active as f64 / samples.len() as f64;

        info!(
            steps,
            retention = energy.retention,
            verdict = %energy.verdict,
            source_active_fraction,
            "oscillator run complete"
        );

        Ok(OscillatorRun {
            samples,
            energy,
            source_active_fraction,
        })
    }
}

impl VectorField<OSCILLATOR_STATE_DIM> for LjpwOscillator {
    fn derivative(
        &self,
        _t: f64,
        state: &[f64; OSCILLATOR_STATE_DIM],
    ) -> [f64; OSCILLATOR_STATE_DIM] {
        let s = OscillatorState::from_array(*state);
        let a = self.accelerations(&s);
        let mut out = [0.0; OSCILLATOR_STATE_DIM];
        out[..NUM_DIMENSIONS].copy_from_slice(&state[NUM_DIMENSIONS..]);
        out[NUM_DIMENSIONS..].copy_from_slice(&a);
        out
    }
}
