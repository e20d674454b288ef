//! Fixed-step simulation of the first-order LJPW model.

use tracing::{debug, info, trace, warn};

use crate::config::{IntegratorConfig, LjpwConfig};
use crate::error::{LjpwError, LjpwResult};
use crate::phase::{PhaseClassifier, PhaseTracker};
use crate::scoring::harmony_index;
use crate::vector::Ljpw;

use super::integrator;
use super::model::LjpwModel;
use super::trajectory::{Trajectory, TrajectorySample, TrajectorySummary};

/// Integrates [`LjpwModel`] with a fixed step, clamping after every step.
///
/// # Example
///
/// ```
/// use ljpw_core::config::LjpwConfig;
/// use ljpw_core::dynamics::Simulator;
/// use ljpw_core::vector::Ljpw;
///
/// let simulator = Simulator::from_config(&LjpwConfig::frozen_preset()).unwrap();
/// let start = Ljpw::new(0.3, 0.4, 0.5, 0.6);
/// let trajectory = simulator.run(start).unwrap();
///
/// assert_eq!(trajectory.last().state, start);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    model: LjpwModel,
    integrator: IntegratorConfig,
    classifier: PhaseClassifier,
    debug: bool,
}

impl Simulator {
    /// Create a simulator from explicit parts.
    ///
    /// # Errors
    ///
    /// Returns `LjpwError::ConfigError` if the integrator settings are invalid.
    pub fn new(
        model: LjpwModel,
        integrator: IntegratorConfig,
        classifier: PhaseClassifier,
    ) -> LjpwResult<Self> {
        integrator
            .validate()
            .map_err(|e| LjpwError::ConfigError(format!("integrator: {}", e)))?;
        Ok(Self {
            model,
            integrator,
            classifier,
            debug: false,
        })
    }

    /// Create a simulator from a full configuration.
    pub fn from_config(config: &LjpwConfig) -> LjpwResult<Self> {
        config.validate()?;
        let mut simulator = Self::new(
            LjpwModel::new(config.dynamics.clone())?,
            config.integrator.clone(),
            PhaseClassifier::from_config(&config.phase),
        )?;
        simulator.debug = config.debug;
        Ok(simulator)
    }

    /// The integrator settings.
    pub fn integrator(&self) -> &IntegratorConfig {
        &self.integrator
    }

    /// The underlying model.
    pub fn model(&self) -> &LjpwModel {
        &self.model
    }

    /// Advance `state` by one step and clamp the result.
    ///
    /// # Errors
    ///
    /// Returns `LjpwError::Diverged` (step 1) if the unclamped result is not finite.
    pub fn step_once(&self, state: &Ljpw, t: f64) -> LjpwResult<Ljpw> {
        self.advance(state, t, self.integrator.step_size, 1)
    }

    fn advance(&self, state: &Ljpw, t: f64, dt: f64, step: usize) -> LjpwResult<Ljpw> {
        let next = Ljpw::from_array(integrator::step(
            self.integrator.method,
            &self.model,
            t,
            &state.to_array(),
            dt,
        ));
        if !next.is_finite() {
            let time = t + dt;
            warn!(step, time, state = %next, "integration diverged");
            return Err(LjpwError::Diverged { step, time });
        }
        Ok(self.integrator.clamp_state(&next))
    }

    fn sample(&self, t: f64, state: Ljpw, tracker: &mut PhaseTracker) -> TrajectorySample {
        let harmony = harmony_index(&state);
        let phase = tracker.observe(t, harmony, state.love);
        if self.debug {
            debug!(t, state = %state, harmony, phase = %phase, "sample");
        } else {
            trace!(t, harmony, phase = %phase, "sample");
        }
        TrajectorySample {
            t,
            state,
            harmony,
            phase,
        }
    }

    /// Run from `initial` for the configured duration.
    ///
    /// The initial state is recorded at `t = 0`, then every `record_every`
    /// steps, and the final step is always recorded. The final step is
    /// shortened when needed so the last sample lands on `duration`.
    ///
    /// # Errors
    ///
    /// - `NonFiniteComponent` if `initial` has a NaN or infinite component
    /// - `CapacityError` if the step count exceeds `max_steps`
    /// - `Diverged` if a step produces a non-finite state
    pub fn run(&self, initial: Ljpw) -> LjpwResult<Trajectory> {
        initial.validate_finite()?;

        let cfg = &self.integrator;
        let steps = cfg.step_count();
        if steps > cfg.max_steps {
            return Err(LjpwError::CapacityError(format!(
                "{} steps requested (duration {} / step {}), limit is {}",
                steps, cfg.duration, cfg.step_size, cfg.max_steps
            )));
        }

        let start = cfg.clamp_state(&initial);
        if start != initial {
            warn!(
                initial = %initial,
                clamped = %start,
                "initial state outside [{}, {}], clamped",
                cfg.lower_bound,
                cfg.upper_bound
            );
        }

        debug!(
            method = %cfg.method,
            step_size = cfg.step_size,
            duration = cfg.duration,
            steps,
            record_every = cfg.record_every,
            "starting simulation"
        );

        let mut tracker = PhaseTracker::with_classifier(self.classifier);
        let mut samples = Vec::with_capacity(steps / cfg.record_every + 2);
        samples.push(self.sample(0.0, start, &mut tracker));

        let mut state = start;
        for step in 1..=steps {
            let t_prev = cfg.time_at(step - 1);
            let t = cfg.time_at(step);
            state = self.advance(&state, t_prev, t - t_prev, step)?;
            if step % cfg.record_every == 0 || step == steps {
                samples.push(self.sample(t, state, &mut tracker));
            }
        }

        let summary = TrajectorySummary::from_samples(steps, &samples, &tracker).ok_or_else(
            || LjpwError::CapacityError("simulation recorded no samples".to_string()),
        )?;

        info!(
            steps,
            samples = samples.len(),
            final_harmony = summary.final_harmony,
            final_phase = %summary.final_phase,
            transitions = summary.transitions.len(),
            "simulation complete"
        );

        Ok(Trajectory::new(samples, summary))
    }
}
