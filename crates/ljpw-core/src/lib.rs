//! LJPW scoring and dynamics.
//!
//! Scores a four-component (Love, Justice, Power, Wisdom) vector against
//! the Anchor Point `(1, 1, 1, 1)` and simulates toy coupled dynamics over
//! it.
//!
//! # Modules
//!
//! - [`constants`]: φ, the Natural Equilibrium and the Anchor Point
//! - [`vector`]: the [`Ljpw`] vector and its [`Dimension`]s
//! - [`scoring`]: arithmetic/geometric/harmonic means and the harmony index
//! - [`phase`]: Entropic / Homeostatic / Autopoietic labels and tracking
//! - [`config`]: configuration types, TOML and environment loading
//! - [`dynamics`]: RK4/Euler integrators, the coupled model, the simulator
//!   and the self-sustaining oscillator
//! - [`report`]: JSON run reports
//! - [`error`]: error types and result aliases
//!
//! # Example
//!
//! ```
//! use ljpw_core::{harmony_index, Ljpw, LjpwConfig, Simulator, SystemPhase};
//!
//! let start = Ljpw::new(0.6, 0.5, 0.7, 0.6);
//! assert!(harmony_index(&start) < 1.0);
//!
//! let mut config = LjpwConfig::default();
//! config.integrator.duration = 5.0;
//! let trajectory = Simulator::from_config(&config)?.run(start)?;
//! assert!(trajectory.len() > 1);
//! assert!(SystemPhase::ALL.contains(&trajectory.summary().final_phase));
//! # Ok::<(), ljpw_core::LjpwError>(())
//! ```

pub mod config;
pub mod constants;
pub mod dynamics;
pub mod error;
pub mod phase;
pub mod report;
pub mod scoring;
pub mod vector;

pub use config::LjpwConfig;
pub use error::{LjpwError, LjpwResult};

pub use constants::{ReferencePoint, ANCHOR_POINT, NATURAL_EQUILIBRIUM, PHI, PHI_INV};
pub use vector::{Dimension, Ljpw};

pub use scoring::{
    arithmetic_mean, geometric_mean, harmonic_mean, harmony_index, harmony_relative_to,
    karma_coupling, ScoreCard,
};

pub use phase::{PhaseClassifier, PhaseTracker, SystemPhase};

pub use dynamics::{
    EnergyReport, LjpwModel, LjpwOscillator, Simulator, SustainmentVerdict, Trajectory,
};

pub use report::{OscillatorReport, SimulationReport};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_re_exports_exist() {
        let _config = LjpwConfig::default();
        let _phase = SystemPhase::default();
        let _reference = ReferencePoint::default();
        assert_eq!(Dimension::ALL.len(), 4);
    }

    #[test]
    fn test_scoring_re_exports() {
        let card = ScoreCard::compute(&ANCHOR_POINT);
        assert_eq!(card.harmony, 1.0);
        assert_eq!(card.phase, SystemPhase::Autopoietic);
        assert!((karma_coupling(1.0, 0.5) - 1.5).abs() < 1e-15);
    }

    #[test]
    fn test_dynamics_re_exports() {
        let simulator = Simulator::from_config(&LjpwConfig::frozen_preset()).unwrap();
        let trajectory = simulator.run(NATURAL_EQUILIBRIUM).unwrap();
        assert_eq!(trajectory.last().state, NATURAL_EQUILIBRIUM);
    }
}
