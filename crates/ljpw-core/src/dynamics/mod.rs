//! Time evolution of LJPW states.
//!
//! Two models share the fixed-step integrators in [`integrator`]:
//!
//! - [`LjpwModel`]: the coupled first-order system, driven by [`Simulator`],
//!   clamped to the configured bounds after every step
//! - [`LjpwOscillator`]: a damped spring network with a harmony-gated Love
//!   source, analyzed through [`EnergyReport`]

mod energy;
pub mod integrator;
mod model;
mod oscillator;
mod simulator;
mod trajectory;

pub use energy::{EnergyReport, SustainmentVerdict};
pub use integrator::{euler_step, rk4_step, VectorField};
pub use model::LjpwModel;
pub use oscillator::{
    LjpwOscillator, OscillatorRun, OscillatorSample, OscillatorState, OSCILLATOR_STATE_DIM,
};
pub use simulator::Simulator;
pub use trajectory::{Trajectory, TrajectorySample, TrajectorySummary};
