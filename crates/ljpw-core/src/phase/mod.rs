//! Phase labelling (Entropic / Homeostatic / Autopoietic).
//!
//! - [`SystemPhase`]: the three narrative labels
//! - [`PhaseClassifier`]: threshold rules on harmony and Love
//! - [`PhaseTracker`]: occupancy and transitions along a trajectory
//!
//! # Example
//!
//! ```
//! use ljpw_core::phase::{PhaseClassifier, SystemPhase};
//! use ljpw_core::vector::Ljpw;
//!
//! let classifier = PhaseClassifier::new();
//! let thriving = Ljpw::new(0.85, 0.9, 0.8, 0.95);
//! let collapsed = Ljpw::new(0.2, 0.25, 0.15, 0.28);
//!
//! assert_eq!(classifier.classify_vector(&thriving), SystemPhase::Autopoietic);
//! assert_eq!(classifier.classify_vector(&collapsed), SystemPhase::Entropic);
//! ```

mod classifier;
mod system_phase;
mod tracker;

#[cfg(test)]
mod tests;

pub use classifier::PhaseClassifier;
pub use system_phase::SystemPhase;
pub use tracker::{PhaseOccupancy, PhaseTracker, PhaseTransition};
