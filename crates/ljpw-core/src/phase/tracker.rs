//! PhaseTracker: phase occupancy and transitions along a trajectory.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{PhaseClassifier, SystemPhase};

/// A change of phase observed at a given simulation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseTransition {
    /// Time of the first observation in the new phase.
    pub time: f64,
    /// Phase before the change.
    pub from: SystemPhase,
    /// Phase after the change.
    pub to: SystemPhase,
}

/// Fraction of observations spent in each phase.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PhaseOccupancy {
    pub entropic: f64,
    pub homeostatic: f64,
    pub autopoietic: f64,
}

impl PhaseOccupancy {
    /// Fraction for a single phase.
    pub fn fraction(&self, phase: SystemPhase) -> f64 {
        match phase {
            SystemPhase::Entropic => self.entropic,
            SystemPhase::Homeostatic => self.homeostatic,
            SystemPhase::Autopoietic => self.autopoietic,
        }
    }
}

/// Records which phase each observation falls into.
///
/// No transition rules are enforced; every observation is classified
/// independently and a transition is logged whenever the label changes.
///
/// # Example
///
/// ```
/// use ljpw_core::phase::{PhaseTracker, SystemPhase};
///
/// let mut tracker = PhaseTracker::new();
/// tracker.observe(0.0, 0.45, 0.5);
/// tracker.observe(1.0, 0.55, 0.5);
/// tracker.observe(2.0, 0.70, 0.8);
///
/// assert_eq!(tracker.current_phase(), Some(SystemPhase::Autopoietic));
/// assert_eq!(tracker.transitions().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PhaseTracker {
    classifier: PhaseClassifier,
    current_phase: Option<SystemPhase>,
    counts: [usize; 3],
    transitions: Vec<PhaseTransition>,
}

impl PhaseTracker {
    /// Create a tracker with default thresholds.
    pub fn new() -> Self {
        Self::with_classifier(PhaseClassifier::new())
    }

    /// Create a tracker with a specific classifier.
    pub fn with_classifier(classifier: PhaseClassifier) -> Self {
        Self {
            classifier,
            current_phase: None,
            counts: [0; 3],
            transitions: Vec::new(),
        }
    }

    /// Classify one observation and record it.
    pub fn observe(&mut self, time: f64, harmony: f64, love: f64) -> SystemPhase {
        let phase = self.classifier.classify(harmony, love);
        self.counts[phase.index()] += 1;

        if let Some(previous) = self.current_phase {
            if previous != phase {
                debug!(time, from = %previous, to = %phase, harmony, "phase transition");
                self.transitions.push(PhaseTransition {
                    time,
                    from: previous,
                    to: phase,
                });
            }
        }
        self.current_phase = Some(phase);
        phase
    }

    /// Most recently observed phase.
    #[inline]
    pub fn current_phase(&self) -> Option<SystemPhase> {
        self.current_phase
    }

    /// Total number of observations.
    pub fn observations(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Number of observations in a phase.
    pub fn count(&self, phase: SystemPhase) -> usize {
        self.counts[phase.index()]
    }

    /// All recorded transitions, in order.
    pub fn transitions(&self) -> &[PhaseTransition] {
        &self.transitions
    }

    /// Fraction of observations per phase (all zero when nothing was observed).
    pub fn occupancy(&self) -> PhaseOccupancy {
        let total = self.observations();
        if total == 0 {
            return PhaseOccupancy::default();
        }
        let frac = |phase: SystemPhase| self.count(phase) as f64 / total as f64;
        PhaseOccupancy {
            entropic: frac(SystemPhase::Entropic),
            homeostatic: frac(SystemPhase::Homeostatic),
            autopoietic: frac(SystemPhase::Autopoietic),
        }
    }

    /// Reset the tracker to its initial state.
    pub fn reset(&mut self) {
        self.current_phase = None;
        self.counts = [0; 3];
        self.transitions.clear();
    }
}

impl Default for PhaseTracker {
    fn default() -> Self {
        Self::new()
    }
}
