//! Recorded trajectories of the first-order model.

use serde::{Deserialize, Serialize};

use crate::error::LjpwError;
use crate::phase::{PhaseOccupancy, PhaseTracker, PhaseTransition, SystemPhase};
use crate::vector::Ljpw;

/// One recorded point of a trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    /// Simulation time.
    pub t: f64,
    /// State after clamping.
    pub state: Ljpw,
    /// Harmony index of `state`.
    pub harmony: f64,
    /// Phase label of `state`.
    pub phase: SystemPhase,
}

/// Aggregate statistics over the recorded samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySummary {
    /// Number of integration steps taken.
    pub steps: usize,
    pub initial_harmony: f64,
    pub final_harmony: f64,
    pub mean_harmony: f64,
    pub min_harmony: f64,
    pub max_harmony: f64,
    /// Fraction of recorded samples in each phase.
    pub occupancy: PhaseOccupancy,
    /// Phase changes between consecutive recorded samples.
    pub transitions: Vec<PhaseTransition>,
    pub final_phase: SystemPhase,
}

impl TrajectorySummary {
    /// Summarize `samples`, using `tracker` for occupancy and transitions.
    ///
    /// Returns `None` for an empty sample list.
    pub fn from_samples(
        steps: usize,
        samples: &[TrajectorySample],
        tracker: &PhaseTracker,
    ) -> Option<Self> {
        let first = samples.first()?;
        let last = samples.last()?;

        let (sum, min, max) = samples.iter().fold(
            (0.0, f64::INFINITY, f64::NEG_INFINITY),
            |(sum, min, max), s| (sum + s.harmony, min.min(s.harmony), max.max(s.harmony)),
        );

        Some(Self {
            steps,
            initial_harmony: first.harmony,
            final_harmony: last.harmony,
            mean_harmony: sum / samples.len() as f64,
            min_harmony: min,
            max_harmony: max,
            occupancy: tracker.occupancy(),
            transitions: tracker.transitions().to_vec(),
            final_phase: last.phase,
        })
    }
}

/// Samples of a completed run together with their summary.
///
/// Always holds at least the initial sample; deserializing an empty sample
/// list fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TrajectoryParts")]
pub struct Trajectory {
    samples: Vec<TrajectorySample>,
    summary: TrajectorySummary,
}

/// Unchecked wire form of [`Trajectory`].
#[derive(Deserialize)]
struct TrajectoryParts {
    samples: Vec<TrajectorySample>,
    summary: TrajectorySummary,
}

impl TryFrom<TrajectoryParts> for Trajectory {
    type Error = LjpwError;

    fn try_from(parts: TrajectoryParts) -> Result<Self, Self::Error> {
        if parts.samples.is_empty() {
            return Err(LjpwError::invalid_param(
                "samples",
                0,
                "a trajectory needs at least the initial sample",
            ));
        }
        Ok(Self {
            samples: parts.samples,
            summary: parts.summary,
        })
    }
}

impl Trajectory {
    /// `samples` must be non-empty.
    pub(crate) fn new(samples: Vec<TrajectorySample>, summary: TrajectorySummary) -> Self {
        debug_assert!(!samples.is_empty());
        Self { samples, summary }
    }

    /// All recorded samples in time order.
    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    /// Summary statistics.
    pub fn summary(&self) -> &TrajectorySummary {
        &self.summary
    }

    /// First recorded sample (the initial state).
    pub fn initial(&self) -> &TrajectorySample {
        &self.samples[0]
    }

    /// Last recorded sample (the final state).
    pub fn last(&self) -> &TrajectorySample {
        &self.samples[self.samples.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Consume the trajectory, returning samples and summary.
    pub fn into_parts(self) -> (Vec<TrajectorySample>, TrajectorySummary) {
        (self.samples, self.summary)
    }
}
