//! ScoreCard: every scalar summary of one vector in a single record.

use serde::{Deserialize, Serialize};

use crate::config::PhaseConfig;
use crate::phase::{PhaseClassifier, SystemPhase};
use crate::vector::Ljpw;

use super::{arithmetic_mean, geometric_mean, harmonic_mean, harmony_index};

/// Scalar summaries of an LJPW vector.
///
/// `geometric_mean` and `harmonic_mean` are `None` when the vector has a
/// zero, negative or non-finite component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    /// The scored vector.
    pub vector: Ljpw,
    /// `(L + J + P + W) / 4`
    pub arithmetic_mean: f64,
    /// `(L · J · P · W)^¼`, if defined.
    pub geometric_mean: Option<f64>,
    /// `4 / Σ 1/vᵢ`, if defined.
    pub harmonic_mean: Option<f64>,
    /// `1 / (1 + distance_to_anchor)`
    pub harmony: f64,
    /// Euclidean distance to `(1, 1, 1, 1)`.
    pub distance_to_anchor: f64,
    /// Euclidean distance to the Natural Equilibrium.
    pub distance_to_equilibrium: f64,
    /// Narrative phase label for `(harmony, love)`.
    pub phase: SystemPhase,
}

impl ScoreCard {
    /// Score a vector with default phase thresholds.
    pub fn compute(v: &Ljpw) -> Self {
        Self::compute_with(v, &PhaseClassifier::new())
    }

    /// Score a vector with custom phase thresholds.
    pub fn with_config(v: &Ljpw, config: &PhaseConfig) -> Self {
        Self::compute_with(v, &PhaseClassifier::from_config(config))
    }

    fn compute_with(v: &Ljpw, classifier: &PhaseClassifier) -> Self {
        let harmony = harmony_index(v);
        Self {
            vector: *v,
            arithmetic_mean: arithmetic_mean(v),
            geometric_mean: geometric_mean(v).ok(),
            harmonic_mean: harmonic_mean(v).ok(),
            harmony,
            distance_to_anchor: v.distance_to_anchor(),
            distance_to_equilibrium: v.distance_to_equilibrium(),
            phase: classifier.classify(harmony, v.love),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scorecard_anchor() {
        let card = ScoreCard::compute(&Ljpw::splat(1.0));
        assert_eq!(card.harmony, 1.0);
        assert_eq!(card.distance_to_anchor, 0.0);
        assert_eq!(card.geometric_mean, Some(1.0));
        assert_eq!(card.phase, SystemPhase::Autopoietic);
    }

    #[test]
    fn test_scorecard_degenerate_means_are_none() {
        let card = ScoreCard::compute(&Ljpw::new(0.0, 0.5, 0.5, 0.5));
        assert!(card.geometric_mean.is_none());
        assert!(card.harmonic_mean.is_none());
        assert!(card.harmony > 0.0);
    }

    #[test]
    fn test_scorecard_serializes() {
        let card = ScoreCard::compute(&Ljpw::new(0.85, 0.9, 0.8, 0.95));
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["phase"], "autopoietic");
        assert!(json["harmony"].as_f64().unwrap() > 0.7);
    }

    #[test]
    fn test_scorecard_custom_thresholds() {
        let strict = PhaseConfig {
            autopoietic_harmony: 0.9,
            ..Default::default()
        };
        let card = ScoreCard::with_config(&Ljpw::new(0.85, 0.9, 0.8, 0.95), &strict);
        assert_eq!(card.phase, SystemPhase::Homeostatic);
    }
}
