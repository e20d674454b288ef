//! PhaseClassifier: threshold rules mapping (harmony, love) to a phase.

use crate::config::PhaseConfig;
use crate::error::{LjpwError, LjpwResult};
use crate::scoring::harmony_index;
use crate::vector::Ljpw;

use super::SystemPhase;

/// Classifier for the narrative phase of an LJPW state.
///
/// # Detection Logic
///
/// - `H < entropic_below` (0.5): Entropic
/// - `H >= autopoietic_harmony` (0.6) and `L >= autopoietic_love` (0.7): Autopoietic
/// - otherwise: Homeostatic
///
/// # Example
///
/// ```
/// use ljpw_core::phase::{PhaseClassifier, SystemPhase};
///
/// let classifier = PhaseClassifier::new();
/// assert_eq!(classifier.classify(0.4, 0.9), SystemPhase::Entropic);
/// assert_eq!(classifier.classify(0.55, 0.9), SystemPhase::Homeostatic);
/// assert_eq!(classifier.classify(0.65, 0.6), SystemPhase::Homeostatic);
/// assert_eq!(classifier.classify(0.65, 0.75), SystemPhase::Autopoietic);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseClassifier {
    entropic_below: f64,
    autopoietic_harmony: f64,
    autopoietic_love: f64,
}

impl PhaseClassifier {
    /// Create a classifier with default thresholds.
    pub fn new() -> Self {
        Self::from_config(&PhaseConfig::default())
    }

    /// Create a classifier with custom thresholds.
    ///
    /// # Errors
    ///
    /// Returns `LjpwError::InvalidParameter` if thresholds are outside
    /// `[0, 1]` or the autopoietic harmony threshold is below the entropic one.
    pub fn with_thresholds(
        entropic_below: f64,
        autopoietic_harmony: f64,
        autopoietic_love: f64,
    ) -> LjpwResult<Self> {
        let config = PhaseConfig {
            entropic_below,
            autopoietic_harmony,
            autopoietic_love,
        };
        config.validate().map_err(|reason| {
            LjpwError::invalid_param(
                "phase_thresholds",
                format!(
                    "({}, {}, {})",
                    entropic_below, autopoietic_harmony, autopoietic_love
                ),
                reason,
            )
        })?;
        Ok(Self::from_config(&config))
    }

    /// Create a classifier from phase configuration.
    pub fn from_config(config: &PhaseConfig) -> Self {
        Self {
            entropic_below: config.entropic_below,
            autopoietic_harmony: config.autopoietic_harmony,
            autopoietic_love: config.autopoietic_love,
        }
    }

    /// Classify a `(harmony, love)` pair.
    pub fn classify(&self, harmony: f64, love: f64) -> SystemPhase {
        if harmony < self.entropic_below {
            SystemPhase::Entropic
        } else if harmony >= self.autopoietic_harmony && love >= self.autopoietic_love {
            SystemPhase::Autopoietic
        } else {
            SystemPhase::Homeostatic
        }
    }

    /// Classify a vector, computing its harmony first.
    pub fn classify_vector(&self, v: &Ljpw) -> SystemPhase {
        self.classify(harmony_index(v), v.love)
    }

    /// Get the entropic threshold.
    #[inline]
    pub fn entropic_below(&self) -> f64 {
        self.entropic_below
    }

    /// Get the autopoietic harmony threshold.
    #[inline]
    pub fn autopoietic_harmony(&self) -> f64 {
        self.autopoietic_harmony
    }

    /// Get the autopoietic Love threshold.
    #[inline]
    pub fn autopoietic_love(&self) -> f64 {
        self.autopoietic_love
    }
}

impl Default for PhaseClassifier {
    fn default() -> Self {
        Self::new()
    }
}
