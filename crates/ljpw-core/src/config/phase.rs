//! Phase label thresholds.

use serde::{Deserialize, Serialize};

/// Thresholds for Entropic / Homeostatic / Autopoietic labels.
///
/// - `H < entropic_below` → Entropic
/// - `H >= autopoietic_harmony` and `L >= autopoietic_love` → Autopoietic
/// - otherwise Homeostatic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseConfig {
    /// Harmony below which the state is entropic.
    /// Range: `[0.0, 1.0]`
    pub entropic_below: f64,

    /// Minimum harmony for the autopoietic label.
    /// Range: `[entropic_below, 1.0]`
    pub autopoietic_harmony: f64,

    /// Minimum Love component for the autopoietic label.
    /// Range: `[0.0, 1.0]`
    pub autopoietic_love: f64,
}

impl Default for PhaseConfig {
    fn default() -> Self {
        Self {
            entropic_below: 0.5,
            autopoietic_harmony: 0.6,
            autopoietic_love: 0.7,
        }
    }
}

impl PhaseConfig {
    /// Validate the phase thresholds.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.entropic_below) {
            return Err(format!(
                "entropic_below must be in [0, 1], got {}",
                self.entropic_below
            ));
        }
        if !(0.0..=1.0).contains(&self.autopoietic_harmony) {
            return Err(format!(
                "autopoietic_harmony must be in [0, 1], got {}",
                self.autopoietic_harmony
            ));
        }
        if self.autopoietic_harmony < self.entropic_below {
            return Err(format!(
                "autopoietic_harmony ({}) must be >= entropic_below ({})",
                self.autopoietic_harmony, self.entropic_below
            ));
        }
        if !(0.0..=1.0).contains(&self.autopoietic_love) {
            return Err(format!(
                "autopoietic_love must be in [0, 1], got {}",
                self.autopoietic_love
            ));
        }
        Ok(())
    }
}
