//! SystemPhase enum and associated methods.

use serde::{Deserialize, Serialize};

/// Narrative phase of an LJPW state.
///
/// Labels are threshold comparisons on harmony and the Love component, not a
/// formal state machine:
/// - **Entropic**: harmony below the entropic threshold (the system decays)
/// - **Homeostatic**: holding steady but not self-sustaining
/// - **Autopoietic**: high harmony and high Love (self-sustaining)
///
/// # Example
///
/// ```
/// use ljpw_core::phase::SystemPhase;
///
/// let phase = SystemPhase::Autopoietic;
/// assert!(phase.is_self_sustaining());
/// assert_eq!(phase.name(), "Autopoietic");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemPhase {
    /// Harmony below the entropic threshold.
    Entropic,

    /// Neither entropic nor autopoietic.
    #[default]
    Homeostatic,

    /// Harmony and Love both above their autopoietic thresholds.
    Autopoietic,
}

impl SystemPhase {
    /// All phases, ordered from lowest to highest harmony.
    pub const ALL: [SystemPhase; 3] = [
        SystemPhase::Entropic,
        SystemPhase::Homeostatic,
        SystemPhase::Autopoietic,
    ];

    /// Position in [`SystemPhase::ALL`].
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            SystemPhase::Entropic => 0,
            SystemPhase::Homeostatic => 1,
            SystemPhase::Autopoietic => 2,
        }
    }

    /// Check if this is the self-sustaining phase.
    #[inline]
    pub fn is_self_sustaining(&self) -> bool {
        matches!(self, SystemPhase::Autopoietic)
    }

    /// Check if this phase is decaying.
    #[inline]
    pub fn is_entropic(&self) -> bool {
        matches!(self, SystemPhase::Entropic)
    }

    /// Get a human-readable name for this phase.
    pub fn name(&self) -> &'static str {
        match self {
            SystemPhase::Entropic => "Entropic",
            SystemPhase::Homeostatic => "Homeostatic",
            SystemPhase::Autopoietic => "Autopoietic",
        }
    }

    /// Get a description of this phase.
    pub fn description(&self) -> &'static str {
        match self {
            SystemPhase::Entropic => "Below the harmony threshold; the state decays",
            SystemPhase::Homeostatic => "Maintaining but not self-sustaining",
            SystemPhase::Autopoietic => "Self-sustaining: high harmony driven by Love",
        }
    }
}

impl std::fmt::Display for SystemPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
