//! Coefficients of the coupled LJPW differential equations.
//!
//! ```text
//! dL/dt = α_LJ·J·κ_LJ + α_LW·W·κ_LW − β_L·L
//! dJ/dt = α_JL·L/(K_JL+L) + α_JW·W − E(P,W) − β_J·J
//! dP/dt = α_PL·L·κ_LP + α_PJ·J − β_P·P
//! dW/dt = α_WL·L·κ_LW + α_WJ·J + α_WP·P − β_W·W
//! ```

use serde::{Deserialize, Serialize};

/// Growth, decay and coupling coefficients of the LJPW model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DynamicsConfig {
    /// Justice → Love growth.
    pub alpha_lj: f64,
    /// Wisdom → Love growth.
    pub alpha_lw: f64,
    /// Love → Justice growth (saturating).
    pub alpha_jl: f64,
    /// Wisdom → Justice growth.
    pub alpha_jw: f64,
    /// Love → Power growth.
    pub alpha_pl: f64,
    /// Justice → Power growth.
    pub alpha_pj: f64,
    /// Love → Wisdom growth.
    pub alpha_wl: f64,
    /// Justice → Wisdom growth.
    pub alpha_wj: f64,
    /// Power → Wisdom growth.
    pub alpha_wp: f64,

    /// Love decay rate.
    pub beta_l: f64,
    /// Justice decay rate.
    pub beta_j: f64,
    /// Power decay rate.
    pub beta_p: f64,
    /// Wisdom decay rate.
    pub beta_w: f64,

    /// Power erosion of Justice while Wisdom is below equilibrium.
    pub erosion_gamma: f64,
    /// Half-saturation constant of the Love → Justice term.
    /// Must be > 0.
    pub saturation_k: f64,

    /// Karma multiplier for κ_LJ = 1 + m·H.
    pub karma_lj: f64,
    /// Karma multiplier for κ_LP = 1 + m·H.
    pub karma_lp: f64,
    /// Karma multiplier for κ_LW = 1 + m·H.
    pub karma_lw: f64,
}

impl Default for DynamicsConfig {
    fn default() -> Self {
        Self {
            alpha_lj: 0.12,
            alpha_lw: 0.12,
            alpha_jl: 0.14,
            alpha_jw: 0.14,
            alpha_pl: 0.12,
            alpha_pj: 0.12,
            alpha_wl: 0.10,
            alpha_wj: 0.10,
            alpha_wp: 0.10,
            beta_l: 0.20,
            beta_j: 0.20,
            beta_p: 0.20,
            beta_w: 0.24,
            erosion_gamma: 0.08,
            saturation_k: 0.59,
            karma_lj: 0.4,
            karma_lp: 0.3,
            karma_lw: 0.5,
        }
    }
}

impl DynamicsConfig {
    /// All growth, decay and erosion coefficients set to zero.
    ///
    /// Every derivative is then identically zero, so any state is a fixed point.
    pub fn frozen() -> Self {
        Self {
            alpha_lj: 0.0,
            alpha_lw: 0.0,
            alpha_jl: 0.0,
            alpha_jw: 0.0,
            alpha_pl: 0.0,
            alpha_pj: 0.0,
            alpha_wl: 0.0,
            alpha_wj: 0.0,
            alpha_wp: 0.0,
            beta_l: 0.0,
            beta_j: 0.0,
            beta_p: 0.0,
            beta_w: 0.0,
            erosion_gamma: 0.0,
            ..Default::default()
        }
    }

    /// Decay only: every dimension relaxes exponentially toward zero.
    pub fn decay_only() -> Self {
        Self {
            beta_l: 0.20,
            beta_j: 0.20,
            beta_p: 0.20,
            beta_w: 0.24,
            ..Self::frozen()
        }
    }

    /// Validate the dynamics coefficients.
    pub fn validate(&self) -> Result<(), String> {
        let non_negative = [
            ("alpha_lj", self.alpha_lj),
            ("alpha_lw", self.alpha_lw),
            ("alpha_jl", self.alpha_jl),
            ("alpha_jw", self.alpha_jw),
            ("alpha_pl", self.alpha_pl),
            ("alpha_pj", self.alpha_pj),
            ("alpha_wl", self.alpha_wl),
            ("alpha_wj", self.alpha_wj),
            ("alpha_wp", self.alpha_wp),
            ("beta_l", self.beta_l),
            ("beta_j", self.beta_j),
            ("beta_p", self.beta_p),
            ("beta_w", self.beta_w),
            ("erosion_gamma", self.erosion_gamma),
            ("karma_lj", self.karma_lj),
            ("karma_lp", self.karma_lp),
            ("karma_lw", self.karma_lw),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be finite and >= 0, got {}", name, value));
            }
        }
        if !self.saturation_k.is_finite() || self.saturation_k <= 0.0 {
            return Err(format!(
                "saturation_k must be finite and > 0, got {}",
                self.saturation_k
            ));
        }
        Ok(())
    }
}
