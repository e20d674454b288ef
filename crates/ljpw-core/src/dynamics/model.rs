//! Coupled first-order LJPW model.

use crate::config::DynamicsConfig;
use crate::constants::WISDOM_EQUILIBRIUM;
use crate::error::{LjpwError, LjpwResult};
use crate::scoring::{harmony_index, karma_coupling};
use crate::vector::{Ljpw, NUM_DIMENSIONS};

use super::integrator::VectorField;

/// The coupled LJPW vector field.
///
/// Harmony of the current state scales the Love-driven couplings through
/// `κ(H) = 1 + m·H`; Power erodes Justice while Wisdom is below its
/// equilibrium value.
///
/// # Example
///
/// ```
/// use ljpw_core::config::DynamicsConfig;
/// use ljpw_core::dynamics::LjpwModel;
/// use ljpw_core::vector::Ljpw;
///
/// let model = LjpwModel::new(DynamicsConfig::frozen()).unwrap();
/// assert_eq!(model.rate(&Ljpw::new(0.2, 0.4, 0.6, 0.8)), Ljpw::splat(0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LjpwModel {
    config: DynamicsConfig,
}

impl LjpwModel {
    /// Create a model, validating its coefficients.
    pub fn new(config: DynamicsConfig) -> LjpwResult<Self> {
        config
            .validate()
            .map_err(|e| LjpwError::ConfigError(format!("dynamics: {}", e)))?;
        Ok(Self { config })
    }

    /// The model coefficients.
    pub fn config(&self) -> &DynamicsConfig {
        &self.config
    }

    /// Justice erosion by unchecked Power: `γ·P·(1 − W/W₀)` when `W < W₀`.
    pub fn erosion(&self, power: f64, wisdom: f64) -> f64 {
        if wisdom < WISDOM_EQUILIBRIUM {
            self.config.erosion_gamma * power * (1.0 - wisdom / WISDOM_EQUILIBRIUM)
        } else {
            0.0
        }
    }

    /// Saturating Love → Justice term `L/(K+L)`, zero when `K+L ≤ 0`.
    fn saturation(&self, love: f64) -> f64 {
        let denom = self.config.saturation_k + love;
        if denom <= 0.0 {
            0.0
        } else {
            love / denom
        }
    }

    /// Time derivative of each dimension at `state`.
    pub fn rate(&self, state: &Ljpw) -> Ljpw {
        let c = &self.config;
        let Ljpw {
            love: l,
            justice: j,
            power: p,
            wisdom: w,
        } = *state;

        let h = harmony_index(state);
        let kappa_lj = karma_coupling(h, c.karma_lj);
        let kappa_lp = karma_coupling(h, c.karma_lp);
        let kappa_lw = karma_coupling(h, c.karma_lw);

        let dl = c.alpha_lj * j * kappa_lj + c.alpha_lw * w * kappa_lw - c.beta_l * l;
        let dj = c.alpha_jl * self.saturation(l) + c.alpha_jw * w
            - self.erosion(p, w)
            - c.beta_j * j;
        let dp = c.alpha_pl * l * kappa_lp + c.alpha_pj * j - c.beta_p * p;
        let dw = c.alpha_wl * l * kappa_lw + c.alpha_wj * j + c.alpha_wp * p - c.beta_w * w;

        Ljpw::new(dl, dj, dp, dw)
    }
}

impl VectorField<NUM_DIMENSIONS> for LjpwModel {
    fn derivative(&self, _t: f64, state: &[f64; NUM_DIMENSIONS]) -> [f64; NUM_DIMENSIONS] {
        self.rate(&Ljpw::from_array(*state)).to_array()
    }
}
