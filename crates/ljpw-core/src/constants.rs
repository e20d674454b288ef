//! Constant table and reference points.
//!
//! The four equilibrium values are derived from φ, √2, e and ln 2. Together
//! they form the Natural Equilibrium; the Anchor Point is the unit vector
//! `(1, 1, 1, 1)` that harmony is measured against.

use serde::{Deserialize, Serialize};

use crate::vector::Ljpw;

/// Golden ratio φ = (1 + √5) / 2.
pub const PHI: f64 = 1.618_033_988_749_895;

/// φ⁻¹ = φ − 1.
pub const PHI_INV: f64 = PHI - 1.0;

/// Love equilibrium: φ⁻¹ ≈ 0.618034.
pub const LOVE_EQUILIBRIUM: f64 = PHI_INV;

/// Justice equilibrium: √2 − 1 ≈ 0.414214.
pub const JUSTICE_EQUILIBRIUM: f64 = std::f64::consts::SQRT_2 - 1.0;

/// Power equilibrium: e − 2 ≈ 0.718282.
pub const POWER_EQUILIBRIUM: f64 = std::f64::consts::E - 2.0;

/// Wisdom equilibrium: ln 2 ≈ 0.693147.
pub const WISDOM_EQUILIBRIUM: f64 = std::f64::consts::LN_2;

/// The Anchor Point `(1, 1, 1, 1)`.
pub const ANCHOR_POINT: Ljpw = Ljpw::splat(1.0);

/// The Natural Equilibrium `(φ⁻¹, √2−1, e−2, ln 2)`.
pub const NATURAL_EQUILIBRIUM: Ljpw = Ljpw::new(
    LOVE_EQUILIBRIUM,
    JUSTICE_EQUILIBRIUM,
    POWER_EQUILIBRIUM,
    WISDOM_EQUILIBRIUM,
);

/// Fixed reference vectors that distances and harmony can be taken against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferencePoint {
    /// `(1, 1, 1, 1)`
    #[default]
    Anchor,
    /// `(φ⁻¹, √2−1, e−2, ln 2)`
    NaturalEquilibrium,
}

impl ReferencePoint {
    /// The vector this reference resolves to.
    #[inline]
    pub fn vector(&self) -> Ljpw {
        match self {
            ReferencePoint::Anchor => ANCHOR_POINT,
            ReferencePoint::NaturalEquilibrium => NATURAL_EQUILIBRIUM,
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ReferencePoint::Anchor => "Anchor Point",
            ReferencePoint::NaturalEquilibrium => "Natural Equilibrium",
        }
    }
}

impl std::fmt::Display for ReferencePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phi_identity() {
        // φ² = φ + 1
        assert!((PHI * PHI - (PHI + 1.0)).abs() < 1e-12);
        assert!((PHI_INV - 1.0 / PHI).abs() < 1e-12);
    }

    #[test]
    fn test_equilibrium_values() {
        assert!((LOVE_EQUILIBRIUM - 0.618034).abs() < 1e-6);
        assert!((JUSTICE_EQUILIBRIUM - 0.414214).abs() < 1e-6);
        assert!((POWER_EQUILIBRIUM - 0.718282).abs() < 1e-6);
        assert!((WISDOM_EQUILIBRIUM - 0.693147).abs() < 1e-6);
    }

    #[test]
    fn test_reference_points() {
        assert_eq!(ReferencePoint::Anchor.vector(), Ljpw::splat(1.0));
        assert_eq!(
            ReferencePoint::NaturalEquilibrium.vector().love,
            LOVE_EQUILIBRIUM
        );
        assert_eq!(ReferencePoint::default(), ReferencePoint::Anchor);
        assert_eq!(ReferencePoint::NaturalEquilibrium.to_string(), "Natural Equilibrium");
    }
}
