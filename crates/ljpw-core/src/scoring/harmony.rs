//! Distance-based harmony and karma coupling.
//!
//! Implements: `H = 1 / (1 + ‖v − anchor‖)`
//!
//! For any finite vector the distance is `>= 0`, so `H ∈ (0, 1]` follows
//! from the formula itself and is never checked at runtime.

use crate::constants::ReferencePoint;
use crate::vector::Ljpw;

/// Harmony index relative to the Anchor Point `(1, 1, 1, 1)`.
///
/// # Example
///
/// ```
/// use ljpw_core::scoring::harmony_index;
/// use ljpw_core::vector::Ljpw;
///
/// assert_eq!(harmony_index(&Ljpw::splat(1.0)), 1.0);
/// assert!((harmony_index(&Ljpw::splat(0.0)) - 1.0 / 3.0).abs() < 1e-12);
/// ```
#[inline]
pub fn harmony_index(v: &Ljpw) -> f64 {
    1.0 / (1.0 + v.distance_to_anchor())
}

/// Harmony index relative to any [`ReferencePoint`].
#[inline]
pub fn harmony_relative_to(v: &Ljpw, reference: ReferencePoint) -> f64 {
    1.0 / (1.0 + v.distance(&reference.vector()))
}

/// Harmony-gated coupling factor `κ(H) = 1 + multiplier · H`.
///
/// Higher harmony strengthens the coupling between dimensions.
#[inline]
pub fn karma_coupling(harmony: f64, multiplier: f64) -> f64 {
    1.0 + multiplier * harmony
}
