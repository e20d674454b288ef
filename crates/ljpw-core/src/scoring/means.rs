//! Scalar summaries of an LJPW vector.
//!
//! Implements:
//! - `AM = (L + J + P + W) / 4`
//! - `GM = (L · J · P · W)^¼`
//! - `HM = 4 / (1/L + 1/J + 1/P + 1/W)`
//!
//! GM and HM are only defined for strictly positive components. Rather than
//! returning NaN or a 0 sentinel they reject degenerate input with
//! [`LjpwError::NonPositiveComponent`].

use crate::error::{LjpwError, LjpwResult};
use crate::vector::{Ljpw, NUM_DIMENSIONS};

/// Arithmetic mean of the four components. Always defined.
#[inline]
pub fn arithmetic_mean(v: &Ljpw) -> f64 {
    v.sum() / NUM_DIMENSIONS as f64
}

/// Geometric mean `(L · J · P · W)^¼`.
///
/// Computed as `L^¼ · J^¼ · P^¼ · W^¼` so the product cannot overflow or
/// underflow for finite positive components.
///
/// # Errors
///
/// - [`LjpwError::NonFiniteComponent`] if any component is NaN or infinite.
/// - [`LjpwError::NonPositiveComponent`] if any component is `<= 0`.
///
/// # Example
///
/// ```
/// use ljpw_core::scoring::geometric_mean;
/// use ljpw_core::vector::Ljpw;
///
/// let gm = geometric_mean(&Ljpw::new(16.0, 1.0, 1.0, 1.0)).unwrap();
/// assert!((gm - 2.0).abs() < 1e-12);
///
/// assert!(geometric_mean(&Ljpw::new(0.0, 1.0, 1.0, 1.0)).is_err());
/// ```
pub fn geometric_mean(v: &Ljpw) -> LjpwResult<f64> {
    require_positive(v, "geometric_mean")?;
    Ok(v.map(|x| x.sqrt().sqrt()).product())
}

/// Harmonic mean `4 / Σ 1/vᵢ`.
///
/// # Errors
///
/// Same conditions as [`geometric_mean`]; a zero component would otherwise
/// divide by zero.
pub fn harmonic_mean(v: &Ljpw) -> LjpwResult<f64> {
    require_positive(v, "harmonic_mean")?;
    let reciprocal_sum: f64 = v.components().map(|(_, x)| 1.0 / x).sum();
    Ok(NUM_DIMENSIONS as f64 / reciprocal_sum)
}

fn require_positive(v: &Ljpw, operation: &'static str) -> LjpwResult<()> {
    v.validate_finite()?;
    match v.components().find(|(_, x)| *x <= 0.0) {
        Some((dimension, value)) => Err(LjpwError::NonPositiveComponent {
            operation,
            dimension,
            value,
        }),
        None => Ok(()),
    }
}
