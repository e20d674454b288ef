//! The LJPW 4-vector and its dimensions.
//!
//! Components are plain `f64` values. They are conventionally in `[0, 1]`
//! but this is not enforced: coordinates such as `1.4142` are legal. Only
//! finiteness can be checked via [`Ljpw::validate_finite`].

use std::ops::{Add, Index, Mul, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{ANCHOR_POINT, NATURAL_EQUILIBRIUM};
use crate::error::{LjpwError, LjpwResult};

/// Number of LJPW dimensions.
pub const NUM_DIMENSIONS: usize = 4;

/// One of the four LJPW dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Love,
    Justice,
    Power,
    Wisdom,
}

impl Dimension {
    /// All dimensions in canonical `L, J, P, W` order.
    pub const ALL: [Dimension; NUM_DIMENSIONS] = [
        Dimension::Love,
        Dimension::Justice,
        Dimension::Power,
        Dimension::Wisdom,
    ];

    /// Position of this dimension in the component array.
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Dimension::Love => 0,
            Dimension::Justice => 1,
            Dimension::Power => 2,
            Dimension::Wisdom => 3,
        }
    }

    /// Single-letter symbol.
    pub fn symbol(&self) -> char {
        match self {
            Dimension::Love => 'L',
            Dimension::Justice => 'J',
            Dimension::Power => 'P',
            Dimension::Wisdom => 'W',
        }
    }

    /// Full name.
    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Love => "Love",
            Dimension::Justice => "Justice",
            Dimension::Power => "Power",
            Dimension::Wisdom => "Wisdom",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Dimension {
    type Err = LjpwError;

    /// Accepts either the symbol (`"L"`) or the name (`"love"`), case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "love" => Ok(Dimension::Love),
            "j" | "justice" => Ok(Dimension::Justice),
            "p" | "power" => Ok(Dimension::Power),
            "w" | "wisdom" => Ok(Dimension::Wisdom),
            other => Err(LjpwError::ParseError(format!(
                "unknown dimension '{}', expected one of L, J, P, W",
                other
            ))),
        }
    }
}

/// A point in LJPW space.
///
/// # Example
///
/// ```
/// use ljpw_core::vector::{Dimension, Ljpw};
///
/// let v: Ljpw = "0.8, 0.7, 0.6, 0.9".parse().unwrap();
/// assert_eq!(v[Dimension::Power], 0.6);
/// assert!(v.distance_to_anchor() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Ljpw {
    pub love: f64,
    pub justice: f64,
    pub power: f64,
    pub wisdom: f64,
}

impl Ljpw {
    /// Create a vector from its four components.
    #[inline]
    pub const fn new(love: f64, justice: f64, power: f64, wisdom: f64) -> Self {
        Self {
            love,
            justice,
            power,
            wisdom,
        }
    }

    /// Create a vector with every component set to `value`.
    #[inline]
    pub const fn splat(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Create a vector from an `[L, J, P, W]` array.
    #[inline]
    pub const fn from_array(components: [f64; NUM_DIMENSIONS]) -> Self {
        Self::new(components[0], components[1], components[2], components[3])
    }

    /// Components as an `[L, J, P, W]` array.
    #[inline]
    pub const fn to_array(&self) -> [f64; NUM_DIMENSIONS] {
        [self.love, self.justice, self.power, self.wisdom]
    }

    /// Component for a given dimension.
    #[inline]
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Love => self.love,
            Dimension::Justice => self.justice,
            Dimension::Power => self.power,
            Dimension::Wisdom => self.wisdom,
        }
    }

    /// Iterate `(dimension, value)` pairs in canonical order.
    pub fn components(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL.iter().map(move |&d| (d, self.get(d)))
    }

    /// Apply `f` to every component.
    #[inline]
    pub fn map(&self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self::new(f(self.love), f(self.justice), f(self.power), f(self.wisdom))
    }

    /// Sum of the four components.
    #[inline]
    pub fn sum(&self) -> f64 {
        self.love + self.justice + self.power + self.wisdom
    }

    /// Product of the four components.
    #[inline]
    pub fn product(&self) -> f64 {
        self.love * self.justice * self.power * self.wisdom
    }

    /// Euclidean distance to another vector.
    #[inline]
    pub fn distance(&self, other: &Ljpw) -> f64 {
        let d = *self - *other;
        (d.love * d.love + d.justice * d.justice + d.power * d.power + d.wisdom * d.wisdom).sqrt()
    }

    /// Euclidean distance to the Anchor Point.
    #[inline]
    pub fn distance_to_anchor(&self) -> f64 {
        self.distance(&ANCHOR_POINT)
    }

    /// Euclidean distance to the Natural Equilibrium.
    #[inline]
    pub fn distance_to_equilibrium(&self) -> f64 {
        self.distance(&NATURAL_EQUILIBRIUM)
    }

    /// Clamp every component into `[lower, upper]`.
    ///
    /// NaN components stay NaN so that divergence remains detectable.
    #[inline]
    pub fn clamp(&self, lower: f64, upper: f64) -> Self {
        self.map(|x| x.clamp(lower, upper))
    }

    /// `true` if every component is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.love.is_finite()
            && self.justice.is_finite()
            && self.power.is_finite()
            && self.wisdom.is_finite()
    }

    /// Return the first non-finite component as an error.
    pub fn validate_finite(&self) -> LjpwResult<()> {
        match self.components().find(|(_, v)| !v.is_finite()) {
            Some((dimension, value)) => Err(LjpwError::NonFiniteComponent { dimension, value }),
            None => Ok(()),
        }
    }
}

impl Index<Dimension> for Ljpw {
    type Output = f64;

    fn index(&self, dimension: Dimension) -> &f64 {
        match dimension {
            Dimension::Love => &self.love,
            Dimension::Justice => &self.justice,
            Dimension::Power => &self.power,
            Dimension::Wisdom => &self.wisdom,
        }
    }
}

impl Add for Ljpw {
    type Output = Ljpw;

    fn add(self, rhs: Ljpw) -> Ljpw {
        Ljpw::new(
            self.love + rhs.love,
            self.justice + rhs.justice,
            self.power + rhs.power,
            self.wisdom + rhs.wisdom,
        )
    }
}

impl Sub for Ljpw {
    type Output = Ljpw;

    fn sub(self, rhs: Ljpw) -> Ljpw {
        Ljpw::new(
            self.love - rhs.love,
            self.justice - rhs.justice,
            self.power - rhs.power,
            self.wisdom - rhs.wisdom,
        )
    }
}

impl Mul<f64> for Ljpw {
    type Output = Ljpw;

    fn mul(self, rhs: f64) -> Ljpw {
        self.map(|x| x * rhs)
    }
}

impl From<[f64; NUM_DIMENSIONS]> for Ljpw {
    fn from(components: [f64; NUM_DIMENSIONS]) -> Self {
        Ljpw::from_array(components)
    }
}

impl From<Ljpw> for [f64; NUM_DIMENSIONS] {
    fn from(v: Ljpw) -> Self {
        v.to_array()
    }
}

impl std::fmt::Display for Ljpw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let p = f.precision().unwrap_or(4);
        write!(
            f,
            "({:.p$}, {:.p$}, {:.p$}, {:.p$})",
            self.love,
            self.justice,
            self.power,
            self.wisdom,
            p = p
        )
    }
}

impl FromStr for Ljpw {
    type Err = LjpwError;

    /// Parse `"L,J,P,W"`. Surrounding parentheses and whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let parts: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        if parts.len() != NUM_DIMENSIONS {
            return Err(LjpwError::ParseError(format!(
                "expected 4 comma-separated components, got {} in '{}'",
                parts.len(),
                s
            )));
        }

        let mut components = [0.0; NUM_DIMENSIONS];
        for (slot, (part, dimension)) in components
            .iter_mut()
            .zip(parts.iter().zip(Dimension::ALL.iter()))
        {
            *slot = part.parse::<f64>().map_err(|e| {
                LjpwError::ParseError(format!("invalid {} component '{}': {}", dimension, part, e))
            })?;
        }
        Ok(Ljpw::from_array(components))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_order() {
        for (i, d) in Dimension::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
        }
        assert_eq!(Dimension::Wisdom.symbol(), 'W');
    }

    #[test]
    fn test_dimension_parse() {
        assert_eq!("L".parse::<Dimension>().unwrap(), Dimension::Love);
        assert_eq!("justice".parse::<Dimension>().unwrap(), Dimension::Justice);
        assert_eq!(" Power ".parse::<Dimension>().unwrap(), Dimension::Power);
        assert!("X".parse::<Dimension>().is_err());
    }

    #[test]
    fn test_array_roundtrip_and_index() {
        let v = Ljpw::from_array([0.1, 0.2, 0.3, 0.4]);
        assert_eq!(v.to_array(), [0.1, 0.2, 0.3, 0.4]);
        assert_eq!(v[Dimension::Justice], 0.2);
        assert_eq!(v.get(Dimension::Wisdom), 0.4);
    }

    #[test]
    fn test_arithmetic() {
        let a = Ljpw::new(1.0, 2.0, 3.0, 4.0);
        let b = Ljpw::splat(1.0);
        assert_eq!(a + b, Ljpw::new(2.0, 3.0, 4.0, 5.0));
        assert_eq!(a - b, Ljpw::new(0.0, 1.0, 2.0, 3.0));
        assert_eq!(a * 2.0, Ljpw::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(a.sum(), 10.0);
        assert_eq!(a.product(), 24.0);
    }

    #[test]
    fn test_distance_origin_to_anchor() {
        // sqrt(4 * 1²) = 2
        assert!((Ljpw::splat(0.0).distance_to_anchor() - 2.0).abs() < 1e-12);
        assert_eq!(Ljpw::splat(1.0).distance_to_anchor(), 0.0);
    }

    #[test]
    fn test_clamp_keeps_nan() {
        let v = Ljpw::new(-1.0, 2.0, f64::NAN, 0.5).clamp(0.0, 1.5);
        assert_eq!(v.love, 0.0);
        assert_eq!(v.justice, 1.5);
        assert!(v.power.is_nan());
        assert_eq!(v.wisdom, 0.5);
    }

    #[test]
    fn test_validate_finite() {
        assert!(Ljpw::splat(0.5).validate_finite().is_ok());
        let err = Ljpw::new(0.5, f64::INFINITY, 0.5, 0.5)
            .validate_finite()
            .unwrap_err();
        match err {
            LjpwError::NonFiniteComponent { dimension, .. } => {
                assert_eq!(dimension, Dimension::Justice)
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_vector() {
        let v: Ljpw = "(0.85, 0.9, 0.8, 0.95)".parse().unwrap();
        assert_eq!(v, Ljpw::new(0.85, 0.9, 0.8, 0.95));

        assert!("0.1,0.2,0.3".parse::<Ljpw>().is_err());
        assert!("0.1,0.2,abc,0.4".parse::<Ljpw>().is_err());
    }

    #[test]
    fn test_display() {
        let v = Ljpw::new(0.5, 0.26, 1.0, 0.0);
        assert_eq!(v.to_string(), "(0.5000, 0.2600, 1.0000, 0.0000)");
        assert_eq!(format!("{:.1}", v), "(0.5, 0.3, 1.0, 0.0)");
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_string(&Ljpw::splat(0.5)).unwrap();
        assert!(json.contains("\"love\":0.5"));
        assert!(json.contains("\"wisdom\":0.5"));
    }
}
