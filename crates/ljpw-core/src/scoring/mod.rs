//! Scoring functions over a single LJPW vector.
//!
//! All functions are pure. Means that are undefined for non-positive input
//! return an error instead of NaN.
//!
//! # Example
//!
//! ```
//! use ljpw_core::scoring::{harmonic_mean, geometric_mean, arithmetic_mean, ScoreCard};
//! use ljpw_core::vector::Ljpw;
//!
//! let v = Ljpw::new(0.7, 0.5, 0.8, 0.75);
//! let hm = harmonic_mean(&v).unwrap();
//! let gm = geometric_mean(&v).unwrap();
//! assert!(hm <= gm && gm <= arithmetic_mean(&v));
//!
//! let card = ScoreCard::compute(&v);
//! assert!(card.harmony > 0.0 && card.harmony <= 1.0);
//! ```

mod card;
mod harmony;
mod means;

pub use card::ScoreCard;
pub use harmony::{harmony_index, harmony_relative_to, karma_coupling};
pub use means::{arithmetic_mean, geometric_mean, harmonic_mean};
