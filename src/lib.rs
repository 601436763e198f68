
//! Exact fractions over 32-bit integers.
//!
//! A [`Fraction`] is always kept in lowest terms with a positive
//! denominator, and every operation checks for `i32` overflow instead
//! of wrapping.

pub mod error;
pub mod fraction;

pub use error::FractionError;
pub use fraction::{Fraction, IntoFraction};
