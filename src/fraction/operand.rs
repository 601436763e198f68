
//! Conversion of operands into [`Fraction`] values. Every binary
//! operation on fractions accepts anything implementing
//! [`IntoFraction`], converts it here, and then runs the single
//! fraction-by-fraction implementation.

use super::Fraction;
use crate::error::FractionError;

/// A value which can stand in for a [`Fraction`] in arithmetic and
/// comparisons.
///
/// Integers convert exactly. Floats convert with the fixed-scale
/// policy of [`Fraction::from_f32`], and fail if they are not finite
/// or do not fit once scaled.
pub trait IntoFraction {
  fn into_fraction(self) -> Result<Fraction, FractionError>;
}

impl IntoFraction for Fraction {
  fn into_fraction(self) -> Result<Fraction, FractionError> {
    Ok(self)
  }
}

impl IntoFraction for &Fraction {
  fn into_fraction(self) -> Result<Fraction, FractionError> {
    Ok(*self)
  }
}

impl IntoFraction for i32 {
  fn into_fraction(self) -> Result<Fraction, FractionError> {
    Ok(Fraction::from(self))
  }
}

impl IntoFraction for f32 {
  fn into_fraction(self) -> Result<Fraction, FractionError> {
    Fraction::from_f32(self)
  }
}

impl IntoFraction for f64 {
  fn into_fraction(self) -> Result<Fraction, FractionError> {
    Fraction::from_f64(self)
  }
}
