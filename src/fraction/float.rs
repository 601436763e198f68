
//! Conversions between fractions and floating-point values.
//!
//! Floats are converted with a fixed scale: the value is multiplied
//! by [`FLOAT_SCALE`], truncated toward zero, and placed over
//! `FLOAT_SCALE` before reduction. So `0.5` becomes `1/2`, `0.125`
//! becomes `1/8`, and any digits after the third decimal place are
//! discarded (`0.1239` becomes `123/1000`).

use super::Fraction;
use crate::error::FractionError;

use num::traits::{ToPrimitive, FromPrimitive};
use approx::{AbsDiffEq, RelativeEq};

use std::convert::TryFrom;

/// The denominator used when converting floats to fractions.
pub const FLOAT_SCALE: i32 = 1000;

impl Fraction {
  /// Converts a float to a fraction with the fixed-scale policy
  /// described in the [module documentation](self).
  ///
  /// Fails with [`FractionError::InvalidArgument`] for NaN and
  /// infinities, and with [`FractionError::ArithmeticOverflow`] if
  /// the scaled value does not fit in an `i32`.
  pub fn from_f32(value: f32) -> Result<Fraction, FractionError> {
    if !value.is_finite() {
      return Err(FractionError::InvalidArgument);
    }
    // Scale in single precision, so that e.g. 0.7f32 (which is
    // slightly less than 0.7) still lands on 700.
    from_scaled(f64::from(value * FLOAT_SCALE as f32))
  }

  /// As [`Fraction::from_f32`], for double-precision input.
  pub fn from_f64(value: f64) -> Result<Fraction, FractionError> {
    if !value.is_finite() {
      return Err(FractionError::InvalidArgument);
    }
    from_scaled(value * f64::from(FLOAT_SCALE))
  }
}

fn from_scaled(scaled: f64) -> Result<Fraction, FractionError> {
  let truncated = scaled.trunc();
  if !(f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&truncated) {
    return Err(FractionError::ArithmeticOverflow);
  }
  Fraction::from_int(truncated as i32, FLOAT_SCALE)
}

/// Integer conversions truncate toward zero, matching `i32` division.
impl ToPrimitive for Fraction {
  fn to_i64(&self) -> Option<i64> {
    Some(i64::from(self.numerator / self.denominator))
  }

  fn to_u64(&self) -> Option<u64> {
    u64::try_from(self.numerator / self.denominator).ok()
  }

  fn to_f64(&self) -> Option<f64> {
    Some(f64::from(self.numerator) / f64::from(self.denominator))
  }
}

/// Integers convert exactly (when they fit in an `i32`). Floats use
/// the fixed-scale policy of [`Fraction::from_f32`].
impl FromPrimitive for Fraction {
  fn from_i64(n: i64) -> Option<Fraction> {
    i32::try_from(n).ok().map(Fraction::from)
  }

  fn from_u64(n: u64) -> Option<Fraction> {
    i32::try_from(n).ok().map(Fraction::from)
  }

  fn from_f32(n: f32) -> Option<Fraction> {
    Fraction::from_f32(n).ok()
  }

  fn from_f64(n: f64) -> Option<Fraction> {
    Fraction::from_f64(n).ok()
  }
}

impl AbsDiffEq for Fraction {
  type Epsilon = f64;

  fn default_epsilon() -> f64 {
    <f64 as AbsDiffEq>::default_epsilon()
  }

  fn abs_diff_eq(&self, other: &Fraction, epsilon: f64) -> bool {
    let left = self.to_f64().unwrap_or(f64::NAN);
    let right = other.to_f64().unwrap_or(f64::NAN);
    left.abs_diff_eq(&right, epsilon)
  }
}

impl RelativeEq for Fraction {
  fn default_max_relative() -> f64 {
    <f64 as RelativeEq>::default_max_relative()
  }

  fn relative_eq(&self, other: &Fraction, epsilon: f64, max_relative: f64) -> bool {
    let left = self.to_f64().unwrap_or(f64::NAN);
    let right = other.to_f64().unwrap_or(f64::NAN);
    left.relative_eq(&right, epsilon, max_relative)
  }
}
