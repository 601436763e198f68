
//! Exact rational numbers with 32-bit components.

mod arithmetic;
mod checked;
mod float;
mod operand;
mod ordering;
mod serialization;
mod text;

pub use arithmetic::{add, sub, mul, div};
pub use float::FLOAT_SCALE;
pub use operand::IntoFraction;
pub use text::{format, parse};

use crate::error::{FractionError, TryFromFractionError};

use serde::{Serialize, Deserialize};

use std::convert::TryFrom;

/// A rational number `numerator / denominator`, always stored in
/// canonical form.
///
/// The denominator of a `Fraction` is strictly positive, and the
/// numerator and denominator share no common factor. Zero is always
/// stored as `0/1`. Since the canonical form of a rational value is
/// unique, the derived equality and hash on the two fields coincide
/// with mathematical equality.
///
/// All arithmetic is checked. Operations that would leave the `i32`
/// range report [`FractionError::ArithmeticOverflow`] through the
/// `try_*` methods (and panic through the standard operators).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "serialization::RawFraction", into = "serialization::RawFraction")]
pub struct Fraction {
  numerator: i32,
  denominator: i32,
}

impl Fraction {
  pub const ZERO: Fraction = Fraction { numerator: 0, denominator: 1 };
  pub const ONE: Fraction = Fraction { numerator: 1, denominator: 1 };

  /// The fraction `0/1`.
  pub fn new() -> Fraction {
    Fraction::ZERO
  }

  /// Constructs the fraction `numerator / denominator` in canonical
  /// form.
  ///
  /// Fails with [`FractionError::InvalidArgument`] if `denominator ==
  /// 0`, and with [`FractionError::ArithmeticOverflow`] if the
  /// canonical form is not representable, as with `i32::MIN / -1` or
  /// an odd numerator over `i32::MIN`.
  ///
  /// # Examples
  ///
  /// ```
  /// # use frac32::Fraction;
  /// let half = Fraction::from_int(4, 8).unwrap();
  /// assert_eq!((half.numerator(), half.denominator()), (1, 2));
  /// ```
  pub fn from_int(numerator: i32, denominator: i32) -> Result<Fraction, FractionError> {
    if denominator == 0 {
      return Err(FractionError::InvalidArgument);
    }
    Fraction::reduce(i64::from(numerator), i64::from(denominator))
  }

  // Precondition: denominator != 0. The work happens in i64 so that
  // moving the sign of `i32::MIN` never wraps; only the final
  // narrowing can fail.
  fn reduce(mut numerator: i64, mut denominator: i64) -> Result<Fraction, FractionError> {
    debug_assert!(denominator != 0);
    if numerator == 0 {
      return Ok(Fraction::ZERO);
    }
    if denominator < 0 {
      numerator = -numerator;
      denominator = -denominator;
    }
    // Both inputs originate in i32, so the gcd is at most 2^31.
    let gcd = checked::gcd(numerator.unsigned_abs(), denominator.unsigned_abs()) as i64;
    let numerator = i32::try_from(numerator / gcd).map_err(|_| FractionError::ArithmeticOverflow)?;
    let denominator = i32::try_from(denominator / gcd).map_err(|_| FractionError::ArithmeticOverflow)?;
    Ok(Fraction { numerator, denominator })
  }

  pub fn numerator(&self) -> i32 {
    self.numerator
  }

  /// The denominator, which is always positive.
  pub fn denominator(&self) -> i32 {
    self.denominator
  }

  pub fn is_integer(&self) -> bool {
    self.denominator == 1
  }

  /// The sign of the fraction: `-1`, `0`, or `1`.
  pub fn signum(&self) -> i32 {
    self.numerator.signum()
  }

  /// Absolute value. Fails only for numerator `i32::MIN`.
  pub fn try_abs(self) -> Result<Fraction, FractionError> {
    if self.numerator < 0 {
      self.try_neg()
    } else {
      Ok(self)
    }
  }

  /// The reciprocal `denominator / numerator`.
  pub fn try_recip(self) -> Result<Fraction, FractionError> {
    Fraction::ONE.try_div(self)
  }

  /// Adds one, then returns the new value.
  pub fn pre_increment(&mut self) -> Result<Fraction, FractionError> {
    self.step(checked::add)?;
    Ok(*self)
  }

  /// Adds one, then returns the value from before the increment.
  pub fn post_increment(&mut self) -> Result<Fraction, FractionError> {
    let previous = *self;
    self.step(checked::add)?;
    Ok(previous)
  }

  /// Subtracts one, then returns the new value.
  pub fn pre_decrement(&mut self) -> Result<Fraction, FractionError> {
    self.step(checked::sub)?;
    Ok(*self)
  }

  /// Subtracts one, then returns the value from before the decrement.
  pub fn post_decrement(&mut self) -> Result<Fraction, FractionError> {
    let previous = *self;
    self.step(checked::sub)?;
    Ok(previous)
  }

  // Applies `op` to the numerator and denominator, i.e. moves the
  // value by exactly one. `self` is untouched on failure.
  fn step<F>(&mut self, op: F) -> Result<(), FractionError>
  where F: FnOnce(i32, i32) -> Result<i32, FractionError> {
    let numerator = op(self.numerator, self.denominator)?;
    *self = Fraction::reduce(i64::from(numerator), i64::from(self.denominator))?;
    Ok(())
  }
}

impl Default for Fraction {
  fn default() -> Fraction {
    Fraction::new()
  }
}

/// The integer `n/1`.
impl From<i32> for Fraction {
  fn from(n: i32) -> Fraction {
    Fraction { numerator: n, denominator: 1 }
  }
}

impl TryFrom<Fraction> for i32 {
  type Error = TryFromFractionError;

  fn try_from(fraction: Fraction) -> Result<i32, Self::Error> {
    if fraction.is_integer() {
      Ok(fraction.numerator)
    } else {
      Err(TryFromFractionError::new(fraction))
    }
  }
}
