
use crate::fraction::Fraction;

use thiserror::Error;

/// Everything that can go wrong while building or combining
/// [`Fraction`] values.
///
/// Errors are reported to the immediate caller. A failed operation
/// never modifies its receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum FractionError {
  /// A constructor was given a zero denominator, or a float that is
  /// not finite.
  #[error("Invalid argument: zero denominator or non-finite float")]
  InvalidArgument,
  #[error("Can't divide by zero")]
  DivisionByZero,
  /// An intermediate or final integer fell outside the `i32` range.
  #[error("Arithmetic overflow")]
  ArithmeticOverflow,
  /// Text did not have the shape `N/D`.
  #[error("Invalid format, expected two integers separated by '/'")]
  InvalidFormat,
}

/// Error from narrowing a [`Fraction`] to an `i32`. Only integral
/// fractions can be narrowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Expected integer, got {fraction}")]
pub struct TryFromFractionError {
  pub fraction: Fraction,
  _priv: (),
}

impl TryFromFractionError {
  pub(crate) fn new(fraction: Fraction) -> Self {
    Self { fraction, _priv: () }
  }
}
