
use super::Fraction;
use crate::error::FractionError;

use serde::{Serialize, Deserialize};

use std::convert::TryFrom;

/// Wire form of a [`Fraction`]. Deserialized values pass back through
/// [`Fraction::from_int`], so they are validated and reduced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub(super) struct RawFraction {
  numerator: i32,
  denominator: i32,
}

impl From<Fraction> for RawFraction {
  fn from(fraction: Fraction) -> RawFraction {
    RawFraction { numerator: fraction.numerator, denominator: fraction.denominator }
  }
}

impl TryFrom<RawFraction> for Fraction {
  type Error = FractionError;

  fn try_from(raw: RawFraction) -> Result<Fraction, FractionError> {
    Fraction::from_int(raw.numerator, raw.denominator)
  }
}
