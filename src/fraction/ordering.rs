
use super::{Fraction, IntoFraction};

use std::cmp::Ordering;

/// Fractions are ordered by cross-multiplication, `a/b < c/d` iff
/// `a*d < c*b`, which is valid because denominators are positive. The
/// products are taken in `i64`, where two `i32` factors always fit.
impl Ord for Fraction {
  fn cmp(&self, other: &Fraction) -> Ordering {
    let left = i64::from(self.numerator) * i64::from(other.denominator);
    let right = i64::from(other.numerator) * i64::from(self.denominator);
    left.cmp(&right)
  }
}

impl PartialOrd for Fraction {
  fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

// Mixed comparisons convert the scalar to its canonical fraction first.
// Floats which cannot be converted (NaN, infinities, values too large
// once scaled) are unequal to and unordered with every fraction.
macro_rules! impl_scalar_comparison {
  ($scalar:ty) => {
    impl PartialEq<$scalar> for Fraction {
      fn eq(&self, other: &$scalar) -> bool {
        other.into_fraction().map_or(false, |other| *self == other)
      }
    }

    impl PartialEq<Fraction> for $scalar {
      fn eq(&self, other: &Fraction) -> bool {
        other == self
      }
    }

    impl PartialOrd<$scalar> for Fraction {
      fn partial_cmp(&self, other: &$scalar) -> Option<Ordering> {
        let other = other.into_fraction().ok()?;
        Some(self.cmp(&other))
      }
    }

    impl PartialOrd<Fraction> for $scalar {
      fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
      }
    }
  };
}

impl_scalar_comparison!(i32);
impl_scalar_comparison!(f32);
impl_scalar_comparison!(f64);
