
//! Textual form of fractions. A fraction is written as its canonical
//! numerator and denominator separated by a slash, e.g. `-3/4`. The
//! parser accepts the same shape, with optional whitespace around
//! either integer, and reduces the result.

use super::Fraction;
use crate::error::FractionError;

use once_cell::sync::Lazy;
use regex::Regex;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Writes `fraction` as `N/D`.
pub fn format(fraction: &Fraction) -> String {
  fraction.to_string()
}

/// Parses text of the form `N/D`.
///
/// Fails with [`FractionError::InvalidFormat`] if the slash is
/// missing or either side is not an `i32`, and with
/// [`FractionError::InvalidArgument`] if the denominator is zero.
pub fn parse(s: &str) -> Result<Fraction, FractionError> {
  static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)\s*/\s*([+-]?\d+)\s*$").unwrap());
  let caps = RE.captures(s).ok_or(FractionError::InvalidFormat)?;
  // The regex guarantees digits, so a failure here means the value is
  // out of range for an i32.
  let numerator = i32::from_str(&caps[1]).map_err(|_| FractionError::InvalidFormat)?;
  let denominator = i32::from_str(&caps[2]).map_err(|_| FractionError::InvalidFormat)?;
  Fraction::from_int(numerator, denominator)
}

impl Display for Fraction {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}", self.numerator, self.denominator)
  }
}

impl FromStr for Fraction {
  type Err = FractionError;

  fn from_str(s: &str) -> Result<Fraction, FractionError> {
    parse(s)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fraction::tests::frac;

  fn roundtrip_display(fraction: Fraction) -> Fraction {
    Fraction::from_str(&fraction.to_string()).unwrap()
  }

  #[test]
  fn test_display() {
    assert_eq!(frac(4, 8).to_string(), "1/2");
    assert_eq!(frac(1, -3).to_string(), "-1/3");
    assert_eq!(Fraction::ZERO.to_string(), "0/1");
    assert_eq!(Fraction::from(7).to_string(), "7/1");
    assert_eq!(format(&frac(10, 4)), "5/2");
  }

  #[test]
  fn test_display_roundtrip() {
    for fraction in [
      Fraction::ZERO,
      Fraction::ONE,
      frac(1, 2),
      frac(-22, 7),
      frac(355, 113),
      Fraction::from(i32::MAX),
      Fraction::from(i32::MIN),
      frac(1, i32::MAX),
      frac(i32::MIN, 3),
    ] {
      assert_eq!(roundtrip_display(fraction), fraction);
    }
  }

  #[test]
  fn test_parse() {
    assert_eq!(parse("1/2"), Ok(frac(1, 2)));
    assert_eq!(parse("4/8"), Ok(frac(1, 2)));
    assert_eq!(parse("-3/4"), Ok(frac(-3, 4)));
    assert_eq!(parse("3/-4"), Ok(frac(-3, 4)));
    assert_eq!(parse("+3/+4"), Ok(frac(3, 4)));
    assert_eq!(parse("0/9"), Ok(Fraction::ZERO));
    assert_eq!(parse("  5 / 10 "), Ok(frac(1, 2)));
    assert_eq!("-6/-8".parse::<Fraction>(), Ok(frac(3, 4)));
  }

  #[test]
  fn test_parse_zero_denominator() {
    assert_eq!(parse("1/0"), Err(FractionError::InvalidArgument));
    assert_eq!(parse("0/0"), Err(FractionError::InvalidArgument));
  }

  #[test]
  fn test_parse_invalid_format() {
    assert_eq!(parse(""), Err(FractionError::InvalidFormat));
    assert_eq!(parse("1"), Err(FractionError::InvalidFormat));
    assert_eq!(parse("1 2"), Err(FractionError::InvalidFormat));
    assert_eq!(parse("1/"), Err(FractionError::InvalidFormat));
    assert_eq!(parse("/2"), Err(FractionError::InvalidFormat));
    assert_eq!(parse("1//2"), Err(FractionError::InvalidFormat));
    assert_eq!(parse("1/2/3"), Err(FractionError::InvalidFormat));
    assert_eq!(parse("a/2"), Err(FractionError::InvalidFormat));
    assert_eq!(parse("1.5/2"), Err(FractionError::InvalidFormat));
    assert_eq!(parse("1/2x"), Err(FractionError::InvalidFormat));
  }

  #[test]
  fn test_parse_out_of_range() {
    assert_eq!(parse("2147483648/1"), Err(FractionError::InvalidFormat));
    assert_eq!(parse("1/-2147483649"), Err(FractionError::InvalidFormat));
    assert_eq!(parse("-2147483648/1"), Ok(Fraction::from(i32::MIN)));
    assert_eq!(parse("-2147483648/-1"), Err(FractionError::ArithmeticOverflow));
  }
}
