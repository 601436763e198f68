
//! Checked 32-bit primitives used by the fraction arithmetic. Every
//! intermediate product, sum, or difference goes through one of these
//! before it is used.

use crate::error::FractionError;

pub fn add(x: i32, y: i32) -> Result<i32, FractionError> {
  x.checked_add(y).ok_or(FractionError::ArithmeticOverflow)
}

pub fn sub(x: i32, y: i32) -> Result<i32, FractionError> {
  x.checked_sub(y).ok_or(FractionError::ArithmeticOverflow)
}

/// Multiplication by zero never overflows.
pub fn mul(x: i32, y: i32) -> Result<i32, FractionError> {
  x.checked_mul(y).ok_or(FractionError::ArithmeticOverflow)
}

pub fn neg(x: i32) -> Result<i32, FractionError> {
  x.checked_neg().ok_or(FractionError::ArithmeticOverflow)
}

/// Euclid's algorithm. `gcd(a, 0) == a`, so `gcd(0, 0) == 0`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
  while b != 0 {
    (a, b) = (b, a % b);
  }
  a
}
