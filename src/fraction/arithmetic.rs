
//! Overflow-checked arithmetic on fractions.
//!
//! Each operation is implemented once, on a pair of fractions. The
//! public entry points ([`add`], [`Fraction::try_add`], the `+`
//! operator, and so on) convert their operands through
//! [`IntoFraction`] and then delegate to that one implementation, so
//! `f32 + Fraction` and `Fraction + f32` share all their logic.

use super::{Fraction, IntoFraction, checked};
use crate::error::FractionError;

use num::{Zero, One};
use num::traits::{CheckedAdd, CheckedSub, CheckedMul, CheckedDiv, CheckedNeg};

use std::ops;

/// Adds two operands.
pub fn add(lhs: impl IntoFraction, rhs: impl IntoFraction) -> Result<Fraction, FractionError> {
  binary_op(lhs, rhs, add_fractions)
}

/// Subtracts `rhs` from `lhs`.
pub fn sub(lhs: impl IntoFraction, rhs: impl IntoFraction) -> Result<Fraction, FractionError> {
  binary_op(lhs, rhs, sub_fractions)
}

/// Multiplies two operands.
pub fn mul(lhs: impl IntoFraction, rhs: impl IntoFraction) -> Result<Fraction, FractionError> {
  binary_op(lhs, rhs, mul_fractions)
}

/// Divides `lhs` by `rhs`. Fails with
/// [`FractionError::DivisionByZero`] if `rhs` is zero, including a
/// float whose conversion is zero.
pub fn div(lhs: impl IntoFraction, rhs: impl IntoFraction) -> Result<Fraction, FractionError> {
  binary_op(lhs, rhs, div_fractions)
}

fn binary_op<L, R, F>(lhs: L, rhs: R, op: F) -> Result<Fraction, FractionError>
where L: IntoFraction,
      R: IntoFraction,
      F: FnOnce(Fraction, Fraction) -> Result<Fraction, FractionError> {
  op(lhs.into_fraction()?, rhs.into_fraction()?)
}

fn add_fractions(a: Fraction, b: Fraction) -> Result<Fraction, FractionError> {
  let left = checked::mul(a.numerator, b.denominator)?;
  let right = checked::mul(b.numerator, a.denominator)?;
  let numerator = checked::add(left, right)?;
  let denominator = checked::mul(a.denominator, b.denominator)?;
  Fraction::from_int(numerator, denominator)
}

fn sub_fractions(a: Fraction, b: Fraction) -> Result<Fraction, FractionError> {
  let left = checked::mul(a.numerator, b.denominator)?;
  let right = checked::mul(b.numerator, a.denominator)?;
  let numerator = checked::sub(left, right)?;
  let denominator = checked::mul(a.denominator, b.denominator)?;
  Fraction::from_int(numerator, denominator)
}

fn mul_fractions(a: Fraction, b: Fraction) -> Result<Fraction, FractionError> {
  let numerator = checked::mul(a.numerator, b.numerator)?;
  let denominator = checked::mul(a.denominator, b.denominator)?;
  Fraction::from_int(numerator, denominator)
}

fn div_fractions(a: Fraction, b: Fraction) -> Result<Fraction, FractionError> {
  if b.numerator == 0 {
    return Err(FractionError::DivisionByZero);
  }
  // A negative divisor leaves a negative denominator here;
  // `from_int` moves the sign back into the numerator.
  let numerator = checked::mul(a.numerator, b.denominator)?;
  let denominator = checked::mul(a.denominator, b.numerator)?;
  Fraction::from_int(numerator, denominator)
}

impl Fraction {
  pub fn try_add(self, rhs: impl IntoFraction) -> Result<Fraction, FractionError> {
    add(self, rhs)
  }

  pub fn try_sub(self, rhs: impl IntoFraction) -> Result<Fraction, FractionError> {
    sub(self, rhs)
  }

  pub fn try_mul(self, rhs: impl IntoFraction) -> Result<Fraction, FractionError> {
    mul(self, rhs)
  }

  pub fn try_div(self, rhs: impl IntoFraction) -> Result<Fraction, FractionError> {
    div(self, rhs)
  }

  /// Negation. Fails only when the numerator is `i32::MIN`.
  pub fn try_neg(self) -> Result<Fraction, FractionError> {
    // Negating the numerator preserves canonical form.
    let numerator = checked::neg(self.numerator)?;
    Ok(Fraction { numerator, denominator: self.denominator })
  }

  /// Adds `rhs` to `self` in place. On failure, `self` is unchanged.
  pub fn try_add_assign(&mut self, rhs: impl IntoFraction) -> Result<(), FractionError> {
    *self = self.try_add(rhs)?;
    Ok(())
  }

  /// Subtracts `rhs` from `self` in place. On failure, `self` is
  /// unchanged.
  pub fn try_sub_assign(&mut self, rhs: impl IntoFraction) -> Result<(), FractionError> {
    *self = self.try_sub(rhs)?;
    Ok(())
  }

  /// Multiplies `self` by `rhs` in place. On failure, `self` is
  /// unchanged.
  pub fn try_mul_assign(&mut self, rhs: impl IntoFraction) -> Result<(), FractionError> {
    *self = self.try_mul(rhs)?;
    Ok(())
  }

  /// Divides `self` by `rhs` in place. On failure, `self` is
  /// unchanged.
  pub fn try_div_assign(&mut self, rhs: impl IntoFraction) -> Result<(), FractionError> {
    *self = self.try_div(rhs)?;
    Ok(())
  }
}

// The operator forms panic on failure, the same way integer
// arithmetic panics on overflow. Use the `try_*` methods to handle
// errors.
macro_rules! impl_operator {
  (@reversed $trait:ident, $method:ident, $op:ident, $lhs:ty) => {
    impl ops::$trait<Fraction> for $lhs {
      type Output = Fraction;

      fn $method(self, rhs: Fraction) -> Fraction {
        $op(self, rhs).unwrap_or_else(|err| panic!("{err}"))
      }
    }
  };
  ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:ident, $try_assign:ident) => {
    impl<R: IntoFraction> ops::$trait<R> for Fraction {
      type Output = Fraction;

      fn $method(self, rhs: R) -> Fraction {
        $op(self, rhs).unwrap_or_else(|err| panic!("{err}"))
      }
    }

    impl<R: IntoFraction> ops::$assign_trait<R> for Fraction {
      fn $assign_method(&mut self, rhs: R) {
        self.$try_assign(rhs).unwrap_or_else(|err| panic!("{err}"))
      }
    }

    impl_operator!(@reversed $trait, $method, $op, i32);
    impl_operator!(@reversed $trait, $method, $op, f32);
    impl_operator!(@reversed $trait, $method, $op, f64);
  };
}

impl_operator!(Add, add, AddAssign, add_assign, add, try_add_assign);
impl_operator!(Sub, sub, SubAssign, sub_assign, sub, try_sub_assign);
impl_operator!(Mul, mul, MulAssign, mul_assign, mul, try_mul_assign);
impl_operator!(Div, div, DivAssign, div_assign, div, try_div_assign);

impl ops::Neg for Fraction {
  type Output = Fraction;

  fn neg(self) -> Fraction {
    self.try_neg().unwrap_or_else(|err| panic!("{err}"))
  }
}

impl Zero for Fraction {
  fn zero() -> Fraction {
    Fraction::ZERO
  }

  fn is_zero(&self) -> bool {
    self.numerator == 0
  }
}

impl One for Fraction {
  fn one() -> Fraction {
    Fraction::ONE
  }
}

impl CheckedAdd for Fraction {
  fn checked_add(&self, v: &Fraction) -> Option<Fraction> {
    add(self, v).ok()
  }
}

impl CheckedSub for Fraction {
  fn checked_sub(&self, v: &Fraction) -> Option<Fraction> {
    sub(self, v).ok()
  }
}

impl CheckedMul for Fraction {
  fn checked_mul(&self, v: &Fraction) -> Option<Fraction> {
    mul(self, v).ok()
  }
}

impl CheckedDiv for Fraction {
  fn checked_div(&self, v: &Fraction) -> Option<Fraction> {
    div(self, v).ok()
  }
}

impl CheckedNeg for Fraction {
  fn checked_neg(&self) -> Option<Fraction> {
    self.try_neg().ok()
  }
}
