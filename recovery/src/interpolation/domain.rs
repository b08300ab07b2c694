//! The arithmetic seam of the interpolation engine.
//!
//! Lagrange interpolation is written once against [`InterpolationDomain`]; the
//! exact and modular reconstructions differ only in which domain they pass.

use std::fmt;

use num_bigint::BigInt;

use crate::error::RecoveryError;
use crate::math::{PrimeField, Rational};

/// A number system Lagrange weights can be accumulated in.
pub trait InterpolationDomain {
    /// A value in this domain.
    type Element: Clone + fmt::Display;

    /// Embed an integer (a share value) into the domain.
    fn lift(&self, v: &BigInt) -> Self::Element;

    fn zero(&self) -> Self::Element;

    fn one(&self) -> Self::Element;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// `acc * (num / den)`. Fails when `den` vanishes in this domain.
    fn scale(
        &self,
        acc: &Self::Element,
        num: &BigInt,
        den: &BigInt,
    ) -> Result<Self::Element, RecoveryError>;

    /// Turn the accumulated sum into the final integer secret.
    fn finish(&self, sum: Self::Element) -> Result<BigInt, RecoveryError>;
}

/// Exact arithmetic over the rationals. The result must be whole.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExactDomain;

impl InterpolationDomain for ExactDomain {
    type Element = Rational;

    fn lift(&self, v: &BigInt) -> Rational {
        Rational::from_integer(v.clone())
    }

    fn zero(&self) -> Rational {
        Rational::zero()
    }

    fn one(&self) -> Rational {
        Rational::one()
    }

    fn add(&self, a: &Rational, b: &Rational) -> Rational {
        a + b
    }

    fn mul(&self, a: &Rational, b: &Rational) -> Rational {
        a * b
    }

    fn scale(&self, acc: &Rational, num: &BigInt, den: &BigInt) -> Result<Rational, RecoveryError> {
        let factor = Rational::new(num.clone(), den.clone())?;
        Ok(acc * &factor)
    }

    fn finish(&self, sum: Rational) -> Result<BigInt, RecoveryError> {
        sum.to_integer()
    }
}

impl InterpolationDomain for PrimeField {
    type Element = BigInt;

    fn lift(&self, v: &BigInt) -> BigInt {
        self.normalize(v)
    }

    fn zero(&self) -> BigInt {
        BigInt::from(0)
    }

    fn one(&self) -> BigInt {
        BigInt::from(1)
    }

    fn add(&self, a: &BigInt, b: &BigInt) -> BigInt {
        PrimeField::add(self, a, b)
    }

    fn mul(&self, a: &BigInt, b: &BigInt) -> BigInt {
        PrimeField::mul(self, a, b)
    }

    fn scale(&self, acc: &BigInt, num: &BigInt, den: &BigInt) -> Result<BigInt, RecoveryError> {
        let num = self.normalize(num);
        let inv = self.inverse(den)?;
        Ok(PrimeField::mul(self, &PrimeField::mul(self, acc, &num), &inv))
    }

    fn finish(&self, sum: BigInt) -> Result<BigInt, RecoveryError> {
        Ok(self.normalize(&sum))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_scale_multiplies_by_fraction() {
        let d = ExactDomain;
        let acc = d.lift(&BigInt::from(3));
        let scaled = d.scale(&acc, &BigInt::from(-2), &BigInt::from(6)).unwrap();
        assert_eq!(scaled, d.lift(&BigInt::from(-1)));
    }

    #[test]
    fn exact_scale_rejects_zero_denominator() {
        let d = ExactDomain;
        let err = d
            .scale(&d.one(), &BigInt::from(-5), &BigInt::from(0))
            .unwrap_err();
        assert!(matches!(err, RecoveryError::DivisionByZero { .. }));
    }

    #[test]
    fn field_scale_uses_inverse() {
        let f = PrimeField::new(BigInt::from(7)).unwrap();
        // 1 * (-1) / 3 = 6 * 5 = 30 = 2 (mod 7)
        let scaled = f.scale(&f.one(), &BigInt::from(-1), &BigInt::from(3)).unwrap();
        assert_eq!(scaled, BigInt::from(2));
    }

    #[test]
    fn field_scale_rejects_zero_residue() {
        let f = PrimeField::new(BigInt::from(7)).unwrap();
        let err = f
            .scale(&f.one(), &BigInt::from(-1), &BigInt::from(14))
            .unwrap_err();
        assert!(matches!(err, RecoveryError::NoInverse { .. }));
    }

    #[test]
    fn field_lift_normalizes() {
        let f = PrimeField::new(BigInt::from(11)).unwrap();
        assert_eq!(f.lift(&BigInt::from(-1)), BigInt::from(10));
        assert_eq!(f.finish(BigInt::from(23)).unwrap(), BigInt::from(1));
    }
}
