//! # Exact Rational Arithmetic
//!
//! Fractions over arbitrary-precision integers, always held in lowest terms
//! with a strictly positive denominator. Every constructor and operator
//! re-establishes that invariant, so two equal values are always
//! structurally equal.
//!
//! Multiplication cancels common factors *across* the operands before
//! multiplying. Lagrange weights are products of `k - 1` fractions; reducing
//! only after the fact lets the intermediate products grow with every factor.

use std::fmt;
use std::ops::{Add, Mul};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::RecoveryError;

/// A fraction `numer / denom` in lowest terms with `denom > 0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Rational {
    /// Build `numer / denom`, normalizing the sign onto the numerator and
    /// reducing by the gcd.
    ///
    /// ```
    /// use num_bigint::BigInt;
    /// use shamir_recovery::math::Rational;
    ///
    /// let r = Rational::new(BigInt::from(4), BigInt::from(-6)).unwrap();
    /// assert_eq!(r.to_string(), "-2/3");
    /// ```
    ///
    /// # Errors
    ///
    /// [`RecoveryError::DivisionByZero`] if `denom` is zero.
    pub fn new(numer: BigInt, denom: BigInt) -> Result<Self, RecoveryError> {
        if denom.is_zero() {
            return Err(RecoveryError::DivisionByZero {
                numerator: numer,
                collision: None,
            });
        }
        Ok(Self::reduced(numer, denom))
    }

    /// Normalize a fraction whose denominator is known to be non-zero.
    fn reduced(mut numer: BigInt, mut denom: BigInt) -> Self {
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }
        let g = numer.gcd(&denom);
        if !g.is_one() {
            numer /= &g;
            denom /= &g;
        }
        Self { numer, denom }
    }

    /// The whole number `n / 1`.
    pub fn from_integer(n: BigInt) -> Self {
        Self {
            numer: n,
            denom: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    pub fn one() -> Self {
        Self::from_integer(BigInt::one())
    }

    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// `denom / numer`.
    ///
    /// # Errors
    ///
    /// [`RecoveryError::DivisionByZero`] if this fraction is zero.
    pub fn recip(&self) -> Result<Self, RecoveryError> {
        Self::new(self.denom.clone(), self.numer.clone())
    }

    /// Divide by `rhs` by multiplying with its reciprocal.
    ///
    /// # Errors
    ///
    /// [`RecoveryError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, RecoveryError> {
        Ok(self * &rhs.recip()?)
    }

    /// Extract the value as an integer.
    ///
    /// # Errors
    ///
    /// [`RecoveryError::NonIntegralResult`] if the fraction is not whole.
    pub fn to_integer(&self) -> Result<BigInt, RecoveryError> {
        if !self.is_integer() {
            return Err(RecoveryError::NonIntegralResult {
                numerator: self.numer.clone(),
                denominator: self.denom.clone(),
            });
        }
        Ok(self.numer.clone())
    }
}

impl Add<&Rational> for &Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Rational {
        let numer = &self.numer * &rhs.denom + &rhs.numer * &self.denom;
        let denom = &self.denom * &rhs.denom;
        Rational::reduced(numer, denom)
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        &self + &rhs
    }
}

impl Mul<&Rational> for &Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Rational {
        // Both gcds are >= 1: the denominators are strictly positive.
        let g1 = self.numer.gcd(&rhs.denom);
        let g2 = rhs.numer.gcd(&self.denom);
        let numer = (&self.numer / &g1) * (&rhs.numer / &g2);
        let denom = (&self.denom / &g2) * (&rhs.denom / &g1);
        Rational::reduced(numer, denom)
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        &self * &rhs
    }
}

impl From<BigInt> for Rational {
    fn from(n: BigInt) -> Self {
        Self::from_integer(n)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}
