//! # Prime Field Arithmetic
//!
//! Integers modulo a caller-supplied prime `p`. Every operation returns a
//! canonical residue in `[0, p)`, including for negative inputs: the Lagrange
//! numerators `0 - x_j` are routinely negative and must land on the right
//! residue.
//!
//! Primality of `p` is a precondition, not something this type checks. With
//! a composite modulus, [`PrimeField::inverse`] still refuses any value that
//! shares a factor with `p` rather than returning garbage.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::RecoveryError;

/// Arithmetic in `Z/pZ` for a fixed modulus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeField {
    modulus: BigInt,
}

impl PrimeField {
    /// # Errors
    ///
    /// [`RecoveryError::InvalidModulus`] if `modulus < 2`.
    pub fn new(modulus: BigInt) -> Result<Self, RecoveryError> {
        if modulus < BigInt::from(2) {
            return Err(RecoveryError::InvalidModulus(modulus));
        }
        Ok(Self { modulus })
    }

    pub fn modulus(&self) -> &BigInt {
        &self.modulus
    }

    /// Map any integer onto its residue in `[0, p)`.
    ///
    /// ```
    /// use num_bigint::BigInt;
    /// use shamir_recovery::math::PrimeField;
    ///
    /// let f = PrimeField::new(BigInt::from(7)).unwrap();
    /// assert_eq!(f.normalize(&BigInt::from(-3)), BigInt::from(4));
    /// ```
    pub fn normalize(&self, v: &BigInt) -> BigInt {
        // Floor modulo with a positive modulus is never negative.
        v.mod_floor(&self.modulus)
    }

    pub fn add(&self, a: &BigInt, b: &BigInt) -> BigInt {
        self.normalize(&(a + b))
    }

    pub fn sub(&self, a: &BigInt, b: &BigInt) -> BigInt {
        self.normalize(&(a - b))
    }

    pub fn mul(&self, a: &BigInt, b: &BigInt) -> BigInt {
        self.normalize(&(a * b))
    }

    pub fn neg(&self, a: &BigInt) -> BigInt {
        self.normalize(&-a)
    }

    /// Multiplicative inverse via the extended Euclidean algorithm.
    ///
    /// # Errors
    ///
    /// [`RecoveryError::NoInverse`] if `v ≡ 0 (mod p)`, or if `v` shares a
    /// factor with a composite modulus.
    pub fn inverse(&self, v: &BigInt) -> Result<BigInt, RecoveryError> {
        let a = self.normalize(v);
        if a.is_zero() {
            return Err(self.no_inverse(v));
        }
        let (gcd, x) = extended_gcd(&a, &self.modulus);
        if !gcd.is_one() {
            return Err(self.no_inverse(v));
        }
        Ok(self.normalize(&x))
    }

    /// `a / b` in the field.
    ///
    /// # Errors
    ///
    /// [`RecoveryError::NoInverse`] if `b` is not invertible.
    pub fn div(&self, a: &BigInt, b: &BigInt) -> Result<BigInt, RecoveryError> {
        Ok(self.mul(a, &self.inverse(b)?))
    }

    fn no_inverse(&self, v: &BigInt) -> RecoveryError {
        RecoveryError::NoInverse {
            value: v.clone(),
            modulus: self.modulus.clone(),
            collision: None,
        }
    }
}

/// Returns `(g, x)` with `g = gcd(a, b)` and `a * x ≡ g (mod b)`.
fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());

    while !r.is_zero() {
        let q = &old_r / &r;
        let next_r = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, next_r);
        let next_s = &old_s - &q * &s;
        old_s = std::mem::replace(&mut s, next_s);
    }

    (old_r, old_s)
}
