//! # Lagrange Reconstruction
//!
//! Recovers `f(0)` for the unique degree-`(k-1)` polynomial through `k`
//! shares:
//!
//! ```text
//! f(0) = Σ_i y_i · L_i(0),    L_i(0) = Π_{j≠i} (0 - x_j) / (x_i - x_j)
//! ```
//!
//! The same loop runs in either arithmetic domain. In exact mode a repeated x
//! surfaces as [`RecoveryError::DivisionByZero`]; in modular mode any pair with
//! `x_i ≡ x_j (mod p)` surfaces as [`RecoveryError::NoInverse`], even when the
//! literal x values differ.
//!
//! Reconstruction is a pure function of its inputs. Nothing is cached between
//! calls, so independent reconstructions can run on separate threads freely.
//!
//! ## Usage
//!
//! ```
//! use num_bigint::BigInt;
//! use shamir_recovery::{reconstruct_exact, Point};
//!
//! // f(x) = x + 2
//! let shares = vec![Point::new(1, 3), Point::new(2, 4), Point::new(3, 5)];
//! assert_eq!(reconstruct_exact(&shares, 2).unwrap(), BigInt::from(2));
//! ```

use num_bigint::BigInt;
use tracing::{debug, trace, warn};

use super::domain::{ExactDomain, InterpolationDomain};
use super::selection::{FirstK, SubsetSelector};
use crate::error::{Collision, RecoveryError};
use crate::math::{PrimeField, PrimeSelector};
use crate::types::{Mode, Point, ReconstructionRequest, Secret};

// ---------------------------------------------------------------------------
// Core Interpolation
// ---------------------------------------------------------------------------

/// Evaluate the interpolating polynomial through `points` at `x = 0`.
///
/// Every supplied point is used; selecting the subset is the caller's job.
pub fn interpolate_at_zero<D: InterpolationDomain>(
    domain: &D,
    points: &[&Point],
) -> Result<BigInt, RecoveryError> {
    let mut sum = domain.zero();

    for (i, pi) in points.iter().enumerate() {
        let mut weight = domain.one();
        for (j, pj) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            let num = -&pj.x;
            let den = &pi.x - &pj.x;
            weight = domain.scale(&weight, &num, &den).map_err(|e| {
                warn!(i, j, x_i = %pi.x, x_j = %pj.x, "share x coordinates collide");
                e.with_collision(Collision {
                    i,
                    j,
                    x_i: pi.x.clone(),
                    x_j: pj.x.clone(),
                })
            })?;
        }
        trace!(i, x = %pi.x, weight = %weight, "lagrange weight");

        let term = domain.mul(&domain.lift(&pi.y), &weight);
        sum = domain.add(&sum, &term);
    }

    domain.finish(sum)
}

fn ensure_threshold(available: usize, threshold: usize) -> Result<(), RecoveryError> {
    if threshold == 0 {
        return Err(RecoveryError::InvalidThreshold(threshold));
    }
    if available < threshold {
        return Err(RecoveryError::InsufficientPoints {
            threshold,
            available,
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Entry Points
// ---------------------------------------------------------------------------

/// Exact reconstruction from the first `threshold` points.
///
/// # Errors
///
/// - [`RecoveryError::InvalidThreshold`] if `threshold == 0`
/// - [`RecoveryError::InsufficientPoints`] if fewer than `threshold` points
/// - [`RecoveryError::DivisionByZero`] on a repeated x among the selected points
/// - [`RecoveryError::NonIntegralResult`] if `f(0)` is not a whole number
pub fn reconstruct_exact(points: &[Point], threshold: usize) -> Result<BigInt, RecoveryError> {
    ensure_threshold(points.len(), threshold)?;
    let subset = FirstK.select(points, threshold)?;
    interpolate_at_zero(&ExactDomain, &subset)
}

/// Reconstruction modulo `prime` from the first `threshold` points. The
/// result lies in `[0, prime)`.
///
/// # Errors
///
/// - [`RecoveryError::InvalidThreshold`] / [`RecoveryError::InsufficientPoints`]
///   as for [`reconstruct_exact`]
/// - [`RecoveryError::InvalidModulus`] if `prime < 2`
/// - [`RecoveryError::NoInverse`] if two selected x values collide mod `prime`
pub fn reconstruct_modular(
    points: &[Point],
    threshold: usize,
    prime: &BigInt,
) -> Result<BigInt, RecoveryError> {
    ensure_threshold(points.len(), threshold)?;
    let field = PrimeField::new(prime.clone())?;
    let subset = FirstK.select(points, threshold)?;
    interpolate_at_zero(&field, &subset)
}

// ---------------------------------------------------------------------------
// Reconstructor
// ---------------------------------------------------------------------------

/// Configurable reconstruction: a subset policy plus the prime selector used
/// when a modular request carries no explicit prime.
#[derive(Debug, Clone, Default)]
pub struct Reconstructor<S = FirstK> {
    selector: S,
    primes: PrimeSelector,
}

impl Reconstructor<FirstK> {
    /// First-`k` selection and the default prime margin.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: SubsetSelector> Reconstructor<S> {
    pub fn with_selector(selector: S) -> Self {
        Self {
            selector,
            primes: PrimeSelector::default(),
        }
    }

    /// Replace the safety margin used for auto-selected primes.
    pub fn prime_margin(mut self, margin: u64) -> Self {
        self.primes = PrimeSelector::new(margin);
        self
    }

    /// Run one reconstruction.
    ///
    /// ```
    /// use num_bigint::BigInt;
    /// use shamir_recovery::{Point, ReconstructionRequest, Reconstructor};
    ///
    /// // f(x) = x^2 + 2x + 3
    /// let shares = vec![Point::new(1, 6), Point::new(2, 11), Point::new(3, 18)];
    /// let secret = Reconstructor::new()
    ///     .reconstruct(&ReconstructionRequest::modular(shares, 3, None))
    ///     .unwrap();
    ///
    /// assert_eq!(secret.value, BigInt::from(3));
    /// assert_eq!(secret.modulus, Some(BigInt::from(127)));
    /// ```
    pub fn reconstruct(&self, request: &ReconstructionRequest) -> Result<Secret, RecoveryError> {
        let points = &request.points;
        ensure_threshold(points.len(), request.threshold)?;
        let subset = self.selector.select(points, request.threshold)?;
        debug!(
            threshold = request.threshold,
            available = points.len(),
            selected = ?subset.iter().map(|p| p.x.to_string()).collect::<Vec<_>>(),
            "reconstructing secret"
        );

        match &request.mode {
            Mode::Exact => Ok(Secret {
                value: interpolate_at_zero(&ExactDomain, &subset)?,
                modulus: None,
            }),
            Mode::Modular { prime } => {
                let prime = match prime {
                    Some(p) => p.clone(),
                    None => self.primes.select(points),
                };
                let field = PrimeField::new(prime)?;
                let value = interpolate_at_zero(&field, &subset)?;
                Ok(Secret {
                    value,
                    modulus: Some(field.modulus().clone()),
                })
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
