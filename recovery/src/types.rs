//! # Reconstruction Types
//!
//! The data that crosses the boundary between the input layer and the
//! interpolation engine. Points are produced once by a parser and never
//! mutated; a [`Secret`] is produced once per reconstruction.

use std::fmt;

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// A share: one point `(x, y)` on the hidden polynomial.
///
/// `x` is the share index, `y` the share payload already decoded from
/// whatever base it was written in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// The x-coordinate (share index).
    pub x: BigInt,
    /// The y-coordinate (share value).
    pub y: BigInt,
}

impl Point {
    /// Create a point from anything convertible into big integers.
    ///
    /// ```
    /// use shamir_recovery::Point;
    ///
    /// let p = Point::new(1, 6);
    /// assert_eq!(p.x, 1.into());
    /// ```
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Which arithmetic the reconstruction runs in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Exact rational arithmetic; the result must be a whole number.
    #[default]
    Exact,
    /// Arithmetic modulo a prime. `None` lets the prime selector choose one.
    Modular {
        /// Explicit field prime, if the caller knows the share-generation modulus.
        prime: Option<BigInt>,
    },
}

/// Everything a single reconstruction needs.
#[derive(Debug, Clone)]
pub struct ReconstructionRequest {
    /// Available shares, in the order they were supplied.
    pub points: Vec<Point>,
    /// Number of shares the polynomial needs (`degree + 1`).
    pub threshold: usize,
    /// Exact or modular arithmetic.
    pub mode: Mode,
}

impl ReconstructionRequest {
    /// An exact-mode request.
    pub fn exact(points: Vec<Point>, threshold: usize) -> Self {
        Self {
            points,
            threshold,
            mode: Mode::Exact,
        }
    }

    /// A modular-mode request, optionally pinned to an explicit prime.
    pub fn modular(points: Vec<Point>, threshold: usize, prime: Option<BigInt>) -> Self {
        Self {
            points,
            threshold,
            mode: Mode::Modular { prime },
        }
    }
}

/// The recovered constant term.
///
/// In modular mode `modulus` records the prime the value lives under, so the
/// caller can tell which field it came from when the prime was auto-selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret {
    /// `f(0)`, either exact or reduced into `[0, modulus)`.
    pub value: BigInt,
    /// The field prime, for modular reconstructions.
    pub modulus: Option<BigInt>,
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.modulus {
            Some(p) => write!(f, "{} (mod {})", self.value, p),
            None => write!(f, "{}", self.value),
        }
    }
}
