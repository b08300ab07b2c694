//! Error types for secret reconstruction.
//!
//! Every failure is deterministic and input-dependent: retrying the same call
//! gives the same error. Each variant carries the operands that caused it.

use std::fmt;

use num_bigint::BigInt;
use thiserror::Error;

/// Two selected shares whose x coordinates cannot be told apart.
///
/// `i` and `j` are positions within the selected subset, which for the
/// default first-k selection are positions in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub i: usize,
    pub j: usize,
    pub x_i: BigInt,
    pub x_j: BigInt,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "shares {} (x = {}) and {} (x = {}) collide",
            self.i, self.x_i, self.j, self.x_j
        )
    }
}

fn describe(collision: &Option<Collision>) -> String {
    collision
        .as_ref()
        .map(|c| format!(" ({})", c))
        .unwrap_or_default()
}

/// Errors that can occur while reconstructing a secret.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecoveryError {
    /// The threshold must be at least 1.
    #[error("threshold must be >= 1, got {0}")]
    InvalidThreshold(usize),

    /// Fewer points were supplied than the threshold requires.
    #[error("insufficient points: threshold is {threshold}, only {available} supplied")]
    InsufficientPoints {
        /// The requested threshold `k`.
        threshold: usize,
        /// Number of points actually supplied.
        available: usize,
    },

    /// A fraction with a zero denominator was requested. In exact mode this
    /// means two selected points share an x coordinate.
    #[error("division by zero: {numerator}/0{}", describe(.collision))]
    DivisionByZero {
        /// The numerator that was to be divided.
        numerator: BigInt,
        /// The shares responsible, when raised during interpolation.
        collision: Option<Collision>,
    },

    /// A residue has no inverse modulo the chosen prime, usually because two
    /// x coordinates collide mod p.
    #[error(
        "{value} has no inverse modulo {modulus}{}; a larger or different prime is needed",
        describe(.collision)
    )]
    NoInverse {
        /// The non-invertible value, before normalization.
        value: BigInt,
        /// The field modulus.
        modulus: BigInt,
        /// The shares responsible, when raised during interpolation.
        collision: Option<Collision>,
    },

    /// The exact reconstruction did not land on a whole number.
    #[error("result is not an integer: {numerator}/{denominator}")]
    NonIntegralResult {
        /// Numerator of the reduced result.
        numerator: BigInt,
        /// Denominator of the reduced result (always > 1 here).
        denominator: BigInt,
    },

    /// The modulus cannot define a field.
    #[error("modulus must be >= 2, got {0}")]
    InvalidModulus(BigInt),

    /// An explicit subset selection does not fit the supplied points.
    #[error("invalid share selection: {0}")]
    InvalidSelection(String),
}

impl RecoveryError {
    /// Attach the colliding shares to a division failure. Other errors are
    /// returned unchanged.
    pub fn with_collision(self, at: Collision) -> Self {
        match self {
            Self::DivisionByZero { numerator, .. } => Self::DivisionByZero {
                numerator,
                collision: Some(at),
            },
            Self::NoInverse { value, modulus, .. } => Self::NoInverse {
                value,
                modulus,
                collision: Some(at),
            },
            other => other,
        }
    }
}
