//! Choosing which `k` shares feed the interpolation.
//!
//! The default [`FirstK`] takes the first `k` shares in the order supplied and
//! ignores the rest. Extra shares are not checked against the fitted
//! polynomial: holding more than `k` shares buys no verification.

use std::collections::HashSet;

use crate::error::RecoveryError;
use crate::types::Point;

/// Picks the subset of points a reconstruction interpolates through.
pub trait SubsetSelector {
    /// Return exactly `threshold` points borrowed from `points`.
    fn select<'a>(
        &self,
        points: &'a [Point],
        threshold: usize,
    ) -> Result<Vec<&'a Point>, RecoveryError>;
}

/// The first `threshold` points, in supplied order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstK;

impl SubsetSelector for FirstK {
    fn select<'a>(
        &self,
        points: &'a [Point],
        threshold: usize,
    ) -> Result<Vec<&'a Point>, RecoveryError> {
        let subset = points
            .get(..threshold)
            .ok_or(RecoveryError::InsufficientPoints {
                threshold,
                available: points.len(),
            })?;
        Ok(subset.iter().collect())
    }
}

/// Explicit zero-based positions into the supplied point list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indices(pub Vec<usize>);

impl SubsetSelector for Indices {
    fn select<'a>(
        &self,
        points: &'a [Point],
        threshold: usize,
    ) -> Result<Vec<&'a Point>, RecoveryError> {
        if self.0.len() != threshold {
            return Err(RecoveryError::InvalidSelection(format!(
                "{} positions given for threshold {}",
                self.0.len(),
                threshold
            )));
        }

        let mut seen = HashSet::with_capacity(self.0.len());
        self.0
            .iter()
            .map(|&idx| {
                if !seen.insert(idx) {
                    return Err(RecoveryError::InvalidSelection(format!(
                        "position {} selected twice",
                        idx
                    )));
                }
                points.get(idx).ok_or_else(|| {
                    RecoveryError::InvalidSelection(format!(
                        "position {} out of range for {} points",
                        idx,
                        points.len()
                    ))
                })
            })
            .collect()
    }
}
