//! # Interpolation
//!
//! Lagrange reconstruction of `f(0)`, written once and instantiated over two
//! arithmetic domains:
//!
//! - [`ExactDomain`] — rationals; the secret must come out whole.
//! - [`PrimeField`](crate::math::PrimeField) — residues mod p; always yields
//!   a field element.
//!
//! Which shares are interpolated is decided by a [`SubsetSelector`]; the
//! default [`FirstK`] takes the first `k` in supplied order.

pub mod domain;
pub mod lagrange;
pub mod selection;

pub use domain::{ExactDomain, InterpolationDomain};
pub use lagrange::{interpolate_at_zero, reconstruct_exact, reconstruct_modular, Reconstructor};
pub use selection::{FirstK, Indices, SubsetSelector};
