// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Shamir Recovery — Core Library
//!
//! Reconstructs a Shamir-shared secret from a threshold of shares. Given `k`
//! points `(x, y)` on an unknown degree-`(k-1)` polynomial, it recovers the
//! constant term `f(0)` by Lagrange interpolation in one of two arithmetics:
//!
//! - **exact** — rationals over big integers, kept in lowest terms. The secret
//!   must come out as a whole number, or the shares are wrong.
//! - **modular** — a prime field, the variant real threshold deployments use.
//!   The prime is either supplied or picked just above the largest coordinate.
//!
//! ## Architecture
//!
//! - **math** — exact rationals, prime-field arithmetic, prime selection.
//! - **interpolation** — the Lagrange loop, generic over the arithmetic, and
//!   subset selection.
//! - **input** — base-N share decoding and JSON test-case parsing.
//! - **types** — points, requests and secrets.
//! - **config** — default margins, primality witnesses, radix bounds.
//!
//! ## What this crate does not do
//!
//! It does not split secrets, verify shares against commitments, or detect
//! inconsistent shares: with more than `k` shares available it uses the
//! first `k` and never looks at the rest.

pub mod config;
pub mod error;
pub mod input;
pub mod interpolation;
pub mod math;
pub mod types;

pub use error::{Collision, RecoveryError};
pub use interpolation::{reconstruct_exact, reconstruct_modular, Reconstructor};
pub use types::{Mode, Point, ReconstructionRequest, Secret};
