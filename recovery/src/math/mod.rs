//! # Arithmetic Domains
//!
//! The number types the interpolation engine runs on:
//!
//! - **rational** — exact fractions over big integers, kept in lowest terms.
//! - **field** — residues modulo a prime, with extended-Euclid inverses.
//! - **prime** — Miller–Rabin testing and default field-prime selection.
//!
//! Nothing here holds state beyond a single value or a single modulus, so
//! every type is freely shareable across threads.

pub mod field;
pub mod prime;
pub mod rational;

pub use field::PrimeField;
pub use prime::{is_probable_prime, next_prime_above, PrimeSelector};
pub use rational::Rational;
