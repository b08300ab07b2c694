//! # Share Input
//!
//! Turning share documents into the `(x, y)` points the interpolation engine
//! consumes:
//!
//! - **base** — decoding values written in bases 2 through 36.
//! - **test_case** — parsing a JSON test case into `n`, `k` and ordered points.
//!
//! The engine never sees text; it only ever receives decoded [`Point`]s.
//!
//! [`Point`]: crate::types::Point

pub mod base;
pub mod error;
pub mod test_case;

pub use base::decode_base;
pub use error::InputError;
pub use test_case::TestCase;
