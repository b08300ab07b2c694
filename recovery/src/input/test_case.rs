//! # Test-Case Documents
//!
//! A test case is a JSON object describing one reconstruction:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     "3": { "base": "10", "value": "12" },
//!     "6": { "base": "4", "value": "213" }
//! }
//! ```
//!
//! Every key made only of decimal digits is a share: the key is `x`, and
//! `value` decoded in `base` is `y`. Shares keep document order, so "the
//! first k shares" means the first k as written. Other keys are ignored.
//! `n` and `k` may also sit at the top level when there is no `keys` object.

use std::path::Path;

use num_bigint::BigInt;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::base::decode_base;
use super::error::InputError;
use crate::config::KEYS_FIELD;
use crate::types::{Mode, Point, ReconstructionRequest};

/// One parsed test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Number of shares the document declares.
    pub n: usize,
    /// Reconstruction threshold.
    pub k: usize,
    /// Shares in document order.
    pub points: Vec<Point>,
}

impl TestCase {
    /// Parse a test case from JSON text.
    ///
    /// ```
    /// use shamir_recovery::input::TestCase;
    ///
    /// let tc = TestCase::from_json(r#"{
    ///     "keys": { "n": 2, "k": 2 },
    ///     "1": { "base": "10", "value": "3" },
    ///     "2": { "base": "2", "value": "100" }
    /// }"#).unwrap();
    ///
    /// assert_eq!(tc.k, 2);
    /// assert_eq!(tc.points[1].y, 4.into());
    /// ```
    pub fn from_json(text: &str) -> Result<Self, InputError> {
        let doc: Value = serde_json::from_str(text)?;
        let root = doc.as_object().ok_or_else(|| InputError::InvalidField {
            field: "<root>".to_string(),
            reason: "expected a JSON object".to_string(),
        })?;

        let keys = match root.get(KEYS_FIELD) {
            Some(Value::Object(keys)) => keys,
            Some(_) => {
                return Err(InputError::InvalidField {
                    field: KEYS_FIELD.to_string(),
                    reason: "expected an object".to_string(),
                })
            }
            None => root,
        };
        let n = read_count(keys, "n")?;
        let k = read_count(keys, "k")?;

        let mut points = Vec::new();
        for (name, entry) in root {
            if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
                continue;
            }
            let point = read_share(name, entry).map_err(|source| InputError::InvalidShare {
                share: name.clone(),
                source: Box::new(source),
            })?;
            points.push(point);
        }

        if points.len() != n {
            warn!(declared = n, parsed = points.len(), "share count differs from declared n");
        }
        debug!(n, k, shares = points.len(), "parsed test case");

        Ok(Self { n, k, points })
    }

    /// Read and parse a test-case file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// A reconstruction request over this test case's shares and threshold.
    pub fn request(&self, mode: Mode) -> ReconstructionRequest {
        ReconstructionRequest {
            points: self.points.clone(),
            threshold: self.k,
            mode,
        }
    }
}

/// A non-negative count, written either as a JSON number or a numeric string.
fn read_count(obj: &Map<String, Value>, field: &'static str) -> Result<usize, InputError> {
    let value = obj
        .get(field)
        .ok_or_else(|| InputError::MissingField(field.to_string()))?;
    let parsed = match value {
        Value::Number(n) => n.as_u64().and_then(|v| usize::try_from(v).ok()),
        Value::String(s) => s.trim().parse::<usize>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| InputError::InvalidField {
        field: field.to_string(),
        reason: format!("expected a non-negative integer, got {}", value),
    })
}

fn read_share(name: &str, entry: &Value) -> Result<Point, InputError> {
    let share = entry.as_object().ok_or_else(|| InputError::InvalidField {
        field: name.to_string(),
        reason: "expected an object with `base` and `value`".to_string(),
    })?;

    let base_value = share
        .get("base")
        .ok_or_else(|| InputError::MissingField(format!("{}.base", name)))?;
    let base = match base_value {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    }
    .ok_or_else(|| InputError::InvalidField {
        field: format!("{}.base", name),
        reason: format!("expected an integer base, got {}", base_value),
    })?;

    let value = share
        .get("value")
        .ok_or_else(|| InputError::MissingField(format!("{}.value", name)))?
        .as_str()
        .ok_or_else(|| InputError::InvalidField {
            field: format!("{}.value", name),
            reason: "expected a string of digits".to_string(),
        })?;

    // Keys are all-digit strings, so this parse cannot fail.
    let x: BigInt = name.parse().map_err(|_| InputError::InvalidField {
        field: name.to_string(),
        reason: "share key is not an integer".to_string(),
    })?;
    let y = decode_base(value, base)?;

    Ok(Point { x, y })
}
