//! Error types for reading share documents.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while turning a test-case document into points.
#[derive(Debug, Error)]
pub enum InputError {
    /// The document could not be read from disk.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The file that failed to open or read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A required field is absent.
    #[error("missing field `{0}`")]
    MissingField(String),

    /// A field is present but has the wrong shape.
    #[error("invalid field `{field}`: {reason}")]
    InvalidField {
        /// Dotted path of the offending field.
        field: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Share values can only be written in bases 2 through 36.
    #[error("unsupported base {0} (expected 2..=36)")]
    UnsupportedBase(u32),

    /// A character is not a digit of the declared base.
    #[error("digit '{digit}' is invalid for base {base}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// The declared base.
        base: u32,
    },

    /// A share value with no digits at all.
    #[error("share value is empty")]
    EmptyValue,

    /// A specific share failed to decode.
    #[error("share {share}: {source}")]
    InvalidShare {
        /// The share's key (its x coordinate as written).
        share: String,
        /// Why it failed.
        #[source]
        source: Box<InputError>,
    },
}
