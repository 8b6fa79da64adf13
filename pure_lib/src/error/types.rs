//! Primary error enum for the utility helpers.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised by the helpers in this crate.
///
/// Expected, recoverable failures of caller operations are modelled with the
/// outcome types instead; this enum covers misuse of the helpers themselves
/// and failures of the underlying JSON and filesystem layers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PureError {
    /// An argument was missing or malformed.
    #[error("invalid argument '{name}': {message}")]
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// Human-readable explanation of the problem.
        message: String,
    },

    /// A value could not be built because its parts are inconsistent.
    #[error("{0}")]
    InvalidOperation(String),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem access failed.
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// Path being written or appended to.
        path: Utf8PathBuf,
        /// Underlying error reported by the filesystem.
        #[source]
        source: std::io::Error,
    },

    /// A dynamically typed value was not of the requested type.
    #[error("value is not of type {expected}")]
    InvalidCast {
        /// Name of the requested type.
        expected: &'static str,
    },
}
