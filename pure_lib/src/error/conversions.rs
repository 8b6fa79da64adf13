//! Conversions between `PureError` and foreign error types.

use super::PureError;

impl From<PureError> for std::io::Error {
    /// Allow using `?` in callers that return `std::io::Result`.
    fn from(e: PureError) -> Self {
        match e {
            PureError::Io { source, .. } => source,
            PureError::InvalidArgument { .. } => Self::new(std::io::ErrorKind::InvalidInput, e),
            PureError::Json(json) => Self::new(std::io::ErrorKind::InvalidData, json),
            other => Self::other(other),
        }
    }
}
