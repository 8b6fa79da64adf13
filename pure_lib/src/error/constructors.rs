//! Constructors for `PureError`.

use camino::Utf8Path;

use super::PureError;

impl PureError {
    /// Construct an [`PureError::InvalidArgument`] for `name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pure_lib::PureError;
    /// let e = PureError::invalid_argument("message", "must not be null");
    /// assert_eq!(e.to_string(), "invalid argument 'message': must not be null");
    /// ```
    #[must_use]
    pub fn invalid_argument(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            message: message.into(),
        }
    }

    /// Construct an [`PureError::InvalidOperation`] from a message.
    #[must_use]
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation(message.into())
    }

    /// Construct an [`PureError::Io`] for `path`.
    #[must_use]
    pub fn io(path: &Utf8Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns `true` for construction-rule violations of the outcome types.
    #[must_use]
    pub const fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::InvalidOperation(_))
    }

    /// Returns `true` when an argument was missing or malformed.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
