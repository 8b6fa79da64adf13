//! Outcome without a value.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{PureError, PureResult};

use super::repr::OutcomeRepr;
use super::{FAILURE_WITHOUT_ERROR, SUCCESS_WITH_ERROR};

/// Success, or failure with a diagnostic message.
///
/// On success [`Outcome::error`] is the empty string. The default value is a
/// success.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "OutcomeRepr", into = "OutcomeRepr")]
#[must_use]
pub struct Outcome {
    failure: Option<String>,
}

impl Outcome {
    /// Successful outcome.
    pub const fn ok() -> Self {
        Self { failure: None }
    }

    /// Failed outcome described by `message`.
    ///
    /// An empty message is accepted, though callers should supply a
    /// meaningful diagnostic.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
        }
    }

    /// Failed outcome from a message that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`PureError::InvalidArgument`] when `message` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pure_lib::Outcome;
    /// assert!(Outcome::try_fail(Some("disk full")).is_ok());
    /// assert!(Outcome::try_fail(None::<&str>).is_err());
    /// ```
    pub fn try_fail<S: Into<String>>(message: Option<S>) -> PureResult<Self> {
        message
            .map(Self::fail)
            .ok_or_else(|| PureError::invalid_argument("message", "must not be null"))
    }

    /// Build an outcome from loose parts, enforcing the construction rule.
    ///
    /// A success accepts `None` or an empty error; a failure requires an
    /// error message.
    ///
    /// # Errors
    ///
    /// Returns [`PureError::InvalidOperation`] when `success` is `true` and
    /// `error` is non-empty, or when `success` is `false` and `error` is
    /// `None`.
    pub fn from_parts(success: bool, error: Option<String>) -> PureResult<Self> {
        match (success, error) {
            (true, Some(message)) if !message.is_empty() => {
                Err(PureError::invalid_operation(SUCCESS_WITH_ERROR))
            }
            (true, _) => Ok(Self::ok()),
            (false, Some(message)) => Ok(Self::fail(message)),
            (false, None) => Err(PureError::invalid_operation(FAILURE_WITHOUT_ERROR)),
        }
    }

    /// Whether the operation succeeded.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.failure.is_none()
    }

    /// Whether the operation failed.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        !self.success()
    }

    /// Diagnostic message; empty on success.
    #[must_use]
    pub fn error(&self) -> &str {
        self.failure.as_deref().unwrap_or_default()
    }

    /// Consume the outcome, returning the diagnostic message if it failed.
    #[must_use]
    pub fn into_error(self) -> Option<String> {
        self.failure
    }

    /// Convert into a standard [`Result`].
    ///
    /// # Errors
    ///
    /// Returns the diagnostic message when the outcome failed.
    pub fn into_result(self) -> Result<(), String> {
        self.failure.map_or(Ok(()), Err)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.failure {
            None => f.write_str("ok"),
            Some(message) => write!(f, "failed: {message}"),
        }
    }
}

impl<E: fmt::Display> From<Result<(), E>> for Outcome {
    fn from(result: Result<(), E>) -> Self {
        result.map_or_else(|err| Self::fail(err.to_string()), |()| Self::ok())
    }
}
