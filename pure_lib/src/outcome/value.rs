//! Outcome carrying a value on success.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{PureError, PureResult};

use super::repr::{ValueOutcomeDoc, ValueOutcomeRepr};
use super::{FAILURE_WITHOUT_ERROR, Outcome, SUCCESS_WITH_ERROR, SUCCESS_WITHOUT_VALUE};

/// A value on success, or a diagnostic message on failure.
///
/// The value may be the type's own "empty" representative, for example
/// `ValueOutcome::<Option<String>>::ok(None)` is a success.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize + Clone",
    deserialize = "T: DeserializeOwned"
))]
#[serde(try_from = "ValueOutcomeDoc", into = "ValueOutcomeRepr<T>")]
#[must_use]
pub struct ValueOutcome<T> {
    inner: Result<T, String>,
}

impl<T> ValueOutcome<T> {
    /// Successful outcome carrying `value`.
    pub const fn ok(value: T) -> Self {
        Self { inner: Ok(value) }
    }

    /// Failed outcome described by `message`; no value is stored.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            inner: Err(message.into()),
        }
    }

    /// Failed outcome from a message that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`PureError::InvalidArgument`] when `message` is `None`.
    pub fn try_fail<S: Into<String>>(message: Option<S>) -> PureResult<Self> {
        message
            .map(Self::fail)
            .ok_or_else(|| PureError::invalid_argument("message", "must not be null"))
    }

    /// Build an outcome from loose parts, enforcing the construction rule.
    ///
    /// A value supplied alongside a failure is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`PureError::InvalidOperation`] when a success carries a
    /// non-empty error or no value, or when a failure has no error message.
    pub fn from_parts(success: bool, value: Option<T>, error: Option<String>) -> PureResult<Self> {
        if success {
            if error.is_some_and(|message| !message.is_empty()) {
                return Err(PureError::invalid_operation(SUCCESS_WITH_ERROR));
            }
            return value
                .map(Self::ok)
                .ok_or_else(|| PureError::invalid_operation(SUCCESS_WITHOUT_VALUE));
        }
        error
            .map(Self::fail)
            .ok_or_else(|| PureError::invalid_operation(FAILURE_WITHOUT_ERROR))
    }

    /// Whether the operation succeeded.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.inner.is_ok()
    }

    /// Whether the operation failed.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        !self.success()
    }

    /// The value, present only on success.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match &self.inner {
            Ok(value) => Some(value),
            Err(_) => None,
        }
    }

    /// Diagnostic message; empty on success.
    #[must_use]
    pub fn error(&self) -> &str {
        self.inner.as_ref().err().map_or("", String::as_str)
    }

    /// Consume the outcome, returning the value if it succeeded.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        self.inner.ok()
    }

    /// Consume the outcome, returning the diagnostic message if it failed.
    #[must_use]
    pub fn into_error(self) -> Option<String> {
        self.inner.err()
    }

    /// Transform the value of a success, keeping failures untouched.
    pub fn map<U, F>(self, f: F) -> ValueOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        ValueOutcome {
            inner: self.inner.map(f),
        }
    }

    /// Convert into a standard [`Result`].
    ///
    /// # Errors
    ///
    /// Returns the diagnostic message when the outcome failed.
    pub fn into_result(self) -> Result<T, String> {
        self.inner
    }
}

impl<T> fmt::Display for ValueOutcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Ok(_) => f.write_str("ok"),
            Err(message) => write!(f, "failed: {message}"),
        }
    }
}

impl<T> From<ValueOutcome<T>> for Outcome {
    fn from(outcome: ValueOutcome<T>) -> Self {
        outcome.inner.map_or_else(Self::fail, |_| Self::ok())
    }
}

impl<T, E: fmt::Display> From<Result<T, E>> for ValueOutcome<T> {
    fn from(result: Result<T, E>) -> Self {
        Self {
            inner: result.map_err(|err| err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::ValueOutcome;
    use crate::Outcome;

    #[rstest]
    #[case(ValueOutcome::ok(Some(String::new())), true, Some(Some(String::new())), "")]
    #[case(ValueOutcome::ok(None), true, Some(None), "")]
    #[case(ValueOutcome::fail("error"), false, None, "error")]
    fn reports_value_and_error(
        #[case] outcome: ValueOutcome<Option<String>>,
        #[case] expected_success: bool,
        #[case] expected_value: Option<Option<String>>,
        #[case] expected_error: &str,
    ) {
        assert_eq!(outcome.success(), expected_success);
        assert_eq!(outcome.is_failure(), !expected_success);
        assert_eq!(outcome.value(), expected_value.as_ref());
        assert_eq!(outcome.error(), expected_error);
    }

    #[test]
    fn from_parts_drops_value_on_failure() {
        let Ok(outcome) = ValueOutcome::from_parts(false, Some(7), Some("late".to_owned())) else {
            panic!("expected failure parts to build");
        };
        assert_eq!(outcome.value(), None);
        assert_eq!(outcome.error(), "late");
    }

    #[rstest]
    #[case(true, Some(1), Some("boom".to_owned()))]
    #[case(true, None, None)]
    #[case(false, Some(1), None)]
    fn from_parts_rejects_inconsistent_parts(
        #[case] success: bool,
        #[case] value: Option<i32>,
        #[case] error: Option<String>,
    ) {
        let Err(err) = ValueOutcome::from_parts(success, value, error) else {
            panic!("expected inconsistent parts to be rejected");
        };
        assert!(err.is_invalid_operation());
    }

    #[test]
    fn try_fail_rejects_missing_message() {
        assert!(ValueOutcome::<u8>::try_fail(None::<&str>).is_err());
        let Ok(outcome) = ValueOutcome::<u8>::try_fail(Some("nope")) else {
            panic!("expected message to be accepted");
        };
        assert_eq!(outcome.error(), "nope");
    }

    #[test]
    fn map_only_touches_successes() {
        assert_eq!(ValueOutcome::ok(2).map(|n| n * 10).into_value(), Some(20));
        let failed = ValueOutcome::<i32>::fail("nope").map(|n| n * 10);
        assert_eq!(failed.into_error().as_deref(), Some("nope"));
    }

    #[test]
    fn narrows_to_plain_outcome() {
        let ok: Outcome = ValueOutcome::ok("value").into();
        assert!(ok.success());
        let failed: Outcome = ValueOutcome::<&str>::fail("gone").into();
        assert_eq!(failed.error(), "gone");
    }

    #[test]
    fn converts_from_std_result() {
        let parsed: ValueOutcome<u16> = "80".parse::<u16>().into();
        assert_eq!(parsed.value(), Some(&80));
        let rejected: ValueOutcome<u16> = "http".parse::<u16>().into();
        assert_eq!(rejected.error(), "invalid digit found in string");
    }
}
