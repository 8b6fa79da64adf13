//! Outcome whose failure is a typed payload rather than a message.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{PureError, PureResult};

use super::repr::{TypedOutcomeDoc, TypedOutcomeRepr};
use super::{FAILURE_WITHOUT_PAYLOAD, Outcome, SUCCESS_WITHOUT_VALUE, ValueOutcome};

/// A value on success, or an error payload of type `E` on failure.
///
/// Unlike the string-error outcomes there is no message rule to enforce:
/// `E` is whatever the caller uses to describe failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize + Clone, E: Serialize + Clone",
    deserialize = "T: DeserializeOwned, E: DeserializeOwned"
))]
#[serde(try_from = "TypedOutcomeDoc", into = "TypedOutcomeRepr<T, E>")]
#[must_use]
pub struct TypedOutcome<T, E> {
    inner: Result<T, E>,
}

impl<T, E> TypedOutcome<T, E> {
    /// Successful outcome carrying `value`.
    pub const fn ok(value: T) -> Self {
        Self { inner: Ok(value) }
    }

    /// Failed outcome carrying the `error` payload.
    pub const fn fail(error: E) -> Self {
        Self { inner: Err(error) }
    }

    /// Build an outcome from loose parts.
    ///
    /// The side that does not match `success` is discarded: an error payload
    /// supplied with a success, or a value supplied with a failure.
    ///
    /// # Errors
    ///
    /// Returns [`PureError::InvalidOperation`] when a success has no value or
    /// a failure has no error payload.
    pub fn from_parts(success: bool, value: Option<T>, error: Option<E>) -> PureResult<Self> {
        if success {
            value
                .map(Self::ok)
                .ok_or_else(|| PureError::invalid_operation(SUCCESS_WITHOUT_VALUE))
        } else {
            error
                .map(Self::fail)
                .ok_or_else(|| PureError::invalid_operation(FAILURE_WITHOUT_PAYLOAD))
        }
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

    /// The error payload, present only on failure.
    #[must_use]
    pub const fn error(&self) -> Option<&E> {
        match &self.inner {
            Ok(_) => None,
            Err(error) => Some(error),
        }
    }

    /// Consume the outcome, returning the value if it succeeded.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        self.inner.ok()
    }

    /// Consume the outcome, returning the error payload if it failed.
    #[must_use]
    pub fn into_error(self) -> Option<E> {
        self.inner.err()
    }

    /// Transform the value of a success.
    pub fn map<U, F>(self, f: F) -> TypedOutcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        TypedOutcome {
            inner: self.inner.map(f),
        }
    }

    /// Transform the error payload of a failure.
    pub fn map_err<G, F>(self, f: F) -> TypedOutcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        TypedOutcome {
            inner: self.inner.map_err(f),
        }
    }

    /// Borrow as a standard [`Result`].
    ///
    /// # Errors
    ///
    /// Returns the error payload when the outcome failed.
    pub const fn as_result(&self) -> Result<&T, &E> {
        self.inner.as_ref()
    }

    /// Convert into a standard [`Result`].
    ///
    /// # Errors
    ///
    /// Returns the error payload when the outcome failed.
    pub fn into_result(self) -> Result<T, E> {
        self.inner
    }
}

impl<T, E> From<Result<T, E>> for TypedOutcome<T, E> {
    fn from(inner: Result<T, E>) -> Self {
        Self { inner }
    }
}

impl<T, E> From<TypedOutcome<T, E>> for Result<T, E> {
    fn from(outcome: TypedOutcome<T, E>) -> Self {
        outcome.inner
    }
}

impl<T, E: fmt::Display> From<TypedOutcome<T, E>> for ValueOutcome<T> {
    fn from(outcome: TypedOutcome<T, E>) -> Self {
        outcome.inner.into()
    }
}

impl<T, E: fmt::Display> From<TypedOutcome<T, E>> for Outcome {
    fn from(outcome: TypedOutcome<T, E>) -> Self {
        outcome
            .inner
            .map_or_else(|err| Self::fail(err.to_string()), |_| Self::ok())
    }
}
