//! Serialized shapes of the outcome types.
//!
//! Outcomes travel as `{ "success": bool, "value": ..., "error": ... }`.
//! Deserialization goes through the same `from_parts` constructors as code
//! does, so an inconsistent document is rejected instead of producing an
//! outcome that breaks the construction rule.
//!
//! Payload fields are read as raw JSON first. Only the side selected by
//! `success` is decoded into its type; the other side is discarded, matching
//! what `from_parts` does with it.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{PureError, PureResult, PureResultExt};

use super::{Outcome, TypedOutcome, ValueOutcome};

/// Deserialize a field that is present in the document, keeping `null` as a
/// value rather than treating it as missing.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Decode a raw payload into `T`.
fn decode<T: DeserializeOwned>(raw: Option<Value>) -> PureResult<Option<T>> {
    raw.map(serde_json::from_value).transpose().into_pure()
}

/// Wire form of [`Outcome`].
#[derive(Serialize, Deserialize)]
pub struct OutcomeRepr {
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

impl From<Outcome> for OutcomeRepr {
    fn from(outcome: Outcome) -> Self {
        Self {
            success: outcome.success(),
            error: Some(outcome.into_error().unwrap_or_default()),
        }
    }
}

impl TryFrom<OutcomeRepr> for Outcome {
    type Error = PureError;

    fn try_from(repr: OutcomeRepr) -> Result<Self, Self::Error> {
        Self::from_parts(repr.success, repr.error)
    }
}

/// Serialized form of [`ValueOutcome`].
#[derive(Serialize)]
#[serde(bound(serialize = "T: Serialize"))]
pub struct ValueOutcomeRepr<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<T>,
    error: String,
}

impl<T> From<ValueOutcome<T>> for ValueOutcomeRepr<T> {
    fn from(outcome: ValueOutcome<T>) -> Self {
        let success = outcome.success();
        match outcome.into_result() {
            Ok(value) => Self {
                success,
                value: Some(value),
                error: String::new(),
            },
            Err(message) => Self {
                success,
                value: None,
                error: message,
            },
        }
    }
}

/// Document shape accepted for [`ValueOutcome`], before the value is decoded.
#[derive(Deserialize)]
pub struct ValueOutcomeDoc {
    success: bool,
    #[serde(default, deserialize_with = "present")]
    value: Option<Value>,
    #[serde(default)]
    error: Option<String>,
}

impl<T: DeserializeOwned> TryFrom<ValueOutcomeDoc> for ValueOutcome<T> {
    type Error = PureError;

    fn try_from(doc: ValueOutcomeDoc) -> Result<Self, Self::Error> {
        let value = if doc.success { decode(doc.value)? } else { None };
        Self::from_parts(doc.success, value, doc.error)
    }
}

/// Serialized form of [`TypedOutcome`].
#[derive(Serialize)]
#[serde(bound(serialize = "T: Serialize, E: Serialize"))]
pub struct TypedOutcomeRepr<T, E> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<E>,
}

impl<T, E> From<TypedOutcome<T, E>> for TypedOutcomeRepr<T, E> {
    fn from(outcome: TypedOutcome<T, E>) -> Self {
        match outcome.into_result() {
            Ok(value) => Self {
                success: true,
                value: Some(value),
                error: None,
            },
            Err(error) => Self {
                success: false,
                value: None,
                error: Some(error),
            },
        }
    }
}

/// Document shape accepted for [`TypedOutcome`], before either side is
/// decoded.
#[derive(Deserialize)]
pub struct TypedOutcomeDoc {
    success: bool,
    #[serde(default, deserialize_with = "present")]
    value: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    error: Option<Value>,
}

impl<T: DeserializeOwned, E: DeserializeOwned> TryFrom<TypedOutcomeDoc> for TypedOutcome<T, E> {
    type Error = PureError;

    fn try_from(doc: TypedOutcomeDoc) -> Result<Self, Self::Error> {
        if doc.success {
            Self::from_parts(true, decode(doc.value)?, None)
        } else {
            Self::from_parts(false, None, decode(doc.error)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use rstest::rstest;
    use serde_json::json;

    use crate::{Outcome, TypedOutcome, ValueOutcome};

    #[test]
    fn serializes_plain_outcomes() -> Result<()> {
        assert_eq!(
            serde_json::to_value(Outcome::ok())?,
            json!({ "success": true, "error": "" })
        );
        assert_eq!(
            serde_json::to_value(Outcome::fail("boom"))?,
            json!({ "success": false, "error": "boom" })
        );
        Ok(())
    }

    #[rstest]
    #[case(
        json!({ "success": true, "error": "boom" }),
        "Successful result cannot have an error message."
    )]
    #[case(
        json!({ "success": false }),
        "Failed result should have an error message."
    )]
    #[case(
        json!({ "success": false, "error": null }),
        "Failed result should have an error message."
    )]
    fn rejects_inconsistent_plain_documents(
        #[case] doc: serde_json::Value,
        #[case] message: &str,
    ) {
        let Err(err) = serde_json::from_value::<Outcome>(doc) else {
            panic!("expected document to be rejected");
        };
        assert!(err.to_string().contains(message), "unexpected error: {err}");
    }

    #[test]
    fn accepts_success_without_error_field() -> Result<()> {
        let outcome: Outcome = serde_json::from_value(json!({ "success": true }))?;
        assert!(outcome.success());
        Ok(())
    }

    #[test]
    fn keeps_null_values_of_successes() -> Result<()> {
        let outcome = ValueOutcome::<Option<String>>::ok(None);
        let doc = serde_json::to_value(&outcome)?;
        assert_eq!(doc, json!({ "success": true, "value": null, "error": "" }));
        let back: ValueOutcome<Option<String>> = serde_json::from_value(doc)?;
        assert_eq!(back, outcome);
        Ok(())
    }

    #[test]
    fn omits_value_of_failures() -> Result<()> {
        let doc = serde_json::to_value(ValueOutcome::<u32>::fail("nope"))?;
        assert_eq!(doc, json!({ "success": false, "error": "nope" }));
        let back: ValueOutcome<u32> = serde_json::from_value(doc)?;
        assert_eq!(back.error(), "nope");
        Ok(())
    }

    #[test]
    fn rejects_value_success_without_value() {
        let parsed = serde_json::from_value::<ValueOutcome<u32>>(json!({ "success": true }));
        assert!(parsed.is_err());
    }

    #[test]
    fn round_trips_typed_failures() -> Result<()> {
        let outcome = TypedOutcome::<String, u16>::fail(404);
        let doc = serde_json::to_value(&outcome)?;
        assert_eq!(doc, json!({ "success": false, "error": 404 }));
        let back: TypedOutcome<String, u16> = serde_json::from_value(doc)?;
        assert_eq!(back.error(), Some(&404));
        Ok(())
    }

    #[test]
    fn rejects_typed_failure_without_payload() {
        let parsed =
            serde_json::from_value::<TypedOutcome<String, u16>>(json!({ "success": false }));
        assert!(parsed.is_err());
    }

    #[rstest]
    #[case(json!({ "success": false, "value": null, "error": "x" }))]
    #[case(json!({ "success": false, "value": 17, "error": "x" }))]
    fn ignores_value_of_failures(#[case] doc: serde_json::Value) -> Result<()> {
        let outcome: ValueOutcome<String> = serde_json::from_value(doc)?;
        assert!(outcome.is_failure());
        assert_eq!(outcome.error(), "x");
        Ok(())
    }

    #[test]
    fn reports_undecodable_value_of_successes() {
        let parsed = serde_json::from_value::<ValueOutcome<String>>(
            json!({ "success": true, "value": 17, "error": "" }),
        );
        let Err(err) = parsed else {
            panic!("expected a number to be refused as a String value");
        };
        assert!(err.to_string().contains("JSON error"), "unexpected error: {err}");
    }

    #[rstest]
    #[case(json!({ "success": true, "value": 7, "error": null }), Some(7), None)]
    #[case(json!({ "success": true, "value": 7, "error": "oops" }), Some(7), None)]
    #[case(json!({ "success": false, "value": null, "error": 404 }), None, Some(404))]
    #[case(json!({ "success": false, "value": "x", "error": 500 }), None, Some(500))]
    fn ignores_inactive_side_of_typed_documents(
        #[case] doc: serde_json::Value,
        #[case] value: Option<u8>,
        #[case] error: Option<u16>,
    ) -> Result<()> {
        let outcome: TypedOutcome<u8, u16> = serde_json::from_value(doc)?;
        assert_eq!(outcome.value().copied(), value);
        assert_eq!(outcome.error().copied(), error);
        Ok(())
    }
}
