//! JSON encoding and decoding helpers.
//!
//! Serialization is indented by default, matching the layout people expect
//! when the output lands in a file. [`JsonOptions`] selects compact output or
//! a different indent width.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::{PureError, PureResult, PureResultExt};

const DEFAULT_INDENT: usize = 2;

/// Output layout for [`serialize_with`].
///
/// The struct is itself deserializable so it can sit inside an
/// application's own configuration.
///
/// # Examples
///
/// ```
/// use pure_lib::JsonOptions;
///
/// let options: JsonOptions = serde_json::from_str(r#"{ "indent": 4 }"#)?;
/// assert_eq!(options, JsonOptions::indented(4));
/// assert_eq!(JsonOptions::default(), JsonOptions::indented(2));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonOptions {
    /// Spaces per indentation level; `None` produces compact output.
    pub indent: Option<usize>,
}

impl JsonOptions {
    /// Single-line output without whitespace.
    #[must_use]
    pub const fn compact() -> Self {
        Self { indent: None }
    }

    /// Multi-line output indented by `width` spaces per level.
    #[must_use]
    pub const fn indented(width: usize) -> Self {
        Self {
            indent: Some(width),
        }
    }
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self::indented(DEFAULT_INDENT)
    }
}

/// Serialize `value` as indented JSON.
///
/// # Errors
///
/// Returns [`PureError::Json`](crate::PureError::Json) when `value` cannot be
/// represented as JSON, for example a map with non-string keys.
pub fn serialize<T: Serialize + ?Sized>(value: &T) -> PureResult<String> {
    serialize_with(value, &JsonOptions::default())
}

/// Serialize `value` using `options`.
///
/// # Errors
///
/// Returns [`PureError::Json`](crate::PureError::Json) when serialization
/// fails.
pub fn serialize_with<T: Serialize + ?Sized>(
    value: &T,
    options: &JsonOptions,
) -> PureResult<String> {
    let Some(width) = options.indent else {
        return serde_json::to_string(value).into_pure();
    };
    let indent = " ".repeat(width);
    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut serializer).into_pure()?;
    String::from_utf8(buffer).map_err(|err| {
        PureError::invalid_operation(format!("serialized JSON is not UTF-8: {err}"))
    })
}

/// Serialize `value` as indented JSON, returning `None` on failure.
#[must_use]
pub fn try_serialize<T: Serialize + ?Sized>(value: &T) -> Option<String> {
    try_serialize_with(value, &JsonOptions::default())
}

/// Serialize `value` using `options`, returning `None` on failure.
#[must_use]
pub fn try_serialize_with<T: Serialize + ?Sized>(
    value: &T,
    options: &JsonOptions,
) -> Option<String> {
    serialize_with(value, options)
        .inspect_err(|err| tracing::debug!(error = %err, "JSON serialization failed"))
        .ok()
}

/// Deserialize a `T` from `source`.
///
/// # Errors
///
/// Returns [`PureError::Json`](crate::PureError::Json) when `source` is not
/// valid JSON or does not match the shape of `T`.
pub fn deserialize<T: DeserializeOwned>(source: &str) -> PureResult<T> {
    serde_json::from_str(source).into_pure()
}

/// Method-call form of the serialization helpers.
///
/// ```
/// use pure_lib::{JsonOptions, SerializeExt};
///
/// let json = vec![1, 2].serialize_json_with(&JsonOptions::compact())?;
/// assert_eq!(json, "[1,2]");
/// # Ok::<(), pure_lib::PureError>(())
/// ```
pub trait SerializeExt: Serialize {
    /// See [`serialize`].
    ///
    /// # Errors
    ///
    /// Returns [`PureError::Json`](crate::PureError::Json) when serialization
    /// fails.
    fn serialize_json(&self) -> PureResult<String> {
        serialize(self)
    }

    /// See [`serialize_with`].
    ///
    /// # Errors
    ///
    /// Returns [`PureError::Json`](crate::PureError::Json) when serialization
    /// fails.
    fn serialize_json_with(&self, options: &JsonOptions) -> PureResult<String> {
        serialize_with(self, options)
    }

    /// See [`try_serialize`].
    fn try_serialize_json(&self) -> Option<String> {
        try_serialize(self)
    }
}

impl<T: Serialize + ?Sized> SerializeExt for T {}

/// Method-call form of [`deserialize`].
pub trait DeserializeExt {
    /// Deserialize a `T` from `self`.
    ///
    /// # Errors
    ///
    /// Returns [`PureError::Json`](crate::PureError::Json) when decoding
    /// fails.
    fn deserialize_json<T: DeserializeOwned>(&self) -> PureResult<T>;
}

impl DeserializeExt for str {
    fn deserialize_json<T: DeserializeOwned>(&self) -> PureResult<T> {
        deserialize(self)
    }
}
