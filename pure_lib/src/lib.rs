//! Small utilities shared across applications.
//!
//! - [`Outcome`], [`ValueOutcome`] and [`TypedOutcome`] report expected
//!   failures as values instead of panics.
//! - [`to_size`] and [`ByteSize`] render byte counts such as `1.4 MB`.
//! - [`serialize`] and [`deserialize`] wrap `serde_json` with indented output
//!   by default.
//! - [`write_to_file`] and [`append_to_file`] create missing parent
//!   directories before writing. Async forms are available with the `tokio`
//!   feature.
//! - [`cast_to`] performs checked downcasts of `dyn Any` values.
//!
//! Misuse of the helpers and failures of the JSON or filesystem layers are
//! reported as [`PureError`].

mod cast;
mod error;
pub mod fs;
pub mod json;
pub mod outcome;
mod result_ext;
pub mod size;

pub use cast::{cast_box, cast_to};
pub use error::{PureError, PureResult};
pub use fs::{FileInfo, append_to_file, write_to_file};
#[cfg(feature = "tokio")]
pub use fs::{append_to_file_async, write_to_file_async};
pub use json::{
    DeserializeExt, JsonOptions, SerializeExt, deserialize, serialize, serialize_with,
    try_serialize, try_serialize_with,
};
pub use outcome::{Outcome, TypedOutcome, ValueOutcome};
pub use result_ext::{IoResultExt, PureResultExt};
pub use size::{ByteSize, ToSize, UnitLabels, to_size, to_size_with};
