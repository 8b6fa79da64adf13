//! Extensions for mapping errors to `PureResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| PureError::…(e))` patterns
//! when converting external error types into the crate’s `PureResult<T>`
//! alias.
//!
//! # Examples
//!
//! ```
//! use pure_lib::{PureResult, PureResultExt};
//!
//! fn to_value() -> PureResult<serde_json::Value> {
//!     // serde_json::Error implements Into<PureError>
//!     serde_json::to_value(42).into_pure()
//! }
//! # assert!(to_value().is_ok());
//! ```

use camino::Utf8Path;

use crate::{PureError, PureResult};

/// Generic extension for mapping any `Result<T, E>` with `E: Into<PureError>`
/// into a `PureResult<T>`.
pub trait PureResultExt<T, E> {
    /// Convert `Result<T, E>` into `PureResult<T>` using `Into<PureError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into [`PureError`].
    fn into_pure(self) -> PureResult<T>;
}

impl<T, E> PureResultExt<T, E> for Result<T, E>
where
    E: Into<PureError>,
{
    fn into_pure(self) -> PureResult<T> {
        self.map_err(Into::into)
    }
}

/// Extension tailored to attaching a path to `std::io::Error` failures.
pub trait IoResultExt<T> {
    /// Convert `std::io::Result<T>` into `PureResult<T>` as a
    /// [`PureError::Io`] naming `path`.
    ///
    /// # Errors
    ///
    /// Returns a `PureError::Io` when the input is `Err`.
    fn with_path(self, path: &Utf8Path) -> PureResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: &Utf8Path) -> PureResult<T> {
        self.map_err(|e| PureError::io(path, e))
    }
}
