//! Outcome types for expected failures.
//!
//! Three distinct shapes cover the ways an operation reports how it went:
//!
//! - [`Outcome`]: success or a diagnostic message.
//! - [`ValueOutcome`]: a value on success, a diagnostic message otherwise.
//! - [`TypedOutcome`]: a value on success, a typed error payload otherwise.
//!
//! The string-error shapes enforce their construction rule: a success never
//! carries an error message and a failure always carries one. The infallible
//! factories (`ok`, `fail`) cannot break the rule, while the fallible
//! boundary constructors (`from_parts`, `try_fail`) and deserialization
//! report violations as [`PureError`](crate::PureError) values.
//!
//! # Examples
//!
//! ```
//! use pure_lib::{Outcome, ValueOutcome};
//!
//! fn parse_port(raw: &str) -> ValueOutcome<u16> {
//!     raw.parse().map_or_else(
//!         |_| ValueOutcome::fail(format!("'{raw}' is not a port")),
//!         ValueOutcome::ok,
//!     )
//! }
//!
//! let port = parse_port("8080");
//! assert!(port.success());
//! assert_eq!(port.value(), Some(&8080));
//!
//! let bad = parse_port("http");
//! assert!(bad.is_failure());
//! assert_eq!(bad.error(), "'http' is not a port");
//!
//! let plain: Outcome = bad.into();
//! assert_eq!(plain.to_string(), "failed: 'http' is not a port");
//! ```

mod plain;
mod repr;
mod typed;
mod value;

pub use plain::Outcome;
pub use typed::TypedOutcome;
pub use value::ValueOutcome;

/// Message reported when a success is built with an error message.
pub(crate) const SUCCESS_WITH_ERROR: &str = "Successful result cannot have an error message.";
/// Message reported when a failure is built without an error message.
pub(crate) const FAILURE_WITHOUT_ERROR: &str = "Failed result should have an error message.";
/// Message reported when a value-carrying success is built without a value.
pub(crate) const SUCCESS_WITHOUT_VALUE: &str = "Successful result should carry a value.";
/// Message reported when a typed failure is built without an error payload.
pub(crate) const FAILURE_WITHOUT_PAYLOAD: &str = "Failed result should carry an error value.";
