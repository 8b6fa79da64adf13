//! Error types produced by the helpers.

mod constructors;
mod conversions;
mod types;

pub use types::PureError;

/// Result alias used throughout the crate.
pub type PureResult<T> = Result<T, PureError>;

#[cfg(test)]
mod tests;
