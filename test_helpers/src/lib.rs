//! Test helpers shared across crates in the workspace.
//!
//! - [`scratch`] provides temporary directory trees addressed with UTF-8
//!   paths.
//! - [`cwd`] serializes changes to the process working directory.

pub mod cwd;
pub mod scratch;
