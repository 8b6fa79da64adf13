//! Write and append helpers for text files.
//!
//! Every helper creates missing parent directories before touching the file
//! and reports the file's size afterwards. A path without a directory
//! component resolves against the current working directory.

mod blocking;
#[cfg(feature = "tokio")]
mod nonblocking;

pub use blocking::{append_to_file, write_to_file};
#[cfg(feature = "tokio")]
pub use nonblocking::{append_to_file_async, write_to_file_async};

use camino::{Utf8Path, Utf8PathBuf};

use crate::{PureError, PureResult};

/// Description of a file after a write or append.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileInfo {
    path: Utf8PathBuf,
    len: u64,
}

impl FileInfo {
    pub(crate) const fn new(path: Utf8PathBuf, len: u64) -> Self {
        Self { path, len }
    }

    /// Path the helper was given.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// File size in bytes after the operation.
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.len
    }

    /// Whether the file is empty after the operation.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Consume the description, returning the path.
    #[must_use]
    pub fn into_path(self) -> Utf8PathBuf {
        self.path
    }
}

/// Return the parent directory of `path`, falling back to `"."` when the path
/// has no parent or the parent is empty.
fn parent_or_dot(path: &Utf8Path) -> &Utf8Path {
    path.parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."))
}

/// Split `path` into the directory to create and the file name to write.
///
/// # Errors
///
/// Returns [`PureError::InvalidArgument`] when `path` does not end in a file
/// name, for example `"/"` or `"logs/.."`.
fn split_target(path: &Utf8Path) -> PureResult<(&Utf8Path, &str)> {
    let file_name = path.file_name().ok_or_else(|| {
        PureError::invalid_argument("path", format!("'{path}' does not name a file"))
    })?;
    Ok((parent_or_dot(path), file_name))
}

#[cfg(test)]
mod tests {
    use camino::Utf8Path;
    use rstest::rstest;

    use super::split_target;

    #[rstest]
    #[case("notes.txt", ".", "notes.txt")]
    #[case("logs/app.log", "logs", "app.log")]
    #[case("/var/tmp/a/b.json", "/var/tmp/a", "b.json")]
    fn splits_parent_and_name(#[case] path: &str, #[case] parent: &str, #[case] name: &str) {
        let Ok((got_parent, got_name)) = split_target(Utf8Path::new(path)) else {
            panic!("expected '{path}' to split");
        };
        assert_eq!(got_parent, Utf8Path::new(parent));
        assert_eq!(got_name, name);
    }

    #[rstest]
    #[case("/")]
    #[case("logs/..")]
    #[case("")]
    fn rejects_paths_without_file_name(#[case] path: &str) {
        let Err(err) = split_target(Utf8Path::new(path)) else {
            panic!("expected '{path}' to be rejected");
        };
        assert!(err.is_invalid_argument());
    }
}
