//! Temporary directory trees for filesystem tests.
//!
//! # Examples
//!
//! ```
//! use pure_lib_test_helpers::scratch::ScratchDir;
//!
//! let scratch = ScratchDir::new()?;
//! let file = scratch.path("nested/notes.txt");
//! assert!(file.starts_with(scratch.root()));
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Temporary directory removed when dropped.
pub struct ScratchDir {
    root: Utf8PathBuf,
    _dir: TempDir,
}

impl ScratchDir {
    /// Creates an empty temporary directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or its path is not
    /// valid UTF-8.
    pub fn new() -> Result<Self> {
        let dir = TempDir::new().context("create scratch directory")?;
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .map_err(|path| anyhow!("scratch path is not valid UTF-8: {}", path.display()))?;
        Ok(Self { root, _dir: dir })
    }

    /// Root of the temporary tree.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Path of `relative` inside the tree. Nothing is created.
    #[must_use]
    pub fn path(&self, relative: &str) -> Utf8PathBuf {
        self.root.join(relative)
    }

    /// Reads the file at `relative` as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn read(&self, relative: &str) -> Result<String> {
        let path = self.path(relative);
        std::fs::read_to_string(&path).with_context(|| format!("read {path}"))
    }

    /// Writes `contents` to `relative`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or the file cannot be written.
    pub fn seed(&self, relative: &str, contents: &str) -> Result<Utf8PathBuf> {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("create {parent}"))?;
        }
        std::fs::write(&path, contents).with_context(|| format!("write {path}"))?;
        Ok(path)
    }

    /// Creates a symlink at `relative` pointing to `target`, creating parent
    /// directories.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or the link cannot be created.
    #[cfg(unix)]
    pub fn link(&self, relative: &str, target: &Utf8Path) -> Result<Utf8PathBuf> {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("create {parent}"))?;
        }
        std::os::unix::fs::symlink(target, &path)
            .with_context(|| format!("link {path} -> {target}"))?;
        Ok(path)
    }
}
