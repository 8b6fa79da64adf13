//! Helpers for safely mutating the process working directory in tests.
//!
//! The working directory is process-global, so every change goes through one
//! mutex. The returned guard holds the lock and restores the original
//! directory on drop.
//!
//! # Examples
//!
//! ```no_run
//! use pure_lib_test_helpers::cwd;
//!
//! let guard = cwd::set_dir("/tmp/test-dir")?;
//! // Relative paths now resolve under `/tmp/test-dir`.
//! guard.restore()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::sync::LazyLock;

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use parking_lot::{Mutex, MutexGuard};

static CWD_MUTEX: LazyLock<Mutex<()>> = LazyLock::new(Mutex::default);

/// RAII guard that restores the working directory on drop.
#[must_use = "dropping restores the prior working directory"]
pub struct CwdGuard {
    original: Utf8PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl CwdGuard {
    /// Directory that will be restored.
    #[must_use]
    pub fn original(&self) -> &Utf8Path {
        &self.original
    }

    /// Restores the original working directory now, reporting failures.
    ///
    /// # Errors
    ///
    /// Returns an error if `set_current_dir` fails.
    pub fn restore(&self) -> std::io::Result<()> {
        std::env::set_current_dir(&self.original)
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        // Best effort; call `restore()` first to observe failures.
        let _unused = std::env::set_current_dir(&self.original);
    }
}

/// Changes the working directory to `path` until the guard is dropped.
///
/// The original directory is captured and checked for UTF-8 before the
/// change, so a conversion failure never leaves the process elsewhere.
///
/// # Errors
///
/// Returns an error if the current directory cannot be read, is not valid
/// UTF-8, or `path` cannot be entered.
pub fn set_dir(path: impl AsRef<Utf8Path>) -> Result<CwdGuard> {
    let lock = CWD_MUTEX.lock();
    let current = std::env::current_dir().context("read current dir")?;
    let original = Utf8PathBuf::from_path_buf(current)
        .map_err(|non_utf8| anyhow!("cwd is not valid UTF-8: {}", non_utf8.display()))?;
    std::env::set_current_dir(path.as_ref()).context("set current dir")?;
    Ok(CwdGuard {
        original,
        _lock: lock,
    })
}
