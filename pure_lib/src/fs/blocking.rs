//! Blocking file helpers backed by `cap-std`.

use std::io::Write;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, File, OpenOptions};

use crate::{IoResultExt, PureResult};

use super::{FileInfo, split_target};

/// Create the parent directory of `path` if needed, then open `path` itself
/// with `options`.
///
/// The file is opened through its full ambient path, so a file name that is
/// a symlink is followed wherever it points.
fn open_in_created_parent(path: &Utf8Path, options: &OpenOptions) -> PureResult<File> {
    let (parent, _) = split_target(path)?;
    Dir::create_ambient_dir_all(parent, ambient_authority()).with_path(parent)?;
    tracing::trace!(dir = %parent, "ensured parent directory");
    File::open_ambient_with(path, options, ambient_authority()).with_path(path)
}

/// Write `contents` through `options` and report the resulting file size.
fn write_with(path: &Utf8Path, contents: &str, options: &OpenOptions) -> PureResult<FileInfo> {
    let mut file = open_in_created_parent(path, options)?;
    file.write_all(contents.as_bytes()).with_path(path)?;
    file.flush().with_path(path)?;
    let len = file.metadata().with_path(path)?.len();
    Ok(FileInfo::new(path.to_path_buf(), len))
}

/// Write `contents` to `path`, replacing any existing contents.
///
/// Missing parent directories are created first.
///
/// # Errors
///
/// Returns [`PureError::InvalidArgument`](crate::PureError::InvalidArgument)
/// when `path` does not name a file, and
/// [`PureError::Io`](crate::PureError::Io) when a directory cannot be created
/// or the file cannot be written.
///
/// # Examples
///
/// ```no_run
/// use pure_lib::write_to_file;
///
/// let info = write_to_file("hello", "out/greeting.txt")?;
/// assert_eq!(info.len(), 5);
/// # Ok::<(), pure_lib::PureError>(())
/// ```
pub fn write_to_file(contents: &str, path: impl AsRef<Utf8Path>) -> PureResult<FileInfo> {
    let target = path.as_ref();
    let info = write_with(
        target,
        contents,
        OpenOptions::new().write(true).create(true).truncate(true),
    )?;
    tracing::debug!(path = %target, bytes = contents.len(), "wrote file");
    Ok(info)
}

/// Append `contents` to `path`, creating the file when it is missing.
///
/// Missing parent directories are created first.
///
/// # Errors
///
/// Returns [`PureError::InvalidArgument`](crate::PureError::InvalidArgument)
/// when `path` does not name a file, and
/// [`PureError::Io`](crate::PureError::Io) when a directory cannot be created
/// or the file cannot be opened or written.
pub fn append_to_file(contents: &str, path: impl AsRef<Utf8Path>) -> PureResult<FileInfo> {
    let target = path.as_ref();
    let info = write_with(target, contents, OpenOptions::new().append(true).create(true))?;
    tracing::debug!(path = %target, bytes = contents.len(), "appended to file");
    Ok(info)
}
