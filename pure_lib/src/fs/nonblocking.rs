//! Async variants of the file helpers, running on `tokio`.

use camino::Utf8Path;
use tokio::io::AsyncWriteExt;

use crate::{IoResultExt, PureResult};

use super::{FileInfo, split_target};

async fn ensure_parent(path: &Utf8Path) -> PureResult<()> {
    let (parent, _) = split_target(path)?;
    tokio::fs::create_dir_all(parent).await.with_path(parent)?;
    tracing::trace!(dir = %parent, "ensured parent directory");
    Ok(())
}

/// Async form of [`write_to_file`](super::write_to_file).
///
/// # Errors
///
/// Returns [`PureError::InvalidArgument`](crate::PureError::InvalidArgument)
/// when `path` does not name a file, and
/// [`PureError::Io`](crate::PureError::Io) when a directory cannot be created
/// or the file cannot be written.
pub async fn write_to_file_async(
    contents: &str,
    path: impl AsRef<Utf8Path>,
) -> PureResult<FileInfo> {
    let target = path.as_ref();
    ensure_parent(target).await?;
    tokio::fs::write(target, contents).await.with_path(target)?;
    let len = tokio::fs::metadata(target).await.with_path(target)?.len();
    tracing::debug!(path = %target, bytes = contents.len(), "wrote file");
    Ok(FileInfo::new(target.to_path_buf(), len))
}

/// Async form of [`append_to_file`](super::append_to_file).
///
/// # Errors
///
/// Returns [`PureError::InvalidArgument`](crate::PureError::InvalidArgument)
/// when `path` does not name a file, and
/// [`PureError::Io`](crate::PureError::Io) when a directory cannot be created
/// or the file cannot be opened or written.
pub async fn append_to_file_async(
    contents: &str,
    path: impl AsRef<Utf8Path>,
) -> PureResult<FileInfo> {
    let target = path.as_ref();
    ensure_parent(target).await?;
    let mut file = tokio::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(target)
        .await
        .with_path(target)?;
    file.write_all(contents.as_bytes()).await.with_path(target)?;
    file.flush().await.with_path(target)?;
    let len = file.metadata().await.with_path(target)?.len();
    tracing::debug!(path = %target, bytes = contents.len(), "appended to file");
    Ok(FileInfo::new(target.to_path_buf(), len))
}
