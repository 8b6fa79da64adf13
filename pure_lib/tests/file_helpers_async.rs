//! Integration tests for the async file helpers.

use anyhow::Result;
use pure_lib::{PureError, append_to_file_async, write_to_file_async};
use test_helpers::scratch::ScratchDir;

#[tokio::test]
async fn write_creates_missing_parents() -> Result<()> {
    let scratch = ScratchDir::new()?;
    let target = scratch.path("deep/er/out.json");
    let info = write_to_file_async("{}", &target).await?;
    assert_eq!(info.len(), 2);
    assert_eq!(scratch.read("deep/er/out.json")?, "{}");
    Ok(())
}

#[tokio::test]
async fn append_creates_then_extends() -> Result<()> {
    let scratch = ScratchDir::new()?;
    let target = scratch.path("logs/app.log");
    append_to_file_async("a", &target).await?;
    let info = append_to_file_async("bc", &target).await?;
    assert_eq!(info.len(), 3);
    assert_eq!(scratch.read("logs/app.log")?, "abc");
    Ok(())
}

#[tokio::test]
async fn rejects_paths_without_file_name() {
    let result = write_to_file_async("x", "/").await;
    assert!(matches!(result, Err(PureError::InvalidArgument { .. })));
}

#[cfg(unix)]
#[tokio::test]
async fn write_and_append_follow_symlinked_file_name() -> Result<()> {
    let scratch = ScratchDir::new()?;
    let real = scratch.seed("b/real.txt", "old")?;
    let link = scratch.link("a/link.txt", &real)?;
    let written = write_to_file_async("new-async", &link).await?;
    assert_eq!(written.len(), 9);
    let appended = append_to_file_async("!", &link).await?;
    assert_eq!(appended.len(), 10);
    assert_eq!(scratch.read("b/real.txt")?, "new-async!");
    Ok(())
}
