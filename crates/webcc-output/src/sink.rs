//! Text file sinks the artifact writer persists through.

use std::future::Future;
use std::io;
use std::path::Path;

/// Capability to create directories and write text files.
pub trait TextSink: Send + Sync {
    /// Create a directory and all missing ancestors. Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> impl Future<Output = io::Result<()>> + Send;

    /// Write a text file, replacing any existing content.
    fn write_text(&self, path: &Path, contents: &str) -> impl Future<Output = io::Result<()>> + Send;
}

/// Sink backed by the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSink;

impl TextSink for FsSink {
    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        tokio::fs::create_dir_all(path).await
    }

    async fn write_text(&self, path: &Path, contents: &str) -> io::Result<()> {
        tokio::fs::write(path, contents).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn creates_directories_idempotently() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("a/b/c");

        FsSink.create_dir_all(&dir).await.unwrap();
        FsSink.create_dir_all(&dir).await.unwrap();

        assert!(dir.is_dir());
    }

    #[tokio::test]
    async fn overwrites_files() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("index.css");

        FsSink.write_text(&file, "a {}").await.unwrap();
        FsSink.write_text(&file, "b {}").await.unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), "b {}");
    }
}
