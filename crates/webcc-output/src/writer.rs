//! Per-component artifact writer.

use std::path::{Path, PathBuf};

use webcc_adapters::EmittedArtifact;

use crate::sink::{FsSink, TextSink};

/// Directory under the output root holding one directory per component.
pub const COMPONENTS_DIR: &str = "components";

/// Errors that can occur while writing artifacts.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Paths written for one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifact {
    /// Component directory
    pub dir: PathBuf,

    /// Component source file
    pub component: PathBuf,

    /// Stylesheet, if one was written
    pub styles: Option<PathBuf>,

    /// Guarded client script, if one was written
    pub script: Option<PathBuf>,
}

/// Writes emitted artifacts under `<root>/components/<Identifier>/`.
///
/// Writes are best-effort: a failed write does not remove files written
/// earlier in the same call.
#[derive(Debug, Default, Clone)]
pub struct ArtifactWriter<S = FsSink> {
    sink: S,
}

impl ArtifactWriter<FsSink> {
    /// Create a writer backed by the local filesystem.
    pub fn new() -> Self {
        Self { sink: FsSink }
    }
}

impl<S: TextSink> ArtifactWriter<S> {
    /// Create a writer over a custom sink.
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    /// Directory a component is written to.
    pub fn component_dir(output_root: &Path, identifier: &str) -> PathBuf {
        output_root.join(COMPONENTS_DIR).join(identifier)
    }

    /// Write an artifact.
    ///
    /// The directory is created first; nothing is written if that fails.
    /// The component source follows, then the stylesheet and script
    /// concurrently.
    pub async fn write(
        &self,
        artifact: &EmittedArtifact,
        output_root: &Path,
    ) -> Result<WrittenArtifact, WriteError> {
        let dir = Self::component_dir(output_root, &artifact.identifier);

        self.sink
            .create_dir_all(&dir)
            .await
            .map_err(|source| WriteError::CreateDir {
                path: dir.clone(),
                source,
            })?;

        let component = dir.join(artifact.files.component);
        self.write_file(&component, &artifact.source).await?;

        let styles = self.write_optional(&dir, artifact.files.styles, artifact.styles.as_deref());
        let script = self.write_optional(&dir, artifact.files.script, artifact.script.as_deref());
        let (styles, script) = tokio::try_join!(styles, script)?;

        tracing::debug!("Wrote {} to {}", artifact.identifier, dir.display());

        Ok(WrittenArtifact {
            dir,
            component,
            styles,
            script,
        })
    }

    async fn write_optional(
        &self,
        dir: &Path,
        file_name: &str,
        contents: Option<&str>,
    ) -> Result<Option<PathBuf>, WriteError> {
        let Some(contents) = contents else {
            return Ok(None);
        };

        let path = dir.join(file_name);
        self.write_file(&path, contents).await?;
        Ok(Some(path))
    }

    async fn write_file(&self, path: &Path, contents: &str) -> Result<(), WriteError> {
        self.sink
            .write_text(path, contents)
            .await
            .map_err(|source| WriteError::WriteFile {
                path: path.to_path_buf(),
                source,
            })
    }
}
