use std::path::{Path, PathBuf};

use crate::foundation::error::{ImgAnimError, ImgAnimResult};

/// Filename of the exported snippet.
pub const OUTPUT_FILE_NAME: &str = "output.html";
/// MIME type of the exported snippet.
pub const HTML_MIME: &str = "text/html";

/// Named bytes handed to an [`ArtifactSink`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// `output.html` / `text/html` wrapping `html`.
    pub fn html(html: impl Into<String>) -> Self {
        Self {
            file_name: OUTPUT_FILE_NAME.to_string(),
            mime: HTML_MIME.to_string(),
            bytes: html.into().into_bytes(),
        }
    }
}

/// Destination for exported artifacts.
pub trait ArtifactSink {
    /// Emit one artifact under its `file_name`.
    fn emit(&mut self, artifact: &Artifact) -> ImgAnimResult<()>;
}

/// Writes artifacts into a directory.
///
/// Each write goes to a staging file next to the target and is renamed into place, so a reader
/// never observes a half-written `output.html`. An existing file is replaced.
#[derive(Clone, Debug)]
pub struct FsSink {
    dir: PathBuf,
}

impl FsSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Final path an artifact named `file_name` lands at.
    pub fn target_path(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }
}

/// Staging file removed on drop unless it was renamed into place.
struct StagingFile {
    path: PathBuf,
    committed: bool,
}

impl StagingFile {
    fn create(path: PathBuf, bytes: &[u8]) -> ImgAnimResult<Self> {
        let staging = Self {
            path,
            committed: false,
        };
        std::fs::write(&staging.path, bytes).map_err(|e| {
            ImgAnimError::export(format!("write '{}': {e}", staging.path.display()))
        })?;
        Ok(staging)
    }

    fn commit(mut self, target: &Path) -> ImgAnimResult<()> {
        std::fs::rename(&self.path, target).map_err(|e| {
            ImgAnimError::export(format!(
                "rename '{}' -> '{}': {e}",
                self.path.display(),
                target.display()
            ))
        })?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for StagingFile {
    fn drop(&mut self) {
        if !self.committed {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

impl ArtifactSink for FsSink {
    #[tracing::instrument(skip(self, artifact), fields(name = %artifact.file_name, bytes = artifact.bytes.len()))]
    fn emit(&mut self, artifact: &Artifact) -> ImgAnimResult<()> {
        if artifact.file_name.is_empty()
            || artifact.file_name.contains(['/', '\\'])
            || artifact.file_name == ".."
        {
            return Err(ImgAnimError::export(format!(
                "artifact name '{}' is not a plain file name",
                artifact.file_name
            )));
        }

        std::fs::create_dir_all(&self.dir).map_err(|e| {
            ImgAnimError::export(format!("create output dir '{}': {e}", self.dir.display()))
        })?;

        let target = self.target_path(&artifact.file_name);
        let staging_path = self.dir.join(format!(".{}.partial", artifact.file_name));
        // The guard removes the staging file on every early return below.
        let staging = StagingFile::create(staging_path, &artifact.bytes)?;
        staging.commit(&target)?;

        tracing::debug!(path = %target.display(), mime = %artifact.mime, "artifact written");
        Ok(())
    }
}

/// In-memory sink for tests and previews.
#[derive(Debug, Default)]
pub struct InMemorySink {
    pub(crate) artifacts: Vec<Artifact>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Artifacts in emit order.
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn last(&self) -> Option<&Artifact> {
        self.artifacts.last()
    }
}

impl ArtifactSink for InMemorySink {
    fn emit(&mut self, artifact: &Artifact) -> ImgAnimResult<()> {
        self.artifacts.push(artifact.clone());
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/export.rs"]
mod tests;
