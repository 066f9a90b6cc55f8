/*!
 * Export trigger.
 *
 * Wraps a rendered document into a downloadable artifact and hands it to a
 * host save primitive:
 * - `FileSystemSink`: writes the artifact into a directory
 * - `MemorySink`: keeps every artifact it receives (tests, embedding hosts)
 *
 * The exporter calls the sink once per document and never retries.
 */

use async_trait::async_trait;
use log::{debug, info};
use parking_lot::Mutex;
use std::fmt::Debug;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::model::DocumentContent;
use crate::render::{DocumentRenderer, RenderedDocument};

/// MIME type of exported documents
pub const DOCUMENT_MIME_TYPE: &str = "application/msword";

/// File extension of exported documents
pub const DOCUMENT_EXTENSION: &str = "doc";

/// A document ready to be saved by the host
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    /// File name including extension
    pub file_name: String,
    pub mime_type: String,
    pub content: String,
}

impl ExportArtifact {
    /// Wrap a rendered document with the fixed MIME type and extension
    pub fn from_rendered(rendered: RenderedDocument) -> Self {
        Self {
            file_name: format!("{}.{}", rendered.file_name, DOCUMENT_EXTENSION),
            mime_type: DOCUMENT_MIME_TYPE.to_string(),
            content: rendered.html,
        }
    }
}

/// Host save primitive
#[async_trait]
pub trait ExportSink: Send + Sync + Debug {
    /// Save an artifact
    ///
    /// # Returns
    /// * `Result<PathBuf, AppError>` - Where the artifact ended up
    async fn save(&self, artifact: &ExportArtifact) -> Result<PathBuf, AppError>;
}

/// Writes artifacts into a directory
#[derive(Debug, Clone)]
pub struct FileSystemSink {
    output_dir: PathBuf,
}

impl FileSystemSink {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Path an artifact with the given file name would be written to
    pub fn target_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

#[async_trait]
impl ExportSink for FileSystemSink {
    async fn save(&self, artifact: &ExportArtifact) -> Result<PathBuf, AppError> {
        FileManager::ensure_dir(&self.output_dir)
            .map_err(|e| AppError::File(format!("Failed to create {:?}: {}", self.output_dir, e)))?;

        let path = self.target_path(&artifact.file_name);
        tokio::fs::write(&path, artifact.content.as_bytes())
            .await
            .map_err(|e| AppError::File(format!("Failed to write {:?}: {}", path, e)))?;

        debug!("Wrote {} bytes to {:?}", artifact.content.len(), path);
        Ok(path)
    }
}

/// Records artifacts in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    saved: Arc<Mutex<Vec<ExportArtifact>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every artifact saved so far, oldest first
    pub fn saved(&self) -> Vec<ExportArtifact> {
        self.saved.lock().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saved.lock().len()
    }
}

#[async_trait]
impl ExportSink for MemorySink {
    async fn save(&self, artifact: &ExportArtifact) -> Result<PathBuf, AppError> {
        self.saved.lock().push(artifact.clone());
        Ok(PathBuf::from(&artifact.file_name))
    }
}

/// Renders documents and hands them to a sink
#[derive(Debug)]
pub struct Exporter<S: ExportSink> {
    renderer: DocumentRenderer,
    sink: S,
}

impl<S: ExportSink> Exporter<S> {
    pub fn new(renderer: DocumentRenderer, sink: S) -> Self {
        Self { renderer, sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn renderer(&self) -> &DocumentRenderer {
        &self.renderer
    }

    /// Render and build the artifact without saving it
    pub fn prepare(&self, content: &DocumentContent) -> Result<ExportArtifact, AppError> {
        let rendered = self.renderer.render(content)?;
        Ok(ExportArtifact::from_rendered(rendered))
    }

    /// Render a document and save it through the sink.
    ///
    /// Render errors are returned before the sink is called.
    pub async fn export(&self, content: &DocumentContent) -> Result<(ExportArtifact, PathBuf), AppError> {
        let artifact = self.prepare(content)?;
        let path = self.deliver(&artifact).await?;
        Ok((artifact, path))
    }

    /// Hand an already prepared artifact to the sink
    pub async fn deliver(&self, artifact: &ExportArtifact) -> Result<PathBuf, AppError> {
        let path = self.sink.save(artifact).await?;
        info!("Exported {}", artifact.file_name);
        Ok(path)
    }
}
