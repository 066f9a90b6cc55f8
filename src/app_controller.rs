use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::errors::TextField;
use crate::export::{Exporter, ExportArtifact, FileSystemSink, DOCUMENT_EXTENSION};
use crate::file_utils::FileManager;
use crate::locale::Locale;
use crate::model::DocumentContent;
use crate::render::DocumentRenderer;
use crate::snapshot::SnapshotStore;
use crate::validation::{collect_warnings, validate_for_export, FieldWarning, WordLimitReport};

// @module: Application controller for document export

/// Outcome of rendering a single snapshot file
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    /// Document written to this path
    Written(PathBuf),
    /// Output already existed and overwriting was not requested
    Skipped(PathBuf),
}

/// Counts for a folder run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderSummary {
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Result of checking a snapshot without exporting it
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub locale: Locale,
    pub word_counts: Vec<WordLimitReport>,
    pub warnings: Vec<FieldWarning>,
    /// Blocking error that would stop export, if any
    pub blocking_error: Option<String>,
}

impl CheckReport {
    pub fn is_exportable(&self) -> bool {
        self.blocking_error.is_none()
    }
}

/// Main application controller for rendering snapshot files
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Locale forced on every snapshot
    locale_override: Option<Locale>,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self {
            config,
            locale_override: None,
        })
    }

    /// Render every snapshot in the given locale regardless of its language field
    pub fn with_locale_override(mut self, locale: Option<Locale>) -> Self {
        self.locale_override = locale;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn renderer(&self) -> DocumentRenderer {
        DocumentRenderer::new(self.config.locales.clone())
    }

    /// Output directory for a given input file
    fn output_dir_for(&self, input_file: &Path, output_dir: Option<&Path>) -> PathBuf {
        if let Some(dir) = output_dir {
            return dir.to_path_buf();
        }
        if let Some(dir) = &self.config.output_dir {
            return PathBuf::from(dir);
        }
        input_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Load a snapshot file as render input
    pub fn load_content(&self, input_file: &Path) -> Result<DocumentContent> {
        let snapshot = SnapshotStore::load(input_file)
            .map_err(|e| anyhow!("Failed to load snapshot {:?}: {}", input_file, e))?;
        let mut content = snapshot.to_content();
        if let Some(locale) = self.locale_override {
            content.locale = locale;
        }
        Ok(content)
    }

    /// Render one snapshot file to a document
    pub async fn run(&self, input_file: &Path, output_dir: Option<&Path>, force_overwrite: bool) -> Result<FileOutcome> {
        self.render_file(input_file, output_dir, force_overwrite, &mut HashSet::new()).await
    }

    // @claimed: Output paths already taken in the current run
    async fn render_file(
        &self,
        input_file: &Path,
        output_dir: Option<&Path>,
        force_overwrite: bool,
        claimed: &mut HashSet<PathBuf>,
    ) -> Result<FileOutcome> {
        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let content = self.load_content(input_file)?;
        let output_dir = self.output_dir_for(input_file, output_dir);
        let exporter = Exporter::new(self.renderer(), FileSystemSink::new(&output_dir));

        // Render first so a blocking error is reported even when the output exists
        let artifact: ExportArtifact = exporter
            .prepare(&content)
            .map_err(|e| anyhow!("{:?}: {}", input_file, e))?;

        let target = exporter.sink().target_path(&artifact.file_name);
        if !claimed.insert(target.clone()) {
            return Err(anyhow!(
                "{:?}: output {:?} is already produced by another snapshot in this run",
                input_file,
                target
            ));
        }

        if target.exists() && !force_overwrite {
            warn!("Output file already exists: {:?}. Use -f to force overwrite.", target);
            return Ok(FileOutcome::Skipped(target));
        }

        let path = exporter
            .deliver(&artifact)
            .await
            .map_err(|e| anyhow!("{:?}: {}", input_file, e))?;

        info!("Success: {:?}", path);
        Ok(FileOutcome::Written(path))
    }

    /// Render every snapshot (`*.json`) found under a directory
    pub async fn run_folder(&self, input_dir: &Path, output_dir: Option<&Path>, force_overwrite: bool) -> Result<FolderSummary> {
        if !FileManager::dir_exists(input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let snapshot_files = FileManager::find_files(input_dir, "json")?;
        if snapshot_files.is_empty() {
            return Err(anyhow!("No snapshot files found in directory: {:?}", input_dir));
        }

        let folder_pb = ProgressBar::new(snapshot_files.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(style.progress_chars("█▓▒░"));

        let mut summary = FolderSummary::default();
        let mut claimed = HashSet::new();

        for snapshot_file in &snapshot_files {
            let file_name = snapshot_file
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            folder_pb.set_message(format!("Rendering: {}", file_name));

            match self.render_file(snapshot_file, output_dir, force_overwrite, &mut claimed).await {
                Ok(FileOutcome::Written(_)) => summary.written += 1,
                Ok(FileOutcome::Skipped(_)) => summary.skipped += 1,
                Err(e) => {
                    error!("Error processing file: {}", e);
                    summary.failed += 1;
                }
            }

            folder_pb.inc(1);
        }

        folder_pb.finish_and_clear();
        info!(
            "Finished processing {} files: {} written, {} skipped, {} failed",
            snapshot_files.len(),
            summary.written,
            summary.skipped,
            summary.failed
        );

        Ok(summary)
    }

    /// Validate a snapshot file and measure its text without writing anything
    pub fn check(&self, input_file: &Path) -> Result<CheckReport> {
        let content = self.load_content(input_file)?;
        let settings = self.config.locales.get(content.locale);

        let mut word_counts = vec![WordLimitReport::measure(TextField::Content, &content.content, settings)];
        if let Some(abstract_text) = content.abstract_text() {
            word_counts.push(WordLimitReport::measure(TextField::Abstract, abstract_text, settings));
        }

        let warnings = collect_warnings(&content, settings);
        let blocking_error = validate_for_export(&content, settings)
            .err()
            .map(|e| e.to_string());

        Ok(CheckReport {
            locale: content.locale,
            word_counts,
            warnings,
            blocking_error,
        })
    }

    /// Expected output path for a snapshot, used by tests and dry runs
    pub fn output_path_for(&self, input_file: &Path, output_dir: Option<&Path>) -> Result<PathBuf> {
        let content = self.load_content(input_file)?;
        let settings = self.config.locales.get(content.locale);
        let file_name = crate::render::suggested_file_name(&content, settings);
        Ok(FileManager::generate_output_path(
            self.output_dir_for(input_file, output_dir),
            &file_name,
            DOCUMENT_EXTENSION,
        ))
    }
}
