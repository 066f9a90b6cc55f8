use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// @module: File helpers for snapshots and exported documents

/// Characters that are not allowed in file names on common platforms
static ILLEGAL_FILE_NAME_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[\\/:*?"<>|\x00-\x1F]"#).expect("Invalid file name regex")
});

// @struct: Snapshot and document file helpers
pub struct FileManager;

impl FileManager {
    // @checks: Regular file at path
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().is_file()
    }

    // @checks: Directory at path
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().is_dir()
    }

    // @creates: Directory and parents; an empty path means the working directory
    pub fn ensure_dir<P: AsRef<Path>>(dir: P) -> Result<()> {
        let dir = dir.as_ref();
        if dir.as_os_str().is_empty() || dir.is_dir() {
            return Ok(());
        }
        fs::create_dir_all(dir).with_context(|| format!("Failed to create directory: {:?}", dir))
    }

    // @generates: `<output_dir>/<file_name>.<extension>`
    pub fn generate_output_path<P: AsRef<Path>>(
        output_dir: P,
        file_name: &str,
        extension: &str,
    ) -> PathBuf {
        let extension = extension.trim_start_matches('.');
        output_dir.as_ref().join(format!("{}.{}", file_name, extension))
    }

    /// Replace characters that cannot appear in a file name and trim the result
    pub fn sanitize_file_name(name: &str) -> String {
        ILLEGAL_FILE_NAME_CHARS
            .replace_all(name, "_")
            .trim()
            .trim_matches('.')
            .to_string()
    }

    /// Files under `dir` (recursively) whose extension matches, case-insensitively
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let wanted = extension.trim_start_matches('.');
        let mut found = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).follow_links(true).sort_by_file_name() {
            let entry = entry.context("Failed to read directory entry")?;
            let matches = entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(wanted));
            if matches {
                found.push(entry.into_path());
            }
        }

        Ok(found)
    }

    /// Read a whole file as UTF-8
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        let path = path.as_ref();
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))
    }

    /// Write a file, creating its parent directory first
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            Self::ensure_dir(parent)?;
        }
        fs::write(path, content).with_context(|| format!("Failed to write to file: {:?}", path))
    }
}
