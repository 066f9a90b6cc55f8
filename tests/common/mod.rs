/*!
 * Common test utilities for the projdoc test suite
 */

use anyhow::Result;
use chrono::{TimeZone, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use projdoc::snapshot::{FormSnapshot, SnapshotStore};
use projdoc::{DocumentContent, ExternalMentor, Institution, Locale, Mentor, Student};

/// Route library logs through env_logger; safe to call from every test
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// `count` distinct words separated by single spaces
pub fn words(count: usize) -> String {
    (0..count).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ")
}

/// A complete English document with two institutions
pub fn sample_english_document() -> DocumentContent {
    DocumentContent::new(Locale::Secondary, "smart grid forecasting")
        .with_project_number("24-1-1-3001")
        .with_student(Student::new("Ada Lovelace", Some("ADA@Example.org")))
        .with_student(Student::new("alan mathison turing", None))
        .with_institution(Institution::new("1", "Braude College"))
        .with_institution(Institution::new("2", "Technion"))
        .with_mentor(Mentor::new("m1", "Dr.", "Ann Lee", "1"))
        .with_mentor(Mentor::new("m2", "Prof.", "Bo Chen", "2"))
        .with_abstract("We forecast load.\nThen we balance it.")
        .with_keywords("Energy, Forecasting , ,Grids")
        .with_content("Line one\r\nLine two")
}

/// A complete Hebrew document with a single institution and an external mentor
pub fn sample_hebrew_document() -> DocumentContent {
    DocumentContent::new(Locale::Primary, "חיזוי רשת חכמה")
        .with_student(Student::new("נועה כהן", Some("noa@example.org")))
        .with_student(Student::new("דן לוי", None))
        .with_institution(Institution::new("1", "מכללת בראודה"))
        .with_mentor(Mentor::new("m1", "ד״ר", "רון שמיר", "1"))
        .with_external_mentor(ExternalMentor::new("מר", "אבי גל", "אינטל"))
        .with_keywords("אנרגיה, חיזוי")
        .with_content("שורה ראשונה\nשורה שנייה")
}

/// Write a document as a snapshot file
pub fn write_snapshot(dir: &Path, filename: &str, content: &DocumentContent) -> Result<PathBuf> {
    let path = dir.join(filename);
    let saved_at = Utc
        .with_ymd_and_hms(2026, 3, 1, 9, 30, 0)
        .single()
        .ok_or_else(|| anyhow::anyhow!("invalid timestamp"))?;
    SnapshotStore::save(&path, &FormSnapshot::capture(content, saved_at))?;
    Ok(path)
}
