/*!
 * Integration tests for persisted form snapshots
 */

use projdoc::snapshot::{FormSnapshot, SnapshotStore};
use projdoc::{AppError, DocumentRenderer, Locale};

use crate::common;

#[test]
fn test_saveThenLoad_shouldRestoreDocumentAndTimestamp() {
    let temp_dir = common::create_temp_dir().unwrap();
    let doc = common::sample_english_document();

    let path = common::write_snapshot(temp_dir.path(), "form.json", &doc).unwrap();
    let snapshot = SnapshotStore::load(&path).unwrap();

    assert_eq!(snapshot.to_content(), doc);
    assert_eq!(
        snapshot.last_saved.map(|t| t.to_rfc3339()),
        Some("2026-03-01T09:30:00+00:00".to_string())
    );
}

#[test]
fn test_snapshotJson_shouldUseFormFieldNames() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = common::write_snapshot(temp_dir.path(), "form.json", &common::sample_hebrew_document()).unwrap();

    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(json["language"], "hebrew");
    assert_eq!(json["hasExternalMentor"], true);
    assert_eq!(json["externalMentor"]["source"], "אינטל");
    assert_eq!(json["mentors"][0]["institutionId"], "1");
    assert_eq!(json["projectNumber"], "");
    assert!(json["lastSaved"].is_string());
}

#[test]
fn test_loadedSnapshot_shouldRenderLikeOriginal() {
    let temp_dir = common::create_temp_dir().unwrap();
    let doc = common::sample_hebrew_document();
    let path = common::write_snapshot(temp_dir.path(), "form.json", &doc).unwrap();
    let renderer = DocumentRenderer::default();

    let restored = SnapshotStore::load(&path).unwrap().to_content();

    assert_eq!(renderer.render(&restored).unwrap(), renderer.render(&doc).unwrap());
}

#[test]
fn test_externalMentorFlagOff_shouldDropStoredMentor() {
    let json = r#"{
        "language": "english",
        "title": "t",
        "hasExternalMentor": false,
        "externalMentor": {"title": "Mr.", "name": "Sam Roe", "source": ""}
    }"#;

    let content = FormSnapshot::from_json(json).unwrap().to_content();

    assert_eq!(content.locale, Locale::Secondary);
    assert_eq!(content.external_mentor, None);
}

#[test]
fn test_load_missingFile_shouldBeFileError() {
    let temp_dir = common::create_temp_dir().unwrap();

    let result = SnapshotStore::load(temp_dir.path().join("missing.json"));

    assert!(matches!(result, Err(AppError::File(_))));
}

#[test]
fn test_load_withUnknownLanguage_shouldBeSnapshotError() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = common::create_test_file(
        temp_dir.path(),
        "bad.json",
        r#"{"language":"klingon","title":"t"}"#,
    )
    .unwrap();

    assert!(matches!(SnapshotStore::load(&path), Err(AppError::Snapshot(_))));
}

#[test]
fn test_legacySnapshot_withInstitutionNames_shouldRenderMentors() {
    let json = r#"{
        "language": "english",
        "title": "t",
        "students": [{"name": "Ada Lovelace"}],
        "instructors": [{"id": "0", "title": "Dr.", "name": "Ann Lee", "institution": "Braude College"}]
    }"#;
    let content = FormSnapshot::from_json(json).unwrap().to_content();

    let rendered = DocumentRenderer::default().render(&content).unwrap();

    assert!(rendered.html.contains("<strong>Advisor:</strong> Dr. Ann Lee</p>"));
    assert!(rendered.html.contains("BRAUDE COLLEGE"));
}
