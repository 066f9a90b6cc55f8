/*!
 * Integration tests for rendering complete documents
 */

use projdoc::errors::TextField;
use projdoc::{DocumentContent, DocumentRenderer, Locale, LocaleTable, RenderError, Section, Student};

use crate::common;

#[test]
fn test_render_englishDocument_shouldApplyEveryFormatter() {
    common::init_logging();
    let renderer = DocumentRenderer::default();

    let rendered = renderer.render(&common::sample_english_document()).unwrap();
    let html = &rendered.html;

    assert_eq!(rendered.file_name, "Smart Grid Forecasting");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<html lang=\"en\" dir=\"ltr\">"));
    assert!(html.contains("<div class=\"title\">Smart Grid Forecasting</div>"));
    assert!(html.contains("<p class=\"project-number\">Project/Course Number: 24-1-1-3001</p>"));
    assert!(html.contains(
        "<p class=\"student-line\">ada LOVELACE ; ada@example.org ; alan MATHISON TURING</p>"
    ));
    assert!(html.contains("<strong>Advisors:</strong> Dr. Ann Lee<sup>1</sup>, Prof. Bo Chen<sup>2</sup>"));
    assert!(html.contains("<sup>1</sup><span class=\"institution-name\">BRAUDE COLLEGE</span>"));
    assert!(html.contains("<sup>2</sup><span class=\"institution-name\">TECHNION</span>"));
    assert!(html.contains("<p class=\"abstract\">We forecast load. Then we balance it.</p>"));
    assert!(html.contains("<strong>Keywords:</strong> energy ; forecasting ; grids</p>"));
    assert!(html.contains("<div class=\"content\">Line one Line two</div>"));
    assert!(html.contains("font-family: 'Times New Roman', serif"));
    assert!(html.contains("@page { margin: 2.54cm; }"));
}

#[test]
fn test_render_hebrewDocument_shouldUseRightToLeftLayout() {
    let renderer = DocumentRenderer::default();

    let rendered = renderer.render(&common::sample_hebrew_document()).unwrap();
    let html = &rendered.html;

    assert_eq!(rendered.file_name, "חיזוי רשת חכמה");
    assert!(html.contains("<html lang=\"he\" dir=\"rtl\">"));
    assert!(html.contains("direction: rtl"));
    assert!(html.contains("<p class=\"student-line\">נועה כהן ; noa@example.org</p>\n<p class=\"student-line\">דן לוי</p>"));
    assert!(html.contains(
        "<p class=\"mentor-line\">בהנחיית: ד״ר רון שמיר, מר אבי גל <span class=\"external-source\">(אינטל)</span></p>"
    ));
    assert!(!html.contains("<sup>"));
    assert!(html.contains("<p class=\"keywords\">אנרגיה ; חיזוי</p>"));
    assert!(html.contains("<div class=\"content\">שורה ראשונה<br>שורה שנייה</div>"));
}

#[test]
fn test_render_sameInputTwice_shouldBeByteIdentical() {
    let renderer = DocumentRenderer::default();
    let doc = common::sample_english_document();

    let first = renderer.render(&doc).unwrap();
    let second = renderer.render(&doc).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_render_atCeilingAndOneOver_shouldPassThenFail() {
    let renderer = DocumentRenderer::default();
    let at_limit = DocumentContent::new(Locale::Primary, "כותרת")
        .with_student(Student::new("דנה", None))
        .with_content(&common::words(200));
    let over_limit = at_limit.clone().with_content(&common::words(201));

    assert!(renderer.render(&at_limit).is_ok());
    assert_eq!(
        renderer.render(&over_limit),
        Err(RenderError::WordLimitExceeded {
            field: TextField::Content,
            limit: 200,
            count: 201,
        })
    );
}

#[test]
fn test_render_withCustomCeiling_shouldUseConfiguredValue() {
    let mut table = LocaleTable::default();
    table.english.content_word_limit = 10;
    let renderer = DocumentRenderer::new(table);
    let doc = DocumentContent::new(Locale::Secondary, "t")
        .with_student(Student::new("Ada Lovelace", None))
        .with_content(&common::words(11));

    assert!(matches!(
        renderer.render(&doc),
        Err(RenderError::WordLimitExceeded { limit: 10, count: 11, .. })
    ));
}

#[test]
fn test_assemble_withoutValidation_shouldStillProduceDocument() {
    let renderer = DocumentRenderer::default();
    let doc = DocumentContent::new(Locale::Secondary, "");

    let html = renderer.assemble(&doc).to_string();

    assert!(html.contains("<div class=\"title\">Untitled Document</div>"));
    assert!(!html.contains("<p class=\"students-header\">"));
}

#[test]
fn test_render_withSectionOrderOverride_shouldOnlyRenderListedSections() {
    let mut table = LocaleTable::default();
    table.english.section_order = vec![Section::Content, Section::Students];
    let renderer = DocumentRenderer::new(table);

    let html = renderer.render(&common::sample_english_document()).unwrap().html;

    let content_at = html.find("<div class=\"content\">").unwrap();
    let students_at = html.find("<p class=\"students-header\">").unwrap();
    assert!(content_at < students_at);
    assert!(!html.contains("class=\"mentors\""));
    assert!(!html.contains("Keywords:"));
}
