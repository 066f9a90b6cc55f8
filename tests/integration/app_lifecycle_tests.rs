/*!
 * Integration tests for application lifecycle
 */

use anyhow::Result;
use projdoc::app_config::Config;
use projdoc::app_controller::{Controller, FileOutcome, FolderSummary};
use projdoc::Locale;

use crate::common;

/// Test the controller with default configuration
#[test]
fn test_controllerInitialization_withDefaultConfig_shouldSucceed() -> Result<()> {
    let controller = Controller::with_config(Config::default())?;
    assert_eq!(controller.config(), &Config::default());
    Ok(())
}

#[test]
fn test_controllerInitialization_withInvalidConfig_shouldFail() {
    let mut config = Config::default();
    config.locales.english.content_word_limit = 0;

    assert!(Controller::with_config(config).is_err());
}

#[tokio::test]
async fn test_run_withSnapshot_shouldWriteNextToInput() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let input = common::write_snapshot(temp_dir.path(), "form.json", &common::sample_english_document())?;
    let controller = Controller::with_config(Config::default())?;

    let outcome = controller.run(&input, None, false).await?;

    let expected = temp_dir.path().join("Smart Grid Forecasting.doc");
    assert_eq!(outcome, FileOutcome::Written(expected.clone()));
    assert_eq!(controller.output_path_for(&input, None)?, expected);
    assert!(std::fs::read_to_string(&expected)?.contains("<html lang=\"en\" dir=\"ltr\">"));
    Ok(())
}

#[tokio::test]
async fn test_run_withExistingOutput_shouldSkipUnlessForced() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let out_dir = temp_dir.path().join("out");
    let input = common::write_snapshot(temp_dir.path(), "form.json", &common::sample_hebrew_document())?;
    let existing = out_dir.join("חיזוי רשת חכמה.doc");
    std::fs::create_dir_all(&out_dir)?;
    std::fs::write(&existing, "old")?;
    let controller = Controller::with_config(Config::default())?;

    let skipped = controller.run(&input, Some(&out_dir), false).await?;
    assert_eq!(skipped, FileOutcome::Skipped(existing.clone()));
    assert_eq!(std::fs::read_to_string(&existing)?, "old");

    let written = controller.run(&input, Some(&out_dir), true).await?;
    assert_eq!(written, FileOutcome::Written(existing.clone()));
    assert!(std::fs::read_to_string(&existing)?.contains("dir=\"rtl\""));
    Ok(())
}

#[tokio::test]
async fn test_run_withLocaleOverride_shouldRenderInOverrideLocale() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::write_snapshot(temp_dir.path(), "form.json", &common::sample_english_document())?;
    let controller = Controller::with_config(Config::default())?.with_locale_override(Some(Locale::Primary));

    let outcome = controller.run(&input, None, false).await?;

    // Hebrew leaves the title as typed
    let expected = temp_dir.path().join("smart grid forecasting.doc");
    assert_eq!(outcome, FileOutcome::Written(expected.clone()));
    assert!(std::fs::read_to_string(&expected)?.contains("dir=\"rtl\""));
    Ok(())
}

#[tokio::test]
async fn test_run_withConfiguredOutputDir_shouldUseIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let out_dir = temp_dir.path().join("configured");
    let input = common::write_snapshot(temp_dir.path(), "form.json", &common::sample_english_document())?;
    let config = Config {
        output_dir: Some(out_dir.to_string_lossy().to_string()),
        ..Config::default()
    };
    let controller = Controller::with_config(config)?;

    controller.run(&input, None, false).await?;

    assert!(out_dir.join("Smart Grid Forecasting.doc").exists());
    Ok(())
}

#[tokio::test]
async fn test_runFolder_withMixedSnapshots_shouldCountOutcomes() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input_dir = temp_dir.path().join("forms");
    let out_dir = temp_dir.path().join("out");
    std::fs::create_dir_all(input_dir.join("nested"))?;
    common::write_snapshot(&input_dir, "a.json", &common::sample_english_document())?;
    common::write_snapshot(&input_dir.join("nested"), "b.json", &common::sample_hebrew_document())?;
    let mut over_limit = common::sample_english_document();
    over_limit.title = "too long".to_string();
    over_limit.content = common::words(301);
    common::write_snapshot(&input_dir, "c.json", &over_limit)?;
    common::create_test_file(&input_dir, "d.json", "{ broken")?;
    let controller = Controller::with_config(Config::default())?;

    let summary = controller.run_folder(&input_dir, Some(&out_dir), false).await?;

    assert_eq!(summary, FolderSummary { written: 2, skipped: 0, failed: 2 });
    assert!(out_dir.join("Smart Grid Forecasting.doc").exists());
    assert!(out_dir.join("חיזוי רשת חכמה.doc").exists());
    assert!(!out_dir.join("Too Long.doc").exists());

    let again = controller.run_folder(&input_dir, Some(&out_dir), false).await?;
    assert_eq!(again, FolderSummary { written: 0, skipped: 2, failed: 2 });
    Ok(())
}

#[tokio::test]
async fn test_runFolder_withSameTitleTwice_shouldFailTheSecond() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input_dir = temp_dir.path().join("forms");
    let out_dir = temp_dir.path().join("out");
    std::fs::create_dir_all(&input_dir)?;
    let first = common::sample_english_document();
    let mut second = common::sample_english_document();
    second.content = "A different body".to_string();
    common::write_snapshot(&input_dir, "first.json", &first)?;
    common::write_snapshot(&input_dir, "second.json", &second)?;
    let controller = Controller::with_config(Config::default())?;

    let summary = controller.run_folder(&input_dir, Some(&out_dir), true).await?;
    assert_eq!(summary, FolderSummary { written: 1, skipped: 0, failed: 1 });

    // Existing output from the first run: one skip, the duplicate still fails
    let again = controller.run_folder(&input_dir, Some(&out_dir), false).await?;
    assert_eq!(again, FolderSummary { written: 0, skipped: 1, failed: 1 });
    Ok(())
}

#[test]
fn test_runFolder_withEmptyDirectory_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(Config::default())?;

    let result = tokio_test::block_on(controller.run_folder(temp_dir.path(), None, false));

    assert!(result.is_err());
    Ok(())
}

#[test]
fn test_check_overLimitSnapshot_shouldReportBlockingError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut doc = common::sample_english_document();
    doc.content = common::words(301);
    let input = common::write_snapshot(temp_dir.path(), "form.json", &doc)?;
    let controller = Controller::with_config(Config::default())?;

    let report = controller.check(&input)?;

    assert!(!report.is_exportable());
    assert_eq!(report.locale, Locale::Secondary);
    assert_eq!(report.word_counts[0].count, 301);
    assert_eq!(report.word_counts[1].count, 7);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(
        report.blocking_error.as_deref(),
        Some("The content exceeds the 300 word limit (301 words)")
    );
    assert!(!temp_dir.path().join("Smart Grid Forecasting.doc").exists());
    Ok(())
}

#[test]
fn test_check_validSnapshot_shouldBeExportable() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::write_snapshot(temp_dir.path(), "form.json", &common::sample_hebrew_document())?;
    let controller = Controller::with_config(Config::default())?;

    let report = controller.check(&input)?;

    assert!(report.is_exportable());
    assert!(report.warnings.is_empty());
    assert_eq!(report.word_counts.len(), 1);
    Ok(())
}
