/*!
 * Tests for application configuration functionality
 */

use projdoc::app_config::{Config, LogLevel};
use projdoc::{Locale, Section};

use crate::common;

/// Test default configuration values
#[test]
fn test_defaultConfig_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.output_dir, None);
    assert_eq!(config.locales.get(Locale::Primary).content_word_limit, 200);
    assert_eq!(config.locales.get(Locale::Secondary).content_word_limit, 300);
    assert_eq!(config.locales.get(Locale::Secondary).page_margin, "2.54cm");
    assert_eq!(
        config.locales.get(Locale::Primary).section_order,
        vec![
            Section::Students,
            Section::Mentors,
            Section::Abstract,
            Section::Keywords,
            Section::Content,
        ]
    );
}

/// Test configuration validation
#[test]
fn test_configValidation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.locales.english.font_family = " ".to_string();
    assert!(config.validate().is_err());
    config.locales.english.font_family = "serif".to_string();

    config.locales.hebrew.degree_titles.clear();
    assert!(config.validate().is_err());
    config.locales.hebrew.degree_titles.push("ד״ר".to_string());

    config.locales.hebrew.labels.default_file_name = String::new();
    assert!(config.validate().is_err());
    config.locales.hebrew.labels.default_file_name = "מסמך".to_string();

    config.locales.english.abstract_word_limit = 0;
    assert!(config.validate().is_err());
    config.locales.english.abstract_word_limit = 150;

    assert!(config.validate().is_ok());
}

#[test]
fn test_loadOrCreate_withMissingFile_shouldWriteDefault() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("conf.json");

    let config = Config::load_or_create(&path).unwrap();

    assert!(path.exists());
    assert_eq!(config, Config::default());
    assert_eq!(Config::load(&path).unwrap(), Config::default());
}

#[test]
fn test_load_withCustomCeiling_shouldOverrideDefault() {
    let temp_dir = common::create_temp_dir().unwrap();
    let mut config = Config::default();
    config.locales.hebrew.content_word_limit = 250;
    config.output_dir = Some("out".to_string());
    let path = temp_dir.path().join("custom.json");
    config.save(&path).unwrap();

    let loaded = Config::load_or_create(&path).unwrap();

    assert_eq!(loaded.locales.hebrew.content_word_limit, 250);
    assert_eq!(loaded.output_dir.as_deref(), Some("out"));
}

#[test]
fn test_load_withMalformedJson_shouldFail() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json").unwrap();

    assert!(Config::load(&path).is_err());
}
