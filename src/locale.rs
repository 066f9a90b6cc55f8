use anyhow::{anyhow, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// Locale settings module
/// Each document is rendered in one of two locales. A locale owns the text
/// direction, fonts and page layout constants, the word ceilings, the label
/// strings and the degree titles a mentor can carry. The whole table is
/// configuration data and can be overridden from `conf.json`.
/// Document locale
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    // @locale: Hebrew, right-to-left
    #[default]
    #[serde(rename = "hebrew", alias = "primary")]
    Primary,
    // @locale: English, left-to-right
    #[serde(rename = "english", alias = "secondary")]
    Secondary,
}

impl Locale {
    // @returns: Identifier used in snapshots and config
    pub fn code(&self) -> &'static str {
        match self {
            Self::Primary => "hebrew",
            Self::Secondary => "english",
        }
    }

    // @returns: Capitalized locale name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Primary => "Hebrew",
            Self::Secondary => "English",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "hebrew" | "he" | "primary" => Ok(Self::Primary),
            "english" | "en" | "secondary" => Ok(Self::Secondary),
            _ => Err(anyhow!("Invalid locale: {}", s)),
        }
    }
}

/// Text direction of the rendered page
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Rtl,
    Ltr,
}

impl TextDirection {
    pub fn as_css(&self) -> &'static str {
        match self {
            Self::Rtl => "rtl",
            Self::Ltr => "ltr",
        }
    }
}

/// Body sections whose order is configurable
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Students,
    Mentors,
    Abstract,
    Keywords,
    Content,
}

/// Label strings printed into the document
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LocaleLabels {
    pub students_header: String,
    /// Prefix of the mentor line with a single mentor
    pub advisor: String,
    /// Prefix of the mentor line with several mentors
    pub advisors: String,
    pub abstract_header: String,
    pub keywords_header: String,
    pub project_number: String,
    /// Title shown when the document title is blank
    pub untitled: String,
    /// File name used when the document title is blank
    pub default_file_name: String,
}

/// Formatting rules and layout constants for one locale
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LocaleSettings {
    pub direction: TextDirection,

    /// Value of the `lang` attribute on the root element
    pub lang: String,

    pub font_family: String,

    #[serde(default = "default_font_size")]
    pub font_size: String,

    #[serde(default = "default_title_font_size")]
    pub title_font_size: String,

    #[serde(default = "default_line_height")]
    pub line_height: String,

    #[serde(default = "default_page_margin")]
    pub page_margin: String,

    /// Word ceiling for the free-text content
    pub content_word_limit: usize,

    /// Word ceiling for the abstract
    pub abstract_word_limit: usize,

    #[serde(default = "default_section_order")]
    pub section_order: Vec<Section>,

    /// Degree titles offered for mentors, also used to detect names that
    /// already carry a title
    pub degree_titles: Vec<String>,

    pub labels: LocaleLabels,
}

impl LocaleSettings {
    /// Settings for the Hebrew locale
    pub fn hebrew() -> Self {
        Self {
            direction: TextDirection::Rtl,
            lang: "he".to_string(),
            font_family: "David, 'David', serif".to_string(),
            font_size: default_font_size(),
            title_font_size: default_title_font_size(),
            line_height: default_line_height(),
            page_margin: default_page_margin(),
            content_word_limit: 200,
            abstract_word_limit: 200,
            section_order: default_section_order(),
            degree_titles: ["ד״ר", "ד\"ר", "מר", "פרופסור", "גב׳", "גב'"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            labels: LocaleLabels {
                students_header: "שמות הסטודנטים:".to_string(),
                advisor: "בהנחיית:".to_string(),
                advisors: "בהנחיית:".to_string(),
                abstract_header: "תקציר:".to_string(),
                keywords_header: "מילות מפתח:".to_string(),
                project_number: "מספר פרויקט/קורס:".to_string(),
                untitled: "מסמך ללא כותרת".to_string(),
                default_file_name: "מסמך".to_string(),
            },
        }
    }

    /// Settings for the English locale
    pub fn english() -> Self {
        Self {
            direction: TextDirection::Ltr,
            lang: "en".to_string(),
            font_family: "'Times New Roman', serif".to_string(),
            font_size: default_font_size(),
            title_font_size: default_title_font_size(),
            line_height: default_line_height(),
            page_margin: default_page_margin(),
            content_word_limit: 300,
            abstract_word_limit: 300,
            section_order: default_section_order(),
            degree_titles: ["Dr.", "Mr.", "Prof.", "Ms."]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            labels: LocaleLabels {
                students_header: "Students:".to_string(),
                advisor: "Advisor:".to_string(),
                advisors: "Advisors:".to_string(),
                abstract_header: "Abstract:".to_string(),
                keywords_header: "Keywords:".to_string(),
                project_number: "Project/Course Number:".to_string(),
                untitled: "Untitled Document".to_string(),
                default_file_name: "Document".to_string(),
            },
        }
    }

    /// True when `token` is exactly one of this locale's degree titles
    pub fn is_degree_title(&self, token: &str) -> bool {
        self.degree_titles.iter().any(|title| title == token)
    }

    /// Check the settings for values that would produce a broken document
    pub fn validate(&self) -> Result<()> {
        if self.content_word_limit == 0 || self.abstract_word_limit == 0 {
            return Err(anyhow!("Word limits must be greater than zero for locale '{}'", self.lang));
        }

        if self.font_family.trim().is_empty() {
            return Err(anyhow!("Font family is required for locale '{}'", self.lang));
        }

        if self.degree_titles.iter().all(|t| t.trim().is_empty()) {
            return Err(anyhow!("At least one degree title is required for locale '{}'", self.lang));
        }

        if self.labels.default_file_name.trim().is_empty() {
            return Err(anyhow!("Default file name is required for locale '{}'", self.lang));
        }

        let mut seen = HashSet::new();
        for section in &self.section_order {
            if !seen.insert(section) {
                return Err(anyhow!(
                    "Section {:?} appears more than once in the section order for locale '{}'",
                    section,
                    self.lang
                ));
            }
        }

        Ok(())
    }
}

/// Settings for both locales.
///
/// Each entry is read as a set of overrides on top of that locale's own
/// defaults, so a config file only has to name the values it changes.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LocaleTable {
    #[serde(default = "LocaleSettings::hebrew", deserialize_with = "hebrew_overrides")]
    pub hebrew: LocaleSettings,

    #[serde(default = "LocaleSettings::english", deserialize_with = "english_overrides")]
    pub english: LocaleSettings,
}

impl LocaleTable {
    /// Get the settings for a locale
    pub fn get(&self, locale: Locale) -> &LocaleSettings {
        match locale {
            Locale::Primary => &self.hebrew,
            Locale::Secondary => &self.english,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.hebrew.validate()?;
        self.english.validate()
    }
}

impl Default for LocaleTable {
    fn default() -> Self {
        Self {
            hebrew: LocaleSettings::hebrew(),
            english: LocaleSettings::english(),
        }
    }
}

fn hebrew_overrides<'de, D: Deserializer<'de>>(deserializer: D) -> Result<LocaleSettings, D::Error> {
    let overrides = Value::deserialize(deserializer)?;
    apply_overrides(LocaleSettings::hebrew(), overrides).map_err(serde::de::Error::custom)
}

fn english_overrides<'de, D: Deserializer<'de>>(deserializer: D) -> Result<LocaleSettings, D::Error> {
    let overrides = Value::deserialize(deserializer)?;
    apply_overrides(LocaleSettings::english(), overrides).map_err(serde::de::Error::custom)
}

// @merges: Config values over the locale defaults, objects key by key
fn apply_overrides(base: LocaleSettings, overrides: Value) -> serde_json::Result<LocaleSettings> {
    let mut merged = serde_json::to_value(base)?;
    merge_value(&mut merged, overrides);
    serde_json::from_value(merged)
}

fn merge_value(target: &mut Value, overrides: Value) {
    match (target, overrides) {
        (Value::Object(target), Value::Object(overrides)) => {
            for (key, value) in overrides {
                merge_value(target.entry(key).or_insert(Value::Null), value);
            }
        }
        (target, value) => *target = value,
    }
}

fn default_font_size() -> String {
    "12pt".to_string()
}

fn default_title_font_size() -> String {
    "18pt".to_string()
}

fn default_line_height() -> String {
    "1.0".to_string()
}

fn default_page_margin() -> String {
    "2.54cm".to_string()
}

/// Order shared by both locales unless configured otherwise
pub fn default_section_order() -> Vec<Section> {
    vec![
        Section::Students,
        Section::Mentors,
        Section::Abstract,
        Section::Keywords,
        Section::Content,
    ]
}
