/*!
 * Field validation for document content.
 *
 * This module holds the export precondition gate and the advisory checks
 * the form surfaces as inline warnings:
 * - Required fields (title, at least one named student)
 * - External mentor source
 * - Email shape
 * - Dangling institution references
 */

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{RenderError, RequiredField, TextField};
use crate::locale::LocaleSettings;
use crate::model::DocumentContent;
use crate::validation::word_limit::WordLimitReport;

/// Loose email shape: something@something.something
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex")
});

/// Check whether an email address looks valid
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// A required text field is filled when it has non-whitespace content
pub fn is_required_field_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// An external mentor, when present, must name its source
pub fn is_external_mentor_valid(content: &DocumentContent) -> bool {
    content
        .external_mentor
        .as_ref()
        .is_none_or(|mentor| is_required_field_filled(&mentor.source))
}

/// Required fields that are missing
pub fn missing_required_fields(content: &DocumentContent) -> Vec<RequiredField> {
    let mut missing = Vec::new();

    if !is_required_field_filled(&content.title) {
        missing.push(RequiredField::Title);
    }

    if content.named_students().next().is_none() {
        missing.push(RequiredField::StudentName);
    }

    missing
}

/// Hard preconditions checked before a document is assembled.
///
/// Word ceilings are checked first, then required fields, then the
/// external mentor. The first failing check is returned.
pub fn validate_for_export(
    content: &DocumentContent,
    settings: &LocaleSettings,
) -> Result<(), RenderError> {
    WordLimitReport::measure(TextField::Content, &content.content, settings).check()?;

    if let Some(abstract_text) = content.abstract_text() {
        WordLimitReport::measure(TextField::Abstract, abstract_text, settings).check()?;
    }

    let missing = missing_required_fields(content);
    if !missing.is_empty() {
        return Err(RenderError::MissingRequiredField(missing));
    }

    if !is_external_mentor_valid(content) {
        return Err(RenderError::InvalidExternalMentor);
    }

    debug!("Document '{}' passed export validation", content.title.trim());
    Ok(())
}

/// Advisory problems that never block export
#[derive(Debug, Clone, PartialEq)]
pub enum FieldWarning {
    /// Student email does not look like an address
    InvalidEmail { student: String, email: String },
    /// Free text is over its ceiling
    OverWordLimit(WordLimitReport),
    /// Mentor references an institution that does not exist
    DanglingInstitution { mentor: String, institution_id: String },
    /// Mentor belongs to an institution without a name
    UnnamedInstitution { mentor: String },
}

impl std::fmt::Display for FieldWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldWarning::InvalidEmail { student, email } => {
                write!(f, "Invalid email '{}' for student '{}'", email, student)
            }
            FieldWarning::OverWordLimit(report) => {
                write!(f, "Word limit exceeded ({})", report)
            }
            FieldWarning::DanglingInstitution { mentor, institution_id } => {
                write!(
                    f,
                    "Mentor '{}' references unknown institution '{}' and will be omitted",
                    mentor, institution_id
                )
            }
            FieldWarning::UnnamedInstitution { mentor } => {
                write!(f, "Mentor '{}' belongs to an institution without a name and will be omitted", mentor)
            }
        }
    }
}

/// Collect advisory warnings for the form
pub fn collect_warnings(content: &DocumentContent, settings: &LocaleSettings) -> Vec<FieldWarning> {
    let mut warnings = Vec::new();

    for student in content.named_students() {
        if let Some(email) = student.email() {
            if !is_valid_email(email) {
                warnings.push(FieldWarning::InvalidEmail {
                    student: student.name.trim().to_string(),
                    email: email.to_string(),
                });
            }
        }
    }

    let content_report = WordLimitReport::measure(TextField::Content, &content.content, settings);
    if !content_report.is_within_limit() {
        warnings.push(FieldWarning::OverWordLimit(content_report));
    }

    if let Some(abstract_text) = content.abstract_text() {
        let report = WordLimitReport::measure(TextField::Abstract, abstract_text, settings);
        if !report.is_within_limit() {
            warnings.push(FieldWarning::OverWordLimit(report));
        }
    }

    for mentor in content.mentors.iter().filter(|m| m.is_named()) {
        match content.institution(&mentor.institution_id) {
            None => warnings.push(FieldWarning::DanglingInstitution {
                mentor: mentor.name.trim().to_string(),
                institution_id: mentor.institution_id.clone(),
            }),
            Some(institution) if !institution.is_named() => {
                warnings.push(FieldWarning::UnnamedInstitution {
                    mentor: mentor.name.trim().to_string(),
                })
            }
            Some(_) => {}
        }
    }

    for warning in &warnings {
        warn!("{}", warning);
    }

    warnings
}
