/*!
 * Word-count validation for free-text fields.
 *
 * This module counts words and checks them against the active locale's
 * ceilings:
 * - Advisory reports for the form's live word counter
 * - Hard checks used as an export precondition
 */

use log::debug;

use crate::errors::{RenderError, TextField};
use crate::locale::LocaleSettings;

/// Count whitespace-separated words; blank text has zero words
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Ceiling that applies to a text field in the given locale
pub fn limit_for(field: TextField, settings: &LocaleSettings) -> usize {
    match field {
        TextField::Content => settings.content_word_limit,
        TextField::Abstract => settings.abstract_word_limit,
    }
}

/// True iff the content's word count does not exceed the locale's ceiling
pub fn is_within_limit(text: &str, settings: &LocaleSettings) -> bool {
    count_words(text) <= settings.content_word_limit
}

/// Word count of a field measured against its ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordLimitReport {
    /// Which field was measured
    pub field: TextField,
    /// Current word count
    pub count: usize,
    /// Ceiling of the active locale
    pub limit: usize,
}

impl WordLimitReport {
    /// Measure `text` as `field` against the locale's ceiling
    pub fn measure(field: TextField, text: &str, settings: &LocaleSettings) -> Self {
        let report = Self {
            field,
            count: count_words(text),
            limit: limit_for(field, settings),
        };
        debug!("Word count for {}: {} / {}", field, report.count, report.limit);
        report
    }

    pub fn is_within_limit(&self) -> bool {
        self.count <= self.limit
    }

    /// Words left before the ceiling, zero when over
    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.count)
    }

    /// Turn an over-limit report into the export failure
    pub fn check(&self) -> Result<(), RenderError> {
        if self.is_within_limit() {
            Ok(())
        } else {
            Err(RenderError::WordLimitExceeded {
                field: self.field,
                limit: self.limit,
                count: self.count,
            })
        }
    }
}

impl std::fmt::Display for WordLimitReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} / {} words", self.field, self.count, self.limit)
    }
}
