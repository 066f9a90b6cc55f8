/*!
 * Document rendering engine.
 *
 * This module turns a `DocumentContent` snapshot into a complete styled
 * HTML document. It is split into several submodules:
 *
 * - `students`: Students section
 * - `mentors`: Mentors and institutions section (multi-institution indices)
 * - `abstract_block`: Abstract section
 * - `keywords`: Keywords section
 * - `document`: Stylesheet, title block and section composition
 *
 * Rendering is a pure function of its input: the same content and locale
 * table always produce byte-identical output.
 */

use std::fmt::Write;

use log::debug;

use crate::errors::RenderError;
use crate::file_utils::FileManager;
use crate::formatting::format_title;
use crate::locale::{Locale, LocaleSettings, LocaleTable};
use crate::model::DocumentContent;
use crate::validation::validate_for_export;

pub use self::document::{display_title, HtmlDocument};

pub mod abstract_block;
pub mod document;
pub mod keywords;
pub mod mentors;
pub mod students;

/// Locale and settings shared by every section renderer
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub locale: Locale,
    pub settings: &'a LocaleSettings,
}

impl<'a> RenderContext<'a> {
    pub fn new(locale: Locale, table: &'a LocaleTable) -> Self {
        Self {
            locale,
            settings: table.get(locale),
        }
    }
}

/// A rendered document and the file name suggested for it
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    pub html: String,
    /// File name without extension
    pub file_name: String,
}

/// File name derived from the formatted title, or the locale's default
pub fn suggested_file_name(content: &DocumentContent, settings: &LocaleSettings) -> String {
    let title = format_title(content.title.trim(), content.locale);
    let name = FileManager::sanitize_file_name(&title);
    if name.is_empty() {
        settings.labels.default_file_name.clone()
    } else {
        name
    }
}

/// Renders documents with a fixed locale table
#[derive(Debug, Clone, Default)]
pub struct DocumentRenderer {
    locales: LocaleTable,
}

impl DocumentRenderer {
    pub fn new(locales: LocaleTable) -> Self {
        Self { locales }
    }

    pub fn locales(&self) -> &LocaleTable {
        &self.locales
    }

    /// Settings of the locale a document is rendered in
    pub fn settings_for(&self, content: &DocumentContent) -> &LocaleSettings {
        self.locales.get(content.locale)
    }

    /// Build the document view without running export validation
    pub fn assemble<'a>(&'a self, content: &'a DocumentContent) -> HtmlDocument<'a> {
        HtmlDocument::new(content, RenderContext::new(content.locale, &self.locales))
    }

    /// Validate and render a document.
    ///
    /// All precondition failures are returned before any markup is produced;
    /// the caller never sees a partial document.
    pub fn render(&self, content: &DocumentContent) -> Result<RenderedDocument, RenderError> {
        let settings = self.settings_for(content);
        validate_for_export(content, settings)?;

        let mut html = String::new();
        write!(html, "{}", self.assemble(content))
            .map_err(|e| RenderError::RenderFailure(e.to_string()))?;

        if html.is_empty() {
            return Err(RenderError::RenderFailure("assembler produced no output".to_string()));
        }

        let file_name = suggested_file_name(content, settings);
        debug!(
            "Rendered '{}' ({} locale, {} bytes)",
            file_name,
            content.locale,
            html.len()
        );

        Ok(RenderedDocument { html, file_name })
    }
}
