/*!
 * Document assembler.
 *
 * Composes the stylesheet, title block and section fragments into one
 * self-contained HTML document. Assembly never fails: blank optional fields
 * drop their section and a blank title falls back to the locale's
 * placeholder.
 */

use std::fmt;

use crate::formatting::{escape_html, format_free_text, format_title};
use crate::locale::{Locale, LocaleSettings, Section};
use crate::model::DocumentContent;
use crate::render::abstract_block::render_abstract;
use crate::render::keywords::render_keywords;
use crate::render::mentors::render_mentors;
use crate::render::students::render_students;
use crate::render::RenderContext;

/// Formatted title, or the locale's placeholder when the title is blank
pub fn display_title(content: &DocumentContent, settings: &LocaleSettings) -> String {
    let title = format_title(content.title.trim(), content.locale);
    if title.is_empty() {
        settings.labels.untitled.clone()
    } else {
        title
    }
}

/// A document ready to be written out through `Display`
pub struct HtmlDocument<'a> {
    content: &'a DocumentContent,
    ctx: RenderContext<'a>,
}

impl<'a> HtmlDocument<'a> {
    pub fn new(content: &'a DocumentContent, ctx: RenderContext<'a>) -> Self {
        Self { content, ctx }
    }

    /// Markup of one body section, empty when the section has nothing to show
    pub fn section(&self, section: Section) -> String {
        let content = self.content;
        match section {
            Section::Students => render_students(&content.students, &self.ctx),
            Section::Mentors => render_mentors(
                &content.institutions,
                &content.mentors,
                content.external_mentor.as_ref(),
                &self.ctx,
            ),
            Section::Abstract => render_abstract(content.abstract_text(), &self.ctx),
            Section::Keywords => render_keywords(&content.keywords, &self.ctx),
            Section::Content => render_content(&content.content, self.ctx.locale),
        }
    }

    fn project_number(&self) -> String {
        if self.ctx.locale != Locale::Secondary {
            return String::new();
        }

        match self.content.project_number.as_deref().map(str::trim) {
            Some(number) if !number.is_empty() => format!(
                "<p class=\"project-number\">{} {}</p>\n",
                escape_html(&self.ctx.settings.labels.project_number),
                escape_html(number)
            ),
            _ => String::new(),
        }
    }
}

fn render_content(text: &str, locale: Locale) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    format!("<div class=\"content\">{}</div>\n", format_free_text(text.trim(), locale))
}

fn write_stylesheet(f: &mut fmt::Formatter<'_>, settings: &LocaleSettings) -> fmt::Result {
    writeln!(f, "<style>")?;
    writeln!(f, "@page {{ margin: {}; }}", settings.page_margin)?;
    writeln!(
        f,
        "body {{ font-family: {}; font-size: {}; line-height: {}; direction: {}; }}",
        settings.font_family,
        settings.font_size,
        settings.line_height,
        settings.direction.as_css()
    )?;
    writeln!(
        f,
        ".title {{ text-align: center; font-weight: bold; font-size: {}; margin-bottom: 20pt; }}",
        settings.title_font_size
    )?;
    writeln!(f, ".project-number {{ text-align: center; margin-bottom: 20pt; }}")?;
    writeln!(f, ".students-header, .keywords-header, .abstract-header {{ font-weight: bold; margin-top: 15pt; margin-bottom: 5pt; }}")?;
    writeln!(f, ".student-line {{ margin-bottom: 8pt; }}")?;
    writeln!(f, ".mentors {{ margin-top: 15pt; margin-bottom: 15pt; }}")?;
    writeln!(f, ".mentor-line {{ margin-bottom: 5pt; }}")?;
    writeln!(f, ".institution {{ margin-bottom: 5pt; }}")?;
    writeln!(f, ".institution-name, .external-source {{ font-weight: bold; background-color: yellow; }}")?;
    writeln!(f, ".abstract, .keywords {{ margin-bottom: 8pt; }}")?;
    writeln!(f, ".content {{ white-space: pre-wrap; margin-top: 20pt; }}")?;
    writeln!(f, "</style>")
}

impl fmt::Display for HtmlDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let settings = self.ctx.settings;
        let title = escape_html(&display_title(self.content, settings));

        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(
            f,
            "<html lang=\"{}\" dir=\"{}\">",
            escape_html(&settings.lang),
            settings.direction.as_css()
        )?;
        writeln!(f, "<head>")?;
        writeln!(f, "<meta charset=\"UTF-8\">")?;
        writeln!(f, "<title>{}</title>", title)?;
        write_stylesheet(f, settings)?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;
        writeln!(f, "<div class=\"title\">{}</div>", title)?;
        f.write_str(&self.project_number())?;

        for section in &settings.section_order {
            f.write_str(&self.section(*section))?;
        }

        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}
