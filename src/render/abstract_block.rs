/*!
 * Abstract section.
 */

use crate::formatting::{escape_html, format_free_text};
use crate::locale::Locale;
use crate::render::RenderContext;

/// Render the abstract header and paragraph, or nothing for a blank abstract
pub fn render_abstract(text: Option<&str>, ctx: &RenderContext<'_>) -> String {
    let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) else {
        return String::new();
    };

    let label = escape_html(&ctx.settings.labels.abstract_header);
    let header = match ctx.locale {
        Locale::Secondary => format!("<strong>{}</strong>", label),
        Locale::Primary => label,
    };

    format!(
        "<p class=\"abstract-header\">{}</p>\n<p class=\"abstract\">{}</p>\n",
        header,
        format_free_text(text, ctx.locale)
    )
}
