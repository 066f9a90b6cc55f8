/*!
 * Keywords section.
 */

use crate::formatting::{escape_html, format_keyword_list};
use crate::locale::Locale;
use crate::render::RenderContext;

/// Render the keywords section, or nothing when no keyword survives trimming
pub fn render_keywords(raw: &str, ctx: &RenderContext<'_>) -> String {
    let keywords = format_keyword_list(raw, ctx.locale);
    if keywords.is_empty() {
        return String::new();
    }

    let label = escape_html(&ctx.settings.labels.keywords_header);
    let keywords = escape_html(&keywords);

    match ctx.locale {
        Locale::Secondary => format!(
            "<p class=\"keywords-header\"><strong>{}</strong> {}</p>\n",
            label, keywords
        ),
        Locale::Primary => format!(
            "<p class=\"keywords-header\">{}</p>\n<p class=\"keywords\">{}</p>\n",
            label, keywords
        ),
    }
}
