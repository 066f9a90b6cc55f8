/*!
 * Mentors and institutions section.
 *
 * All named mentors share one line, followed by one line per qualifying
 * institution. An institution qualifies when it has a name and at least one
 * named mentor. With more than one qualifying institution the section runs
 * in multi-institution mode: institutions get 1-based indices in declaration
 * order, and both the mentors and the institution lines carry the matching
 * superscript.
 */

use std::collections::HashSet;

use log::debug;

use crate::formatting::{escape_html, format_institution_name};
use crate::locale::{Locale, LocaleSettings};
use crate::model::{ExternalMentor, Institution, Mentor};
use crate::render::RenderContext;

/// An institution that appears on the page, with its named mentors
#[derive(Debug, Clone)]
pub struct QualifyingInstitution<'a> {
    /// 1-based position among qualifying institutions
    pub index: usize,
    pub institution: &'a Institution,
    pub mentors: Vec<&'a Mentor>,
}

/// Find the qualifying institutions in declaration order.
///
/// Mentors whose institution is missing or unnamed are left out.
pub fn qualifying_institutions<'a>(
    institutions: &'a [Institution],
    mentors: &'a [Mentor],
) -> Vec<QualifyingInstitution<'a>> {
    let mut seen_ids = HashSet::new();
    let mut qualifying = Vec::new();

    for institution in institutions {
        if !seen_ids.insert(institution.id.as_str()) || !institution.is_named() {
            continue;
        }

        let members: Vec<&Mentor> = mentors
            .iter()
            .filter(|m| m.institution_id == institution.id && m.is_named())
            .collect();

        if !members.is_empty() {
            qualifying.push(QualifyingInstitution {
                index: qualifying.len() + 1,
                institution,
                mentors: members,
            });
        }
    }

    qualifying
}

/// True when `name` already contains one of the locale's degree titles as a
/// whole whitespace-separated token
pub fn name_has_degree_title(name: &str, settings: &LocaleSettings) -> bool {
    name.split_whitespace().any(|token| settings.is_degree_title(token))
}

/// Mentor name with its degree title prepended, unless the name already
/// carries one
pub fn mentor_display_name(title: &str, name: &str, settings: &LocaleSettings) -> String {
    let name = name.trim();
    let title = title.trim();

    if title.is_empty() || name_has_degree_title(name, settings) {
        name.to_string()
    } else {
        format!("{} {}", title, name)
    }
}

fn superscript(index: usize) -> String {
    format!("<sup>{}</sup>", index)
}

fn external_entry(mentor: &ExternalMentor, ctx: &RenderContext<'_>) -> String {
    let mut entry = escape_html(&mentor_display_name(&mentor.title, &mentor.name, ctx.settings));

    let source = mentor.source.trim();
    if !source.is_empty() {
        entry.push_str(&format!(
            " <span class=\"external-source\">({})</span>",
            escape_html(&format_institution_name(source, ctx.locale))
        ));
    }

    entry
}

/// Render the mentors line and institution lines.
///
/// Returns an empty string when there is neither a qualifying institution
/// nor a named external mentor.
pub fn render_mentors(
    institutions: &[Institution],
    mentors: &[Mentor],
    external: Option<&ExternalMentor>,
    ctx: &RenderContext<'_>,
) -> String {
    let qualifying = qualifying_institutions(institutions, mentors);
    let external = external.filter(|m| m.is_named());

    if qualifying.is_empty() && external.is_none() {
        return String::new();
    }

    let multi_institution = qualifying.len() > 1;
    if multi_institution {
        debug!(
            "Multi-institution mode: {} qualifying institutions",
            qualifying.len()
        );
    }

    let mut entries = Vec::new();
    for group in &qualifying {
        for mentor in &group.mentors {
            let mut entry = escape_html(&mentor_display_name(&mentor.title, &mentor.name, ctx.settings));
            if multi_institution {
                entry.push_str(&superscript(group.index));
            }
            entries.push(entry);
        }
    }

    if let Some(mentor) = external {
        entries.push(external_entry(mentor, ctx));
    }

    let labels = &ctx.settings.labels;
    let label = escape_html(if entries.len() > 1 { &labels.advisors } else { &labels.advisor });
    let label = match ctx.locale {
        Locale::Secondary => format!("<strong>{}</strong>", label),
        Locale::Primary => label,
    };

    let mut html = String::from("<div class=\"mentors\">\n");
    html.push_str(&format!(
        "<p class=\"mentor-line\">{} {}</p>\n",
        label,
        entries.join(", ")
    ));

    for group in &qualifying {
        let index = if multi_institution {
            superscript(group.index)
        } else {
            String::new()
        };
        html.push_str(&format!(
            "<p class=\"institution\">{}<span class=\"institution-name\">{}</span></p>\n",
            index,
            escape_html(&format_institution_name(group.institution.name.trim(), ctx.locale))
        ));
    }

    html.push_str("</div>\n");
    html
}
