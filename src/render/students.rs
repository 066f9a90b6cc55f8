/*!
 * Students section.
 */

use crate::formatting::{escape_html, format_email, format_person_name, LIST_SEPARATOR};
use crate::locale::Locale;
use crate::model::Student;
use crate::render::RenderContext;

/// Plain-text `name [; email]` line for one student
pub fn format_student_line(student: &Student, locale: Locale) -> String {
    let name = format_person_name(student.name.trim(), locale);
    match student.email() {
        Some(email) => format!("{}{}{}", name, LIST_SEPARATOR, format_email(email)),
        None => name,
    }
}

/// Render the students section.
///
/// The secondary locale puts every student on one semicolon-delimited
/// paragraph; the primary locale gives each student a paragraph of its own.
/// Nameless students are skipped and an empty list renders nothing.
pub fn render_students(students: &[Student], ctx: &RenderContext<'_>) -> String {
    let lines: Vec<String> = students
        .iter()
        .filter(|s| s.is_named())
        .map(|s| escape_html(&format_student_line(s, ctx.locale)))
        .collect();

    if lines.is_empty() {
        return String::new();
    }

    let mut html = format!(
        "<p class=\"students-header\">{}</p>\n",
        escape_html(&ctx.settings.labels.students_header)
    );

    match ctx.locale {
        Locale::Secondary => {
            html.push_str(&format!(
                "<p class=\"student-line\">{}</p>\n",
                lines.join(LIST_SEPARATOR)
            ));
        }
        Locale::Primary => {
            for line in &lines {
                html.push_str(&format!("<p class=\"student-line\">{}</p>\n", line));
            }
        }
    }

    html
}
