/*!
 * Field formatters.
 *
 * Locale-aware transforms that turn a single form field into its display
 * form. Every formatter accepts the empty string and returns it unchanged.
 * All formatters return plain text except `format_free_text`, which returns
 * markup (escaped text with explicit line breaks).
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::locale::Locale;

/// Any line ending: CRLF, CR or LF
static LINE_BREAK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\r\n|\r|\n").expect("Invalid line break regex")
});

/// A run of non-whitespace characters
static WORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\S+").expect("Invalid word regex")
});

/// Separator between keywords and between secondary-locale students
pub const LIST_SEPARATOR: &str = " ; ";

/// Format a person's name.
///
/// In the secondary locale the first name is lowercased and the surname
/// (every remaining token) is uppercased. Single-token names are returned
/// unchanged in both locales.
pub fn format_person_name(name: &str, locale: Locale) -> String {
    if locale == Locale::Primary {
        return name.to_string();
    }

    let parts: Vec<&str> = name.split_whitespace().collect();
    if parts.len() < 2 {
        return name.to_string();
    }

    let first_name = parts[0].to_lowercase();
    let surname = parts[1..].join(" ").to_uppercase();
    format!("{} {}", first_name, surname)
}

/// Email addresses are always lowercased
pub fn format_email(email: &str) -> String {
    email.to_lowercase()
}

/// Title-case every whitespace-delimited word in the secondary locale.
/// Separators are kept as they are.
pub fn format_title(text: &str, locale: Locale) -> String {
    if locale == Locale::Primary {
        return text.to_string();
    }

    WORD_REGEX
        .replace_all(text, |caps: &regex::Captures| capitalize_word(&caps[0]))
        .into_owned()
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut result: String = first.to_uppercase().collect();
            result.push_str(&chars.as_str().to_lowercase());
            result
        }
        None => String::new(),
    }
}

/// Split a comma-separated keyword list into trimmed, non-empty tokens
pub fn split_keywords(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .collect()
}

/// Normalize a comma-separated keyword list to `a ; b ; c`.
///
/// Keywords are lowercased in the secondary locale only.
pub fn format_keyword_list(raw: &str, locale: Locale) -> String {
    let keywords = split_keywords(raw);

    match locale {
        Locale::Secondary => keywords
            .iter()
            .map(|k| k.to_lowercase())
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR),
        Locale::Primary => keywords.join(LIST_SEPARATOR),
    }
}

/// Institution names are uppercased in the secondary locale
pub fn format_institution_name(name: &str, locale: Locale) -> String {
    match locale {
        Locale::Secondary => name.to_uppercase(),
        Locale::Primary => name.to_string(),
    }
}

/// Format a free-text block as markup.
///
/// The secondary locale forces a single paragraph by turning every line
/// ending into a space; the primary locale keeps them as `<br>`.
pub fn format_free_text(text: &str, locale: Locale) -> String {
    let escaped = escape_html(text);
    let replacement = match locale {
        Locale::Secondary => " ",
        Locale::Primary => "<br>",
    };
    LINE_BREAK_REGEX.replace_all(&escaped, replacement).into_owned()
}

/// Escape user text so it cannot open or close tags in the output
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_html_into(&mut out, text);
    out
}

/// HTML-escape a string into the output buffer.
pub fn escape_html_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
