/*!
 * Document content model.
 *
 * These types are the immutable input of a single render call. The
 * surrounding form owns mutation; a `DocumentContent` is built from the
 * current form state right before rendering and dropped afterwards.
 */

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// A student listed on the document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Student {
    pub name: String,

    /// Passed through verbatim (lowercased) even when malformed
    #[serde(default)]
    pub email: Option<String>,
}

impl Student {
    pub fn new(name: &str, email: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            email: email.map(|e| e.to_string()),
        }
    }

    /// Students without a name are not rendered
    pub fn is_named(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Email with surrounding whitespace removed, `None` when blank
    pub fn email(&self) -> Option<&str> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }
}

/// An institution mentors belong to
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Institution {
    /// Unique within a document
    pub id: String,
    pub name: String,
}

impl Institution {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    pub fn is_named(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// A mentor affiliated with one of the document's institutions
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Mentor {
    pub id: String,

    /// One of the locale's degree titles
    #[serde(default)]
    pub title: String,

    pub name: String,

    /// Non-owning reference to `Institution::id`
    #[serde(default, rename = "institutionId", alias = "institution_id")]
    pub institution_id: String,
}

impl Mentor {
    pub fn new(id: &str, title: &str, name: &str, institution_id: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            name: name.to_string(),
            institution_id: institution_id.to_string(),
        }
    }

    pub fn is_named(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// A mentor from outside the listed institutions
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExternalMentor {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub name: String,

    /// Company or other institution the mentor comes from
    #[serde(default)]
    pub source: String,
}

impl ExternalMentor {
    pub fn new(title: &str, name: &str, source: &str) -> Self {
        Self {
            title: title.to_string(),
            name: name.to_string(),
            source: source.to_string(),
        }
    }

    pub fn is_named(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Everything needed to render one document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentContent {
    pub locale: Locale,
    pub title: String,
    /// Only rendered in the secondary locale
    pub project_number: Option<String>,
    pub students: Vec<Student>,
    pub institutions: Vec<Institution>,
    pub mentors: Vec<Mentor>,
    pub external_mentor: Option<ExternalMentor>,
    pub abstract_text: Option<String>,
    /// Comma-separated keyword list
    pub keywords: String,
    /// Free-text content
    pub content: String,
}

impl DocumentContent {
    /// Create an empty document in the given locale
    pub fn new(locale: Locale, title: &str) -> Self {
        Self {
            locale,
            title: title.to_string(),
            ..Self::default()
        }
    }

    pub fn with_student(mut self, student: Student) -> Self {
        self.students.push(student);
        self
    }

    pub fn with_institution(mut self, institution: Institution) -> Self {
        self.institutions.push(institution);
        self
    }

    pub fn with_mentor(mut self, mentor: Mentor) -> Self {
        self.mentors.push(mentor);
        self
    }

    pub fn with_external_mentor(mut self, mentor: ExternalMentor) -> Self {
        self.external_mentor = Some(mentor);
        self
    }

    pub fn with_project_number(mut self, project_number: &str) -> Self {
        self.project_number = Some(project_number.to_string());
        self
    }

    pub fn with_abstract(mut self, text: &str) -> Self {
        self.abstract_text = Some(text.to_string());
        self
    }

    pub fn with_keywords(mut self, keywords: &str) -> Self {
        self.keywords = keywords.to_string();
        self
    }

    pub fn with_content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    /// Look up an institution by id
    pub fn institution(&self, id: &str) -> Option<&Institution> {
        self.institutions.iter().find(|inst| inst.id == id)
    }

    /// Students that will appear on the page
    pub fn named_students(&self) -> impl Iterator<Item = &Student> {
        self.students.iter().filter(|s| s.is_named())
    }

    /// Abstract text, `None` when blank
    pub fn abstract_text(&self) -> Option<&str> {
        self.abstract_text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}
