/*!
 * Persisted form snapshot.
 *
 * The surrounding form autosaves its state as a flat record mirroring
 * `DocumentContent` plus a last-saved timestamp. `language` and `title`
 * are required; every other field falls back to empty when missing.
 */

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::locale::Locale;
use crate::model::{DocumentContent, ExternalMentor, Institution, Mentor, Student};

/// Student as stored by the form (email always present, possibly blank)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StudentRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Mentor as stored by older forms, which kept the institution's name
/// on the mentor instead of a separate institution list
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LegacyInstructor {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub name: String,
    /// Institution name
    #[serde(default)]
    pub institution: String,
}

/// Flat snapshot of the form state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub language: Locale,

    pub title: String,

    #[serde(default)]
    pub project_number: String,

    #[serde(default)]
    pub students: Vec<StudentRecord>,

    #[serde(default)]
    pub institutions: Vec<Institution>,

    #[serde(default)]
    pub mentors: Vec<Mentor>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instructors: Vec<LegacyInstructor>,

    #[serde(default, alias = "hasExternalInstructor")]
    pub has_external_mentor: bool,

    #[serde(default, alias = "externalInstructor")]
    pub external_mentor: ExternalMentor,

    #[serde(default, rename = "abstract")]
    pub abstract_text: String,

    #[serde(default)]
    pub keywords: String,

    #[serde(default)]
    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_saved: Option<DateTime<Utc>>,
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl FormSnapshot {
    /// Record the given content, stamped with `saved_at`
    pub fn capture(content: &DocumentContent, saved_at: DateTime<Utc>) -> Self {
        Self {
            language: content.locale,
            title: content.title.clone(),
            project_number: content.project_number.clone().unwrap_or_default(),
            students: content
                .students
                .iter()
                .map(|s| StudentRecord {
                    name: s.name.clone(),
                    email: s.email.clone().unwrap_or_default(),
                })
                .collect(),
            institutions: content.institutions.clone(),
            mentors: content.mentors.clone(),
            instructors: Vec::new(),
            has_external_mentor: content.external_mentor.is_some(),
            external_mentor: content.external_mentor.clone().unwrap_or_default(),
            abstract_text: content.abstract_text.clone().unwrap_or_default(),
            keywords: content.keywords.clone(),
            content: content.content.clone(),
            last_saved: Some(saved_at),
        }
    }

    /// Build render input from the snapshot
    pub fn to_content(&self) -> DocumentContent {
        let (institutions, mentors) = self.resolve_mentors();
        DocumentContent {
            locale: self.language,
            title: self.title.clone(),
            project_number: non_blank(&self.project_number),
            students: self
                .students
                .iter()
                .map(|s| Student {
                    name: s.name.clone(),
                    email: non_blank(&s.email),
                })
                .collect(),
            institutions,
            mentors,
            external_mentor: self
                .has_external_mentor
                .then(|| self.external_mentor.clone()),
            abstract_text: non_blank(&self.abstract_text),
            keywords: self.keywords.clone(),
            content: self.content.clone(),
        }
    }

    // @resolves: Legacy instructors into mentors, adding one institution per distinct name
    fn resolve_mentors(&self) -> (Vec<Institution>, Vec<Mentor>) {
        let mut institutions = self.institutions.clone();
        let mut mentors = self.mentors.clone();

        for instructor in &self.instructors {
            let name = instructor.institution.trim();
            let institution_id = if name.is_empty() {
                String::new()
            } else if let Some(existing) = institutions.iter().find(|inst| inst.name.trim() == name) {
                existing.id.clone()
            } else {
                let id = format!("legacy-{}", institutions.len() + 1);
                debug!("Created institution {} for legacy name '{}'", id, name);
                institutions.push(Institution::new(&id, name));
                id
            };

            mentors.push(Mentor::new(&instructor.id, &instructor.title, &instructor.name, &institution_id));
        }

        (institutions, mentors)
    }

    /// Parse a snapshot from JSON text
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Reads and writes snapshots as JSON files
pub struct SnapshotStore;

impl SnapshotStore {
    /// Load a snapshot file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<FormSnapshot, AppError> {
        let path = path.as_ref();
        let json = FileManager::read_to_string(path).map_err(|e| AppError::File(format!("{:#}", e)))?;
        let snapshot = FormSnapshot::from_json(&json)
            .map_err(|e| AppError::Snapshot(format!("{:?}: {}", path, e)))?;
        debug!("Loaded snapshot {:?} ({})", path, snapshot.language);
        Ok(snapshot)
    }

    /// Write a snapshot file, creating parent directories as needed
    pub fn save<P: AsRef<Path>>(path: P, snapshot: &FormSnapshot) -> Result<(), AppError> {
        let json = snapshot.to_json()?;
        FileManager::write_to_file(path.as_ref(), &json).map_err(|e| AppError::File(format!("{:#}", e)))?;
        Ok(())
    }
}
