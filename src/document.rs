//! Resume document structures

use serde::{Deserialize, Serialize};

/// A resume snapshot as produced by the upstream editor.
///
/// Every field is optional on the wire; absent values are treated as
/// "missing", never as an error. The scoring engine only reads this
/// structure, it never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeDocument {
    pub personal: PersonalInfo,
    pub summary: Option<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    /// A single delimited blob (comma, period, semicolon, newline),
    /// tokenized by the engine rather than pre-split upstream.
    pub skills: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub year: Option<String>,
}

/// Returns the trimmed text of an optional field, or `None` when the field
/// is absent or blank.
pub fn text_of(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

impl ResumeDocument {
    /// Concatenates every text field into one newline-joined blob, used for
    /// document-wide keyword scans.
    pub fn full_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();

        let personal = [
            &self.personal.full_name,
            &self.personal.email,
            &self.personal.phone,
            &self.personal.location,
            &self.personal.website,
        ];
        parts.extend(personal.into_iter().filter_map(text_of));

        parts.extend(text_of(&self.summary));

        for entry in &self.experience {
            let fields = [
                &entry.company,
                &entry.position,
                &entry.start_date,
                &entry.end_date,
                &entry.description,
            ];
            parts.extend(fields.into_iter().filter_map(text_of));
        }

        for entry in &self.education {
            let fields = [&entry.school, &entry.degree, &entry.field, &entry.year];
            parts.extend(fields.into_iter().filter_map(text_of));
        }

        parts.extend(text_of(&self.skills));

        parts.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_of_blank_fields() {
        assert_eq!(text_of(&None), None);
        assert_eq!(text_of(&Some("".to_string())), None);
        assert_eq!(text_of(&Some("   ".to_string())), None);
        assert_eq!(text_of(&Some("  hello ".to_string())), Some("hello"));
    }

    #[test]
    fn test_full_text_empty_document() {
        let doc = ResumeDocument::default();
        assert_eq!(doc.full_text(), "");
    }

    #[test]
    fn test_full_text_collects_all_fields() {
        let doc = ResumeDocument {
            personal: PersonalInfo {
                full_name: Some("Jane Rivera".to_string()),
                email: Some("jane@example.com".to_string()),
                ..Default::default()
            },
            summary: Some("Engineering lead.".to_string()),
            experience: vec![ExperienceEntry {
                company: Some("Acme".to_string()),
                description: Some("Shipped things.".to_string()),
                ..Default::default()
            }],
            education: vec![EducationEntry {
                school: Some("State University".to_string()),
                ..Default::default()
            }],
            skills: Some("Python, Rust".to_string()),
        };

        let text = doc.full_text();
        assert!(text.contains("Jane Rivera"));
        assert!(text.contains("Engineering lead."));
        assert!(text.contains("Acme"));
        assert!(text.contains("State University"));
        assert!(text.contains("Python, Rust"));
    }

    #[test]
    fn test_deserializes_camel_case_snapshot() {
        let json = r#"{
            "personal": {"fullName": "Jane Rivera", "email": "jane@example.com"},
            "experience": [{"company": "Acme", "startDate": "2020"}]
        }"#;

        let doc: ResumeDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.personal.full_name.as_deref(), Some("Jane Rivera"));
        assert_eq!(doc.experience[0].start_date.as_deref(), Some("2020"));
        assert!(doc.summary.is_none());
        assert!(doc.education.is_empty());
    }
}
