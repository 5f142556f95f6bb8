//! Section scorers for the compatibility rubric
//!
//! Each scorer is a pure function of its slice of the resume plus the
//! dictionary store, returning a capped sub-score and feedback entries.
//! Together the caps sum to 100: contact 10, summary 15, experience 35,
//! skills 20, education 10, keyword optimization 10.

use crate::document::{text_of, EducationEntry, ExperienceEntry, PersonalInfo};
use crate::scoring::dictionary::DictionaryStore;
use crate::scoring::patterns::MetricExtractor;
use crate::scoring::text::TextAnalyzer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Critical,
    Improvement,
    Good,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackEntry {
    pub severity: Severity,
    pub message: String,
}

impl FeedbackEntry {
    fn critical(message: impl Into<String>) -> Self {
        Self { severity: Severity::Critical, message: message.into() }
    }

    fn improvement(message: impl Into<String>) -> Self {
        Self { severity: Severity::Improvement, message: message.into() }
    }

    fn good(message: impl Into<String>) -> Self {
        Self { severity: Severity::Good, message: message.into() }
    }
}

/// Capped sub-score plus the feedback a section emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionResult {
    pub points: f64,
    pub feedback: Vec<FeedbackEntry>,
}

/// Contact details: +3 name, +3 email, +2 phone, +2 location. Below 8 the
/// resume is likely to be rejected outright, so that is the one hard
/// critical threshold of the rubric.
pub fn score_contact(personal: &PersonalInfo) -> SectionResult {
    let mut raw: f64 = 0.0;
    if text_of(&personal.full_name).is_some() {
        raw += 3.0;
    }
    if text_of(&personal.email).is_some() {
        raw += 3.0;
    }
    if text_of(&personal.phone).is_some() {
        raw += 2.0;
    }
    if text_of(&personal.location).is_some() {
        raw += 2.0;
    }

    let feedback = if raw >= 8.0 {
        vec![FeedbackEntry::good("Contact information looks complete")]
    } else {
        vec![FeedbackEntry::critical(
            "Add complete contact information: name, email, phone, and location",
        )]
    };

    SectionResult { points: raw.min(10.0), feedback }
}

/// Professional summary: prose quality plus a keyword bonus, capped at 15.
/// A missing summary is an improvement, never a critical failure.
pub fn score_summary(
    summary: &Option<String>,
    text: &TextAnalyzer,
    dictionaries: &DictionaryStore,
) -> SectionResult {
    let Some(content) = text_of(summary) else {
        return SectionResult {
            points: 0.0,
            feedback: vec![FeedbackEntry::improvement(
                "Add a professional summary that introduces your background and goals",
            )],
        };
    };

    let mut raw = text.text_quality(content) + text.writing_quality(content, dictionaries);
    if dictionaries.summary_keyword_hits(content) > 0 {
        raw += 10.0;
    }

    let feedback = if raw >= 30.0 {
        vec![FeedbackEntry::good("Strong professional summary")]
    } else {
        vec![FeedbackEntry::improvement(
            "Expand your summary with more detail and relevant keywords",
        )]
    };

    SectionResult { points: raw.min(15.0), feedback }
}

/// Work experience: base points for having entries, averaged per-entry
/// quality, then bonuses tiered on metric and action-verb totals summed
/// across all entries. Capped at 35.
pub fn score_experience(
    entries: &[ExperienceEntry],
    text: &TextAnalyzer,
    dictionaries: &DictionaryStore,
    metrics: &MetricExtractor,
) -> SectionResult {
    if entries.is_empty() {
        return SectionResult {
            points: 0.0,
            feedback: vec![FeedbackEntry::critical(
                "Add your work experience; it is the section recruiters read first",
            )],
        };
    }

    let mut feedback = Vec::new();
    let mut quality_total = 0.0;
    let mut metric_total = 0;
    let mut verb_total = 0;

    for entry in entries {
        let description = text_of(&entry.description).unwrap_or("");

        let mut quality =
            text.text_quality(description) + text.writing_quality(description, dictionaries);
        let lowered = description.to_lowercase();
        if ["result", "achieved", "delivered"].iter().any(|word| lowered.contains(word)) {
            quality += 10.0;
        }

        quality_total += quality;
        metric_total += metrics.extract(description).len();
        verb_total += dictionaries.action_verb_hits(description);
    }

    let avg_quality = quality_total / entries.len() as f64;
    let mut raw = 5.0 + avg_quality.min(15.0);

    if metric_total >= 5 {
        raw += 8.0;
        feedback.push(FeedbackEntry::good("Great use of quantifiable achievements"));
    } else if metric_total >= 3 {
        raw += 5.0;
        feedback.push(FeedbackEntry::improvement(format!(
            "Good start with {} quantified results; aim for five or more",
            metric_total
        )));
    } else {
        feedback.push(FeedbackEntry::improvement(
            "Quantify your achievements with numbers, percentages, or dollar amounts",
        ));
    }

    if verb_total >= 6 {
        raw += 7.0;
        feedback.push(FeedbackEntry::good("Strong action verbs across your experience"));
    } else if verb_total > 0 {
        raw += 3.0;
        feedback.push(FeedbackEntry::improvement(format!(
            "Only {} action verbs found; start more bullet points with verbs like \"led\" or \"delivered\"",
            verb_total
        )));
    } else {
        feedback.push(FeedbackEntry::improvement(
            "Begin each achievement with a strong action verb",
        ));
    }

    SectionResult { points: raw.min(35.0), feedback }
}

/// Splits the skills blob on its four accepted delimiters, dropping blank
/// fragments.
pub fn tokenize_skills(blob: &str) -> Vec<&str> {
    blob.split([',', '.', ';', '\n'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Skills list: tiered on token count, plus a bonus when any token matches
/// the technical or soft-skill dictionaries. Capped at 20.
pub fn score_skills(skills: &Option<String>, dictionaries: &DictionaryStore) -> SectionResult {
    let tokens = text_of(skills).map(tokenize_skills).unwrap_or_default();

    if tokens.is_empty() {
        return SectionResult {
            points: 0.0,
            feedback: vec![FeedbackEntry::improvement(
                "Add a skills section listing your core competencies",
            )],
        };
    }

    let mut raw: f64 = 5.0;
    if tokens.len() > 5 {
        raw += 5.0;
    }
    if tokens.len() > 10 {
        raw += 5.0;
    }
    if tokens.iter().any(|token| matches_skill_dictionary(token, dictionaries)) {
        raw += 5.0;
    }

    let feedback = if tokens.len() >= 5 {
        vec![FeedbackEntry::good("Good range of skills listed")]
    } else {
        vec![FeedbackEntry::improvement(format!(
            "List at least five relevant skills (you have {})",
            tokens.len()
        ))]
    };

    SectionResult { points: raw.min(20.0), feedback }
}

// The containment test runs both ways, so a short token like "go" also
// matches inside longer dictionary entries. Known overmatch, kept as-is.
fn matches_skill_dictionary(token: &str, dictionaries: &DictionaryStore) -> bool {
    let lowered = token.to_lowercase();
    dictionaries
        .technical_keywords()
        .iter()
        .chain(dictionaries.soft_skills())
        .any(|entry| entry.contains(&lowered) || lowered.contains(entry))
}

/// Education: base points for having entries plus averaged per-entry
/// completeness (school +2, degree +2, field +1). Capped at 10.
pub fn score_education(entries: &[EducationEntry]) -> SectionResult {
    if entries.is_empty() {
        return SectionResult {
            points: 0.0,
            feedback: vec![FeedbackEntry::improvement("Add your education background")],
        };
    }

    let mut completeness_total = 0.0;
    for entry in entries {
        if text_of(&entry.school).is_some() {
            completeness_total += 2.0;
        }
        if text_of(&entry.degree).is_some() {
            completeness_total += 2.0;
        }
        if text_of(&entry.field).is_some() {
            completeness_total += 1.0;
        }
    }
    let avg_completeness = completeness_total / entries.len() as f64;

    SectionResult {
        points: (5.0 + avg_completeness.min(5.0)).min(10.0),
        feedback: vec![FeedbackEntry::good("Education section present")],
    }
}

/// Keyword optimization: tiered on distinct dictionary hits over the full
/// concatenated document text. Capped at 10.
pub fn score_keywords(full_text: &str, dictionaries: &DictionaryStore) -> SectionResult {
    let hits = dictionaries.keyword_hits(full_text);

    let (points, entry) = if hits > 15 {
        (10.0, FeedbackEntry::good("Excellent keyword coverage for ATS screening"))
    } else if hits > 8 {
        (7.0, FeedbackEntry::improvement(
            "Decent keyword coverage; add more role-specific terms",
        ))
    } else if hits > 0 {
        (4.0, FeedbackEntry::improvement(
            "Low keyword coverage; weave more industry keywords into your resume",
        ))
    } else {
        (0.0, FeedbackEntry::improvement(
            "No recognizable industry keywords found; ATS filters may reject this resume",
        ))
    };

    SectionResult { points, feedback: vec![entry] }
}
