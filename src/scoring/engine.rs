//! Scoring engine: runs the section scorers and assembles the report

use crate::document::{text_of, ResumeDocument};
use crate::error::Result;
use crate::scoring::dictionary::DictionaryStore;
use crate::scoring::patterns::MetricExtractor;
use crate::scoring::sections::{self, SectionResult, Severity};
use crate::scoring::text::TextAnalyzer;
use log::debug;
use serde::{Deserialize, Serialize};

/// Compatibility report for one resume snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Normalized compatibility score, 0 to 100.
    pub score: u8,
    pub feedback: Feedback,
    pub details: ScoreDetails,
}

/// Feedback bucketed by severity. Entries keep the order the section
/// scorers emitted them in; nothing is reordered or deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub critical: Vec<String>,
    pub improvements: Vec<String>,
    pub good: Vec<String>,
}

/// Document-wide counters, recomputed over the full document at assembly
/// time rather than reused from scorer-internal sums. The duplication is
/// deliberate: the reported counters must reflect one extraction regime
/// applied to the whole document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetails {
    /// Distinct dictionary keywords found anywhere in the document.
    pub keywords_found: usize,
    /// Extracted metrics across all experience descriptions.
    pub metrics_found: usize,
    /// Action-verb hits across all experience descriptions.
    pub action_verbs_found: usize,
}

/// Stateless scoring engine. Construct once, share freely: the dictionaries
/// and compiled patterns are immutable, so one instance can serve any
/// number of concurrent `score` calls.
pub struct ScoringEngine {
    dictionaries: DictionaryStore,
    text: TextAnalyzer,
    metrics: MetricExtractor,
}

impl ScoringEngine {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dictionaries: DictionaryStore::new()?,
            text: TextAnalyzer::new(),
            metrics: MetricExtractor::new(),
        })
    }

    /// Score a resume snapshot.
    ///
    /// Never fails: absent or malformed fields contribute zero to their
    /// sub-score and surface as "missing" feedback instead of errors.
    /// Identical input always produces an identical report.
    pub fn score(&self, resume: &ResumeDocument) -> ScoreReport {
        let full_text = resume.full_text();

        // Scorer order is a contract: feedback buckets concatenate in this
        // exact order.
        let results = [
            sections::score_contact(&resume.personal),
            sections::score_summary(&resume.summary, &self.text, &self.dictionaries),
            sections::score_experience(
                &resume.experience,
                &self.text,
                &self.dictionaries,
                &self.metrics,
            ),
            sections::score_skills(&resume.skills, &self.dictionaries),
            sections::score_education(&resume.education),
            sections::score_keywords(&full_text, &self.dictionaries),
        ];

        let total: f64 = results.iter().map(|result| result.points).sum();
        let score = total.clamp(0.0, 100.0).round() as u8;

        let feedback = collect_feedback(&results);
        let details = self.compute_details(resume, &full_text);

        debug!(
            "resume scored: total={:.1} keywords={} metrics={} verbs={}",
            total, details.keywords_found, details.metrics_found, details.action_verbs_found
        );

        ScoreReport { score, feedback, details }
    }

    fn compute_details(&self, resume: &ResumeDocument, full_text: &str) -> ScoreDetails {
        let mut metrics_found = 0;
        let mut action_verbs_found = 0;
        for entry in &resume.experience {
            let description = text_of(&entry.description).unwrap_or("");
            metrics_found += self.metrics.extract(description).len();
            action_verbs_found += self.dictionaries.action_verb_hits(description);
        }

        ScoreDetails {
            keywords_found: self.dictionaries.keyword_hits(full_text),
            metrics_found,
            action_verbs_found,
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new().expect("Failed to create default scoring engine")
    }
}

fn collect_feedback(results: &[SectionResult]) -> Feedback {
    let mut feedback = Feedback::default();
    for result in results {
        for entry in &result.feedback {
            let bucket = match entry.severity {
                Severity::Critical => &mut feedback.critical,
                Severity::Improvement => &mut feedback.improvements,
                Severity::Good => &mut feedback.good,
            };
            bucket.push(entry.message.clone());
        }
    }
    feedback
}
