//! Static keyword dictionaries and substring matchers

use crate::error::{Result, ResumeScorerError};
use aho_corasick::AhoCorasick;
use std::collections::HashSet;

/// Verbs that signal ownership of an achievement.
const ACTION_VERBS: &[&str] = &[
    "achieved",
    "built",
    "collaborated",
    "coordinated",
    "created",
    "delivered",
    "designed",
    "developed",
    "directed",
    "established",
    "improved",
    "increased",
    "launched",
    "led",
    "managed",
    "mentored",
    "negotiated",
    "optimized",
    "organized",
    "reduced",
    "spearheaded",
    "streamlined",
    "supervised",
    "transformed",
];

/// Technical terms ATS filters commonly screen for.
const TECHNICAL_KEYWORDS: &[&str] = &[
    "python",
    "javascript",
    "typescript",
    "java",
    "rust",
    "go",
    "c++",
    "sql",
    "html",
    "css",
    "react",
    "angular",
    "vue",
    "node",
    "express",
    "django",
    "flask",
    "spring",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "git",
    "linux",
    "graphql",
    "rest",
    "api",
    "microservices",
    "postgresql",
    "mongodb",
    "redis",
    "kafka",
    "machine learning",
    "data analysis",
    "ci/cd",
    "agile",
    "scrum",
    "excel",
];

const SOFT_SKILLS: &[&str] = &[
    "leadership",
    "communication",
    "teamwork",
    "collaboration",
    "problem solving",
    "critical thinking",
    "adaptability",
    "creativity",
    "time management",
    "attention to detail",
    "work ethic",
    "conflict resolution",
    "decision making",
    "mentoring",
    "empathy",
];

/// Filler phrasing that weakens achievement descriptions.
const WEAK_PHRASES: &[&str] = &[
    "responsible for",
    "duties included",
    "worked on",
    "helped with",
    "assisted with",
    "in charge of",
    "tasked with",
    "participated in",
    "familiar with",
    "exposure to",
];

/// Immutable store of the reference phrase sets, with prebuilt automata for
/// case-insensitive substring scans.
///
/// Membership is substring containment, not whole-word matching: "react"
/// matches inside "reactive". That imprecision is part of the scoring
/// contract and must not be tightened to token-boundary matching.
pub struct DictionaryStore {
    verb_matcher: AhoCorasick,
    summary_matcher: AhoCorasick,
    combined_matcher: AhoCorasick,
    weak_matcher: AhoCorasick,
}

impl DictionaryStore {
    pub fn new() -> Result<Self> {
        let summary_patterns = TECHNICAL_KEYWORDS.iter().chain(SOFT_SKILLS);
        let combined_patterns = ACTION_VERBS
            .iter()
            .chain(TECHNICAL_KEYWORDS)
            .chain(SOFT_SKILLS);

        Ok(Self {
            verb_matcher: build_matcher(ACTION_VERBS.iter())?,
            summary_matcher: build_matcher(summary_patterns)?,
            combined_matcher: build_matcher(combined_patterns)?,
            weak_matcher: build_matcher(WEAK_PHRASES.iter())?,
        })
    }

    /// Count of distinct action verbs occurring in the text.
    pub fn action_verb_hits(&self, text: &str) -> usize {
        distinct_hits(&self.verb_matcher, text)
    }

    /// Count of distinct technical keywords and soft skills occurring in the
    /// text.
    pub fn summary_keyword_hits(&self, text: &str) -> usize {
        distinct_hits(&self.summary_matcher, text)
    }

    /// Count of distinct entries across all three keyword sets (action verbs,
    /// technical keywords, soft skills) occurring in the text. The sets are
    /// disjoint, so no cross-set deduplication is needed.
    pub fn keyword_hits(&self, text: &str) -> usize {
        distinct_hits(&self.combined_matcher, text)
    }

    /// Whether any weak phrase occurs in the text.
    pub fn has_weak_phrase(&self, text: &str) -> bool {
        self.weak_matcher.is_match(text)
    }

    pub fn technical_keywords(&self) -> &'static [&'static str] {
        TECHNICAL_KEYWORDS
    }

    pub fn soft_skills(&self) -> &'static [&'static str] {
        SOFT_SKILLS
    }
}

impl Default for DictionaryStore {
    fn default() -> Self {
        Self::new().expect("Failed to build dictionary store")
    }
}

fn build_matcher<'a, I>(patterns: I) -> Result<AhoCorasick>
where
    I: IntoIterator<Item = &'a &'static str>,
{
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(patterns.into_iter().copied())
        .map_err(|e| ResumeScorerError::Processing(format!("Failed to build keyword matcher: {}", e)))
}

/// Distinct patterns present anywhere in the text. Overlapping search so a
/// pattern nested inside another pattern's match still counts (e.g. "sql"
/// inside "postgresql").
fn distinct_hits(matcher: &AhoCorasick, text: &str) -> usize {
    let mut seen = HashSet::new();
    for mat in matcher.find_overlapping_iter(text) {
        seen.insert(mat.pattern());
    }
    seen.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hits_are_distinct_not_frequency() {
        let store = DictionaryStore::new().unwrap();
        assert_eq!(store.keyword_hits("python"), store.keyword_hits("python python python"));
    }

    #[test]
    fn test_case_insensitive_substring_containment() {
        let store = DictionaryStore::new().unwrap();
        // Substring semantics: "react" matches inside "Reactive".
        assert!(store.summary_keyword_hits("Reactive systems") >= 1);
        assert!(store.action_verb_hits("LED the team") >= 1);
    }

    #[test]
    fn test_nested_patterns_both_count() {
        let store = DictionaryStore::new().unwrap();
        // "postgresql" contains "sql", both are dictionary entries.
        assert!(store.summary_keyword_hits("postgresql") >= 2);
    }

    #[test]
    fn test_weak_phrase_detection() {
        let store = DictionaryStore::new().unwrap();
        assert!(store.has_weak_phrase("Responsible for the build system"));
        assert!(!store.has_weak_phrase("Owned the build system"));
    }

    #[test]
    fn test_keyword_sets_are_disjoint() {
        let mut seen = HashSet::new();
        for phrase in ACTION_VERBS
            .iter()
            .chain(TECHNICAL_KEYWORDS)
            .chain(SOFT_SKILLS)
        {
            assert!(seen.insert(*phrase), "duplicate dictionary entry: {}", phrase);
        }
    }

    #[test]
    fn test_dictionaries_are_lowercase() {
        for phrase in ACTION_VERBS
            .iter()
            .chain(TECHNICAL_KEYWORDS)
            .chain(SOFT_SKILLS)
            .chain(WEAK_PHRASES)
        {
            assert_eq!(*phrase, phrase.to_lowercase());
        }
    }

    #[test]
    fn test_empty_text_has_no_hits() {
        let store = DictionaryStore::new().unwrap();
        assert_eq!(store.keyword_hits(""), 0);
        assert!(!store.has_weak_phrase(""));
    }
}
