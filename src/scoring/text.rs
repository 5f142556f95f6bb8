//! Prose quality heuristics for free-text blocks

use crate::scoring::dictionary::DictionaryStore;
use regex::Regex;

/// Upper bound of [`TextAnalyzer::text_quality`].
pub const TEXT_QUALITY_MAX: f64 = 50.0;

/// Upper bound of [`TextAnalyzer::writing_quality`].
pub const WRITING_QUALITY_MAX: f64 = 45.0;

/// Scores depth and hygiene of free-text blocks (summary, experience
/// descriptions). Pure functions of the text; the analyzer only carries
/// compiled regexes.
pub struct TextAnalyzer {
    repeated_punct: Regex,
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextAnalyzer {
    pub fn new() -> Self {
        let repeated_punct = Regex::new(r"[.!?]{2,}").expect("Invalid punctuation regex");

        Self { repeated_punct }
    }

    /// Rewards depth, not just length. Capped at 50.
    ///
    /// Length bonuses are cumulative (+15 over 30 chars, +10 over 80, +10
    /// over 150), sentence-count bonuses reward at least two and three
    /// sentences, and an average of strictly between 10 and 25 words per
    /// sentence earns a readability bonus.
    pub fn text_quality(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }

        let mut score: f64 = 0.0;

        let length = text.chars().count();
        if length > 30 {
            score += 15.0;
        }
        if length > 80 {
            score += 10.0;
        }
        if length > 150 {
            score += 10.0;
        }

        let sentences: Vec<&str> = text
            .split(['.', '!', '?'])
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .collect();

        if sentences.len() >= 2 {
            score += 10.0;
        }
        if sentences.len() >= 3 {
            score += 5.0;
        }

        if !sentences.is_empty() {
            let word_total: usize = sentences
                .iter()
                .map(|sentence| sentence.split_whitespace().count())
                .sum();
            let avg_words = word_total as f64 / sentences.len() as f64;
            if avg_words > 10.0 && avg_words < 25.0 {
                score += 15.0;
            }
        }

        score.min(TEXT_QUALITY_MAX)
    }

    /// Writing hygiene: no weak phrases, no double spaces, no repeated
    /// sentence-ending punctuation, capitalized opening. Capped at 45 by
    /// construction.
    pub fn writing_quality(&self, text: &str, dictionaries: &DictionaryStore) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }

        let mut score: f64 = 0.0;

        if !dictionaries.has_weak_phrase(text) {
            score += 20.0;
        }
        if !text.contains("  ") {
            score += 10.0;
        }
        if !self.repeated_punct.is_match(text) {
            score += 10.0;
        }
        if let Some(first) = text.chars().next() {
            if first.to_uppercase().to_string() == first.to_string() {
                score += 5.0;
            }
        }

        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> (TextAnalyzer, DictionaryStore) {
        (TextAnalyzer::new(), DictionaryStore::new().unwrap())
    }

    #[test]
    fn test_empty_text_scores_zero() {
        let (text, dicts) = analyzer();
        assert_eq!(text.text_quality(""), 0.0);
        assert_eq!(text.text_quality("   \n "), 0.0);
        assert_eq!(text.writing_quality("", &dicts), 0.0);
    }

    #[test]
    fn test_length_bonuses_are_cumulative() {
        let (text, _) = analyzer();
        assert_eq!(text.text_quality("short text"), 0.0);
        // 31+ chars, single three-word sentence: length bonus only.
        assert_eq!(text.text_quality("aaaaaaaaaa aaaaaaaaaa aaaaaaaaaa"), 15.0);
    }

    #[test]
    fn test_sentence_and_pacing_bonuses() {
        let (text, _) = analyzer();
        // Three sentences averaging between 10 and 25 words each: all
        // bonuses apply and the cap kicks in.
        let prose = "Shipped a developer platform used across the whole company every day. \
                     Partnered closely with product teams to cut onboarding time in half. \
                     Ran the weekly review that kept quality high for two years running.";
        assert_eq!(text.text_quality(prose), TEXT_QUALITY_MAX);
    }

    #[test]
    fn test_telegraphic_prose_misses_pacing_bonus() {
        let (text, _) = analyzer();
        // Two sentences of four words each: no pacing bonus.
        let prose = "Did many things here. Also some other things.";
        assert_eq!(text.text_quality(prose), 15.0 + 10.0);
    }

    #[test]
    fn test_clean_writing_scores_full_marks() {
        let (text, dicts) = analyzer();
        assert_eq!(text.writing_quality("Led the platform team.", &dicts), WRITING_QUALITY_MAX);
    }

    #[test]
    fn test_weak_phrase_costs_twenty() {
        let (text, dicts) = analyzer();
        assert_eq!(
            text.writing_quality("Responsible for the platform team.", &dicts),
            WRITING_QUALITY_MAX - 20.0
        );
    }

    #[test]
    fn test_double_space_and_repeated_punctuation() {
        let (text, dicts) = analyzer();
        assert_eq!(text.writing_quality("Led the  team.", &dicts), WRITING_QUALITY_MAX - 10.0);
        assert_eq!(text.writing_quality("Led the team!!", &dicts), WRITING_QUALITY_MAX - 10.0);
    }

    #[test]
    fn test_lowercase_opening_costs_five() {
        let (text, dicts) = analyzer();
        assert_eq!(text.writing_quality("led the team.", &dicts), WRITING_QUALITY_MAX - 5.0);
    }
}
