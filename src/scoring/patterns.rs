//! Quantifiable-achievement pattern extraction

use regex::Regex;

/// Extracts quantified-achievement claims (percentages, currency amounts,
/// multipliers, counted nouns) from free text.
///
/// Matches are returned verbatim and are not deduplicated; when patterns
/// overlap, each match counts on its own.
pub struct MetricExtractor {
    patterns: Vec<Regex>,
}

impl Default for MetricExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricExtractor {
    pub fn new() -> Self {
        let patterns = vec![
            // Percentages: "42%", "3.5%"
            Regex::new(r"(?i)\d+(\.\d+)?%").expect("Invalid percentage regex"),
            // Currency shorthand: "$50k", "$2m", "$300"
            Regex::new(r"(?i)\$\d+[kmb]?").expect("Invalid currency regex"),
            // Multiplier claims: "3x increase"
            Regex::new(r"(?i)\d+x increase").expect("Invalid multiplier regex"),
            // Counted nouns: "200+ users", "10k downloads"
            Regex::new(r"(?i)\d+[kmb]?\+?\s*(users|clients|customers|projects|downloads|revenue|profit)")
                .expect("Invalid counted-noun regex"),
        ];

        Self { patterns }
    }

    /// All metric-looking substrings in the text, in pattern order.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut metrics = Vec::new();
        for pattern in &self.patterns {
            for mat in pattern.find_iter(text) {
                metrics.push(mat.as_str().to_string());
            }
        }
        metrics
    }
}
