//! Word statistics for title and description selection.
//!
//! A text sample is split into words per article context. Two figures come
//! out of it:
//!
//! - **variance**: distinct words / total words. Item-specific text such as a
//!   headline scores high, repeated chrome such as "Read more" scores low.
//! - **average word count**: total words / number of contexts.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Variance and average word count of one field across article contexts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldStats {
    /// Distinct words divided by total words (`0.0` for no words).
    pub variance: f64,
    /// Words per article context.
    pub avg_word_count: f64,
}

impl FieldStats {
    /// Statistics over per-context word lists.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_feedrules::scoring::{to_words, FieldStats};
    ///
    /// let samples = vec![to_words("same words"), to_words("same words")];
    /// let stats = FieldStats::from_samples(&samples);
    /// assert_eq!(stats.variance, 0.5);
    /// assert_eq!(stats.avg_word_count, 2.0);
    /// ```
    #[must_use]
    pub fn from_samples(samples: &[Vec<String>]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }

        let total: usize = samples.iter().map(Vec::len).sum();
        let distinct: HashSet<&str> = samples.iter().flatten().map(String::as_str).collect();

        Self {
            variance: distinct.len() as f64 / total.max(1) as f64,
            avg_word_count: total as f64 / samples.len() as f64,
        }
    }

    /// `variance × avg_word_count`, this field's share of a rule score.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.variance * self.avg_word_count
    }
}

/// Split trimmed text on whitespace.
#[must_use]
pub fn to_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Number of whitespace-separated words.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
