//! Statistics and TextStats.

use crate::freq::types::Tally;
use rustc_hash::FxHashMap;
use tally_types::{FrequencyEntry, WordCount};

/// A snapshot of counting statistics from a single analysis.
///
/// Covers the tokens that reached the counter, i.e. tokens of at least
/// the configured minimum length. The ranked result truncates to the
/// limit; these totals do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    /// Number of qualifying tokens tallied.
    pub total_tokens: u64,
    /// Number of distinct words among them.
    pub distinct_words: usize,
}

impl TextStats {
    pub(crate) fn from_counts(counts: &FxHashMap<&str, WordCount>) -> Self {
        Self {
            total_tokens: counts.values().sum(),
            distinct_words: counts.len(),
        }
    }
}

impl core::fmt::Display for TextStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} tokens, {} distinct words",
            self.total_tokens, self.distinct_words
        )
    }
}

impl Tally {
    /// Analyzes `text` and also reports counting statistics.
    ///
    /// The ranked entries are identical to [`Tally::analyze`]; the stats
    /// describe the whole tally, including words the limit cut off.
    ///
    /// # Example
    ///
    /// ```
    /// use tally_core::Tally;
    ///
    /// let engine = Tally::new();
    /// let (top, stats) = engine.analyze_with_stats(
    ///     "Coding is fun. Coding is powerful. Python coding is simple and powerful.",
    /// );
    ///
    /// assert_eq!(top.len(), 3);
    /// assert_eq!(stats.total_tokens, 7);
    /// assert_eq!(stats.distinct_words, 4);
    /// ```
    pub fn analyze_with_stats(&self, text: &str) -> (Vec<FrequencyEntry>, TextStats) {
        let normalized = self.normalizer.normalize(text);
        let counts = self.count_words(&normalized);
        let stats = TextStats::from_counts(&counts);

        let mut out = Vec::with_capacity(self.config.limit.min(counts.len()));
        self.rank_into(counts, &mut out);
        (out, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_types::AnalyzerConfig;

    #[test]
    fn stats_cover_the_whole_tally() {
        let engine = Tally::with_config(AnalyzerConfig::new(4, 1));
        let (top, stats) = engine.analyze_with_stats("alpha beta gamma alpha");

        // The limit truncates the ranking but not the statistics.
        assert_eq!(top.len(), 1);
        assert_eq!(stats.total_tokens, 4);
        assert_eq!(stats.distinct_words, 3);
    }

    #[test]
    fn stats_exclude_filtered_tokens() {
        let engine = Tally::new();
        let (_, stats) = engine.analyze_with_stats("a bb ccc dddd");

        assert_eq!(stats.total_tokens, 1);
        assert_eq!(stats.distinct_words, 1);
    }

    #[test]
    fn empty_input_stats() {
        let engine = Tally::new();
        let (top, stats) = engine.analyze_with_stats("");

        assert!(top.is_empty());
        assert_eq!(stats.total_tokens, 0);
        assert_eq!(stats.distinct_words, 0);
    }

    #[test]
    fn repeated_word_counts_every_occurrence() {
        let engine = Tally::new();
        let (top, stats) = engine.analyze_with_stats("echo echo echo echo");

        assert_eq!(top[0].count, 4);
        assert_eq!(stats.total_tokens, 4);
        assert_eq!(stats.distinct_words, 1);
    }

    #[test]
    fn stats_display() {
        let stats = TextStats {
            total_tokens: 7,
            distinct_words: 4,
        };
        assert_eq!(stats.to_string(), "7 tokens, 4 distinct words");
    }

    #[test]
    fn entries_match_plain_analyze() {
        let engine = Tally::new();
        let text = "Coding is fun. Coding is powerful. Python coding is simple and powerful.";

        let plain = engine.analyze(text);
        let (with_stats, _) = engine.analyze_with_stats(text);
        assert_eq!(plain, with_stats);
    }
}
