//! Public API for running analyses.

use crate::freq::types::Tally;
use tally_types::{AnalyzerConfig, FrequencyEntry};

impl Tally {
    /// Analyzes `text` and returns the ranked word frequencies.
    ///
    /// The pipeline lowercases the input, splits it at every non-word
    /// character, drops tokens shorter than the configured minimum
    /// length, tallies the rest, and ranks by count descending with
    /// ordinal word order breaking ties. At most `limit` entries are
    /// returned.
    ///
    /// Any string is valid input. Empty and all-filtered inputs yield
    /// an empty result, as does a limit of zero.
    ///
    /// # Example
    ///
    /// ```
    /// use tally_core::Tally;
    ///
    /// let engine = Tally::new();
    /// let top = engine.analyze(
    ///     "Coding is fun. Coding is powerful. Python coding is simple and powerful.",
    /// );
    ///
    /// let pairs: Vec<(&str, u64)> =
    ///     top.iter().map(|e| (e.word.as_str(), e.count)).collect();
    /// assert_eq!(pairs, [("coding", 3), ("powerful", 2), ("python", 1)]);
    /// ```
    #[inline(never)]
    pub fn analyze(&self, text: &str) -> Vec<FrequencyEntry> {
        let mut norm_buf = String::with_capacity(text.len());
        let mut out = Vec::with_capacity(self.config.limit.min(16));
        self.analyze_into(text, &mut norm_buf, &mut out);
        out
    }

    /// Analyzes `text` using caller-owned buffers.
    ///
    /// `norm_buf` holds the normalized text and `out` receives the
    /// ranked entries; both are cleared first and reuse their capacity.
    /// Callers tallying many inputs in a loop avoid one String and one
    /// Vec allocation per call.
    ///
    /// # Example
    ///
    /// ```
    /// use tally_core::Tally;
    ///
    /// let engine = Tally::new();
    /// let mut norm_buf = String::new();
    /// let mut out = Vec::new();
    ///
    /// for text in ["Seven seals. Seven trumpets.", "One ring."] {
    ///     engine.analyze_into(text, &mut norm_buf, &mut out);
    ///     assert!(out.len() <= 3);
    /// }
    /// ```
    pub fn analyze_into(&self, text: &str, norm_buf: &mut String, out: &mut Vec<FrequencyEntry>) {
        self.normalizer.normalize_into(text, norm_buf);
        let counts = self.count_words(norm_buf);
        self.rank_into(counts, out);
    }
}

/// One-shot analysis with explicit knobs.
///
/// Equivalent to building a [`Tally`] with the same configuration and
/// calling [`Tally::analyze`].
///
/// # Example
///
/// ```
/// use tally_core::analyze_text;
///
/// let top = analyze_text("cat dog bird", 4, 3);
/// assert_eq!(top.len(), 1);
/// assert_eq!(top[0].word, "bird");
/// ```
#[must_use]
pub fn analyze_text(text: &str, min_word_len: usize, limit: usize) -> Vec<FrequencyEntry> {
    Tally::with_config(AnalyzerConfig::new(min_word_len, limit)).analyze(text)
}
