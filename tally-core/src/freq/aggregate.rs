//! Counting pass: normalized text to per-word tallies.

use crate::freq::types::Tally;
use rustc_hash::{FxBuildHasher, FxHashMap};
use tally_types::WordCount;

impl Tally {
    /// Tallies qualifying tokens in `normalized`.
    ///
    /// Keys borrow from `normalized`, so counting never copies token
    /// text. The map is call-local state; callers consume it during
    /// ranking and it never outlives the analysis.
    #[inline]
    pub(crate) fn count_words<'n>(&self, normalized: &'n str) -> FxHashMap<&'n str, WordCount> {
        // Rough sizing: one distinct word per ~16 input bytes avoids
        // most rehashing without overcommitting on repetitive text.
        let mut counts: FxHashMap<&'n str, WordCount> =
            FxHashMap::with_capacity_and_hasher(normalized.len() / 16, FxBuildHasher::default());

        self.tokenizer.tokenize(normalized, |token, _pos| {
            *counts.entry(token).or_insert(0) += 1;
        });

        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts_for(input: &str, min_len: usize) -> FxHashMap<&str, WordCount> {
        use tally_types::AnalyzerConfig;
        // The limit knob is irrelevant to counting.
        let engine = Tally::with_config(AnalyzerConfig::new(min_len, usize::MAX));
        engine.count_words(input)
    }

    #[test]
    fn counts_repeats() {
        let counts = counts_for("coding is fun coding is powerful python coding", 4);
        assert_eq!(counts["coding"], 3);
        assert_eq!(counts["powerful"], 1);
        assert_eq!(counts["python"], 1);
        assert!(!counts.contains_key("is"));
        assert!(!counts.contains_key("fun"));
    }

    #[test]
    fn empty_input_yields_empty_map() {
        assert!(counts_for("", 4).is_empty());
    }

    #[test]
    fn all_tokens_filtered_yields_empty_map() {
        assert!(counts_for("a bb ccc", 4).is_empty());
    }

    #[test]
    fn distinct_words_get_distinct_slots() {
        let counts = counts_for("alpha beta gamma delta", 4);
        assert_eq!(counts.len(), 4);
        assert!(counts.values().all(|&c| c == 1));
    }

    #[test]
    fn keys_borrow_from_input() {
        let input = String::from("hello hello world");
        let counts = counts_for(&input, 4);

        let base = input.as_ptr() as usize;
        let end = base + input.len();
        for key in counts.keys() {
            let ptr = key.as_ptr() as usize;
            assert!(ptr >= base && ptr < end);
        }
    }

    #[test]
    fn zero_min_len_counts_everything() {
        let counts = counts_for("a a b", 0);
        assert_eq!(counts["a"], 2);
        assert_eq!(counts["b"], 1);
    }
}
