//! Core types for the Tally word-frequency engine.
//!
//! This crate provides the fundamental types that are shared across
//! the Tally ecosystem. Keeping types separate ensures:
//!
//! - **Stable vocabulary**: The entry/config types are the wire format
//!   between the engine and its hosts
//! - **Cross-crate compatibility**: Core and any host program share the
//!   same types
//! - **Clean boundaries**: No circular dependencies between crates

#![warn(missing_docs)]

use core::fmt;

/// Number of occurrences of a word.
///
/// Counts are 64-bit unsigned integers. Per-word tallies are bounded by
/// input length, so a 64-bit counter never wraps on any input that fits
/// in memory.
pub type WordCount = u64;

/// A ranked frequency entry: one distinct word and its occurrence count.
///
/// Entries order by *rank position*: higher count first, ties broken by
/// ascending ordinal word order. `a < b` means `a` ranks ahead of `b`, so
/// sorting a slice of entries yields the ranked sequence directly.
///
/// # Example
///
/// ```
/// use tally_types::FrequencyEntry;
///
/// let mut entries = vec![
///     FrequencyEntry::new("python", 1),
///     FrequencyEntry::new("coding", 3),
///     FrequencyEntry::new("powerful", 2),
/// ];
/// entries.sort();
///
/// assert_eq!(entries[0].word, "coding");
/// assert_eq!(entries[2].word, "python");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry {
    /// The word, in normalized (lowercased) form.
    pub word: String,
    /// How many times the word occurred. Always ≥ 1 in analyzer output.
    pub count: WordCount,
}

impl FrequencyEntry {
    /// Creates a new frequency entry.
    #[inline]
    pub fn new(word: impl Into<String>, count: WordCount) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl PartialOrd for FrequencyEntry {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrequencyEntry {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        // Primary: count (higher ranks earlier)
        // Secondary: word (ordinal ascending, for deterministic tie order)
        match other.count.cmp(&self.count) {
            core::cmp::Ordering::Equal => self.word.cmp(&other.word),
            ord => ord,
        }
    }
}

impl fmt::Display for FrequencyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.word, self.count)
    }
}

impl From<FrequencyEntry> for (String, WordCount) {
    #[inline]
    fn from(entry: FrequencyEntry) -> Self {
        (entry.word, entry.count)
    }
}

/// Analysis configuration options.
///
/// Both knobs are `usize`, so the degenerate inputs of the contract are
/// the only edge cases: a `min_word_len` of 0 keeps every token, a
/// `limit` of 0 yields an empty result. Negative values are
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Minimum token length, in characters. Shorter runs are discarded
    /// entirely, never truncated to fit.
    pub min_word_len: usize,
    /// Maximum number of entries in the ranked result.
    pub limit: usize,
}

impl AnalyzerConfig {
    /// Default minimum token length.
    pub const DEFAULT_MIN_WORD_LEN: usize = 4;

    /// Default result limit.
    pub const DEFAULT_LIMIT: usize = 3;

    /// Creates a configuration with explicit knobs.
    #[inline]
    pub const fn new(min_word_len: usize, limit: usize) -> Self {
        Self {
            min_word_len,
            limit,
        }
    }

    /// Creates a configuration returning the top `limit` words at the
    /// default minimum length.
    #[inline]
    pub const fn top(limit: usize) -> Self {
        Self {
            min_word_len: Self::DEFAULT_MIN_WORD_LEN,
            limit,
        }
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_WORD_LEN, Self::DEFAULT_LIMIT)
    }
}

/// Word-character classification.
///
/// The single definition of the "word character" class shared by the
/// analysis pipeline and its callers: a word character is an alphanumeric
/// character or an underscore. Token boundaries occur at every character
/// outside this class.
pub mod wordchar {
    /// Returns `true` for ASCII word bytes: `[A-Za-z0-9_]`.
    ///
    /// This is the ASCII subset of [`is_word_char`]; the normalizer's
    /// byte-level fast path classifies with exactly this predicate.
    ///
    /// # Example
    ///
    /// ```
    /// use tally_types::wordchar::is_word_byte;
    ///
    /// assert!(is_word_byte(b'a'));
    /// assert!(is_word_byte(b'Z'));
    /// assert!(is_word_byte(b'7'));
    /// assert!(is_word_byte(b'_'));
    /// assert!(!is_word_byte(b' '));
    /// assert!(!is_word_byte(b'-'));
    /// ```
    #[inline(always)]
    #[must_use]
    pub const fn is_word_byte(b: u8) -> bool {
        b.is_ascii_alphanumeric() || b == b'_'
    }

    /// Returns `true` for word characters: alphanumeric or underscore.
    ///
    /// Non-ASCII classification follows `char::is_alphanumeric`, the
    /// Unicode-aware reading of the word class. Behavior outside ASCII is
    /// implementation-defined per the analyzer contract.
    ///
    /// # Example
    ///
    /// ```
    /// use tally_types::wordchar::is_word_char;
    ///
    /// assert!(is_word_char('k'));
    /// assert!(is_word_char('_'));
    /// assert!(is_word_char('é'));
    /// assert!(!is_word_char('.'));
    /// assert!(!is_word_char(' '));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn is_word_char(c: char) -> bool {
        c.is_alphanumeric() || c == '_'
    }
}

#[cfg(test)]
mod tests {
    use super::wordchar::*;
    use super::*;

    #[test]
    fn entry_ordering_by_count() {
        let high = FrequencyEntry::new("coding", 3);
        let low = FrequencyEntry::new("python", 1);

        assert!(high < low); // Higher count ranks earlier
        assert!(low > high);
    }

    #[test]
    fn entry_tie_broken_by_word() {
        let a = FrequencyEntry::new("aaa", 2);
        let b = FrequencyEntry::new("bbb", 2);

        assert_eq!(a.cmp(&b), core::cmp::Ordering::Less);
        assert_eq!(b.cmp(&a), core::cmp::Ordering::Greater);
    }

    #[test]
    fn entry_equality() {
        let a = FrequencyEntry::new("word", 2);
        let b = FrequencyEntry::new("word", 2);
        let c = FrequencyEntry::new("word", 3);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.cmp(&b), core::cmp::Ordering::Equal);
    }

    #[test]
    fn sort_yields_ranked_order() {
        let mut entries = vec![
            FrequencyEntry::new("simple", 1),
            FrequencyEntry::new("coding", 3),
            FrequencyEntry::new("python", 1),
            FrequencyEntry::new("powerful", 2),
        ];
        entries.sort();

        let words: Vec<&str> = entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, ["coding", "powerful", "python", "simple"]);
    }

    #[test]
    fn entry_display() {
        let entry = FrequencyEntry::new("coding", 3);
        assert_eq!(entry.to_string(), "coding=3");
    }

    #[test]
    fn entry_into_pair() {
        let pair: (String, WordCount) = FrequencyEntry::new("word", 7).into();
        assert_eq!(pair, ("word".to_string(), 7));
    }

    #[test]
    fn config_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.min_word_len, 4);
        assert_eq!(config.limit, 3);
    }

    #[test]
    fn config_top_preset() {
        let config = AnalyzerConfig::top(10);
        assert_eq!(config.min_word_len, AnalyzerConfig::DEFAULT_MIN_WORD_LEN);
        assert_eq!(config.limit, 10);
    }

    #[test]
    fn config_struct_update() {
        let config = AnalyzerConfig {
            min_word_len: 2,
            ..Default::default()
        };
        assert_eq!(config.min_word_len, 2);
        assert_eq!(config.limit, AnalyzerConfig::DEFAULT_LIMIT);
    }

    // Word-character classification tests

    #[test]
    fn word_bytes_accept_alphanumerics_and_underscore() {
        for b in b'a'..=b'z' {
            assert!(is_word_byte(b));
        }
        for b in b'A'..=b'Z' {
            assert!(is_word_byte(b));
        }
        for b in b'0'..=b'9' {
            assert!(is_word_byte(b));
        }
        assert!(is_word_byte(b'_'));
    }

    #[test]
    fn word_bytes_reject_boundaries() {
        // Bytes adjacent to the accepted ASCII ranges.
        for b in [b'/', b':', b'@', b'[', b'^', b'`', b'{', b' ', b'\t', 0x00] {
            assert!(!is_word_byte(b));
        }
    }

    #[test]
    fn word_chars_match_word_bytes_on_ascii() {
        for b in 0u8..128 {
            assert_eq!(
                is_word_byte(b),
                is_word_char(b as char),
                "classification mismatch for byte {:#04x}",
                b
            );
        }
    }

    #[test]
    fn word_chars_accept_unicode_letters() {
        for c in ['é', 'ü', 'П', '你', 'カ', '한'] {
            assert!(is_word_char(c), "expected {c:?} to be a word character");
        }
    }

    #[test]
    fn word_chars_reject_punctuation_and_symbols() {
        for c in ['.', ',', '!', '—', '🌍', '\u{200B}', '\u{0301}'] {
            assert!(!is_word_char(c), "expected {c:?} to be a boundary");
        }
    }
}
