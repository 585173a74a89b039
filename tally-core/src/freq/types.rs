//! Engine types and constants.

use crate::analyzer::normalizer::WordNormalizer;
use crate::analyzer::tokenizer::Tokenizer;

use tally_types::AnalyzerConfig;

/// Ranking candidates stay inline up to this many distinct words.
pub const INLINE_RANK_CANDIDATES: usize = 64;

/// Word-frequency analysis engine.
///
/// Holds only configuration and the stateless pipeline stages built from
/// it. Every working structure of an analysis (the normalization buffer,
/// the tally map, the ranking candidates) is created per call, so one
/// engine can be shared freely and reused across inputs.
pub struct Tally {
    pub(crate) config: AnalyzerConfig,
    pub(crate) normalizer: WordNormalizer,
    pub(crate) tokenizer: Tokenizer,
}

impl Default for Tally {
    fn default() -> Self {
        Self::new()
    }
}

impl Tally {
    /// Creates an engine with the default configuration: words of at
    /// least 4 characters, top 3 results.
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Creates an engine with custom configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self {
            config,
            normalizer: WordNormalizer::new(),
            tokenizer: Tokenizer::new(config.min_word_len),
        }
    }

    /// Returns the engine's configuration.
    #[inline(always)]
    #[must_use]
    pub fn config(&self) -> AnalyzerConfig {
        self.config
    }

    /// Returns the minimum token length, in characters.
    #[inline(always)]
    #[must_use]
    pub fn min_word_len(&self) -> usize {
        self.config.min_word_len
    }

    /// Returns the maximum number of ranked entries.
    #[inline(always)]
    #[must_use]
    pub fn limit(&self) -> usize {
        self.config.limit
    }
}
