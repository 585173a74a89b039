//! Tally: a fast word-frequency analysis engine.
//!
//! Feed it text, get back the most frequent words. The pipeline runs in
//! three stages:
//!
//! 1. **Normalize**: lowercase the input and fold every non-word
//!    character to a single space
//! 2. **Tokenize**: split on spaces and drop tokens shorter than the
//!    configured minimum length
//! 3. **Rank**: tally the survivors and keep the top entries, ordered by
//!    count descending with ordinal word order breaking ties
//!
//! A word character is an alphanumeric character or an underscore;
//! everything else separates words. Analysis is pure: the engine holds
//! no mutable state and the same input always produces the same output.
//!
//! # Quick start
//!
//! ```
//! use tally_core::Tally;
//!
//! let engine = Tally::new();
//! let top = engine.analyze(
//!     "Coding is fun. Coding is powerful. Python coding is simple and powerful.",
//! );
//!
//! assert_eq!(top.len(), 3);
//! assert_eq!(top[0].word, "coding");
//! assert_eq!(top[0].count, 3);
//! ```
//!
//! # Tuning
//!
//! Both knobs live in [`AnalyzerConfig`]:
//!
//! ```
//! use tally_core::{AnalyzerConfig, Tally};
//!
//! let engine = Tally::with_config(AnalyzerConfig::new(2, 10));
//! let top = engine.analyze("to be or not to be");
//!
//! assert_eq!(top[0].word, "be");
//! assert_eq!(top[0].count, 2);
//! ```

pub mod analyzer;
pub mod freq;

pub use freq::{analyze_text, Tally, TextStats};
pub use tally_types::{AnalyzerConfig, FrequencyEntry, WordCount};
