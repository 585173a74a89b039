//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Folds raw text into lowercase word runs separated by
//!   single spaces
//! - **Tokenizer**: Splits normalized text into qualifying tokens

pub mod normalizer;
pub mod tokenizer;

pub use normalizer::WordNormalizer;
pub use tokenizer::Tokenizer;
