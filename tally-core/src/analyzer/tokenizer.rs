//! Streaming Tokenizer Module
//!
//! This module provides a zero-allocation tokenizer that splits normalized text into
//! individual tokens for counting. It's the second stage in the text processing
//! pipeline, taking clean, normalized text and breaking it into countable units.
//!
//! ## What It Does
//!
//! Given normalized input like `"coding is fun"` and a minimum length of 4, it emits
//! each qualifying word together with its emission position:
//!
//! ```ignore
//! ("coding", 0)
//! // "is" and "fun" are shorter than 4 characters and never emitted
//! ```
//!
//! ## Key Features
//!
//! - **Zero Allocation**: Tokens are slices of the original string, not new allocations
//! - **Streaming**: Uses a callback to emit tokens, no intermediate collection
//! - **Fast**: Simple byte-scan for ASCII space (0x20) splitting
//! - **Length-Aware**: Tokens shorter than the configured minimum are dropped whole,
//!   never clipped to fit
//!
//! ## Usage
//!
//! ```rust
//! use tally_core::analyzer::tokenizer::Tokenizer;
//!
//! let tokenizer = Tokenizer::new(4);
//! let mut kept = Vec::new();
//!
//! // Tokens are emitted via callback, no allocation.
//! tokenizer.tokenize("coding is fun", |text, position| {
//!     kept.push((text, position));
//! });
//!
//! assert_eq!(kept, [("coding", 0)]);
//! ```
//!
//! ## The Input Contract
//!
//! The tokenizer expects **pre-normalized** input. This means:
//! - All lowercase
//! - Word characters and single ASCII spaces only
//! - No leading or trailing spaces
//! - No consecutive spaces between words
//!
//! If you violate this contract, the tokenizer will panic in debug mode with a
//! helpful message.

use core::str;
use memchr::memchr_iter;

/// Streaming tokenizer, splits normalized text into qualifying tokens.
///
/// A lightweight, zero-allocation tokenizer that takes normalized text and
/// emits tokens one by one via a callback. Think of it as a simple word
/// splitter that also enforces the minimum token length and tracks where each
/// emitted word falls in the emission order.
///
/// ## Zero Allocation
///
/// Tokens are not copied. They are slices (`&str`) into the original input
/// string, so tokenization is a single byte scan with no heap traffic.
///
/// ## The Contract
///
/// This tokenizer expects **pre-normalized** input: all lowercase, word
/// characters separated by single ASCII spaces, no leading or trailing
/// spaces. Violations panic in debug builds.
///
/// ## Example
///
/// ```
/// use tally_core::analyzer::tokenizer::Tokenizer;
///
/// let tokenizer = Tokenizer::new(4);
/// let mut count = 0;
///
/// tokenizer.tokenize("coding is powerful", |_text, _pos| {
///     count += 1;
/// });
///
/// // "coding" and "powerful" qualify; "is" is too short.
/// assert_eq!(count, 2);
/// ```
///
/// ## How It Works
///
/// It does a single forward scan looking for ASCII space bytes (0x20). Each
/// non-space run between spaces is a candidate token; runs of at least
/// `min_len` characters are emitted.
#[derive(Debug, Copy, Clone)]
#[repr(transparent)]
pub struct Tokenizer {
    min_len: usize,
}

impl Tokenizer {
    /// Creates a new tokenizer with the given minimum token length,
    /// measured in characters.
    #[inline]
    pub const fn new(min_len: usize) -> Self {
        Self { min_len }
    }

    /// Returns `true` when `token` has at least `min_len` characters.
    #[inline(always)]
    fn qualifies(&self, token: &str) -> bool {
        // Byte length bounds character count from above, so a short byte
        // run can never qualify. ASCII runs have equal byte and character
        // counts; only mixed runs pay for a character walk.
        if token.len() < self.min_len {
            return false;
        }
        token.is_ascii() || token.chars().take(self.min_len).count() >= self.min_len
    }

    /// Tokenizes normalized input and emits `(text, position)` for every
    /// token of at least the configured length.
    ///
    /// Position is `u32` and numbers emitted tokens from zero, saturating
    /// at `u32::MAX`. Emission never stops early, so downstream counts
    /// stay exact even when positions have saturated.
    #[inline(always)]
    #[allow(clippy::needless_lifetimes)]
    pub fn tokenize<'n, F>(&self, normalized: &'n str, mut emit: F)
    where
        F: FnMut(&'n str, u32),
    {
        let bytes = normalized.as_bytes();

        debug_assert!(
            bytes.first().is_none_or(|&b| b != b' '),
            "tokenizer: leading space (normalizer contract violated)"
        );

        debug_assert!(
            bytes.last().is_none_or(|&b| b != b' '),
            "tokenizer: trailing space (normalizer contract violated)"
        );

        debug_assert!(
            {
                let mut prev_space = false;
                let mut ok = true;
                for &b in bytes {
                    if b == b' ' {
                        if prev_space {
                            ok = false;
                            break;
                        }
                        prev_space = true;
                    } else {
                        prev_space = false;
                    }
                }
                ok
            },
            "tokenizer: consecutive spaces (normalizer contract violated)"
        );

        if bytes.is_empty() {
            return;
        }

        let mut start = 0usize;
        let mut pos = 0u32;

        for i in memchr_iter(b' ', bytes) {
            if start < i {
                // SAFETY: `normalized` is valid UTF-8. We split only on ASCII space (0x20),
                // which is never a continuation byte, so `bytes[start..i]` is always a
                // valid UTF-8 subslice.
                let token = unsafe { str::from_utf8_unchecked(&bytes[start..i]) };
                if self.qualifies(token) {
                    emit(token, pos);
                    pos = pos.saturating_add(1);
                }
            }
            start = i + 1;
        }

        if start < bytes.len() {
            // SAFETY: same invariants as above. `bytes[start..]` is a valid UTF-8
            // subslice since `start` was set to `i + 1` after an ASCII space byte.
            let token = unsafe { str::from_utf8_unchecked(&bytes[start..]) };
            if self.qualifies(token) {
                emit(token, pos);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str, min_len: usize) -> Vec<(&str, u32)> {
        let mut out = Vec::new();
        Tokenizer::new(min_len).tokenize(input, |text, pos| {
            out.push((text, pos));
        });
        out
    }

    #[test]
    fn tokenizer_is_word_sized() {
        assert_eq!(size_of::<Tokenizer>(), size_of::<usize>());
    }

    #[test]
    fn single_word() {
        let out = collect("hello", 4);
        assert_eq!(out, [("hello", 0)]);
    }

    #[test]
    fn two_words() {
        let out = collect("hello world", 4);
        assert_eq!(out, [("hello", 0), ("world", 1)]);
    }

    #[test]
    fn positions_are_sequential() {
        let out = collect("the quick brown fox", 1);
        assert_eq!(out.len(), 4);
        for (i, (_, pos)) in out.iter().enumerate() {
            assert_eq!(*pos, i as u32);
        }
    }

    #[test]
    fn short_tokens_dropped_whole() {
        let out = collect("cat dog bird", 4);
        assert_eq!(out, [("bird", 0)]);
    }

    #[test]
    fn filtered_tokens_do_not_take_positions() {
        let out = collect("cat coding dog powerful", 4);
        assert_eq!(out, [("coding", 0), ("powerful", 1)]);
    }

    #[test]
    fn exact_boundary_length_kept() {
        let out = collect("abcd abc", 4);
        assert_eq!(out, [("abcd", 0)]);
    }

    #[test]
    fn length_is_measured_in_chars() {
        // Each word is three characters but more than four bytes.
        let out = collect("ééé üüü", 4);
        assert!(out.is_empty());

        let out = collect("héllo café", 4);
        assert_eq!(out, [("héllo", 0), ("café", 1)]);
    }

    #[test]
    fn zero_min_len_keeps_everything() {
        let out = collect("a bb ccc", 0);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn min_len_one_keeps_all_words() {
        let out = collect("a bb ccc", 1);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn huge_min_len_drops_everything() {
        let out = collect("reasonable words here", 100);
        assert!(out.is_empty());
    }

    #[test]
    fn empty_emits_nothing() {
        let out = collect("", 4);
        assert!(out.is_empty());
    }

    #[test]
    fn single_char_token() {
        assert_eq!(collect("a", 1), [("a", 0)]);
        assert!(collect("a", 2).is_empty());
    }

    #[test]
    fn underscore_and_digit_tokens() {
        let out = collect("snake_case 1234", 4);
        assert_eq!(out, [("snake_case", 0), ("1234", 1)]);
    }

    #[test]
    fn tokens_are_slices_of_input() {
        let input = String::from("hello world");
        let base = input.as_ptr() as usize;
        let end = base + input.len();

        Tokenizer::new(1).tokenize(&input, |text, _| {
            let ptr = text.as_ptr() as usize;
            assert!(ptr >= base && ptr < end);
        });
    }

    #[test]
    fn emit_order_is_left_to_right() {
        let words = ["one", "two", "three", "four"];
        let input = words.join(" ");
        let mut i = 0usize;

        Tokenizer::new(1).tokenize(&input, |text, pos| {
            assert_eq!(text, words[i]);
            assert_eq!(pos, i as u32);
            i += 1;
        });

        assert_eq!(i, words.len());
    }

    #[test]
    fn tokenizer_is_reusable() {
        let t = Tokenizer::new(1);

        let mut n = 0usize;
        t.tokenize("hello world", |_, _| n += 1);
        assert_eq!(n, 2);

        n = 0;
        t.tokenize("one two three", |_, _| n += 1);
        assert_eq!(n, 3);
    }

    #[test]
    fn composes_with_counting_layer() {
        let mut counts = std::collections::HashMap::new();

        Tokenizer::new(2).tokenize("aa bb aa cc aa", |text, _| {
            *counts.entry(text).or_insert(0u64) += 1;
        });

        assert_eq!(counts["aa"], 3);
        assert_eq!(counts["bb"], 1);
        assert_eq!(counts["cc"], 1);
    }
}
