//! Word-frequency engine for the analysis pipeline.
//!
//! Optimized for single-pass, allocation-light counting over one input
//! string. Counting hashes borrowed token slices, so no token text is
//! copied until the final ranked entries are built.
//!
//! Memory Layout:
//! - The tally map is keyed by slices of the normalized buffer, built
//!   fresh per call and dropped before returning
//! - Ranking selects into an inline candidate buffer that only spills
//!   to the heap for large vocabularies
//!
//! Threading:
//! - [`Tally`] holds no mutable state. Analyses use locally scoped
//!   buffers only, so one engine can be shared across threads and calls
//!   never observe each other.

mod aggregate;
mod api;
mod rank;
mod stats;
mod types;

pub use api::analyze_text;
pub use stats::TextStats;
pub use types::Tally;
