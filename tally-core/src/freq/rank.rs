//! Ranking logic: per-word tallies to an ordered leaderboard.

use crate::freq::types::{Tally, INLINE_RANK_CANDIDATES};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tally_types::{FrequencyEntry, WordCount};

/// Rank order: count descending, then word ascending (ordinal).
///
/// Distinct words never compare equal, so the order is total and the
/// ranked sequence is deterministic for any map iteration order.
#[inline(always)]
fn rank_cmp(a: &(&str, WordCount), b: &(&str, WordCount)) -> core::cmp::Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

impl Tally {
    /// Ranks tallied words into `out`, truncated to the configured limit.
    ///
    /// Clears `out` before writing. For vocabularies larger than the
    /// limit, a partial select drops the losers before the final sort,
    /// so the full vocabulary is never sorted.
    pub(crate) fn rank_into(
        &self,
        counts: FxHashMap<&str, WordCount>,
        out: &mut Vec<FrequencyEntry>,
    ) {
        out.clear();

        let limit = self.config.limit;
        if limit == 0 || counts.is_empty() {
            return;
        }

        let mut ranked: SmallVec<[(&str, WordCount); INLINE_RANK_CANDIDATES]> =
            SmallVec::with_capacity(counts.len());
        ranked.extend(counts);

        if ranked.len() > limit {
            ranked.select_nth_unstable_by(limit, rank_cmp);
            ranked.truncate(limit);
        }
        ranked.sort_unstable_by(rank_cmp);

        out.reserve(ranked.len());
        out.extend(
            ranked
                .into_iter()
                .map(|(word, count)| FrequencyEntry::new(word, count)),
        );
    }
}
