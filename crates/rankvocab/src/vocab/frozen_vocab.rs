//! # Frozen Frequency-Ranked Vocabulary

use crate::alloc::vec::Vec;
use crate::errors::{RVResult, RankVocabError};
use crate::replace::ReplacementTable;
use crate::types::{CountType, LooseId, RVHashMap, RVHashSet, diag_i64, hash_map_with_capacity};
use crate::vocab::count_filter::{CountFilterOptions, frequent_cutoff, rare_cutoff};

/// An immutable frequency-ranked vocabulary.
///
/// Produced exactly once, by
/// [`VocabCounter::finalize`](crate::vocab::VocabCounter::finalize); the
/// ranking and mapping tables never change afterwards. Every query is a pure
/// function of the frozen state, so a `FrozenVocab` may be shared freely
/// across reader threads (`Send + Sync`); the ownership handoff out of
/// finalize is the complete-before-readers ordering point.
///
/// Tables, all aligned by rank:
/// * `keys_loose[rank]` - the loose id at that frequency rank.
/// * `keys_compact[rank] == rank` - compact ids are ranks.
/// * `keys_counts[rank]` - the occurrence count; non-increasing.
#[derive(Debug, Clone)]
pub struct FrozenVocab<L = i64, C = u64>
where
    L: LooseId,
    C: CountType,
{
    /// The out-of-vocabulary sentinel id.
    oov_id: L,

    /// Loose ids in rank order; doubles as the compact -> loose table.
    keys_loose: Vec<L>,

    /// Compact ids in rank order: ``0, 1, .., n-1``.
    keys_compact: Vec<L>,

    /// Counts in rank order; non-increasing.
    keys_counts: Vec<C>,

    /// The loose -> compact mapping.
    loose_to_compact: RVHashMap<L, L>,
}

impl<L: LooseId, C: CountType> FrozenVocab<L, C> {
    /// Build from a `(loose id, count)` ranking, already sorted by count
    /// descending with ties broken by ascending loose id.
    pub(crate) fn from_ranking(
        oov_id: L,
        ranking: Vec<(L, C)>,
    ) -> RVResult<Self> {
        let size = ranking.len();

        let mut keys_loose = Vec::with_capacity(size);
        let mut keys_compact = Vec::with_capacity(size);
        let mut keys_counts = Vec::with_capacity(size);
        let mut loose_to_compact = hash_map_with_capacity(size);

        for (rank, (id, count)) in ranking.into_iter().enumerate() {
            let compact = L::from_usize(rank)
                .ok_or(RankVocabError::VocabSizeOverflow { size })?;

            keys_loose.push(id);
            keys_compact.push(compact);
            keys_counts.push(count);
            loose_to_compact.insert(id, compact);
        }

        Ok(Self {
            oov_id,
            keys_loose,
            keys_compact,
            keys_counts,
            loose_to_compact,
        })
    }

    /// The out-of-vocabulary sentinel id.
    pub fn oov_id(&self) -> L {
        self.oov_id
    }

    /// The number of ids in the vocabulary.
    pub fn len(&self) -> usize {
        self.keys_loose.len()
    }

    /// True if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.keys_loose.is_empty()
    }

    /// Loose ids in rank order; index by rank for the compact -> loose map.
    pub fn keys_loose(&self) -> &[L] {
        &self.keys_loose
    }

    /// Compact ids in rank order: ``0, 1, .., n-1``.
    pub fn keys_compact(&self) -> &[L] {
        &self.keys_compact
    }

    /// Counts in rank order; non-increasing.
    pub fn keys_counts(&self) -> &[C] {
        &self.keys_counts
    }

    /// The compact id for a loose id, or None if out-of-vocabulary.
    pub fn compact_of(
        &self,
        loose: L,
    ) -> Option<L> {
        self.loose_to_compact.get(&loose).copied()
    }

    /// The loose id for a compact id, or None if out of range.
    pub fn loose_of(
        &self,
        compact: L,
    ) -> Option<L> {
        compact
            .to_usize()
            .and_then(|rank| self.keys_loose.get(rank))
            .copied()
    }

    /// The occurrence count at a frequency rank, or None if out of range.
    pub fn count_of_rank(
        &self,
        rank: usize,
    ) -> Option<C> {
        self.keys_counts.get(rank).copied()
    }

    /// Remap a loose array into the compact id space.
    ///
    /// Length-preserving: each known loose id becomes its frequency rank;
    /// each unknown id becomes the OOV sentinel.
    ///
    /// Internally this extends the ``loose -> compact`` table with one
    /// synthetic ``unknown -> sentinel`` pair per distinct unknown input
    /// value, then runs the batched replacement.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, loose)))]
    pub fn to_compact(
        &self,
        loose: &[L],
    ) -> RVResult<Vec<L>> {
        let mut keys = self.keys_loose.clone();
        let mut values = self.keys_compact.clone();

        let mut unknown: RVHashSet<L> = Default::default();
        for &id in loose {
            if !self.loose_to_compact.contains_key(&id) && unknown.insert(id) {
                keys.push(id);
                values.push(self.oov_id);
            }
        }

        // The extended table covers the input by construction.
        ReplacementTable::try_new(keys, values)?.replace(loose)
    }

    /// Remap a compact array back into the loose id space.
    ///
    /// Every value must be a known compact id (``0 <= v < n``) or the OOV
    /// sentinel; sentinels round-trip unchanged. A compact array should
    /// never contain ids the vocabulary did not produce, so anything else
    /// is a [`RankVocabError::CompactOutOfRange`] error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, compact)))]
    pub fn to_loose(
        &self,
        compact: &[L],
    ) -> RVResult<Vec<L>> {
        self.check_compact_array(compact)?;

        let mut keys = self.keys_compact.clone();
        let mut values = self.keys_loose.clone();
        keys.push(self.oov_id);
        values.push(self.oov_id);

        ReplacementTable::try_new(keys, values)?.replace(compact)
    }

    /// Count-band filter a compact array.
    ///
    /// Ranks whose count fell below `min_count` are replaced with
    /// `min_replacement`; ranks whose count stayed at or above `max_count`
    /// are replaced with `max_replacement`. A zero threshold disables that
    /// side, and a threshold the counts never drop below replaces nothing.
    /// Sentinels pass through unchanged.
    ///
    /// Returns a new array; the input is not mutated.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, compact)))]
    pub fn filter(
        &self,
        compact: &[L],
        options: &CountFilterOptions<L, C>,
    ) -> RVResult<Vec<L>> {
        self.check_compact_array(compact)?;

        let min_cut = rare_cutoff(&self.keys_counts, options.min_count);
        let max_cut = frequent_cutoff(&self.keys_counts, options.max_count);

        let mut keys = self.keys_compact.clone();
        let mut values: Vec<L> = self
            .keys_compact
            .iter()
            .enumerate()
            .map(|(rank, &id)| {
                if rank < max_cut {
                    options.max_replacement
                } else if rank >= min_cut {
                    options.min_replacement
                } else {
                    id
                }
            })
            .collect();
        keys.push(self.oov_id);
        values.push(self.oov_id);

        ReplacementTable::try_new(keys, values)?.replace(compact)
    }

    /// Check that every value is a known compact id or the OOV sentinel.
    fn check_compact_array(
        &self,
        compact: &[L],
    ) -> RVResult<()> {
        let len = self.len();
        for &v in compact {
            if v == self.oov_id {
                continue;
            }
            let in_range = v >= L::zero() && v.to_usize().is_some_and(|rank| rank < len);
            if !in_range {
                return Err(RankVocabError::CompactOutOfRange {
                    value: diag_i64(v),
                    len,
                });
            }
        }
        Ok(())
    }
}
