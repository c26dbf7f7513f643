//! # Loose Identifier Counter

use crate::alloc::vec::Vec;
use crate::errors::{RVResult, RankVocabError};
use crate::types::{CountType, LooseId, RVHashMap, hash_map_with_capacity};
use crate::vocab::FrozenVocab;

/// Expected distinct identifiers; sizes the count table's initial allocation.
const EXPECTED_VOCAB_SIZE: usize = 10_000;

/// Options for [`VocabCounter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabCounterOptions<L: LooseId> {
    /// The out-of-vocabulary sentinel id.
    ///
    /// Must be negative, so it is disjoint from every compact id
    /// (compact ids are always >= 0); and must not collide with any
    /// legitimate loose id.
    pub oov_id: L,
}

impl<L: LooseId> Default for VocabCounterOptions<L> {
    fn default() -> Self {
        // -2, to stay clear of the -1 pad value filtering commonly uses.
        Self {
            oov_id: -(L::one() + L::one()),
        }
    }
}

impl<L: LooseId> VocabCounterOptions<L> {
    /// Set the out-of-vocabulary sentinel id.
    pub fn with_oov_id(
        self,
        oov_id: L,
    ) -> Self {
        Self { oov_id }
    }

    /// Initializes a [`VocabCounter`] from these options.
    ///
    /// ## Panics
    /// Panics if the sentinel is not negative.
    pub fn init<C: CountType>(self) -> VocabCounter<L, C> {
        VocabCounter::new(self)
    }
}

/// Accumulates occurrence counts of loose token identifiers.
///
/// The counter owns its count table exclusively; updates are additive, so
/// repeating a batch doubles its contribution. [`VocabCounter::finalize`]
/// consumes the counter and freezes the ranking.
///
/// # Parameters
/// * `L` - the loose identifier type.
/// * `C` - the occurrence count type.
#[derive(Debug, Clone)]
pub struct VocabCounter<L = i64, C = u64>
where
    L: LooseId,
    C: CountType,
{
    /// The config options.
    pub options: VocabCounterOptions<L>,

    /// The loose id counts.
    counts: RVHashMap<L, C>,
}

impl<L: LooseId, C: CountType> Default for VocabCounter<L, C> {
    fn default() -> Self {
        Self::new(Default::default())
    }
}

impl<L: LooseId, C: CountType> VocabCounter<L, C> {
    /// Create a new counter.
    ///
    /// ## Arguments
    /// * `options` - The counter options.
    ///
    /// ## Panics
    /// Panics if the configured sentinel is not negative.
    pub fn new(options: VocabCounterOptions<L>) -> Self {
        assert!(
            options.oov_id < L::zero(),
            "OOV sentinel must be negative: {}",
            options.oov_id,
        );
        Self {
            options,
            counts: hash_map_with_capacity(EXPECTED_VOCAB_SIZE),
        }
    }

    /// Update counts inplace from a flat batch of loose ids.
    ///
    /// Each occurrence in the batch adds one to that id's running total.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, batch)))]
    pub fn update<A: AsRef<[L]>>(
        &mut self,
        batch: A,
    ) {
        for &id in batch.as_ref() {
            *self.counts.entry(id).or_default() += C::one();
        }
    }

    /// Update counts inplace from an iterator of batches.
    ///
    /// Nested input flattens; only the element multiset matters.
    pub fn update_batches<I>(
        &mut self,
        batches: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<[L]>,
    {
        for batch in batches {
            self.update(batch);
        }
    }

    /// The running count for a loose id; zero if never seen.
    pub fn count(
        &self,
        id: L,
    ) -> C {
        self.counts.get(&id).copied().unwrap_or_else(C::zero)
    }

    /// The number of distinct loose ids seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if no ids have been seen.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The total element count observed across all updates.
    pub fn total_observed(&self) -> C {
        self.counts
            .values()
            .fold(C::zero(), |acc, &c| acc + c)
    }

    /// Check that every compact id the ranking would assign fits in `L`.
    ///
    /// ## Returns
    /// `Ok(())`, or [`RankVocabError::VocabSizeOverflow`].
    pub fn check_capacity(&self) -> RVResult<()> {
        let size = self.counts.len();
        if size > 0 && L::from_usize(size - 1).is_none() {
            return Err(RankVocabError::VocabSizeOverflow { size });
        }
        Ok(())
    }

    /// Freeze the vocabulary: compute the frequency ranking and the
    /// loose/compact mapping tables.
    ///
    /// This consumes the counter; the returned [`FrozenVocab`] is immutable,
    /// so no further count updates are possible, by construction.
    ///
    /// Ranking order: count descending; ties broken by ascending loose id,
    /// so compact id assignment is reproducible across runs.
    ///
    /// An empty counter freezes to an empty vocabulary, where every query
    /// input is out-of-vocabulary.
    ///
    /// ## Returns
    /// The frozen vocabulary, or [`RankVocabError::VocabSizeOverflow`] if
    /// the compact id range does not fit in `L`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn finalize(self) -> RVResult<FrozenVocab<L, C>> {
        self.check_capacity()?;

        let mut ranking: Vec<(L, C)> = self.counts.into_iter().collect();
        ranking.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        log::info!(
            "Freezing vocabulary: {} distinct ids, top count {}",
            ranking.len(),
            ranking.first().map(|&(_, c)| c).unwrap_or_else(C::zero),
        );

        FrozenVocab::from_ranking(self.options.oov_id, ranking)
    }
}
