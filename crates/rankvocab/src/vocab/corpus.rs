//! # Runtime-Phase Corpus Wrapper

use crate::alloc::vec::Vec;
use crate::errors::{RVResult, RankVocabError};
use crate::types::{CountType, LooseId};
use crate::vocab::{CountFilterOptions, FrozenVocab, VocabCounter, VocabCounterOptions};

/// The lifecycle phase of a [`Corpus`].
enum CorpusState<L: LooseId, C: CountType> {
    /// Open: accepting count updates.
    Counting(VocabCounter<L, C>),

    /// Closed: serving read-only queries.
    Frozen(FrozenVocab<L, C>),
}

/// A single-handle vocabulary with runtime-checked phases.
///
/// [`VocabCounter`] / [`FrozenVocab`] make the phase transition a type-level
/// guarantee; `Corpus` wraps both behind one long-lived object for callers
/// (streaming pipelines, registries) that cannot thread the ownership
/// handoff, restoring the classic runtime discipline:
///
/// * counting ops after [`Corpus::finalize`] fail with
///   [`RankVocabError::AlreadyFrozen`];
/// * query ops before it fail with [`RankVocabError::NotFrozen`];
/// * a second finalize is rejected with
///   [`RankVocabError::AlreadyFrozen`] (not an idempotent no-op).
pub struct Corpus<L = i64, C = u64>
where
    L: LooseId,
    C: CountType,
{
    state: CorpusState<L, C>,
}

impl<L: LooseId, C: CountType> Default for Corpus<L, C> {
    fn default() -> Self {
        Self::new(Default::default())
    }
}

impl<L: LooseId, C: CountType> Corpus<L, C> {
    /// Create a new corpus in the counting phase.
    ///
    /// ## Panics
    /// Panics if the configured sentinel is not negative.
    pub fn new(options: VocabCounterOptions<L>) -> Self {
        Self {
            state: CorpusState::Counting(VocabCounter::new(options)),
        }
    }

    /// True once [`Corpus::finalize`] has run.
    pub fn is_frozen(&self) -> bool {
        matches!(self.state, CorpusState::Frozen(_))
    }

    /// Update counts inplace from a flat batch of loose ids.
    ///
    /// ## Returns
    /// `Ok(())`, or [`RankVocabError::AlreadyFrozen`].
    pub fn update<A: AsRef<[L]>>(
        &mut self,
        batch: A,
    ) -> RVResult<()> {
        match &mut self.state {
            CorpusState::Counting(counter) => {
                counter.update(batch);
                Ok(())
            }
            CorpusState::Frozen(_) => Err(RankVocabError::AlreadyFrozen),
        }
    }

    /// Update counts inplace from an iterator of batches.
    ///
    /// ## Returns
    /// `Ok(())`, or [`RankVocabError::AlreadyFrozen`].
    pub fn update_batches<I>(
        &mut self,
        batches: I,
    ) -> RVResult<()>
    where
        I: IntoIterator,
        I::Item: AsRef<[L]>,
    {
        match &mut self.state {
            CorpusState::Counting(counter) => {
                counter.update_batches(batches);
                Ok(())
            }
            CorpusState::Frozen(_) => Err(RankVocabError::AlreadyFrozen),
        }
    }

    /// Freeze the vocabulary, transitioning to the query phase.
    ///
    /// ## Returns
    /// `Ok(())`; [`RankVocabError::AlreadyFrozen`] on a repeated call;
    /// or [`RankVocabError::VocabSizeOverflow`], which leaves the corpus
    /// in the counting phase.
    pub fn finalize(&mut self) -> RVResult<()> {
        // Surface overflow before consuming the counter.
        if let CorpusState::Counting(counter) = &self.state {
            counter.check_capacity()?;
        }

        match core::mem::replace(
            &mut self.state,
            CorpusState::Counting(VocabCounter::default()),
        ) {
            CorpusState::Counting(counter) => {
                self.state = CorpusState::Frozen(counter.finalize()?);
                Ok(())
            }
            frozen @ CorpusState::Frozen(_) => {
                self.state = frozen;
                Err(RankVocabError::AlreadyFrozen)
            }
        }
    }

    /// The frozen vocabulary.
    ///
    /// ## Returns
    /// The [`FrozenVocab`], or [`RankVocabError::NotFrozen`].
    pub fn frozen(&self) -> RVResult<&FrozenVocab<L, C>> {
        match &self.state {
            CorpusState::Frozen(vocab) => Ok(vocab),
            CorpusState::Counting(_) => Err(RankVocabError::NotFrozen),
        }
    }

    /// Remap a loose array into the compact id space.
    ///
    /// See [`FrozenVocab::to_compact`].
    ///
    /// ## Returns
    /// The compact array, or [`RankVocabError::NotFrozen`].
    pub fn to_compact(
        &self,
        loose: &[L],
    ) -> RVResult<Vec<L>> {
        self.frozen()?.to_compact(loose)
    }

    /// Remap a compact array back into the loose id space.
    ///
    /// See [`FrozenVocab::to_loose`].
    ///
    /// ## Returns
    /// The loose array, or [`RankVocabError::NotFrozen`].
    pub fn to_loose(
        &self,
        compact: &[L],
    ) -> RVResult<Vec<L>> {
        self.frozen()?.to_loose(compact)
    }

    /// Count-band filter a compact array.
    ///
    /// See [`FrozenVocab::filter`].
    ///
    /// ## Returns
    /// The filtered array, or [`RankVocabError::NotFrozen`].
    pub fn filter(
        &self,
        compact: &[L],
        options: &CountFilterOptions<L, C>,
    ) -> RVResult<Vec<L>> {
        self.frozen()?.filter(compact, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::vec;

    #[test]
    fn test_lifecycle() {
        let mut corpus: Corpus<i64, u64> = Default::default();
        assert!(!corpus.is_frozen());

        // Queries before finalize are phase errors.
        assert_eq!(corpus.to_compact(&[1]).unwrap_err(), RankVocabError::NotFrozen);
        assert_eq!(corpus.to_loose(&[0]).unwrap_err(), RankVocabError::NotFrozen);
        assert_eq!(corpus.frozen().unwrap_err(), RankVocabError::NotFrozen);

        corpus.update([2, 2, 2, 2, 3, 3]).unwrap();
        corpus.update_batches([vec![3], vec![4]]).unwrap();

        corpus.finalize().unwrap();
        assert!(corpus.is_frozen());

        assert_eq!(
            corpus.to_compact(&[2, 3, 4, 99]).unwrap(),
            vec![0, 1, 2, -2],
        );
        assert_eq!(corpus.to_loose(&[0, 1, 2]).unwrap(), vec![2, 3, 4]);

        let options = CountFilterOptions::default().with_min_count(2);
        assert_eq!(
            corpus.filter(&[0, 1, 2], &options).unwrap(),
            vec![0, 1, -1],
        );

        // Updates after finalize are phase errors.
        assert_eq!(corpus.update([1]).unwrap_err(), RankVocabError::AlreadyFrozen);
        assert_eq!(
            corpus.update_batches([vec![1]]).unwrap_err(),
            RankVocabError::AlreadyFrozen,
        );

        // A second finalize is rejected, and the frozen state survives.
        assert_eq!(corpus.finalize().unwrap_err(), RankVocabError::AlreadyFrozen);
        assert!(corpus.is_frozen());
        assert_eq!(corpus.to_loose(&[0]).unwrap(), vec![2]);
    }

    #[test]
    fn test_finalize_overflow_stays_counting() {
        let mut corpus: Corpus<i8, u32> = Default::default();
        for id in -100..100_i8 {
            if id != -2 {
                corpus.update([id]).unwrap();
            }
        }

        assert!(corpus.finalize().is_err());

        // Still in the counting phase; updates continue to land.
        assert!(!corpus.is_frozen());
        corpus.update([1]).unwrap();
    }
}
