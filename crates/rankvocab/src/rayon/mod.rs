//! # Parallel Batch Remapping
//!
//! Batch-level ``rayon`` wrappers over the [`FrozenVocab`] query operations.
//!
//! The core stays single-threaded; a [`FrozenVocab`] is immutable after
//! finalize, so fanning batches out across a thread pool needs no locking.

use crate::alloc::vec::Vec;
use crate::errors::RVResult;
use crate::types::{CountType, LooseId};
use crate::vocab::{CountFilterOptions, FrozenVocab};
use rayon::prelude::*;

/// Remap a batch of loose arrays into the compact id space, in parallel.
///
/// Equivalent to mapping [`FrozenVocab::to_compact`] over `batches`.
pub fn par_to_compact<L, C, A>(
    vocab: &FrozenVocab<L, C>,
    batches: &[A],
) -> RVResult<Vec<Vec<L>>>
where
    L: LooseId,
    C: CountType,
    A: AsRef<[L]> + Sync,
{
    batches
        .par_iter()
        .map(|batch| vocab.to_compact(batch.as_ref()))
        .collect()
}

/// Remap a batch of compact arrays back into the loose id space, in parallel.
///
/// Equivalent to mapping [`FrozenVocab::to_loose`] over `batches`.
pub fn par_to_loose<L, C, A>(
    vocab: &FrozenVocab<L, C>,
    batches: &[A],
) -> RVResult<Vec<Vec<L>>>
where
    L: LooseId,
    C: CountType,
    A: AsRef<[L]> + Sync,
{
    batches
        .par_iter()
        .map(|batch| vocab.to_loose(batch.as_ref()))
        .collect()
}

/// Count-band filter a batch of compact arrays, in parallel.
///
/// Equivalent to mapping [`FrozenVocab::filter`] over `batches`.
pub fn par_filter<L, C, A>(
    vocab: &FrozenVocab<L, C>,
    batches: &[A],
    options: &CountFilterOptions<L, C>,
) -> RVResult<Vec<Vec<L>>>
where
    L: LooseId,
    C: CountType,
    A: AsRef<[L]> + Sync,
{
    batches
        .par_iter()
        .map(|batch| vocab.filter(batch.as_ref(), options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::vec;
    use crate::errors::RankVocabError;
    use crate::vocab::VocabCounter;

    fn example_vocab() -> FrozenVocab<i64, u64> {
        let mut counter: VocabCounter<i64, u64> = Default::default();
        counter.update([2, 2, 2, 2, 3, 3, 3, 4]);
        counter.finalize().unwrap()
    }

    #[test]
    fn test_par_round_trip() {
        let vocab = example_vocab();

        let batches = vec![vec![2, 3], vec![4, 4, 2], vec![], vec![99]];

        let compact = par_to_compact(&vocab, &batches).unwrap();
        assert_eq!(
            compact,
            vec![vec![0, 1], vec![2, 2, 0], vec![], vec![-2]],
        );

        let loose = par_to_loose(&vocab, &compact).unwrap();
        assert_eq!(
            loose,
            vec![vec![2, 3], vec![4, 4, 2], vec![], vec![-2]],
        );
    }

    #[test]
    fn test_par_filter() {
        let vocab = example_vocab();
        let options = CountFilterOptions::default().with_min_count(2);

        assert_eq!(
            par_filter(&vocab, &[vec![0, 1, 2], vec![2]], &options).unwrap(),
            vec![vec![0, 1, -1], vec![-1]],
        );
    }

    #[test]
    fn test_par_error_propagates() {
        let vocab = example_vocab();

        assert_eq!(
            par_to_loose(&vocab, &[vec![0], vec![17]]).unwrap_err(),
            RankVocabError::CompactOutOfRange { value: 17, len: 3 },
        );
    }
}
