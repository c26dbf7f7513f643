#![allow(missing_docs)]

use rankvocab::vocab::{CountFilterOptions, Corpus, VocabCounter, VocabCounterOptions};

type L = i64;
type C = u64;

/// Deterministic gapped-id batch generator (xorshift).
fn sample_batches(
    batches: usize,
    batch_len: usize,
) -> Vec<Vec<L>> {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    (0..batches)
        .map(|_| {
            (0..batch_len)
                // Skewed, sparse id space: gaps and repeats.
                .map(|_| ((next() % 50).pow(2) / 10) as L)
                .collect()
        })
        .collect()
}

#[test]
fn test_count_conservation_and_rank_order() {
    let batches = sample_batches(8, 257);

    let mut counter: VocabCounter<L, C> = Default::default();
    counter.update_batches(&batches);

    let total = counter.total_observed();
    assert_eq!(total, (8 * 257) as C);

    let vocab = counter.finalize().unwrap();

    // keys_counts is non-increasing, and conserves the observed total.
    let counts = vocab.keys_counts();
    assert!(counts.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(counts.iter().sum::<C>(), total);

    // Compact ids are exactly the ranks.
    let n = vocab.len() as L;
    assert_eq!(
        vocab.keys_compact(),
        (0..n).collect::<Vec<L>>().as_slice(),
    );
}

#[test]
fn test_mutual_inverse_law() {
    let batches = sample_batches(4, 100);

    let mut counter: VocabCounter<L, C> = Default::default();
    counter.update_batches(&batches);
    let vocab = counter.finalize().unwrap();

    for &loose in vocab.keys_loose() {
        let compact = vocab.compact_of(loose).unwrap();
        assert_eq!(vocab.loose_of(compact), Some(loose));
    }
}

#[test]
fn test_round_trip_law() {
    let batches = sample_batches(4, 100);

    let mut counter: VocabCounter<L, C> = Default::default();
    counter.update_batches(&batches);
    let vocab = counter.finalize().unwrap();

    // Every batch is composed of seen ids, so it survives the round trip.
    for batch in &batches {
        let compact = vocab.to_compact(batch).unwrap();
        assert_eq!(&vocab.to_loose(&compact).unwrap(), batch);
    }
}

#[test]
fn test_oov_and_rank_laws() {
    let mut counter: VocabCounter<L, C> = Default::default();
    counter.update([7, 7, 7, 100, 100, 12]);
    let vocab = counter.finalize().unwrap();

    // Never-seen ids map to the sentinel.
    for unseen in [-50, 0, 13, 99, 101] {
        assert_eq!(vocab.to_compact(&[unseen]).unwrap(), vec![vocab.oov_id()]);
    }

    // Highest count -> compact 0; lowest count -> highest compact id.
    assert_eq!(vocab.compact_of(7), Some(0));
    assert_eq!(vocab.compact_of(12), Some((vocab.len() - 1) as L));
}

#[test]
fn test_worked_example() {
    // update [2,2,2,2,3,3,3,4]; sentinel -2.
    let mut counter: VocabCounter<L, C> =
        VocabCounterOptions::default().with_oov_id(-2).init();
    counter.update([2, 2, 2, 2, 3, 3, 3, 4]);
    let vocab = counter.finalize().unwrap();

    assert_eq!(vocab.compact_of(2), Some(0));
    assert_eq!(vocab.compact_of(3), Some(1));
    assert_eq!(vocab.compact_of(4), Some(2));

    assert_eq!(
        vocab.to_compact(&[2, 3, 4, 99]).unwrap(),
        vec![0, 1, 2, -2],
    );
}

#[test]
fn test_filter_boundary() {
    // Counts [10, 8, 8, 3, 1] at ranks [0..4]; min_count = 5 replaces
    // every compact id >= 3.
    let mut counter: VocabCounter<L, C> = Default::default();
    for (id, count) in [(1, 10), (2, 8), (3, 8), (4, 3), (5, 1)] {
        counter.update(vec![id; count]);
    }
    let vocab = counter.finalize().unwrap();
    assert_eq!(vocab.keys_counts(), &[10, 8, 8, 3, 1]);

    let options = CountFilterOptions::default().with_min_count(5);
    assert_eq!(
        vocab.filter(&[0, 1, 2, 3, 4], &options).unwrap(),
        vec![0, 1, 2, -1, -1],
    );
}

#[test]
fn test_corpus_phase_errors() {
    let mut corpus: Corpus<L, C> = Default::default();

    assert!(corpus.to_compact(&[1]).is_err());

    corpus.update([1, 1, 2]).unwrap();
    corpus.finalize().unwrap();

    assert!(corpus.update([1]).is_err());
    assert!(corpus.finalize().is_err());
    assert_eq!(corpus.to_compact(&[1, 2, 3]).unwrap(), vec![0, 1, -2]);
}

#[cfg(feature = "rayon")]
#[test]
fn test_parallel_matches_serial() {
    let batches = sample_batches(16, 64);

    let mut counter: VocabCounter<L, C> = Default::default();
    counter.update_batches(&batches);
    let vocab = counter.finalize().unwrap();

    let serial: Vec<Vec<L>> = batches
        .iter()
        .map(|b| vocab.to_compact(b).unwrap())
        .collect();
    let parallel = rankvocab::rayon::par_to_compact(&vocab, &batches).unwrap();

    assert_eq!(serial, parallel);
}
