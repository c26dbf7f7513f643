//! # `rankvocab` Frequency-Ranked Vocabulary Compaction
//!
//! This crate maintains a frequency-ranked vocabulary over streams of integer
//! token identifiers, and remaps between two identifier spaces:
//!
//! * *loose* identifiers - raw tokenizer output; sparse, arbitrary, gapped.
//! * *compact* identifiers - dense ids in ``[0, n)``, assigned by descending
//!   frequency rank, so the most common token is id ``0``.
//!
//! Compact arrays let downstream consumers (embedding tables, count models)
//! allocate dense storage sized by the live vocabulary instead of by the
//! tokenizer's id space.
//!
//! See:
//! * [`vocab::VocabCounter`] to accumulate counts over input batches.
//! * [`vocab::FrozenVocab`] for the post-finalize remapping and filtering ops.
//! * [`vocab::Corpus`] for a runtime-phase wrapper over both.
//! * [`replace`] for the batched replace-by-lookup primitive.
//!
//! The counting phase is append-only; [`vocab::VocabCounter::finalize`]
//! consumes the counter and returns an immutable [`vocab::FrozenVocab`], so
//! phase misuse on this path is a compile-time error. Identifiers never seen
//! during counting map to a configurable negative sentinel.
//!
//! ```rust
//! use rankvocab::vocab::{VocabCounter, VocabCounterOptions};
//!
//! type L = i64;
//! type C = u64;
//!
//! let mut counter: VocabCounter<L, C> =
//!     VocabCounterOptions::default().with_oov_id(-2).init();
//!
//! counter.update([2, 2, 2, 2, 3, 3, 3, 4]);
//! let vocab = counter.finalize()?;
//!
//! // Ranked by frequency: 2 (x4) -> 0, 3 (x3) -> 1, 4 (x1) -> 2.
//! assert_eq!(vocab.to_compact(&[2, 3, 4, 99])?, vec![0, 1, 2, -2]);
//!
//! // Known compact ids (and the sentinel) round-trip.
//! assert_eq!(vocab.to_loose(&[0, 1, 2, -2])?, vec![2, 3, 4, -2]);
//! # Ok::<(), rankvocab::errors::RankVocabError>(())
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod errors;
pub mod replace;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{RVResult, RankVocabError};
#[doc(inline)]
pub use replace::{ReplacementTable, bulk_replace};
#[doc(inline)]
pub use vocab::{Corpus, CountFilterOptions, FrozenVocab, VocabCounter, VocabCounterOptions};
