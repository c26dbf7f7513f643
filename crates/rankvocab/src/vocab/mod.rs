//! # Frequency-Ranked Vocabulary
//!
//! The vocabulary has a two-phase lifecycle:
//!
//! 1. An open, append-only counting phase - [`VocabCounter`] accumulates
//!    occurrence counts of loose token identifiers across input batches.
//! 2. A closed, read-only query phase - [`VocabCounter::finalize`] consumes
//!    the counter, computes the frequency ranking exactly once, and returns
//!    an immutable [`FrozenVocab`].
//!
//! Making finalize consume the counter turns phase misuse into a
//! compile-time error. Callers that need a single long-lived handle with
//! the classic runtime-checked phases can use [`Corpus`] instead.
//!
//! Count-band filtering of compact arrays is configured with
//! [`CountFilterOptions`].

mod corpus;
mod count_filter;
mod frozen_vocab;
mod vocab_counter;

#[doc(inline)]
pub use corpus::Corpus;
#[doc(inline)]
pub use count_filter::CountFilterOptions;
#[doc(inline)]
pub use frozen_vocab::FrozenVocab;
#[doc(inline)]
pub use vocab_counter::{VocabCounter, VocabCounterOptions};
