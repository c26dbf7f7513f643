//! # Error Types
//!
//! Every precondition violation is detected eagerly at the call site and
//! surfaced synchronously; no operation returns a partial result.
//!
//! The variants fall into two families:
//! * lifecycle phase errors - [`RankVocabError::AlreadyFrozen`],
//!   [`RankVocabError::NotFrozen`];
//! * malformed argument errors - everything else.

/// Errors from rankvocab operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RankVocabError {
    /// A counting operation was invoked after the vocabulary was frozen.
    #[error("vocabulary is already frozen")]
    AlreadyFrozen,

    /// A query operation was invoked before the vocabulary was frozen.
    #[error("vocabulary is not frozen")]
    NotFrozen,

    /// Vocab size exceeds the capacity of the identifier type.
    #[error("vocab size ({size}) exceeds identifier type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// A replacement table was built from key/value arrays of differing length.
    #[error("replacement table length mismatch: {keys} keys vs {values} values")]
    KeyValueLengthMismatch {
        /// The number of keys.
        keys: usize,
        /// The number of values.
        values: usize,
    },

    /// A non-empty data array was replaced against an empty key table.
    #[error("replacement key table is empty")]
    EmptyKeyTable,

    /// A data value exceeded the maximum key (the coarse sanity bound).
    ///
    /// Diagnostic fields are saturated into `i64`.
    #[error("data value ({value}) exceeds the max replacement key ({max_key})")]
    DataAboveKeySpace {
        /// The offending data value.
        value: i64,
        /// The maximum key in the table.
        max_key: i64,
    },

    /// A data value had no exact match in the replacement key table.
    ///
    /// Diagnostic fields are saturated into `i64`.
    #[error("no exact replacement key match for data value ({value})")]
    KeyNotFound {
        /// The offending data value.
        value: i64,
    },

    /// A compact array contained a value outside ``[0, n)`` which is not the
    /// recognized OOV sentinel.
    ///
    /// Diagnostic fields are saturated into `i64`.
    #[error("compact id ({value}) outside the vocabulary range [0, {len})")]
    CompactOutOfRange {
        /// The offending compact value.
        value: i64,
        /// The vocabulary size.
        len: usize,
    },
}

/// Result type for rankvocab operations.
pub type RVResult<T> = core::result::Result<T, RankVocabError>;
