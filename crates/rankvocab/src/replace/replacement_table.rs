//! # Sorted Key/Value Replacement Table

use crate::alloc::vec::Vec;
use crate::errors::{RVResult, RankVocabError};
use crate::types::{LooseId, diag_i64};

/// A sort-once, replace-many key/value lookup table.
///
/// Keys are sorted ascending at construction, with the same permutation
/// applied to the values. Lookups are a right-biased binary search
/// (insertion point such that ties land on the existing equal element),
/// and must land on an *exact* key match; a miss is a
/// [`RankVocabError::KeyNotFound`] error, never a silent near-match.
///
/// Duplicate keys are tolerated; the earliest pair (in construction order)
/// wins, since the sort is stable.
///
/// The table is immutable after construction, so [`ReplacementTable::replace`]
/// is a pure function and safe to call from concurrent readers.
#[derive(Debug, Clone)]
pub struct ReplacementTable<L: LooseId> {
    /// Keys, sorted ascending.
    keys: Vec<L>,

    /// Values, aligned with `keys`.
    values: Vec<L>,
}

impl<L: LooseId> ReplacementTable<L> {
    /// Build a table from parallel key/value arrays.
    ///
    /// ## Arguments
    /// * `keys` - the keys to search for.
    /// * `values` - the replacement values, aligned with `keys`.
    ///
    /// ## Returns
    /// The sorted table, or [`RankVocabError::KeyValueLengthMismatch`]
    /// if the arrays differ in length.
    pub fn try_new(
        keys: Vec<L>,
        values: Vec<L>,
    ) -> RVResult<Self> {
        if keys.len() != values.len() {
            return Err(RankVocabError::KeyValueLengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }

        let mut order: Vec<usize> = (0..keys.len()).collect();
        order.sort_by_key(|&i| keys[i]);

        let values = order.iter().map(|&i| values[i]).collect();
        let mut keys = keys;
        keys.sort();

        Ok(Self { keys, values })
    }

    /// The number of key/value pairs.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True if the table holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The keys, sorted ascending.
    pub fn keys(&self) -> &[L] {
        &self.keys
    }

    /// The values, aligned with [`ReplacementTable::keys`].
    pub fn values(&self) -> &[L] {
        &self.values
    }

    /// The largest key, or None for an empty table.
    pub fn max_key(&self) -> Option<L> {
        self.keys.last().copied()
    }

    /// The coarse sanity bound: every data value must not exceed the max key.
    ///
    /// This does not prove coverage; [`ReplacementTable::lookup`] still
    /// requires exact matches.
    ///
    /// ## Returns
    /// `Ok(())`, or [`RankVocabError::EmptyKeyTable`] /
    /// [`RankVocabError::DataAboveKeySpace`].
    pub fn check_data_bound(
        &self,
        data: &[L],
    ) -> RVResult<()> {
        let Some(data_max) = data.iter().copied().max() else {
            return Ok(());
        };
        let Some(max_key) = self.max_key() else {
            return Err(RankVocabError::EmptyKeyTable);
        };
        if data_max > max_key {
            return Err(RankVocabError::DataAboveKeySpace {
                value: diag_i64(data_max),
                max_key: diag_i64(max_key),
            });
        }
        Ok(())
    }

    /// Look up the replacement value for a single data value.
    ///
    /// ## Returns
    /// The value paired with the exactly-matching key, or
    /// [`RankVocabError::KeyNotFound`].
    pub fn lookup(
        &self,
        value: L,
    ) -> RVResult<L> {
        // Right-biased insertion point: first index with keys[idx] >= value.
        let idx = self.keys.partition_point(|&k| k < value);
        if idx < self.keys.len() && self.keys[idx] == value {
            Ok(self.values[idx])
        } else {
            Err(RankVocabError::KeyNotFound {
                value: diag_i64(value),
            })
        }
    }

    /// Replace every element of `data` with its looked-up value.
    ///
    /// ## Returns
    /// A new array of the same length, or the first lookup error.
    /// No partial results are produced on failure.
    pub fn replace(
        &self,
        data: &[L],
    ) -> RVResult<Vec<L>> {
        data.iter().map(|&v| self.lookup(v)).collect()
    }

    /// Replace every element of `data` in place.
    ///
    /// The lookups are completed before `data` is touched, so a failed
    /// call leaves `data` unmodified.
    pub fn replace_in_place(
        &self,
        data: &mut [L],
    ) -> RVResult<()> {
        let replaced = self.replace(data)?;
        data.copy_from_slice(&replaced);
        Ok(())
    }
}
