//! # One-Shot Bulk Replacement

use crate::alloc::vec::Vec;
use crate::errors::RVResult;
use crate::replace::ReplacementTable;
use crate::types::LooseId;

/// Search-and-replace over an integer data array.
///
/// Each ``keys[i]`` maps 1:1 to ``values[i]``; every element of `data` is
/// replaced by the value paired with its exactly-matching key. A repeated
/// caller should prefer building a [`ReplacementTable`] once; this entry
/// point re-sorts the table per call.
///
/// ## Arguments
/// * `data` - the values to replace.
/// * `keys` - the keys to search for.
/// * `values` - the replacement values, aligned with `keys`.
/// * `skip_checks` - skip the coarse ``max(data) <= max(keys)`` sanity bound.
///
/// ## Returns
/// A new array of the same length as `data`; or an error if the key/value
/// lengths differ, the sanity bound fails, or any element of `data` has no
/// exact key match.
pub fn bulk_replace<L: LooseId>(
    data: &[L],
    keys: &[L],
    values: &[L],
    skip_checks: bool,
) -> RVResult<Vec<L>> {
    let table = ReplacementTable::try_new(keys.to_vec(), values.to_vec())?;
    if !skip_checks {
        table.check_data_bound(data)?;
    }
    table.replace(data)
}
