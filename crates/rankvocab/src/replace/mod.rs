//! # Batched Replace-By-Lookup
//!
//! A stateless search-and-replace primitive over integer arrays:
//! given parallel ``keys``/``values`` arrays, every element of a data array
//! is replaced by the value paired with its exactly-matching key.
//!
//! The [`vocab`](crate::vocab) query operations are all built on this
//! primitive, but it is also usable on its own:
//! * [`ReplacementTable`] - a sort-once, replace-many table.
//! * [`bulk_replace`] - a one-shot entry point.

mod bulk_replace;
mod replacement_table;

#[doc(inline)]
pub use bulk_replace::bulk_replace;
#[doc(inline)]
pub use replacement_table::ReplacementTable;
