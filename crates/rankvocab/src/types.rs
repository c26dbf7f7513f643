//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::AddAssign,
};

use num_traits::{FromPrimitive, PrimInt, Signed, ToPrimitive, Unsigned};

/// A type that can be used as a loose (or compact) token identifier.
///
/// These are constrained to be signed primitive integers; the out-of-vocab
/// sentinel is a negative value, disjoint from all compact ids (which are
/// always >= 0).
pub trait LooseId:
    'static
    + PrimInt
    + Signed
    + FromPrimitive
    + ToPrimitive
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> LooseId for T where
    T: 'static
        + PrimInt
        + Signed
        + FromPrimitive
        + ToPrimitive
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// A type that can be used as an occurrence count.
pub trait CountType:
    'static
    + PrimInt
    + Unsigned
    + FromPrimitive
    + ToPrimitive
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
    + AddAssign
{
}

impl<T> CountType for T where
    T: 'static
        + PrimInt
        + Unsigned
        + FromPrimitive
        + ToPrimitive
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
        + AddAssign
{
}

/// Saturating `i64` view of an identifier, for error diagnostics.
pub(crate) fn diag_i64<T: ToPrimitive>(v: T) -> i64 {
    v.to_i64().unwrap_or(i64::MAX)
}

/// Static check that a type is `Send`.
pub fn check_is_send<S: Send>(_: &S) {}

/// Static check that a type is `Sync`.
pub fn check_is_sync<S: Sync>(_: &S) {}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type RVHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type RVHashSet<V> = ahash::AHashSet<V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> RVHashMap<K, V> {
            RVHashMap::with_capacity(capacity)
        }

        /// Create a new hash set with the given capacity.
        pub fn hash_set_with_capacity<V>(capacity: usize) -> RVHashSet<V> {
            RVHashSet::with_capacity(capacity)
        }

    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type RVHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type RVHashSet<V> = foldhash::HashSet<V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> RVHashMap<K, V> {
            foldhash::HashMapExt::with_capacity(capacity)
        }

        /// Create a new hash set with the given capacity.
        pub fn hash_set_with_capacity<V>(capacity: usize) -> RVHashSet<V> {
            foldhash::HashSetExt::with_capacity(capacity)
        }

    } else if #[cfg(feature = "std")] {
        /// Type Alias for hash maps in this crate.
        pub type RVHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type RVHashSet<V> = std::collections::HashSet<V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> RVHashMap<K, V> {
            RVHashMap::with_capacity(capacity)
        }

        /// Create a new hash set with the given capacity.
        pub fn hash_set_with_capacity<V>(capacity: usize) -> RVHashSet<V> {
            RVHashSet::with_capacity(capacity)
        }

    } else if #[cfg(feature = "no_std")] {
        /// Type Alias for hash maps in this crate.
        pub type RVHashMap<K, V> = hashbrown::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type RVHashSet<V> = hashbrown::HashSet<V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> RVHashMap<K, V> {
            RVHashMap::with_capacity(capacity)
        }

        /// Create a new hash set with the given capacity.
        pub fn hash_set_with_capacity<V>(capacity: usize) -> RVHashSet<V> {
            RVHashSet::with_capacity(capacity)
        }

    } else {
        /// This error exists to give users more direct feedback
        /// on the feature configuration over the other compilation
        /// errors they would encounter from lacking the types.
        compile_error!("not(\"std\") requires \"no_std\" feature");
    }
}
