//! # Count-Band Filtering Options

use crate::types::{CountType, LooseId};

/// Options for [`FrozenVocab::filter`](crate::vocab::FrozenVocab::filter).
///
/// Filtering operates on *compact* arrays, exploiting the rank order of the
/// frozen counts: the rare side replaces every rank whose count fell below
/// `min_count`, the frequent side replaces every rank whose count stayed at
/// or above `max_count`. A threshold of zero disables that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountFilterOptions<L: LooseId, C: CountType> {
    /// Replace ids occurring fewer than this many times. Zero disables.
    pub min_count: C,

    /// Replace ids occurring at least this many times. Zero disables.
    pub max_count: C,

    /// Replacement id for the rare side.
    pub min_replacement: L,

    /// Replacement id for the frequent side.
    pub max_replacement: L,
}

impl<L: LooseId, C: CountType> Default for CountFilterOptions<L, C> {
    fn default() -> Self {
        // Both sides disabled; -1 is the conventional pad id.
        Self {
            min_count: C::zero(),
            max_count: C::zero(),
            min_replacement: -L::one(),
            max_replacement: -L::one(),
        }
    }
}

impl<L: LooseId, C: CountType> CountFilterOptions<L, C> {
    /// Set the rare-side count threshold. Zero disables.
    pub fn with_min_count(
        self,
        min_count: C,
    ) -> Self {
        Self { min_count, ..self }
    }

    /// Set the frequent-side count threshold. Zero disables.
    pub fn with_max_count(
        self,
        max_count: C,
    ) -> Self {
        Self { max_count, ..self }
    }

    /// Set the replacement id for the rare side.
    pub fn with_min_replacement(
        self,
        min_replacement: L,
    ) -> Self {
        Self {
            min_replacement,
            ..self
        }
    }

    /// Set the replacement id for the frequent side.
    pub fn with_max_replacement(
        self,
        max_replacement: L,
    ) -> Self {
        Self {
            max_replacement,
            ..self
        }
    }
}

/// The first rank whose count drops below `min_count`.
///
/// Ranks at or past the cutoff take the rare-side replacement. When the
/// counts never drop below the threshold the cutoff is `len`, which
/// replaces nothing.
pub(crate) fn rare_cutoff<C: CountType>(
    keys_counts: &[C],
    min_count: C,
) -> usize {
    if min_count.is_zero() {
        keys_counts.len()
    } else {
        // keys_counts is non-increasing by construction.
        keys_counts.partition_point(|&c| c >= min_count)
    }
}

/// The first rank whose count drops below `max_count`.
///
/// Ranks before the cutoff take the frequent-side replacement. When the
/// counts never drop below the threshold the cutoff collapses to zero:
/// "threshold never reached" means no replacement, not replace-everything.
pub(crate) fn frequent_cutoff<C: CountType>(
    keys_counts: &[C],
    max_count: C,
) -> usize {
    if max_count.is_zero() {
        return 0;
    }
    let cutoff = keys_counts.partition_point(|&c| c >= max_count);
    if cutoff == keys_counts.len() { 0 } else { cutoff }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builders() {
        let options: CountFilterOptions<i64, u64> = Default::default();

        assert_eq!(options.min_count, 0);
        assert_eq!(options.max_count, 0);
        assert_eq!(options.min_replacement, -1);
        assert_eq!(options.max_replacement, -1);

        let options = options
            .with_min_count(5)
            .with_max_count(1000)
            .with_min_replacement(-2)
            .with_max_replacement(-3);

        assert_eq!(options.min_count, 5);
        assert_eq!(options.max_count, 1000);
        assert_eq!(options.min_replacement, -2);
        assert_eq!(options.max_replacement, -3);
    }

    #[test]
    fn test_rare_cutoff() {
        let counts: &[u32] = &[10, 8, 8, 3, 1];

        // Disabled.
        assert_eq!(rare_cutoff(counts, 0), 5);

        // First count below 5 is at rank 3.
        assert_eq!(rare_cutoff(counts, 5), 3);

        // All counts satisfy the threshold: nothing past the cutoff.
        assert_eq!(rare_cutoff(counts, 1), 5);

        // No count satisfies the threshold: everything past the cutoff.
        assert_eq!(rare_cutoff(counts, 100), 0);
    }

    #[test]
    fn test_frequent_cutoff() {
        let counts: &[u32] = &[10, 8, 8, 3, 1];

        // Disabled.
        assert_eq!(frequent_cutoff(counts, 0), 0);

        // Ranks 0..3 occur at least 5 times.
        assert_eq!(frequent_cutoff(counts, 5), 3);

        // Threshold never reached: no replacement, not replace-everything.
        assert_eq!(frequent_cutoff(counts, 1), 0);

        // Nothing is frequent enough.
        assert_eq!(frequent_cutoff(counts, 100), 0);
    }

    #[test]
    fn test_cutoffs_empty() {
        let counts: &[u32] = &[];
        assert_eq!(rare_cutoff(counts, 5), 0);
        assert_eq!(frequent_cutoff(counts, 5), 0);
    }
}
