//! The precomputed set of all cage combinations.

use std::collections::HashSet;

use cagemate_core::{Digit, DigitSet};

use crate::{Combination, Matches, Query};

/// Largest cage that can be filled with distinct digits.
pub const MAX_CAGE_SIZE: u8 = 9;

/// Generates every combination of distinct digits 1-9 for cage sizes 1 to 9.
///
/// Combinations are ordered by cage size. Each size `n` contributes exactly
/// C(9, n) combinations, 511 in total.
///
/// Size 1 is the nine singletons. Every larger size is built by extending each
/// combination of the previous size with each digit it does not contain yet.
/// Different extension orders reach the same digit set, so a registry of the
/// sets already produced keeps the first occurrence only.
///
/// # Examples
///
/// ```
/// use cagemate_combos::generate_universe;
///
/// let combinations = generate_universe();
/// assert_eq!(combinations.len(), 511);
/// assert_eq!(combinations.iter().filter(|c| c.cage_size() == 2).count(), 36);
/// ```
#[must_use]
pub fn generate_universe() -> Vec<Combination> {
    let mut combinations = Vec::with_capacity((1 << MAX_CAGE_SIZE) - 1);
    let mut previous: Vec<DigitSet> = Vec::new();

    for cage_size in 1..=MAX_CAGE_SIZE {
        let current = if cage_size == 1 {
            Digit::ALL
                .into_iter()
                .map(|digit| DigitSet::from_iter([digit]))
                .collect()
        } else {
            extend_by_one_digit(&previous)
        };
        log::trace!("generated {} combinations of size {cage_size}", current.len());

        combinations.extend(current.iter().copied().map(Combination::new));
        previous = current;
    }

    combinations
}

fn extend_by_one_digit(smaller: &[DigitSet]) -> Vec<DigitSet> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for &digits in smaller {
        for digit in DigitSet::FULL.difference(digits) {
            let mut candidate = digits;
            candidate.insert(digit);
            if seen.insert(candidate) {
                result.push(candidate);
            }
        }
    }
    result
}

/// All combinations for cage sizes 1 to 9, built once and read-only afterwards.
///
/// A `Universe` is an ordinary value: construct it once, keep it wherever the
/// queries run, and share it by reference. Queries never modify it, so it can
/// be read from several threads at the same time.
///
/// # Examples
///
/// ```
/// use cagemate_combos::{Query, SumConstraint, Universe};
///
/// let universe = Universe::new();
/// assert_eq!(universe.len(), 511);
/// assert_eq!(universe.of_size(3).len(), 84);
///
/// let matches = universe.query(
///     &Query::new()
///         .with_sum(SumConstraint::Exact(6))
///         .with_cage_size(3),
/// );
/// assert_eq!(matches.len(), 1); // {1,2,3}
/// ```
#[derive(Debug, Clone)]
pub struct Universe {
    combinations: Vec<Combination>,
    // `size_offsets[n - 1]..size_offsets[n]` holds the combinations of size `n`.
    size_offsets: [usize; MAX_CAGE_SIZE as usize + 1],
}

impl Default for Universe {
    fn default() -> Self {
        Self::new()
    }
}

impl Universe {
    /// Generates the universe of combinations.
    #[must_use]
    pub fn new() -> Self {
        let combinations = generate_universe();

        let mut size_offsets = [0; MAX_CAGE_SIZE as usize + 1];
        for combination in &combinations {
            size_offsets[usize::from(combination.cage_size())] += 1;
        }
        for i in 1..size_offsets.len() {
            size_offsets[i] += size_offsets[i - 1];
        }

        log::debug!("built combination universe with {} entries", combinations.len());
        Self {
            combinations,
            size_offsets,
        }
    }

    /// Returns all combinations, ordered by cage size.
    #[must_use]
    pub fn combinations(&self) -> &[Combination] {
        &self.combinations
    }

    /// Returns an iterator over all combinations.
    pub fn iter(&self) -> std::slice::Iter<'_, Combination> {
        self.combinations.iter()
    }

    /// Returns the number of combinations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    /// Returns `true` if the universe holds no combinations.
    ///
    /// A generated universe is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }

    /// Returns the combinations with exactly `cage_size` digits.
    ///
    /// Sizes outside 1-9 yield an empty slice.
    #[must_use]
    pub fn of_size(&self, cage_size: u8) -> &[Combination] {
        self.of_sizes(cage_size, cage_size)
    }

    /// Returns the combinations whose size lies in `min..=max`, clamped to 1-9.
    fn of_sizes(&self, min: u8, max: u8) -> &[Combination] {
        let min = min.max(1);
        let max = max.min(MAX_CAGE_SIZE);
        if min > max {
            return &[];
        }
        let start = self.size_offsets[usize::from(min) - 1];
        let end = self.size_offsets[usize::from(max)];
        &self.combinations[start..end]
    }

    /// Returns the combinations satisfying every constraint of `query`.
    ///
    /// The result borrows from the universe and keeps its order.
    #[must_use]
    pub fn query(&self, query: &Query) -> Matches<'_> {
        let candidates = self.of_sizes(
            query.min_cage_size.unwrap_or(1),
            query.max_cage_size.unwrap_or(MAX_CAGE_SIZE),
        );
        let matches: Matches<'_> = candidates
            .iter()
            .filter(|combination| query.accepts(combination))
            .collect();
        log::trace!("query {query:?} matched {} combinations", matches.len());
        matches
    }
}

impl<'a> IntoIterator for &'a Universe {
    type Item = &'a Combination;
    type IntoIter = std::slice::Iter<'a, Combination>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
