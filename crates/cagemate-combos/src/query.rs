//! Query parameters and their result set.

use cagemate_core::DigitSet;

use crate::{Combination, SumConstraint, Universe, feasibility};

/// Constraints a cage combination has to satisfy.
///
/// A default query accepts every combination. The builder methods refine it.
///
/// # Examples
///
/// ```
/// use cagemate_combos::{Query, SumConstraint, Universe};
/// use cagemate_core::DigitSet;
///
/// let universe = Universe::new();
/// let query = Query::new()
///     .with_sum(SumConstraint::Exact(15))
///     .with_cage_size(3)
///     .with_cell("9".parse()?);
///
/// let matches = universe.query(&query);
/// assert!(matches.contains("159".parse()?));
/// assert!(!matches.contains("168".parse()?));
/// # Ok::<(), cagemate_core::ParseDigitSetError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Constraint on the sum of the digits.
    pub sum: SumConstraint,
    /// Smallest accepted cage size, if any.
    pub min_cage_size: Option<u8>,
    /// Largest accepted cage size, if any.
    pub max_cage_size: Option<u8>,
    /// For each cell, the digits it must take one of. An empty set leaves the
    /// cell unrestricted.
    pub cells_must_contain: Vec<DigitSet>,
    /// Digits the combination may use outside the restricted cells. An empty
    /// set means no restriction.
    pub cells_may_only_contain: DigitSet,
}

impl Query {
    /// Creates a query that accepts every combination.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sum constraint.
    #[must_use]
    pub fn with_sum(mut self, sum: SumConstraint) -> Self {
        self.sum = sum;
        self
    }

    /// Sets the smallest accepted cage size.
    #[must_use]
    pub fn with_min_cage_size(mut self, min: u8) -> Self {
        self.min_cage_size = Some(min);
        self
    }

    /// Sets the largest accepted cage size.
    #[must_use]
    pub fn with_max_cage_size(mut self, max: u8) -> Self {
        self.max_cage_size = Some(max);
        self
    }

    /// Accepts only combinations of exactly `size` digits.
    #[must_use]
    pub fn with_cage_size(self, size: u8) -> Self {
        self.with_min_cage_size(size).with_max_cage_size(size)
    }

    /// Appends a cell that must take one of `digits`.
    #[must_use]
    pub fn with_cell(mut self, digits: DigitSet) -> Self {
        self.cells_must_contain.push(digits);
        self
    }

    /// Replaces the per-cell restrictions.
    #[must_use]
    pub fn with_cells(mut self, cells: impl IntoIterator<Item = DigitSet>) -> Self {
        self.cells_must_contain = cells.into_iter().collect();
        self
    }

    /// Sets the digits the combination may only contain.
    #[must_use]
    pub fn with_may_only_contain(mut self, digits: DigitSet) -> Self {
        self.cells_may_only_contain = digits;
        self
    }

    /// Returns `true` if `combination` satisfies every constraint.
    ///
    /// Size and sum are checked before the assignment search.
    #[must_use]
    pub fn accepts(&self, combination: &Combination) -> bool {
        let size = combination.cage_size();
        self.min_cage_size.is_none_or(|min| min <= size)
            && self.max_cage_size.is_none_or(|max| size <= max)
            && self.sum.matches(combination.sum())
            && feasibility::can_assign(
                combination.digits(),
                &self.cells_must_contain,
                self.cells_may_only_contain,
            )
    }
}

/// Returns the combinations of `universe` that satisfy `query`.
///
/// Equivalent to [`Universe::query`].
#[must_use]
pub fn query_combinations<'a>(universe: &'a Universe, query: &Query) -> Matches<'a> {
    universe.query(query)
}

/// The combinations matching a query.
///
/// Entries borrow from the [`Universe`] and appear in its order. Since the
/// universe holds each digit set once, a result never contains duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matches<'a> {
    combinations: Vec<&'a Combination>,
}

impl<'a> Matches<'a> {
    /// Returns the number of matching combinations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    /// Returns `true` if nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }

    /// Returns an iterator over the matching combinations.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'a Combination> + '_ {
        self.combinations.iter().copied()
    }

    /// Returns `true` if the combination with exactly these digits matched.
    #[must_use]
    pub fn contains(&self, digits: DigitSet) -> bool {
        self.combinations.iter().any(|c| c.digits() == digits)
    }

    /// Returns the matching combinations as a vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<&'a Combination> {
        self.combinations
    }
}

impl<'a> FromIterator<&'a Combination> for Matches<'a> {
    fn from_iter<T: IntoIterator<Item = &'a Combination>>(iter: T) -> Self {
        Self {
            combinations: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for Matches<'a> {
    type Item = &'a Combination;
    type IntoIter = std::vec::IntoIter<&'a Combination>;

    fn into_iter(self) -> Self::IntoIter {
        self.combinations.into_iter()
    }
}
