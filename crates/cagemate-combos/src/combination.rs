//! A single candidate digit combination for a cage.

use std::fmt::{self, Display};

use cagemate_core::{Digit, DigitSet};

/// A set of distinct digits that can fill a cage, together with its sum and size.
///
/// Combinations are only created by the generator (see
/// [`generate_universe`](crate::generate_universe)), which guarantees that the
/// digit set is non-empty. The sum and cage size are cached at construction.
///
/// # Examples
///
/// ```
/// use cagemate_combos::Universe;
/// use cagemate_core::{Digit, DigitSet};
///
/// let universe = Universe::new();
/// let digits: DigitSet = "168".parse()?;
/// let combination = universe
///     .of_size(3)
///     .iter()
///     .find(|c| c.digits() == digits)
///     .unwrap();
///
/// assert_eq!(combination.sum(), 15);
/// assert_eq!(combination.cage_size(), 3);
/// assert_eq!(combination.numbers().collect::<Vec<_>>(), [Digit::D1, Digit::D6, Digit::D8]);
/// assert_eq!(combination.to_string(), "{1,6,8} (sum 15)");
/// # Ok::<(), cagemate_core::ParseDigitSetError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Combination {
    digits: DigitSet,
    sum: u8,
    cage_size: u8,
}

impl Combination {
    /// Creates a combination from a non-empty digit set.
    ///
    /// # Panics
    ///
    /// Panics if `digits` is empty.
    pub(crate) fn new(digits: DigitSet) -> Self {
        assert!(!digits.is_empty(), "combination must contain at least one digit");
        #[expect(clippy::cast_possible_truncation)]
        let cage_size = digits.len() as u8;
        Self {
            digits,
            sum: digits.sum(),
            cage_size,
        }
    }

    /// Returns the digits of the combination as a set.
    #[must_use]
    pub fn digits(&self) -> DigitSet {
        self.digits
    }

    /// Returns the digits of the combination in ascending order.
    pub fn numbers(&self) -> impl ExactSizeIterator<Item = Digit> + use<> {
        self.digits.iter()
    }

    /// Returns the sum of the digits.
    #[must_use]
    pub fn sum(&self) -> u8 {
        self.sum
    }

    /// Returns the number of digits, which is the number of cells in the cage.
    #[must_use]
    pub fn cage_size(&self) -> u8 {
        self.cage_size
    }
}

impl Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (sum {})", self.digits, self.sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cached_values() {
        let combination = Combination::new(DigitSet::from_iter([Digit::D9, Digit::D2, Digit::D4]));
        assert_eq!(combination.sum(), 15);
        assert_eq!(combination.cage_size(), 3);
        assert_eq!(
            combination.numbers().collect::<Vec<_>>(),
            vec![Digit::D2, Digit::D4, Digit::D9]
        );
    }

    #[test]
    fn test_full_set() {
        let combination = Combination::new(DigitSet::FULL);
        assert_eq!(combination.sum(), 45);
        assert_eq!(combination.cage_size(), 9);
        assert_eq!(combination.numbers().len(), 9);
    }

    #[test]
    #[should_panic(expected = "at least one digit")]
    fn test_rejects_empty() {
        let _ = Combination::new(DigitSet::EMPTY);
    }
}
