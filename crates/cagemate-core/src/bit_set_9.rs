//! Generic 9-element bitset.
//!
//! [`BitSet9`] stores up to nine values in a single `u16`. The mapping between
//! values and bits is supplied by an [`Index9Semantics`] implementation, so the
//! same container serves any value type with exactly nine members.
//!
//! # Examples
//!
//! ```
//! use cagemate_core::{Digit, bit_set_9::BitSet9, index_9::DigitSemantics};
//!
//! let mut set = BitSet9::<DigitSemantics>::new();
//! set.insert(Digit::D3);
//! set.insert(Digit::D7);
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.iter().collect::<Vec<_>>(), vec![Digit::D3, Digit::D7]);
//! ```

use std::{
    fmt::{self, Debug},
    hash::{Hash, Hasher},
    iter::FusedIterator,
    marker::PhantomData,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::index_9::{Index9, Index9Semantics};

const FULL_BITS: u16 = 0x1ff;

/// A set of up to nine values, stored as bits 0-8 of a `u16`.
///
/// Iteration yields values in ascending index order.
pub struct BitSet9<S> {
    bits: u16,
    _semantics: PhantomData<fn() -> S>,
}

impl<S> BitSet9<S> {
    /// The empty set.
    pub const EMPTY: Self = Self::from_bits(0);

    /// The set containing all nine values.
    pub const FULL: Self = Self::from_bits(FULL_BITS);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn from_bits(bits: u16) -> Self {
        Self {
            bits,
            _semantics: PhantomData,
        }
    }

    /// Returns the number of values in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no values.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the union of `self` and `other`.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self::from_bits(self.bits | other.bits)
    }

    /// Returns the values present in both `self` and `other`.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self::from_bits(self.bits & other.bits)
    }

    /// Returns the values in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self::from_bits(self.bits & !other.bits)
    }

    /// Returns `true` if every value of `self` is also in `other`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.bits & !other.bits == 0
    }
}

impl<S> BitSet9<S>
where
    S: Index9Semantics,
{
    /// Adds a value to the set.
    ///
    /// Returns `true` if the value was not already present.
    pub fn insert(&mut self, value: S::Value) -> bool {
        let bit = S::to_index(value).bit();
        let added = self.bits & bit == 0;
        self.bits |= bit;
        added
    }

    /// Removes a value from the set.
    ///
    /// Returns `true` if the value was present.
    pub fn remove(&mut self, value: S::Value) -> bool {
        let bit = S::to_index(value).bit();
        let removed = self.bits & bit != 0;
        self.bits &= !bit;
        removed
    }

    /// Returns `true` if the set contains `value`.
    #[must_use]
    pub fn contains(self, value: S::Value) -> bool {
        self.bits & S::to_index(value).bit() != 0
    }

    /// Returns an iterator over the values in ascending order.
    #[must_use]
    pub fn iter(self) -> Iter<S> {
        Iter {
            bits: self.bits,
            _semantics: PhantomData,
        }
    }
}

impl<S> Clone for BitSet9<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for BitSet9<S> {}

impl<S> Default for BitSet9<S> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<S> PartialEq for BitSet9<S> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<S> Eq for BitSet9<S> {}

impl<S> Hash for BitSet9<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<S> Debug for BitSet9<S>
where
    S: Index9Semantics,
    S::Value: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<S> BitOr for BitSet9<S> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<S> BitOrAssign for BitSet9<S> {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl<S> BitAnd for BitSet9<S> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<S> BitAndAssign for BitSet9<S> {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(rhs);
    }
}

impl<S> FromIterator<S::Value> for BitSet9<S>
where
    S: Index9Semantics,
{
    fn from_iter<T: IntoIterator<Item = S::Value>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S> Extend<S::Value> for BitSet9<S>
where
    S: Index9Semantics,
{
    fn extend<T: IntoIterator<Item = S::Value>>(&mut self, iter: T) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<S> IntoIterator for BitSet9<S>
where
    S: Index9Semantics,
{
    type Item = S::Value;
    type IntoIter = Iter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the values of a [`BitSet9`], in ascending order.
#[derive(Debug)]
pub struct Iter<S> {
    bits: u16,
    _semantics: PhantomData<fn() -> S>,
}

impl<S> Iterator for Iter<S>
where
    S: Index9Semantics,
{
    type Item = S::Value;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(S::from_index(Index9::new(index)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl<S> ExactSizeIterator for Iter<S> where S: Index9Semantics {}

impl<S> FusedIterator for Iter<S> where S: Index9Semantics {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{Digit, index_9::DigitSemantics};

    type Set = BitSet9<DigitSemantics>;

    #[test]
    fn test_insert_remove() {
        let mut set = Set::new();
        assert!(set.insert(Digit::D4));
        assert!(!set.insert(Digit::D4));
        assert!(set.contains(Digit::D4));
        assert_eq!(set.len(), 1);

        assert!(set.remove(Digit::D4));
        assert!(!set.remove(Digit::D4));
        assert!(set.is_empty());
    }

    #[test]
    fn test_constants() {
        assert_eq!(Set::EMPTY.len(), 0);
        assert_eq!(Set::FULL.len(), 9);
        assert_eq!(Set::default(), Set::EMPTY);
        assert_eq!(Set::FULL.iter().collect::<Vec<_>>(), Digit::ALL);
    }

    #[test]
    fn test_subset() {
        let small = Set::from_iter([Digit::D1, Digit::D2]);
        let large = Set::from_iter([Digit::D1, Digit::D2, Digit::D3]);
        assert!(small.is_subset(large));
        assert!(!large.is_subset(small));
        assert!(Set::EMPTY.is_subset(small));
    }

    #[test]
    fn test_debug() {
        let set = Set::from_iter([Digit::D9, Digit::D2]);
        assert_eq!(format!("{set:?}"), "{D2, D9}");
    }

    fn digits() -> impl Strategy<Value = Vec<Digit>> {
        prop::collection::vec(prop::sample::select(Digit::ALL.to_vec()), 0..12)
    }

    proptest! {
        #[test]
        fn prop_iter_is_sorted_and_unique(values in digits()) {
            let set = Set::from_iter(values.iter().copied());
            let collected: Vec<_> = set.iter().collect();
            let mut expected = values.clone();
            expected.sort();
            expected.dedup();
            prop_assert_eq!(collected, expected);
            prop_assert_eq!(set.iter().len(), set.len());
        }

        #[test]
        fn prop_set_algebra(a in digits(), b in digits()) {
            let a = Set::from_iter(a);
            let b = Set::from_iter(b);
            for digit in Digit::ALL {
                prop_assert_eq!((a | b).contains(digit), a.contains(digit) || b.contains(digit));
                prop_assert_eq!((a & b).contains(digit), a.contains(digit) && b.contains(digit));
                prop_assert_eq!(a.difference(b).contains(digit), a.contains(digit) && !b.contains(digit));
            }
            prop_assert!(a.intersection(b).is_subset(a));
            prop_assert!(a.is_subset(a.union(b)));
        }
    }
}
