//! Index types and semantics for 9-element sets.
//!
//! This module provides [`Index9`] and [`Index9Semantics`], which define how
//! values map to bit indices in generic 9-element containers like
//! [`BitSet9`](crate::bit_set_9::BitSet9).
//!
//! # Examples
//!
//! ```
//! use cagemate_core::index_9::{Index9, Index9Semantics};
//!
//! // Define semantics that map numbers 1-9 to indices 0-8
//! struct NumberSemantics;
//!
//! impl Index9Semantics for NumberSemantics {
//!     type Value = u8;
//!
//!     fn to_index(value: u8) -> Index9 {
//!         assert!((1..=9).contains(&value));
//!         Index9::new(value - 1)
//!     }
//!
//!     fn from_index(index: Index9) -> u8 {
//!         index.index() + 1
//!     }
//! }
//!
//! assert_eq!(NumberSemantics::to_index(5).index(), 4);
//! ```

use crate::Digit;

/// A bit index in the range 0-8.
///
/// This type represents a valid index into a 9-element container. It ensures
/// at construction time that the index is within the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Index9 {
    index: u8,
}

impl Index9 {
    /// Creates a new bit index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-8.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < 9);
        Self { index }
    }

    /// Returns the underlying index value (0-8).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.index
    }

    pub(crate) const fn bit(self) -> u16 {
        1 << self.index
    }

    /// Returns an iterator over all 9 valid bit indices (0-8).
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagemate_core::index_9::Index9;
    /// let indices: Vec<_> = Index9::all().collect();
    /// assert_eq!(indices.len(), 9);
    /// assert_eq!(indices[0].index(), 0);
    /// assert_eq!(indices[8].index(), 8);
    /// ```
    pub fn all() -> impl Iterator<Item = Self> {
        (0..9).map(Index9::new)
    }
}

/// Defines the semantics for mapping values to indices in 9-element containers.
///
/// This trait allows generic containers like [`BitSet9`](crate::bit_set_9::BitSet9)
/// to work with different value types. Implementors define how user-facing
/// values are converted to and from internal indices (0-8).
pub trait Index9Semantics {
    /// The type of values that can be stored in the container.
    type Value;

    /// Converts a value to a bit index.
    ///
    /// # Panics
    ///
    /// Should panic if the value cannot be represented as a valid bit index (0-8).
    fn to_index(value: Self::Value) -> Index9;

    /// Converts a bit index back to a value.
    fn from_index(index: Index9) -> Self::Value;
}

/// Semantics for digits 1-9.
///
/// Digit 1 maps to index 0, digit 2 to index 1, and so on. Since [`Digit`]
/// can only hold valid values, the conversion never panics.
///
/// # Examples
///
/// ```
/// use cagemate_core::{
///     Digit,
///     index_9::{DigitSemantics, Index9, Index9Semantics},
/// };
///
/// assert_eq!(DigitSemantics::to_index(Digit::D1).index(), 0);
/// assert_eq!(DigitSemantics::to_index(Digit::D9).index(), 8);
/// assert_eq!(DigitSemantics::from_index(Index9::new(4)), Digit::D5);
/// ```
#[derive(Debug)]
pub struct DigitSemantics;

impl Index9Semantics for DigitSemantics {
    type Value = Digit;

    fn to_index(value: Self::Value) -> Index9 {
        Index9::new(value.value() - 1)
    }

    fn from_index(index: Index9) -> Self::Value {
        Digit::ALL[usize::from(index.index())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_to_index() {
        assert_eq!(DigitSemantics::to_index(Digit::D1).index(), 0);
        assert_eq!(DigitSemantics::to_index(Digit::D5).index(), 4);
        assert_eq!(DigitSemantics::to_index(Digit::D9).index(), 8);
    }

    #[test]
    fn test_round_trip() {
        for digit in Digit::ALL {
            let index = DigitSemantics::to_index(digit);
            assert_eq!(DigitSemantics::from_index(index), digit);
        }
    }

    #[test]
    fn test_bits_are_distinct() {
        let mut seen = 0_u16;
        for index in Index9::all() {
            assert_eq!(seen & index.bit(), 0);
            seen |= index.bit();
        }
        assert_eq!(seen, 0x1ff);
    }

    #[test]
    #[should_panic]
    fn test_rejects_nine() {
        let _ = Index9::new(9);
    }
}
