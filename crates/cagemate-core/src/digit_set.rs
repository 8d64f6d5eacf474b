//! Sets of digits (1-9).
//!
//! This module provides [`DigitSet`], a specialization of [`BitSet9`] for
//! digits. It is used both for the digits of a cage combination and for the
//! per-cell and cage-wide restrictions of a query.
//!
//! # Text format
//!
//! A digit set can be parsed from a string of digits. Separators (`,`, `_`,
//! whitespace) and enclosing braces are ignored, so `"168"`, `"1,6,8"` and
//! `"{1,6,8}"` all describe the same set. An empty string (or `"_"`) is the
//! empty set. [`Display`] writes the braced, comma-separated form.
//!
//! # Examples
//!
//! ```
//! use cagemate_core::{Digit, DigitSet};
//!
//! let set: DigitSet = "1,6,8".parse()?;
//! assert_eq!(set.len(), 3);
//! assert!(set.contains(Digit::D6));
//! assert_eq!(set.sum(), 15);
//! assert_eq!(set.to_string(), "{1,6,8}");
//! # Ok::<(), cagemate_core::ParseDigitSetError>(())
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Digit, bit_set_9::BitSet9, index_9::DigitSemantics};

/// A set of digits 1-9.
///
/// The implementation uses a 16-bit integer where bits 0-8 represent digits
/// 1-9 respectively. Two sets holding the same digits are equal and hash the
/// same regardless of insertion order.
///
/// # Examples
///
/// ```
/// use cagemate_core::{Digit, DigitSet};
///
/// let a = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
/// let b = DigitSet::from_iter([Digit::D2, Digit::D3, Digit::D4]);
///
/// assert_eq!(a | b, DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3, Digit::D4]));
/// assert_eq!(a & b, DigitSet::from_iter([Digit::D2, Digit::D3]));
/// assert_eq!(a.difference(b), DigitSet::from_iter([Digit::D1]));
/// ```
pub type DigitSet = BitSet9<DigitSemantics>;

impl BitSet9<DigitSemantics> {
    /// Returns the sum of the digits in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use cagemate_core::DigitSet;
    ///
    /// assert_eq!(DigitSet::EMPTY.sum(), 0);
    /// assert_eq!(DigitSet::FULL.sum(), 45);
    /// ```
    #[must_use]
    pub fn sum(self) -> u8 {
        self.iter().map(|digit| digit.value()).sum()
    }
}

impl Display for BitSet9<DigitSemantics> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, digit) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            Display::fmt(&digit, f)?;
        }
        f.write_str("}")
    }
}

/// Error returned when a string cannot be parsed as a [`DigitSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseDigitSetError {
    /// The string contains a character that is neither a digit 1-9 nor a separator.
    #[display("invalid character {ch:?} at position {pos}, expected digits 1-9")]
    InvalidChar {
        /// The offending character.
        ch: char,
        /// Byte offset of the character.
        pos: usize,
    },
}

impl FromStr for BitSet9<DigitSemantics> {
    type Err = ParseDigitSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .unwrap_or(trimmed);
        let offset = s.len() - s.trim_start().len() + usize::from(inner.len() != trimmed.len());

        let mut set = Self::new();
        for (i, ch) in inner.char_indices() {
            match ch {
                ',' | '_' => {}
                ch if ch.is_whitespace() => {}
                '1'..='9' => {
                    let value = ch as u8 - b'0';
                    set.insert(Digit::from_value(value));
                }
                ch => return Err(ParseDigitSetError::InvalidChar { ch, pos: offset + i }),
            }
        }
        Ok(set)
    }
}
