//! Core data structures for killer cage calculations.
//!
//! This crate provides the small, efficient value types shared by the
//! combination generator, the query filter and the command line front end.
//!
//! # Overview
//!
//! 1. **Core types**
//!    - [`digit`]: Type-safe representation of digits 1-9
//!
//! 2. **Index semantics** - Define how values map to bit indices
//!    - [`index_9`]: [`Index9`] and the [`Index9Semantics`] trait, with
//!      [`DigitSemantics`] mapping digits 1-9 to indices 0-8
//!
//! 3. **Containers**
//!    - [`bit_set_9`]: Generic 9-bit set [`BitSet9`] parameterized by semantics
//!    - [`digit_set`]: [`DigitSet`], the digit specialization, with sum,
//!      formatting and parsing
//!
//! [`Index9`]: index_9::Index9
//! [`Index9Semantics`]: index_9::Index9Semantics
//! [`DigitSemantics`]: index_9::DigitSemantics
//! [`BitSet9`]: bit_set_9::BitSet9
//!
//! # Examples
//!
//! ```
//! use cagemate_core::{Digit, DigitSet};
//!
//! let mut cell: DigitSet = "12".parse()?;
//! cell.insert(Digit::D3);
//!
//! assert_eq!(cell.iter().collect::<Vec<_>>(), vec![Digit::D1, Digit::D2, Digit::D3]);
//! # Ok::<(), cagemate_core::ParseDigitSetError>(())
//! ```

pub mod bit_set_9;
pub mod digit;
pub mod digit_set;
pub mod index_9;

// Re-export commonly used types
pub use self::{
    digit::{Digit, DigitError},
    digit_set::{DigitSet, ParseDigitSetError},
};
