//! Digit combinations for killer sudoku cages.
//!
//! This crate enumerates every set of distinct digits 1-9 that can fill a cage
//! and filters them by sum, cage size and per-cell digit restrictions.
//!
//! # Overview
//!
//! - [`Universe`]: all 511 combinations for cage sizes 1-9, built once by
//!   [`generate_universe`] and shared by reference.
//! - [`Query`]: the constraints of a lookup. The sum is a [`SumConstraint`],
//!   either explicit or built from the "0 means any" convention.
//! - [`feasibility`]: the backtracking check deciding whether a combination's
//!   digits can be distributed over the restricted cells.
//! - [`Matches`]: the result of a query, borrowing from the universe.
//!
//! # Examples
//!
//! A three-cell cage summing to 15 where one cell already has the candidates
//! 1 and 2:
//!
//! ```
//! use cagemate_combos::{Query, SumConstraint, Universe};
//! use cagemate_core::DigitSet;
//!
//! let universe = Universe::new();
//! let query = Query::new()
//!     .with_sum(SumConstraint::from_sum(15))
//!     .with_cage_size(3)
//!     .with_cells(["12".parse()?, DigitSet::EMPTY, DigitSet::EMPTY]);
//!
//! for combination in universe.query(&query) {
//!     println!("{combination}");
//! }
//! # Ok::<(), cagemate_core::ParseDigitSetError>(())
//! ```

pub use self::{
    combination::Combination,
    query::{Matches, Query, query_combinations},
    sum_constraint::SumConstraint,
    universe::{MAX_CAGE_SIZE, Universe, generate_universe},
};

mod combination;
pub mod feasibility;
mod query;
mod sum_constraint;
mod universe;
