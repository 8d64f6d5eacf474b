//! Assignment feasibility of a combination against per-cell restrictions.
//!
//! Given the digits of a combination and, for each cell of the cage, the set
//! of digits that cell must take one of, the check decides whether the cells
//! can be given pairwise distinct digits from the combination. Cells with an
//! empty restriction are unconstrained and consume no digit here.
//!
//! The search is a depth-first backtracking over the cells in order. The
//! working set of unassigned digits is a [`DigitSet`] passed by value, so
//! every branch owns its copy and sibling branches never see each other's
//! removals.
//!
//! # Examples
//!
//! ```
//! use cagemate_combos::feasibility::can_assign;
//! use cagemate_core::DigitSet;
//!
//! let cells: Vec<DigitSet> = vec!["12".parse()?, "23".parse()?];
//!
//! // cell 0 takes 1, cell 1 takes 2 or 3
//! assert!(can_assign("123".parse()?, &cells, DigitSet::EMPTY));
//! // both cells would need the digit 2
//! assert!(!can_assign("24".parse()?, &cells, DigitSet::EMPTY));
//! # Ok::<(), cagemate_core::ParseDigitSetError>(())
//! ```

use cagemate_core::DigitSet;

/// Returns `true` if `digits` can be assigned to the restricted cells.
///
/// Every cell with a non-empty entry in `cells_must_contain` must receive a
/// distinct digit from `digits` that is in its entry. If `may_only_contain` is
/// non-empty, the digits left over after the assignment must all belong to it.
///
/// # Examples
///
/// ```
/// use cagemate_combos::feasibility::can_assign;
/// use cagemate_core::DigitSet;
///
/// let only: DigitSet = "12345".parse()?;
/// let nine: DigitSet = "9".parse()?;
///
/// assert!(can_assign("125".parse()?, &[], only));
/// assert!(!can_assign("129".parse()?, &[], only));
///
/// // The 9 is claimed by the first cell, so nothing outside 1-5 is left over
/// assert!(can_assign("129".parse()?, &[nine], only));
/// # Ok::<(), cagemate_core::ParseDigitSetError>(())
/// ```
#[must_use]
pub fn can_assign(digits: DigitSet, cells_must_contain: &[DigitSet], may_only_contain: DigitSet) -> bool {
    can_assign_with(digits, cells_must_contain, |remaining| {
        may_only_contain.is_empty() || remaining.is_subset(may_only_contain)
    })
}

/// Returns `true` if `digits` can be assigned to the restricted cells such
/// that `check` accepts the digits left unassigned.
///
/// `check` is called once per complete assignment until it returns `true`.
pub fn can_assign_with<F>(digits: DigitSet, cells_must_contain: &[DigitSet], check: F) -> bool
where
    F: Fn(DigitSet) -> bool,
{
    assign(digits, cells_must_contain, &check)
}

fn assign<F>(remaining: DigitSet, cells: &[DigitSet], check: &F) -> bool
where
    F: Fn(DigitSet) -> bool,
{
    let Some((&cell, rest)) = cells.split_first() else {
        return check(remaining);
    };

    if cell.is_empty() {
        return assign(remaining, rest, check);
    }

    // An empty intersection fails this branch without descending further.
    (cell & remaining).iter().any(|digit| {
        let mut next = remaining;
        next.remove(digit);
        assign(next, rest, check)
    })
}
