//! Constraints on the sum of a cage.

/// A constraint on the total of a combination.
///
/// `SumConstraint` makes the unconstrained case an explicit variant. Callers
/// that speak the traditional "0 means any" convention go through
/// [`SumConstraint::from_sum`] or [`SumConstraint::from_range`], which turn
/// the sentinel into [`SumConstraint::Any`].
///
/// # Examples
///
/// ```
/// use cagemate_combos::SumConstraint;
///
/// assert_eq!(SumConstraint::from_sum(0), SumConstraint::Any);
/// assert_eq!(SumConstraint::from_range(10, 5), SumConstraint::Range { lo: 5, hi: 10 });
///
/// let constraint = SumConstraint::Exact(15);
/// assert!(constraint.matches(15));
/// assert!(!constraint.matches(16));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum SumConstraint {
    /// Any sum is accepted.
    #[default]
    #[display("any")]
    Any,
    /// The sum must equal the value.
    #[display("{_0}")]
    Exact(u8),
    /// The sum must lie in `lo..=hi`.
    #[display("{lo}..={hi}")]
    Range {
        /// Inclusive lower bound.
        lo: u8,
        /// Inclusive upper bound.
        hi: u8,
    },
}

impl SumConstraint {
    /// Builds a constraint from an exact target where `0` means "any sum".
    #[must_use]
    pub fn from_sum(sum: u8) -> Self {
        match sum {
            0 => Self::Any,
            sum => Self::Exact(sum),
        }
    }

    /// Builds a constraint from a pair of bounds where `0` means "unbounded".
    ///
    /// The bounds are ordered first, so `(10, 5)` and `(5, 10)` are the same
    /// range. If both bounds are `0` any sum is accepted. If only the lower
    /// bound is `0`, the upper bound is treated as an exact target.
    ///
    /// # Examples
    ///
    /// ```
    /// use cagemate_combos::SumConstraint;
    ///
    /// assert_eq!(SumConstraint::from_range(0, 0), SumConstraint::Any);
    /// assert_eq!(SumConstraint::from_range(0, 10), SumConstraint::Exact(10));
    /// assert_eq!(SumConstraint::from_range(10, 0), SumConstraint::Exact(10));
    /// assert_eq!(SumConstraint::from_range(5, 10), SumConstraint::Range { lo: 5, hi: 10 });
    /// ```
    #[must_use]
    pub fn from_range(a: u8, b: u8) -> Self {
        match Self::range(a, b) {
            Self::Range { lo: 0, hi: 0 } => Self::Any,
            Self::Range { lo: 0, hi } => Self::Exact(hi),
            range => range,
        }
    }

    /// Builds an inclusive range constraint, ordering the bounds.
    ///
    /// Unlike [`SumConstraint::from_range`], `0` has no special meaning here.
    #[must_use]
    pub fn range(a: u8, b: u8) -> Self {
        Self::Range {
            lo: a.min(b),
            hi: a.max(b),
        }
    }

    /// Returns `true` if a combination with the given sum satisfies the constraint.
    #[must_use]
    pub fn matches(self, sum: u8) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(target) => sum == target,
            Self::Range { lo, hi } => (lo..=hi).contains(&sum),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sum() {
        assert_eq!(SumConstraint::from_sum(0), SumConstraint::Any);
        assert_eq!(SumConstraint::from_sum(17), SumConstraint::Exact(17));
    }

    #[test]
    fn test_from_range_normalizes() {
        assert_eq!(SumConstraint::from_range(10, 5), SumConstraint::from_range(5, 10));
        assert_eq!(SumConstraint::from_range(0, 0), SumConstraint::Any);
        assert_eq!(SumConstraint::from_range(0, 10), SumConstraint::Exact(10));
        assert_eq!(SumConstraint::from_range(10, 0), SumConstraint::Exact(10));
        assert_eq!(SumConstraint::from_range(7, 7), SumConstraint::Range { lo: 7, hi: 7 });
    }

    #[test]
    fn test_range_keeps_zero() {
        assert_eq!(SumConstraint::range(0, 10), SumConstraint::Range { lo: 0, hi: 10 });
        assert!(SumConstraint::range(0, 10).matches(3));
    }

    #[test]
    fn test_matches() {
        assert!(SumConstraint::Any.matches(1));
        assert!(SumConstraint::Any.matches(45));

        let range = SumConstraint::range(5, 10);
        assert!(!range.matches(4));
        assert!(range.matches(5));
        assert!(range.matches(10));
        assert!(!range.matches(11));
    }

    #[test]
    fn test_display() {
        assert_eq!(SumConstraint::Any.to_string(), "any");
        assert_eq!(SumConstraint::Exact(15).to_string(), "15");
        assert_eq!(SumConstraint::range(10, 5).to_string(), "5..=10");
    }
}
