//! Command line lookup of killer cage combinations.
//!
//! # Usage
//!
//! List the 3-digit combinations summing to 15:
//!
//! ```sh
//! cagemate --sum 15 --size 3
//! ```
//!
//! Sums between 20 and 25 for a 4-cell cage where the first cell holds 1 or 2
//! and the third holds 9, using only digits up to 7 elsewhere:
//!
//! ```sh
//! cagemate --range 20 25 --size 4 --cell 12 --cell _ --cell 9 --only 1234567
//! ```
//!
//! Set `RUST_LOG=debug` to see what the query is doing.

use cagemate_combos::{Combination, Query, SumConstraint, Universe};
use cagemate_core::DigitSet;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Target sum of the cage. 0 accepts any sum.
    #[arg(
        short,
        long,
        value_name = "SUM",
        conflicts_with = "range",
        value_parser = clap::value_parser!(u8).range(0..=45)
    )]
    sum: Option<u8>,

    /// Inclusive sum range, in either order. A 0 bound leaves that side open.
    #[arg(
        short,
        long,
        num_args = 2,
        value_names = ["LO", "HI"],
        value_parser = clap::value_parser!(u8).range(0..=45)
    )]
    range: Option<Vec<u8>>,

    /// Exact number of cells in the cage.
    #[arg(
        long,
        value_name = "N",
        conflicts_with_all = ["min_size", "max_size"],
        value_parser = clap::value_parser!(u8).range(1..=9)
    )]
    size: Option<u8>,

    /// Smallest number of cells in the cage.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=9))]
    min_size: Option<u8>,

    /// Largest number of cells in the cage.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=9))]
    max_size: Option<u8>,

    /// Digits one cell must take one of, e.g. `12` or `1,2`. Repeat once per
    /// cell; `_` leaves a cell open.
    #[arg(short, long = "cell", value_name = "DIGITS")]
    cells: Vec<DigitSet>,

    /// Digits the rest of the cage may only contain.
    #[arg(short, long, value_name = "DIGITS")]
    only: Option<DigitSet>,

    /// Print the number of matching combinations only.
    #[arg(long)]
    count: bool,
}

impl Args {
    fn sum_constraint(&self) -> SumConstraint {
        match (self.range.as_deref(), self.sum) {
            (Some(&[lo, hi]), _) => SumConstraint::from_range(lo, hi),
            (_, Some(sum)) => SumConstraint::from_sum(sum),
            _ => SumConstraint::Any,
        }
    }

    fn query(&self) -> Query {
        let mut query = Query::new()
            .with_sum(self.sum_constraint())
            .with_cells(self.cells.iter().copied())
            .with_may_only_contain(self.only.unwrap_or_default());
        query.min_cage_size = self.size.or(self.min_size);
        query.max_cage_size = self.size.or(self.max_size);
        query
    }
}

fn format_combination(combination: &Combination) -> String {
    let numbers = combination
        .numbers()
        .map(|digit| digit.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("{numbers}  (sum {})", combination.sum())
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let query = args.query();
    log::info!("sum constraint: {}", query.sum);
    log::debug!("query: {query:?}");

    let universe = Universe::new();
    let matches = universe.query(&query);
    log::info!("{} matching combinations", matches.len());

    if args.count {
        println!("{}", matches.len());
        return;
    }
    for combination in matches {
        println!("{}", format_combination(combination));
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("cagemate").chain(args.iter().copied())).unwrap()
    }

    fn set(s: &str) -> DigitSet {
        s.parse().unwrap()
    }

    #[test]
    fn test_command() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults_accept_everything() {
        let args = parse(&[]);
        assert_eq!(args.query(), Query::new());
    }

    #[test]
    fn test_sum_forms() {
        assert_eq!(parse(&["--sum", "0"]).sum_constraint(), SumConstraint::Any);
        assert_eq!(parse(&["-s", "15"]).sum_constraint(), SumConstraint::Exact(15));
        assert_eq!(
            parse(&["--range", "10", "5"]).sum_constraint(),
            SumConstraint::Range { lo: 5, hi: 10 }
        );
        assert_eq!(
            parse(&["--range", "0", "10"]).sum_constraint(),
            SumConstraint::Exact(10)
        );
    }

    #[test]
    fn test_full_query() {
        let args = parse(&[
            "--sum", "15", "--size", "3", "--cell", "12", "--cell", "_", "--only", "1,2,3,4,5",
        ]);
        let expected = Query::new()
            .with_sum(SumConstraint::Exact(15))
            .with_cage_size(3)
            .with_cells([set("12"), DigitSet::EMPTY])
            .with_may_only_contain(set("12345"));
        assert_eq!(args.query(), expected);
    }

    #[test]
    fn test_size_bounds() {
        let query = parse(&["--min-size", "2", "--max-size", "4"]).query();
        assert_eq!(query.min_cage_size, Some(2));
        assert_eq!(query.max_cage_size, Some(4));
    }

    #[test]
    fn test_rejects_invalid_arguments() {
        let parse_err = |args: &[&str]| {
            Args::try_parse_from(std::iter::once("cagemate").chain(args.iter().copied())).is_err()
        };
        assert!(parse_err(&["--sum", "15", "--range", "1", "2"]));
        assert!(parse_err(&["--size", "3", "--min-size", "2"]));
        assert!(parse_err(&["--size", "10"]));
        assert!(parse_err(&["--sum", "46"]));
        assert!(parse_err(&["--cell", "120"]));
    }

    #[test]
    fn test_format_combination() {
        let universe = Universe::new();
        let combination = universe
            .of_size(3)
            .iter()
            .find(|c| c.digits() == set("168"))
            .unwrap();
        assert_eq!(format_combination(combination), "1 6 8  (sum 15)");
    }
}
