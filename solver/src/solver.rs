//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Trait for parsing puzzle input into the solver's working data
///
/// Defines the data type a day's solver operates on and how to build it from
/// the raw input text, keeping parsing separate from solving.
///
/// # Example
///
/// ```
/// use advent_solver::{InputParser, ParseError};
///
/// struct Day1;
///
/// impl InputParser for Day1 {
///     type Input<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
/// ```
pub trait InputParser {
    /// Working data for the solver: the parsed input plus any intermediate
    /// results shared between parts.
    ///
    /// Use any ownership strategy:
    /// - `Vec<T>` or a custom struct for owned data (simplest, supports mutation)
    /// - `&'a str` for zero-copy borrowed data when no transformation is needed
    type Input<'a>;

    /// Parse the raw input text into the working data.
    fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError>;
}

/// Trait for solving one part of a puzzle.
///
/// The const generic `N` is the part number (1, 2, ...), so each implemented
/// part is validated at compile time.
///
/// # Example
///
/// ```
/// use advent_solver::{InputParser, ParseError, PartSolver, SolveError};
///
/// struct Day1;
///
/// impl InputParser for Day1 {
///     type Input<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Day1 {
///     fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
///         Ok(input.iter().sum::<i32>().to_string())
///     }
/// }
/// ```
pub trait PartSolver<const N: u8>: InputParser {
    /// Solve this part of the puzzle.
    ///
    /// # Arguments
    /// * `input` - Mutable reference to the working data
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError)` - An error occurred while solving
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError>;
}

/// Core trait every registered day solver implements.
///
/// Extends `InputParser` to inherit the `Input` type and `parse()`. Usually
/// generated by the `DaySolver` derive, which dispatches `solve_part` to the
/// `PartSolver<N>` impls.
pub trait Solver: InputParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Arguments
    /// * `input` - Mutable reference to the working data
    /// * `part` - The part number (1, 2, ...)
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    fn solve_part(input: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked entry point used by the framework.
pub trait SolverExt: Solver {
    fn solve_part_checked(input: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(input, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Doubler;

    impl InputParser for Doubler {
        type Input<'a> = Vec<i64>;

        fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError> {
            input
                .split_whitespace()
                .map(|n| {
                    n.parse()
                        .map_err(|_| ParseError::InvalidFormat(format!("not a number: {n}")))
                })
                .collect()
        }
    }

    impl Solver for Doubler {
        const PARTS: u8 = 1;

        fn solve_part(input: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(input.iter().map(|n| n * 2).sum::<i64>().to_string()),
                other => Err(SolveError::PartNotImplemented(other)),
            }
        }
    }

    #[test]
    fn solve_part_within_range() {
        let mut input = Doubler::parse("1 2 3").unwrap();
        assert_eq!(Doubler::solve_part_checked(&mut input, 1).unwrap(), "12");
    }

    #[test]
    fn solve_part_out_of_range() {
        let mut input = Doubler::parse("1 2 3").unwrap();
        assert!(matches!(
            Doubler::solve_part_checked(&mut input, 2),
            Err(SolveError::PartOutOfRange(2))
        ));
        assert!(matches!(
            Doubler::solve_part_checked(&mut input, 0),
            Err(SolveError::PartOutOfRange(0))
        ));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            Doubler::parse("1 two 3"),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}
