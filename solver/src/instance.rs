//! Solver instance implementation

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Result from solving a puzzle part, including timing information
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The answer string
    pub answer: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A solver instance for a specific day, holding the parsed working data
/// together with parse timing.
pub struct SolverInstance<'a, S: Solver> {
    day: u8,
    input: S::Input<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Create a new solver instance by parsing input, recording parse timing.
    ///
    /// # Arguments
    /// * `day` - The day number (1-25)
    /// * `input` - The raw input string to parse
    pub fn new(day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let input = S::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            day,
            input,
            parse_start,
            parse_end,
        })
    }
}

/// Type-erased interface for working with any solver through dynamic dispatch
///
/// The registry hands out `Box<dyn DynSolver>` so the runner can treat every
/// day uniformly.
///
/// # Example
///
/// ```no_run
/// use advent_solver::DynSolver;
///
/// fn example(mut solver: Box<dyn DynSolver>) -> Result<(), Box<dyn std::error::Error>> {
///     let result = solver.solve(1)?;
///     println!("Part 1: {} (took {:?})", result.answer, result.duration());
///     println!("Parse took {:?}", solver.parse_duration());
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve the specified part with timing
    ///
    /// # Returns
    /// * `Ok(SolveResult)` - The part was solved successfully with timing info
    /// * `Err(SolveError)` - The part is out of range or solving failed
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// Get the parse start time (UTC)
    fn parse_start(&self) -> DateTime<Utc>;

    /// Get the parse end time (UTC)
    fn parse_end(&self) -> DateTime<Utc>;

    /// Get the day for this solver
    fn day(&self) -> u8;

    /// Get the number of parts this solver supports
    fn parts(&self) -> u8;

    /// Convenience: get parse duration as TimeDelta
    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<'a, S: SolverExt> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked(&mut self.input, part)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::solver::InputParser;

    struct Summer;

    impl InputParser for Summer {
        type Input<'a> = Vec<i64>;

        fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError> {
            input
                .lines()
                .map(|l| {
                    l.parse()
                        .map_err(|_| ParseError::InvalidFormat("expected integer".into()))
                })
                .collect()
        }
    }

    impl Solver for Summer {
        const PARTS: u8 = 2;

        fn solve_part(input: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(input.iter().sum::<i64>().to_string()),
                2 => Ok(input.iter().product::<i64>().to_string()),
                other => Err(SolveError::PartNotImplemented(other)),
            }
        }
    }

    #[test]
    fn instance_solves_both_parts() {
        let mut instance = SolverInstance::<Summer>::new(1, "2\n3\n4").unwrap();
        assert_eq!(instance.solve(1).unwrap().answer, "9");
        assert_eq!(instance.solve(2).unwrap().answer, "24");
        assert_eq!(instance.day(), 1);
        assert_eq!(instance.parts(), 2);
    }

    #[test]
    fn instance_records_parse_timing() {
        let instance = SolverInstance::<Summer>::new(3, "1\n1").unwrap();
        assert!(instance.parse_duration() >= TimeDelta::zero());
    }

    #[test]
    fn instance_rejects_out_of_range_part() {
        let mut instance = SolverInstance::<Summer>::new(1, "1").unwrap();
        assert!(matches!(
            instance.solve(3),
            Err(SolveError::PartOutOfRange(3))
        ));
    }
}
