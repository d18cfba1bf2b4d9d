//! Day 2: Red-Nosed Reports

use advent_solver::{InputParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{DaySolver, RegisterSolver};

#[derive(DaySolver, RegisterSolver)]
#[day_solver(parts = 2)]
#[puzzle(day = 2, tags = ["2024", "lists"])]
pub struct Solver;

impl InputParser for Solver {
    type Input<'a> = Vec<Vec<i64>>;

    fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(idx, line)| {
                line.split_whitespace()
                    .map(|n| {
                        n.parse().map_err(|e| {
                            ParseError::InvalidFormat(format!("line {}: {}", idx + 1, e))
                        })
                    })
                    .collect()
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(input.iter().filter(|r| is_safe(r)).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(input
            .iter()
            .filter(|r| is_safe_dampened(r))
            .count()
            .to_string())
    }
}

/// A report is safe when its levels are strictly monotonic with adjacent
/// deltas between 1 and 3.
fn is_safe(report: &[i64]) -> bool {
    let increasing = report.windows(2).all(|w| (1..=3).contains(&(w[1] - w[0])));
    let decreasing = report.windows(2).all(|w| (1..=3).contains(&(w[0] - w[1])));
    increasing || decreasing
}

/// Safe as-is, or safe after removing any single level.
fn is_safe_dampened(report: &[i64]) -> bool {
    if is_safe(report) {
        return true;
    }
    (0..report.len()).any(|skip| {
        let dampened: Vec<i64> = report
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != skip)
            .map(|(_, &v)| v)
            .collect();
        is_safe(&dampened)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

    #[test]
    fn example_part1() {
        let mut input = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut input).unwrap(), "2");
    }

    #[test]
    fn example_part2() {
        let mut input = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut input).unwrap(), "4");
    }

    #[test]
    fn single_level_report_is_safe() {
        assert!(is_safe(&[5]));
    }

    #[test]
    fn dampener_can_drop_first_level() {
        assert!(!is_safe(&[9, 1, 2, 3]));
        assert!(is_safe_dampened(&[9, 1, 2, 3]));
    }
}
