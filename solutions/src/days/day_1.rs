//! Day 1: Historian Hysteria

use advent_solver::{InputParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{DaySolver, RegisterSolver};

#[derive(DaySolver, RegisterSolver)]
#[day_solver(parts = 1)]
#[puzzle(day = 1, tags = ["2024", "lists"])]
pub struct Solver;

pub struct Columns {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl InputParser for Solver {
    type Input<'a> = Columns;

    fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError> {
        let mut left = Vec::new();
        let mut right = Vec::new();
        for (idx, line) in input.trim().lines().enumerate() {
            let mut nums = line.split_whitespace();
            let (Some(a), Some(b), None) = (nums.next(), nums.next(), nums.next()) else {
                return Err(ParseError::InvalidFormat(format!(
                    "line {}: expected exactly two numbers",
                    idx + 1
                )));
            };
            let a = a
                .parse()
                .map_err(|e| ParseError::InvalidFormat(format!("line {}: {}", idx + 1, e)))?;
            let b = b
                .parse()
                .map_err(|e| ParseError::InvalidFormat(format!("line {}: {}", idx + 1, e)))?;
            left.push(a);
            right.push(b);
        }
        Ok(Columns { left, right })
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(total_distance(&mut input.left, &mut input.right).to_string())
    }
}

/// Sum of pairwise distances between the two sorted lists, truncated to the
/// shorter list.
fn total_distance(left: &mut [i64], right: &mut [i64]) -> i64 {
    left.sort_unstable();
    right.sort_unstable();
    left.iter()
        .zip(right.iter())
        .map(|(a, b)| (a - b).abs())
        .sum()
}
