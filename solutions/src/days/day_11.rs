//! Day 11: Plutonian Pebbles
//!
//! Stone order never affects the rules, so the line is kept as a
//! number-to-count map instead of a vector. 75 blinks stays cheap because
//! the number of distinct stone values remains small.

use advent_solver::{InputParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{DaySolver, RegisterSolver};
use std::collections::HashMap;

#[derive(DaySolver, RegisterSolver)]
#[day_solver(parts = 2)]
#[puzzle(day = 11, tags = ["2024", "counting"])]
pub struct Solver;

impl InputParser for Solver {
    type Input<'a> = HashMap<u64, u64>;

    fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError> {
        let mut counts = HashMap::new();
        for token in input.split_whitespace() {
            let stone: u64 = token
                .parse()
                .map_err(|e| ParseError::InvalidFormat(format!("stone {:?}: {}", token, e)))?;
            *counts.entry(stone).or_insert(0) += 1;
        }
        if counts.is_empty() {
            return Err(ParseError::MissingData("no stones in input".to_string()));
        }
        Ok(counts)
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(stones_after_blinks(input, 25).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(stones_after_blinks(input, 75).to_string())
    }
}

fn stones_after_blinks(initial: &HashMap<u64, u64>, blinks: u32) -> u64 {
    let mut counts = initial.clone();
    for _ in 0..blinks {
        counts = blink(&counts);
    }
    counts.values().sum()
}

fn blink(counts: &HashMap<u64, u64>) -> HashMap<u64, u64> {
    let mut next = HashMap::with_capacity(counts.len() * 2);
    for (&stone, &count) in counts {
        match transform(stone) {
            (a, None) => *next.entry(a).or_insert(0) += count,
            (a, Some(b)) => {
                *next.entry(a).or_insert(0) += count;
                *next.entry(b).or_insert(0) += count;
            }
        }
    }
    next
}

/// One blink for one stone: 0 becomes 1, even-digit stones split in half
/// (leading zeros dropped), everything else is multiplied by 2024.
fn transform(stone: u64) -> (u64, Option<u64>) {
    if stone == 0 {
        return (1, None);
    }
    let digits = stone.ilog10() + 1;
    if digits % 2 == 0 {
        let split = 10u64.pow(digits / 2);
        (stone / split, Some(stone % split))
    } else {
        (stone * 2024, None)
    }
}
