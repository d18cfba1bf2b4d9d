//! Day 7: Bridge Repair

use advent_solver::{InputParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{DaySolver, RegisterSolver};
use anyhow::{Context, anyhow};

#[derive(DaySolver, RegisterSolver)]
#[day_solver(parts = 2)]
#[puzzle(day = 7, tags = ["2024", "search"])]
pub struct Solver;

pub struct Equation {
    target: u64,
    operands: Vec<u64>,
}

fn parse_equation(line: &str) -> Result<Equation, anyhow::Error> {
    let (target, rest) = line.split_once(':').ok_or_else(|| anyhow!("missing ':'"))?;
    let target = target.trim().parse().context("target")?;
    let operands = rest
        .split_whitespace()
        .map(|n| n.parse::<u64>().context("operand"))
        .collect::<Result<Vec<u64>, _>>()?;
    if operands.is_empty() {
        return Err(anyhow!("no operands"));
    }
    Ok(Equation { target, operands })
}

impl InputParser for Solver {
    type Input<'a> = Vec<Equation>;

    fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(idx, line)| {
                parse_equation(line)
                    .map_err(|e| ParseError::InvalidFormat(format!("line {}: {:#}", idx + 1, e)))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(calibration_total(input, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(calibration_total(input, true).to_string())
    }
}

fn calibration_total(equations: &[Equation], with_concat: bool) -> u64 {
    equations
        .iter()
        .filter(|eq| is_solvable(eq.target, eq.operands[0], &eq.operands[1..], with_concat))
        .map(|eq| eq.target)
        .sum()
}

/// Operators apply strictly left to right. All of them are non-decreasing
/// for positive operands, so any partial value above the target is pruned.
fn is_solvable(target: u64, acc: u64, rest: &[u64], with_concat: bool) -> bool {
    if acc > target {
        return false;
    }
    let [next, rest @ ..] = rest else {
        return acc == target;
    };
    is_solvable(target, acc + next, rest, with_concat)
        || is_solvable(target, acc * next, rest, with_concat)
        || (with_concat && is_solvable(target, concat(acc, *next), rest, with_concat))
}

/// Digit concatenation: 12 || 345 = 12345
fn concat(a: u64, b: u64) -> u64 {
    let mut shift = 10;
    while shift <= b {
        shift *= 10;
    }
    a * shift + b
}
