//! Day 3: Mull It Over
//!
//! Scans corrupted memory for `mul(X,Y)` instructions and, for part 2,
//! `do()`/`don't()` toggles that enable or disable the multiplications.

use advent_solver::{InputParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{DaySolver, RegisterSolver};
use regex::Regex;
use std::sync::LazyLock;

static INSTRUCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)")
        .expect("instruction pattern is valid")
});

#[derive(DaySolver, RegisterSolver)]
#[day_solver(parts = 2)]
#[puzzle(day = 3, tags = ["2024", "parsing"])]
pub struct Solver;

#[derive(Debug, PartialEq, Eq)]
pub enum Instruction {
    Mul(i64, i64),
    Do,
    Dont,
}

impl InputParser for Solver {
    type Input<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError> {
        let instructions: Vec<Instruction> = INSTRUCTION_RE
            .captures_iter(input)
            .map(|cap| match (cap.get(1), cap.get(2)) {
                (Some(x), Some(y)) => {
                    // Operands are 1-3 digits so they always fit in i64
                    let x = x.as_str().parse().map_err(|e| {
                        ParseError::InvalidFormat(format!("mul operand: {}", e))
                    })?;
                    let y = y.as_str().parse().map_err(|e| {
                        ParseError::InvalidFormat(format!("mul operand: {}", e))
                    })?;
                    Ok(Instruction::Mul(x, y))
                }
                _ if cap.get(0).map(|m| m.as_str()) == Some("do()") => Ok(Instruction::Do),
                _ => Ok(Instruction::Dont),
            })
            .collect::<Result<_, ParseError>>()?;

        if instructions.is_empty() {
            return Err(ParseError::MissingData(
                "no recognizable instructions in input".to_string(),
            ));
        }
        Ok(instructions)
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let sum: i64 = input
            .iter()
            .filter_map(|i| match i {
                Instruction::Mul(x, y) => Some(x * y),
                _ => None,
            })
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let mut enabled = true;
        let mut sum = 0i64;
        for instruction in input.iter() {
            match instruction {
                Instruction::Do => enabled = true,
                Instruction::Dont => enabled = false,
                Instruction::Mul(x, y) if enabled => sum += x * y,
                Instruction::Mul(..) => {}
            }
        }
        Ok(sum.to_string())
    }
}
