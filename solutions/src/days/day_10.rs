//! Day 10: Hoof It

use advent_solver::{InputParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{DaySolver, RegisterSolver};
use std::collections::HashSet;

#[derive(DaySolver, RegisterSolver)]
#[day_solver(parts = 2)]
#[puzzle(day = 10, tags = ["2024", "grid", "search"])]
pub struct Solver;

pub struct HeightMap {
    heights: Vec<Vec<u8>>,
}

impl HeightMap {
    fn get(&self, row: i64, col: i64) -> Option<u8> {
        if row < 0 || col < 0 {
            return None;
        }
        self.heights
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
    }

    fn trailheads(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.heights.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &h)| h == 0)
                .map(move |(c, _)| (r as i64, c as i64))
        })
    }
}

const ORTHOGONAL: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl InputParser for Solver {
    type Input<'a> = HeightMap;

    fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError> {
        let heights: Vec<Vec<u8>> = input
            .trim()
            .lines()
            .map(|line| {
                line.chars()
                    .map(|c| {
                        c.to_digit(10)
                            .map(|d| d as u8)
                            .ok_or_else(|| {
                                ParseError::InvalidFormat(format!("non-digit height {:?}", c))
                            })
                    })
                    .collect()
            })
            .collect::<Result<_, ParseError>>()?;
        if heights.is_empty() {
            return Err(ParseError::MissingData("empty height map".to_string()));
        }
        Ok(HeightMap { heights })
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let total: usize = input
            .trailheads()
            .map(|start| {
                let mut summits = HashSet::new();
                collect_summits(input, start, 0, &mut summits);
                summits.len()
            })
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let total: u64 = input
            .trailheads()
            .map(|start| count_trails(input, start, 0))
            .sum();
        Ok(total.to_string())
    }
}

/// Gather the distinct height-9 cells reachable by +1 steps
fn collect_summits(
    map: &HeightMap,
    pos: (i64, i64),
    height: u8,
    summits: &mut HashSet<(i64, i64)>,
) {
    if height == 9 {
        summits.insert(pos);
        return;
    }
    for (dr, dc) in ORTHOGONAL {
        let next = (pos.0 + dr, pos.1 + dc);
        if map.get(next.0, next.1) == Some(height + 1) {
            collect_summits(map, next, height + 1, summits);
        }
    }
}

/// Count distinct trails from this cell to any height-9 cell
fn count_trails(map: &HeightMap, pos: (i64, i64), height: u8) -> u64 {
    if height == 9 {
        return 1;
    }
    ORTHOGONAL
        .iter()
        .map(|(dr, dc)| {
            let next = (pos.0 + dr, pos.1 + dc);
            if map.get(next.0, next.1) == Some(height + 1) {
                count_trails(map, next, height + 1)
            } else {
                0
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732
";

    #[test]
    fn example_part1() {
        let mut input = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut input).unwrap(), "36");
    }

    #[test]
    fn example_part2() {
        let mut input = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut input).unwrap(), "81");
    }

    #[test]
    fn single_trail_scores_one() {
        let mut input = Solver::parse("0123456789").unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut input).unwrap(), "1");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut input).unwrap(), "1");
    }

    #[test]
    fn non_digit_height_is_rejected() {
        assert!(Solver::parse("01x3").is_err());
    }
}
