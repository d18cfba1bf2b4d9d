//! Day 12: Garden Groups
//!
//! Flood-fills 4-connected regions of equal plant type. Part 1 prices a
//! region by area times perimeter; part 2 by area times side count, where
//! sides are counted via region corners (every straight side contributes
//! exactly two corners).

use advent_solver::{InputParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{DaySolver, RegisterSolver};
use std::collections::HashSet;

#[derive(DaySolver, RegisterSolver)]
#[day_solver(parts = 2)]
#[puzzle(day = 12, tags = ["2024", "grid", "flood-fill"])]
pub struct Solver;

pub struct Garden {
    plots: Vec<Vec<u8>>,
}

impl Garden {
    fn plant(&self, row: i64, col: i64) -> Option<u8> {
        if row < 0 || col < 0 {
            return None;
        }
        self.plots
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
    }
}

const ORTHOGONAL: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl InputParser for Solver {
    type Input<'a> = Garden;

    fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError> {
        let plots: Vec<Vec<u8>> = input
            .trim()
            .lines()
            .map(|l| l.as_bytes().to_vec())
            .collect();
        if plots.is_empty() {
            return Err(ParseError::MissingData("empty garden".to_string()));
        }
        if plots.iter().any(|r| r.len() != plots[0].len()) {
            return Err(ParseError::InvalidFormat(
                "garden rows have unequal lengths".to_string(),
            ));
        }
        Ok(Garden { plots })
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let price: u64 = regions(input)
            .iter()
            .map(|region| region.len() as u64 * perimeter(region))
            .sum();
        Ok(price.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let price: u64 = regions(input)
            .iter()
            .map(|region| region.len() as u64 * sides(region))
            .sum();
        Ok(price.to_string())
    }
}

/// Flood-fill every 4-connected region of equal plant type
fn regions(garden: &Garden) -> Vec<HashSet<(i64, i64)>> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for row in 0..garden.plots.len() as i64 {
        for col in 0..garden.plots[0].len() as i64 {
            if seen.contains(&(row, col)) {
                continue;
            }
            let plant = garden.plots[row as usize][col as usize];
            let mut region = HashSet::new();
            let mut stack = vec![(row, col)];
            while let Some(pos) = stack.pop() {
                if !region.insert(pos) {
                    continue;
                }
                for (dr, dc) in ORTHOGONAL {
                    let next = (pos.0 + dr, pos.1 + dc);
                    if garden.plant(next.0, next.1) == Some(plant) && !region.contains(&next) {
                        stack.push(next);
                    }
                }
            }
            seen.extend(region.iter().copied());
            result.push(region);
        }
    }
    result
}

fn perimeter(region: &HashSet<(i64, i64)>) -> u64 {
    region
        .iter()
        .map(|&(r, c)| {
            ORTHOGONAL
                .iter()
                .filter(|(dr, dc)| !region.contains(&(r + dr, c + dc)))
                .count() as u64
        })
        .sum()
}

/// A region has as many sides as corners. Each cell contributes a convex
/// corner where both orthogonal neighbors are outside, and a concave corner
/// where both are inside but the diagonal between them is outside.
fn sides(region: &HashSet<(i64, i64)>) -> u64 {
    let corner_dirs = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
    region
        .iter()
        .map(|&(r, c)| {
            corner_dirs
                .iter()
                .filter(|(dr, dc)| {
                    let vertical = region.contains(&(r + dr, c));
                    let horizontal = region.contains(&(r, c + dc));
                    let diagonal = region.contains(&(r + dr, c + dc));
                    (!vertical && !horizontal) || (vertical && horizontal && !diagonal)
                })
                .count() as u64
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
AAAA
BBCD
BBCC
EEEC
";

    const HOLES: &str = "\
OOOOO
OXOXO
OOOOO
OXOXO
OOOOO
";

    const LARGE: &str = "\
RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE
";

    const E_SHAPE: &str = "\
EEEEE
EXXXX
EEEEE
EXXXX
EEEEE
";

    const DIAGONAL_TOUCH: &str = "\
AAAAAA
AAABBA
AAABBA
ABBAAA
ABBAAA
AAAAAA
";

    #[test]
    fn part1_examples() {
        for (raw, expected) in [(SMALL, "140"), (HOLES, "772"), (LARGE, "1930")] {
            let mut input = Solver::parse(raw).unwrap();
            assert_eq!(
                <Solver as PartSolver<1>>::solve(&mut input).unwrap(),
                expected
            );
        }
    }

    #[test]
    fn part2_examples() {
        for (raw, expected) in [
            (SMALL, "80"),
            (HOLES, "436"),
            (E_SHAPE, "236"),
            (DIAGONAL_TOUCH, "368"),
            (LARGE, "1206"),
        ] {
            let mut input = Solver::parse(raw).unwrap();
            assert_eq!(
                <Solver as PartSolver<2>>::solve(&mut input).unwrap(),
                expected
            );
        }
    }

    #[test]
    fn single_cell_region() {
        let mut input = Solver::parse("A").unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut input).unwrap(), "4");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut input).unwrap(), "4");
    }
}
