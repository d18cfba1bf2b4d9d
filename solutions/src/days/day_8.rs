//! Day 8: Resonant Collinearity

use advent_solver::{InputParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{DaySolver, RegisterSolver};
use itertools::Itertools;
use std::collections::{HashMap, HashSet};

#[derive(DaySolver, RegisterSolver)]
#[day_solver(parts = 2)]
#[puzzle(day = 8, tags = ["2024", "grid"])]
pub struct Solver;

pub struct AntennaMap {
    antennas: HashMap<char, Vec<(i64, i64)>>,
    rows: i64,
    cols: i64,
}

impl AntennaMap {
    fn in_bounds(&self, pos: (i64, i64)) -> bool {
        (0..self.rows).contains(&pos.0) && (0..self.cols).contains(&pos.1)
    }
}

impl InputParser for Solver {
    type Input<'a> = AntennaMap;

    fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError> {
        let lines: Vec<&str> = input.trim().lines().collect();
        if lines.is_empty() {
            return Err(ParseError::MissingData("empty grid".to_string()));
        }

        let mut antennas: HashMap<char, Vec<(i64, i64)>> = HashMap::new();
        for (row, line) in lines.iter().enumerate() {
            for (col, c) in line.chars().enumerate() {
                if c != '.' {
                    antennas
                        .entry(c)
                        .or_default()
                        .push((row as i64, col as i64));
                }
            }
        }
        Ok(AntennaMap {
            antennas,
            rows: lines.len() as i64,
            cols: lines[0].chars().count() as i64,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let mut antinodes = HashSet::new();
        for (&a, &b) in antenna_pairs(input) {
            let candidate = (2 * b.0 - a.0, 2 * b.1 - a.1);
            if input.in_bounds(candidate) {
                antinodes.insert(candidate);
            }
        }
        Ok(antinodes.len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let mut antinodes = HashSet::new();
        for (&a, &b) in antenna_pairs(input) {
            // k = 0 puts an antinode on the antenna itself
            let delta = (b.0 - a.0, b.1 - a.1);
            let mut pos = b;
            while input.in_bounds(pos) {
                antinodes.insert(pos);
                pos = (pos.0 + delta.0, pos.1 + delta.1);
            }
        }
        Ok(antinodes.len().to_string())
    }
}

/// All ordered pairs of distinct same-frequency antennas
fn antenna_pairs(map: &AntennaMap) -> impl Iterator<Item = (&(i64, i64), &(i64, i64))> {
    map.antennas.values().flat_map(|group| {
        group
            .iter()
            .cartesian_product(group.iter())
            .filter(|(a, b)| a != b)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............
";

    #[test]
    fn example_part1() {
        let mut input = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut input).unwrap(), "14");
    }

    #[test]
    fn example_part2() {
        let mut input = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut input).unwrap(), "34");
    }

    #[test]
    fn lone_antenna_produces_no_antinodes() {
        let mut input = Solver::parse("...\n.a.\n...\n").unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut input).unwrap(), "0");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut input).unwrap(), "0");
    }

    #[test]
    fn different_frequencies_do_not_pair() {
        let mut input = Solver::parse("a.b\n...\n...\n").unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut input).unwrap(), "0");
    }
}
