//! Day 4: Ceres Search

use advent_solver::{InputParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{DaySolver, RegisterSolver};

#[derive(DaySolver, RegisterSolver)]
#[day_solver(parts = 2)]
#[puzzle(day = 4, tags = ["2024", "grid"])]
pub struct Solver;

/// Character grid borrowing the raw input lines
pub struct Grid<'a> {
    rows: Vec<&'a [u8]>,
}

impl<'a> Grid<'a> {
    fn get(&self, row: i64, col: i64) -> Option<u8> {
        if row < 0 || col < 0 {
            return None;
        }
        self.rows
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
    }
}

const DIRECTIONS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl InputParser for Solver {
    type Input<'a> = Grid<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError> {
        let rows: Vec<&[u8]> = input.trim().lines().map(|l| l.as_bytes()).collect();
        if rows.is_empty() {
            return Err(ParseError::MissingData("empty grid".to_string()));
        }
        if rows.iter().any(|r| r.len() != rows[0].len()) {
            return Err(ParseError::InvalidFormat(
                "grid rows have unequal lengths".to_string(),
            ));
        }
        Ok(Grid { rows })
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let mut count = 0;
        for row in 0..input.rows.len() as i64 {
            for col in 0..input.rows[0].len() as i64 {
                for (dr, dc) in DIRECTIONS {
                    if matches_word(input, b"XMAS", row, col, dr, dc) {
                        count += 1;
                    }
                }
            }
        }
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let mut count = 0;
        for row in 0..input.rows.len() as i64 {
            for col in 0..input.rows[0].len() as i64 {
                if is_x_mas(input, row, col) {
                    count += 1;
                }
            }
        }
        Ok(count.to_string())
    }
}

fn matches_word(grid: &Grid<'_>, word: &[u8], row: i64, col: i64, dr: i64, dc: i64) -> bool {
    word.iter().enumerate().all(|(i, &ch)| {
        grid.get(row + dr * i as i64, col + dc * i as i64) == Some(ch)
    })
}

/// An `A` whose two diagonals each read `MAS` or `SAM`
fn is_x_mas(grid: &Grid<'_>, row: i64, col: i64) -> bool {
    if grid.get(row, col) != Some(b'A') {
        return false;
    }
    let diagonal_ok = |a: Option<u8>, b: Option<u8>| {
        matches!((a, b), (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M')))
    };
    diagonal_ok(grid.get(row - 1, col - 1), grid.get(row + 1, col + 1))
        && diagonal_ok(grid.get(row - 1, col + 1), grid.get(row + 1, col - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX
";

    #[test]
    fn example_part1() {
        let mut input = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut input).unwrap(), "18");
    }

    #[test]
    fn example_part2() {
        let mut input = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut input).unwrap(), "9");
    }

    #[test]
    fn ragged_grid_is_rejected() {
        assert!(Solver::parse("XMAS\nXM\n").is_err());
    }

    #[test]
    fn word_can_run_backwards() {
        let mut input = Solver::parse("SAMX").unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut input).unwrap(), "1");
    }
}
