//! Day 6: Guard Gallivant
//!
//! Simulates a guard that walks forward and turns right at obstacles until
//! leaving the map. Part 2 tests each visited position as a candidate for a
//! new obstruction that traps the guard in a loop.

use advent_solver::{InputParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{DaySolver, RegisterSolver};
use std::collections::HashSet;

#[derive(DaySolver, RegisterSolver)]
#[day_solver(parts = 2)]
#[puzzle(day = 6, tags = ["2024", "grid", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    fn turn_right(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    fn delta(self) -> (i64, i64) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    fn from_marker(c: char) -> Option<Self> {
        match c {
            '^' => Some(Direction::Up),
            '>' => Some(Direction::Right),
            'v' => Some(Direction::Down),
            '<' => Some(Direction::Left),
            _ => None,
        }
    }
}

pub struct Patrol {
    obstacles: Vec<Vec<bool>>,
    start: (usize, usize),
    start_dir: Direction,
}

impl InputParser for Solver {
    type Input<'a> = Patrol;

    fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError> {
        let mut obstacles = Vec::new();
        let mut guard = None;

        for (row, line) in input.trim().lines().enumerate() {
            let mut obstacle_row = Vec::with_capacity(line.len());
            for (col, c) in line.chars().enumerate() {
                obstacle_row.push(c == '#');
                if let Some(dir) = Direction::from_marker(c) {
                    guard = Some(((row, col), dir));
                }
            }
            obstacles.push(obstacle_row);
        }

        let Some((start, start_dir)) = guard else {
            return Err(ParseError::MissingData(
                "no guard marker (^ > v <) in grid".to_string(),
            ));
        };
        Ok(Patrol {
            obstacles,
            start,
            start_dir,
        })
    }
}

enum PatrolOutcome {
    Exited(HashSet<(usize, usize)>),
    Looped,
}

/// Walk the patrol until the guard leaves the map or revisits a
/// position+direction state (a loop).
fn walk(patrol: &Patrol, extra_obstacle: Option<(usize, usize)>) -> PatrolOutcome {
    let rows = patrol.obstacles.len() as i64;
    let cols = patrol.obstacles.first().map_or(0, |r| r.len()) as i64;

    let mut pos = (patrol.start.0 as i64, patrol.start.1 as i64);
    let mut dir = patrol.start_dir;
    let mut visited = HashSet::new();
    let mut states = HashSet::new();

    loop {
        if !states.insert((pos, dir)) {
            return PatrolOutcome::Looped;
        }
        visited.insert((pos.0 as usize, pos.1 as usize));

        let (dr, dc) = dir.delta();
        let next = (pos.0 + dr, pos.1 + dc);
        if next.0 < 0 || next.0 >= rows || next.1 < 0 || next.1 >= cols {
            return PatrolOutcome::Exited(visited);
        }

        let next_cell = (next.0 as usize, next.1 as usize);
        if patrol.obstacles[next_cell.0][next_cell.1] || extra_obstacle == Some(next_cell) {
            dir = dir.turn_right();
        } else {
            pos = next;
        }
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        match walk(input, None) {
            PatrolOutcome::Exited(visited) => Ok(visited.len().to_string()),
            PatrolOutcome::Looped => Err(SolveError::SolveFailed(
                "patrol loops without any added obstruction".into(),
            )),
        }
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        // Only positions on the original route can change the patrol
        let candidates = match walk(input, None) {
            PatrolOutcome::Exited(visited) => visited,
            PatrolOutcome::Looped => {
                return Err(SolveError::SolveFailed(
                    "patrol loops without any added obstruction".into(),
                ));
            }
        };

        let loops = candidates
            .into_iter()
            .filter(|&pos| pos != input.start)
            .filter(|&pos| matches!(walk(input, Some(pos)), PatrolOutcome::Looped))
            .count();
        Ok(loops.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
";

    #[test]
    fn example_part1() {
        let mut input = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut input).unwrap(), "41");
    }

    #[test]
    fn example_part2() {
        let mut input = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut input).unwrap(), "6");
    }

    #[test]
    fn missing_guard_is_a_parse_error() {
        assert!(matches!(
            Solver::parse("..#\n...\n"),
            Err(ParseError::MissingData(_))
        ));
    }

    #[test]
    fn guard_facing_edge_exits_immediately() {
        let mut input = Solver::parse("^..").unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut input).unwrap(), "1");
    }
}
