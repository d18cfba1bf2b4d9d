//! Day 5: Print Queue

use advent_solver::{InputParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{DaySolver, RegisterSolver};

#[derive(DaySolver, RegisterSolver)]
#[day_solver(parts = 2)]
#[puzzle(day = 5, tags = ["2024", "ordering"])]
pub struct Solver;

pub struct PrintQueue {
    rules: Vec<(u32, u32)>,
    updates: Vec<Vec<u32>>,
}

impl InputParser for Solver {
    type Input<'a> = PrintQueue;

    fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError> {
        let mut rules = Vec::new();
        let mut updates = Vec::new();

        for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if let Some((before, after)) = line.split_once('|') {
                let before = parse_page(before)?;
                let after = parse_page(after)?;
                rules.push((before, after));
            } else if line.contains(',') {
                updates.push(
                    line.split(',')
                        .map(parse_page)
                        .collect::<Result<Vec<u32>, ParseError>>()?,
                );
            } else {
                return Err(ParseError::InvalidFormat(format!(
                    "line is neither a rule nor an update: {}",
                    line
                )));
            }
        }
        Ok(PrintQueue { rules, updates })
    }
}

fn parse_page(s: &str) -> Result<u32, ParseError> {
    s.trim()
        .parse()
        .map_err(|e| ParseError::InvalidFormat(format!("page number {:?}: {}", s, e)))
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let sum: u32 = input
            .updates
            .iter()
            .filter(|u| is_ordered(&input.rules, u))
            .map(|u| middle_page(u))
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let sum: u32 = input
            .updates
            .iter()
            .filter(|u| !is_ordered(&input.rules, u))
            .map(|u| {
                let mut reordered = u.clone();
                reorder(&input.rules, &mut reordered);
                middle_page(&reordered)
            })
            .sum();
        Ok(sum.to_string())
    }
}

fn position_of(update: &[u32], page: u32) -> Option<usize> {
    update.iter().position(|&p| p == page)
}

fn is_ordered(rules: &[(u32, u32)], update: &[u32]) -> bool {
    rules.iter().all(|&(before, after)| {
        match (position_of(update, before), position_of(update, after)) {
            (Some(i), Some(j)) => i < j,
            _ => true,
        }
    })
}

/// Swap violating pairs repeatedly until every rule holds. Each pass fixes at
/// least one inversion, so this terminates for consistent rule sets.
fn reorder(rules: &[(u32, u32)], update: &mut [u32]) {
    while !is_ordered(rules, update) {
        for &(before, after) in rules {
            if let (Some(i), Some(j)) = (position_of(update, before), position_of(update, after))
                && i > j
            {
                update.swap(i, j);
            }
        }
    }
}

/// Middle page of an update; even-length updates average the two middle pages.
fn middle_page(update: &[u32]) -> u32 {
    let mid = update.len() / 2;
    if update.len() % 2 == 0 {
        (update[mid - 1] + update[mid]) / 2
    } else {
        update[mid]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47
";

    #[test]
    fn example_part1() {
        let mut input = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut input).unwrap(), "143");
    }

    #[test]
    fn example_part2() {
        let mut input = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut input).unwrap(), "123");
    }

    #[test]
    fn even_length_update_averages_middles() {
        assert_eq!(middle_page(&[10, 20, 30, 40]), 25);
        assert_eq!(middle_page(&[10, 20, 30]), 20);
    }

    #[test]
    fn unexpected_line_is_a_parse_error() {
        assert!(Solver::parse("47|53\nbogus line\n").is_err());
    }
}
