//! Day 9: Disk Fragmenter
//!
//! The disk map is a digit string of alternating file and free-space run
//! lengths. Part 1 compacts individual blocks from the end of the disk into
//! the leftmost free block; part 2 moves whole files, each at most once, in
//! decreasing file-id order.

use advent_solver::{InputParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{DaySolver, RegisterSolver};

#[derive(DaySolver, RegisterSolver)]
#[day_solver(parts = 2)]
#[puzzle(day = 9, tags = ["2024", "simulation"])]
pub struct Solver;

impl InputParser for Solver {
    type Input<'a> = Vec<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError> {
        let lengths: Vec<u8> = input
            .trim()
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or_else(|| ParseError::InvalidFormat(format!("non-digit {:?}", c)))
            })
            .collect::<Result<_, ParseError>>()?;
        if lengths.is_empty() {
            return Err(ParseError::MissingData("empty disk map".to_string()));
        }
        Ok(lengths)
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(compact_blocks(input).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(compact_files(input).to_string())
    }
}

/// Expand the disk map into per-block file ids (None = free)
fn expand(lengths: &[u8]) -> Vec<Option<u64>> {
    let mut blocks = Vec::new();
    for (i, &len) in lengths.iter().enumerate() {
        let id = if i % 2 == 0 { Some(i as u64 / 2) } else { None };
        blocks.extend(std::iter::repeat_n(id, len as usize));
    }
    blocks
}

fn checksum(blocks: &[Option<u64>]) -> u64 {
    blocks
        .iter()
        .enumerate()
        .filter_map(|(pos, id)| id.map(|id| pos as u64 * id))
        .sum()
}

/// Move blocks one at a time from the end into the leftmost free block
fn compact_blocks(lengths: &[u8]) -> u64 {
    let mut blocks = expand(lengths);
    let mut free = 0;
    let mut last = blocks.len();

    while free < last {
        if blocks[free].is_some() {
            free += 1;
        } else if blocks[last - 1].is_none() {
            last -= 1;
        } else {
            blocks.swap(free, last - 1);
        }
    }
    checksum(&blocks)
}

struct FileSpan {
    id: u64,
    start: u64,
    len: u64,
}

/// Move whole files, in decreasing id order, into the leftmost free span
/// that fits and lies left of the file. Each file moves at most once.
fn compact_files(lengths: &[u8]) -> u64 {
    let mut files = Vec::new();
    let mut free_spans: Vec<(u64, u64)> = Vec::new(); // (start, len)
    let mut position = 0u64;

    for (i, &len) in lengths.iter().enumerate() {
        let len = len as u64;
        if i % 2 == 0 {
            files.push(FileSpan {
                id: i as u64 / 2,
                start: position,
                len,
            });
        } else if len > 0 {
            free_spans.push((position, len));
        }
        position += len;
    }

    for file in files.iter_mut().rev() {
        let Some(span) = free_spans
            .iter_mut()
            .take_while(|(start, _)| *start < file.start)
            .find(|(_, len)| *len >= file.len)
        else {
            continue;
        };
        file.start = span.0;
        span.0 += file.len;
        span.1 -= file.len;
    }

    files
        .iter()
        .map(|f| f.id * (f.start..f.start + f.len).sum::<u64>())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "2333133121414131402";

    #[test]
    fn example_part1() {
        let mut input = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(
            <Solver as PartSolver<1>>::solve(&mut input).unwrap(),
            "1928"
        );
    }

    #[test]
    fn example_part2() {
        let mut input = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(
            <Solver as PartSolver<2>>::solve(&mut input).unwrap(),
            "2858"
        );
    }

    #[test]
    fn expansion_matches_published_layout() {
        let blocks = expand(&Solver::parse("12345").unwrap());
        let rendered: String = blocks
            .iter()
            .map(|b| match b {
                Some(id) => char::from_digit(*id as u32, 10).unwrap(),
                None => '.',
            })
            .collect();
        assert_eq!(rendered, "0..111....22222");
    }

    #[test]
    fn non_digit_input_is_rejected() {
        assert!(Solver::parse("12a45").is_err());
    }
}
