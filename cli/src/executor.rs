//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputStore;
use advent_solver::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;

/// Result from a single solver part execution
pub struct PartOutcome {
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, advent_solver::SolverError>,
    pub solve_duration: TimeDelta,
    pub parse_duration: Option<TimeDelta>,
}

/// Work item representing a solver to execute
pub struct WorkItem {
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    shared: SharedExecutorState,
    thread_pool: rayon::ThreadPool,
}

struct SharedExecutorState {
    registry: SolverRegistry,
    store: InputStore,
    parallelize_by: ParallelizeBy,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            shared: SharedExecutorState {
                registry,
                store: InputStore::new(config.input_dir.clone(), config.input_file.clone()),
                parallelize_by: config.parallelize_by,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// Access the input store used by this executor
    pub fn store(&self) -> &InputStore {
        &self.shared.store
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let shared = &self.shared;
        shared
            .registry
            .iter_info()
            .filter(|info| shared.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on config.part_filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.shared.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<PartOutcome>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();

        match self.shared.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) = run_work_item(&work, &tx, &self.shared) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Day | ParallelizeBy::Part => {
                let shared = &self.shared;
                self.thread_pool.install(|| {
                    work_items
                        .into_par_iter()
                        .map(|work| run_work_item(&work, &tx, shared).err())
                        .reduce_with(merge_errors)
                        .unwrap_or_default()
                        .map_or(Ok(()), Err)
                })
            }
        }
    }
}

/// Fold two optional errors, keeping whichever side is present
fn merge_errors(
    first: Option<ArcExecutorError>,
    second: Option<ArcExecutorError>,
) -> Option<ArcExecutorError> {
    match (first, second) {
        (Some(e1), Some(e2)) => Some(ArcExecutorError::combine(e1, e2)),
        (e1, e2) => e1.or(e2),
    }
}

/// Create an error outcome for a failed input load
fn make_error_outcome(day: u8, part: u8, error: &str) -> PartOutcome {
    PartOutcome {
        day,
        part,
        answer: Err(advent_solver::SolverError::ParseError(
            advent_solver::ParseError::Other(error.to_string()),
        )),
        solve_duration: TimeDelta::zero(),
        parse_duration: None,
    }
}

/// Run all requested parts of one day's solver
fn run_work_item(
    work: &WorkItem,
    tx: &Sender<PartOutcome>,
    shared: &SharedExecutorState,
) -> Result<(), ArcExecutorError> {
    let input = match shared.store.load(work.day) {
        Ok(input) => input,
        Err(e) => {
            // Surface the failure once per requested part
            let error_msg = e.to_string();
            for part in work.parts.clone() {
                tx.send(make_error_outcome(work.day, part, &error_msg))
                    .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
            }
            return Ok(());
        }
    };

    if matches!(shared.parallelize_by, ParallelizeBy::Part) {
        run_parts_parallel(work, &input, tx, shared)
    } else {
        run_parts_sequential(work, &input, tx, shared)
    }
}

/// Solve parts in parallel, each with its own solver instance
fn run_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<PartOutcome>,
    shared: &SharedExecutorState,
) -> Result<(), ArcExecutorError> {
    let day = work.day;
    let registry = &shared.registry;

    work.parts
        .clone()
        .into_par_iter()
        .map(|part| match registry.create_solver(day, input) {
            Ok(mut solver) => {
                let outcome = solve_part(day, part, &mut *solver);
                tx.send(outcome)
                    .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))
            }
            Err(e) => tx
                .send(make_error_outcome(day, part, &e.to_string()))
                .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend)),
        })
        .reduce_with(|r1, r2| match (r1, r2) {
            (Err(e1), Err(e2)) => Err(ArcExecutorError::combine(e1, e2)),
            (Err(e), Ok(())) | (Ok(()), Err(e)) => Err(e),
            _ => Ok(()),
        })
        .unwrap_or(Ok(()))
}

/// Solve parts in order, reusing one solver instance for shared parse state
fn run_parts_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<PartOutcome>,
    shared: &SharedExecutorState,
) -> Result<(), ArcExecutorError> {
    let day = work.day;
    let mut solver = match shared.registry.create_solver(day, input) {
        Ok(solver) => solver,
        Err(e) => {
            let error_msg = e.to_string();
            for part in work.parts.clone() {
                tx.send(make_error_outcome(day, part, &error_msg))
                    .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
            }
            return Ok(());
        }
    };

    for part in work.parts.clone() {
        tx.send(solve_part(day, part, &mut *solver))
            .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
    }
    Ok(())
}

/// Solve a single part
fn solve_part(day: u8, part: u8, solver: &mut dyn DynSolver) -> PartOutcome {
    let parse_duration = Some(solver.parse_duration());
    match solver.solve(part) {
        Ok(result) => PartOutcome {
            day,
            part,
            solve_duration: result.duration(),
            answer: Ok(result.answer),
            parse_duration,
        },
        Err(e) => PartOutcome {
            day,
            part,
            answer: Err(e.into()),
            solve_duration: TimeDelta::zero(),
            parse_duration,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel_error() -> ArcExecutorError {
        ExecutorError::ChannelSend.into()
    }

    #[test]
    fn merge_keeps_error_from_either_side() {
        assert!(merge_errors(None, None).is_none());
        assert!(merge_errors(Some(channel_error()), None).is_some());
        assert!(merge_errors(None, Some(channel_error())).is_some());
    }

    #[test]
    fn merge_combines_two_errors() {
        let merged = merge_errors(Some(channel_error()), Some(channel_error())).unwrap();
        assert!(matches!(merged.inner(), ExecutorError::Multiple(v) if v.len() == 2));
    }
}
