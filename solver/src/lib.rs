//! Advent of Code Solver Library
//!
//! A type-safe framework for solving Advent of Code style puzzles. Each day
//! is implemented as a solver with custom input parsing and one or more
//! parts, and is discovered at startup through an inventory-based plugin
//! system.
//!
//! # Overview
//!
//! This library provides:
//! - Trait-based solver definitions with compile-time checked parts
//! - Type-safe parsing separated from solving
//! - A day-indexed registry for managing solvers
//! - Timed, type-erased solver instances for uniform execution
//!
//! # Quick Example
//!
//! ```
//! use advent_solver::{
//!     InputParser, ParseError, PartSolver, RegisterableSolver, RegistryBuilder, SolveError, Solver,
//! };
//!
//! pub struct MyDay1;
//!
//! impl InputParser for MyDay1 {
//!     type Input<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
//!         input.lines()
//!             .map(|line| line.parse().map_err(|_|
//!                 ParseError::InvalidFormat("Expected integer".to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl Solver for MyDay1 {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(input: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => Ok(input.iter().sum::<i32>().to_string()),
//!             other => Err(SolveError::PartNotImplemented(other)),
//!         }
//!     }
//! }
//!
//! let registry = MyDay1
//!     .register_with(RegistryBuilder::new(), 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! ```
//!
//! # Key Concepts
//!
//! ## Solver Traits
//!
//! [`InputParser`] defines the working data and parsing; [`PartSolver`]
//! implements a single part with a const-generic part number; [`Solver`]
//! dispatches parts and is usually generated by the `DaySolver` derive.
//!
//! ## DynSolver
//!
//! [`DynSolver`] provides type erasure so the runner can work with every
//! day uniformly: `solve(part)` returns the answer with timing, and
//! `parse_duration()` exposes parse timing.
//!
//! ## Plugin System
//!
//! Use `#[derive(RegisterSolver)]` with `#[puzzle(day = N, tags = [...])]`
//! to submit a [`SolverPlugin`]; the CLI collects them with
//! [`RegistryBuilder::register_all_plugins`].

mod error;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    DAYS_PER_EVENT, RegisterableSolver, RegistryBuilder, SolverFactory, SolverInfo, SolverPlugin,
    SolverRegistry,
};
pub use solver::{InputParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macros
pub use inventory;

// Re-export the derive macros
pub use advent_solver_macros::{DaySolver, RegisterSolver};
