//! Advent of Code 2024 puzzle solutions with automatic registration
//!
//! Each day lives in its own module and registers itself with the solver
//! framework through the `RegisterSolver` derive macro. Linking this crate
//! is enough to make every solution discoverable at runtime.

pub mod days;
