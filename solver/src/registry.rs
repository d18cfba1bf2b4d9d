//! Day-indexed registry for looking up and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};

/// Days in an Advent calendar (1-25)
pub const DAYS_PER_EVENT: usize = 25;

/// Calculate flat index from a day, returning None if out of bounds
#[inline]
fn calc_index(day: u8) -> Option<usize> {
    if day == 0 || day > DAYS_PER_EVENT as u8 {
        return None;
    }
    Some((day - 1) as usize)
}

/// Reconstruct the day from a flat index
#[inline]
fn from_index(index: usize) -> u8 {
    index as u8 + 1
}

/// Thread-safe factory function for creating solver instances
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverInfo {
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
}

struct FactoryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Builder for constructing a SolverRegistry with fluent API
///
/// Registration detects duplicates; the registry is immutable once built.
///
/// # Example
///
/// ```no_run
/// # use advent_solver::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<FactoryEntry>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..DAYS_PER_EVENT).map(|_| None).collect(),
        }
    }

    /// Register a solver factory for a specific day
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the solver registered, ready for chaining
    /// * `Err(RegistrationError)` - Day out of bounds or already registered
    pub fn register<F>(mut self, day: u8, parts: u8, factory: F) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = calc_index(day).ok_or(RegistrationError::InvalidDay(day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(day));
        }

        self.entries[index] = Some(FactoryEntry {
            factory: Box::new(factory),
            parts,
        });
        Ok(self)
    }

    /// Register all solver plugins submitted via `inventory::submit!`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_plugins_where(|_| true)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// Allows selective registration based on tags or day.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use advent_solver::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_plugins_where(|plugin| plugin.tags.contains(&"grid"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_plugins_where<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry mapping days to solver factories
///
/// Uses a flat Vec with index math for O(1) lookup across the 25-day
/// calendar. Once built, it can only be used for lookup and creation.
pub struct SolverRegistry {
    entries: Vec<Option<FactoryEntry>>,
}

impl SolverRegistry {
    /// Iterate over metadata for all registered solvers, in day order
    pub fn iter_info(&self) -> impl Iterator<Item = SolverInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| SolverInfo {
                day: from_index(i),
                parts: e.parts,
            })
        })
    }

    /// Get metadata for a specific day
    pub fn get_info(&self, day: u8) -> Option<SolverInfo> {
        calc_index(day)
            .and_then(|i| self.entries.get(i)?.as_ref())
            .map(|e| SolverInfo {
                day,
                parts: e.parts,
            })
    }

    /// Check if a solver exists for the day
    pub fn contains(&self, day: u8) -> bool {
        self.get_info(day).is_some()
    }

    /// Get the number of registered solvers
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }

    /// Create a solver instance by invoking the factory for a specific day
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Successfully parsed and created solver
    /// * `Err(SolverError)` - Solver not found or parsing failed
    pub fn create_solver<'a>(
        &self,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = calc_index(day).ok_or(SolverError::InvalidDay(day))?;

        let entry = self
            .entries
            .get(index)
            .and_then(|e| e.as_ref())
            .ok_or(SolverError::NotFound(day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }
}

/// Trait for solvers that can register themselves with a registry builder
///
/// A type-erased interface with no associated types, so different solver
/// types can be collected in a single plugin container. Any `Solver` gets an
/// implementation through the blanket impl below.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a specific day
    fn register_with(
        &self,
        builder: RegistryBuilder,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;

    /// Get the number of parts this solver supports
    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: crate::solver::Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register(day, S::PARTS, move |input: &str| {
            let instance = SolverInstance::<S>::new(day, input)?;
            Ok(Box::new(instance) as Box<dyn DynSolver + '_>)
        })
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// Plugin information for automatic solver registration
///
/// Submitted via `inventory::submit!`, usually through the `RegisterSolver`
/// derive:
///
/// ```ignore
/// #[derive(DaySolver, RegisterSolver)]
/// #[day_solver(parts = 2)]
/// #[puzzle(day = 6, tags = ["grid", "simulation"])]
/// pub struct Solver;
/// ```
pub struct SolverPlugin {
    /// The day number (1-25)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Optional tags for filtering (e.g., "grid", "search")
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;
    use crate::solver::{InputParser, Solver};
    use proptest::prelude::*;

    struct Echo;

    impl InputParser for Echo {
        type Input<'a> = &'a str;

        fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError> {
            Ok(input.trim())
        }
    }

    impl Solver for Echo {
        const PARTS: u8 = 1;

        fn solve_part(input: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(input.to_string()),
                other => Err(SolveError::PartNotImplemented(other)),
            }
        }
    }

    #[test]
    fn register_and_create() {
        let registry = Echo
            .register_with(RegistryBuilder::new(), 7)
            .unwrap()
            .build();

        assert!(registry.contains(7));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get_info(7), Some(SolverInfo { day: 7, parts: 1 }));

        let mut solver = registry.create_solver(7, "hello\n").unwrap();
        assert_eq!(solver.solve(1).unwrap().answer, "hello");
    }

    #[test]
    fn duplicate_registration_rejected() {
        let builder = Echo.register_with(RegistryBuilder::new(), 3).unwrap();
        assert!(matches!(
            Echo.register_with(builder, 3),
            Err(RegistrationError::DuplicateSolver(3))
        ));
    }

    #[test]
    fn invalid_day_rejected() {
        assert!(matches!(
            Echo.register_with(RegistryBuilder::new(), 0),
            Err(RegistrationError::InvalidDay(0))
        ));
        assert!(matches!(
            Echo.register_with(RegistryBuilder::new(), 26),
            Err(RegistrationError::InvalidDay(26))
        ));
    }

    #[test]
    fn missing_day_not_found() {
        let registry = RegistryBuilder::new().build();
        assert!(registry.is_empty());
        assert!(matches!(
            registry.create_solver(12, ""),
            Err(SolverError::NotFound(12))
        ));
        assert!(matches!(
            registry.create_solver(0, ""),
            Err(SolverError::InvalidDay(0))
        ));
    }

    #[test]
    fn iter_info_in_day_order() {
        let registry = Echo
            .register_with(RegistryBuilder::new(), 9)
            .and_then(|b| Echo.register_with(b, 2))
            .unwrap()
            .build();

        let days: Vec<u8> = registry.iter_info().map(|i| i.day).collect();
        assert_eq!(days, vec![2, 9]);
    }

    proptest! {
        #[test]
        fn index_round_trips(day in 1u8..=25) {
            let index = calc_index(day).unwrap();
            prop_assert_eq!(from_index(index), day);
        }

        #[test]
        fn out_of_calendar_days_have_no_index(day in 26u8..) {
            prop_assert!(calc_index(day).is_none());
        }
    }
}
