use advent_solver::{InputParser, ParseError, PartSolver, SolveError, Solver, SolverExt};
use advent_solver_macros::DaySolver;

#[derive(DaySolver)]
#[day_solver(parts = 2)]
struct TestSolver;

impl InputParser for TestSolver {
    type Input<'a> = Vec<i32>;

    fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for TestSolver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(input.iter().sum::<i32>().to_string())
    }
}

impl PartSolver<2> for TestSolver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(input.iter().product::<i32>().to_string())
    }
}

#[test]
fn derive_generates_part_count() {
    assert_eq!(TestSolver::PARTS, 2);
}

#[test]
fn derive_dispatches_to_part_solvers() {
    let mut input = TestSolver::parse("1\n2\n3\n4\n5").unwrap();

    assert_eq!(TestSolver::solve_part(&mut input, 1).unwrap(), "15");
    assert_eq!(TestSolver::solve_part(&mut input, 2).unwrap(), "120");
}

#[test]
fn derive_rejects_unimplemented_part() {
    let mut input = TestSolver::parse("1\n2\n3").unwrap();

    assert!(matches!(
        TestSolver::solve_part(&mut input, 3),
        Err(SolveError::PartNotImplemented(3))
    ));
    assert!(matches!(
        TestSolver::solve_part_checked(&mut input, 3),
        Err(SolveError::PartOutOfRange(3))
    ));
}
