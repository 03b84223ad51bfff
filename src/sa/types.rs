//! Core trait for Simulated Annealing.

use rand::Rng;

use crate::error::Result;

/// Defines a Simulated Annealing problem.
///
/// The implementor supplies the starting state, the energy function and
/// neighbor generation. [`SaRunner`](super::SaRunner) handles temperature,
/// the Metropolis acceptance criterion, cooling and best-so-far tracking.
///
/// # Minimization
///
/// SA minimizes the energy. For maximization, negate it.
///
/// # Examples
///
/// ```ignore
/// struct Line { target: i64 }
///
/// impl SaProblem for Line {
///     type Solution = i64;
///
///     fn initial_solution<R: Rng>(&self, _rng: &mut R) -> i64 { 0 }
///
///     fn energy(&self, x: &i64) -> Result<f64> {
///         Ok((x - self.target).abs() as f64)
///     }
///
///     fn neighbor<R: Rng>(&self, x: &i64, rng: &mut R) -> i64 {
///         x + if rng.random_bool(0.5) { 1 } else { -1 }
///     }
/// }
/// ```
///
/// # References
///
/// Kirkpatrick et al. (1983), Cerny (1985)
pub trait SaProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send;

    /// Creates the starting solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Computes the energy of a solution. Lower is better.
    fn energy(&self, solution: &Self::Solution) -> Result<f64>;

    /// Generates a neighbor of the current solution.
    ///
    /// The neighbor should be a small perturbation of `solution`, and the
    /// neighborhood must be connected (any solution reachable from any
    /// other via a sequence of moves).
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}
