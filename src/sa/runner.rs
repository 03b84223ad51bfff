//! SA execution loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rand::Rng;
use tracing::info;

use super::config::SaConfig;
use super::types::SaProblem;
use crate::error::Result;
use crate::random::rng_from_seed;

/// One iteration's state, recorded after the acceptance decision and
/// before cooling.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TracePoint {
    /// Energy of the current (not best) solution.
    pub energy: f64,

    /// Temperature the iteration ran at.
    pub temperature: f64,
}

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Energy of the best solution.
    pub best_energy: f64,

    /// Energy of the starting solution.
    pub initial_energy: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Iteration count when the best solution was first reached
    /// (0 = the starting solution).
    pub best_iteration: usize,

    /// Temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// `(energy, temperature)` for every iteration, in order.
    pub trace: Vec<TracePoint>,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with a generator seeded from `config.seed`.
    pub fn run<P: SaProblem>(problem: &P, config: &SaConfig) -> Result<SaResult<P::Solution>> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs SA with an optional cancellation token.
    ///
    /// The flag is checked between iterations. A cancelled run still
    /// returns the best solution seen so far.
    pub fn run_with_cancel<P: SaProblem>(
        problem: &P,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult<P::Solution>> {
        config.validate()?;
        let mut rng = rng_from_seed(config.seed);
        execute(problem, config, &mut rng, cancel.as_deref())
    }

    /// Runs SA drawing from a caller-owned generator; `config.seed` is
    /// ignored.
    pub fn run_with_rng<P: SaProblem, R: Rng>(
        problem: &P,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult<P::Solution>> {
        config.validate()?;
        execute(problem, config, rng, None)
    }
}

fn execute<P: SaProblem, R: Rng>(
    problem: &P,
    config: &SaConfig,
    rng: &mut R,
    cancel: Option<&AtomicBool>,
) -> Result<SaResult<P::Solution>> {
    let started = Instant::now();

    // Initialize
    let mut current = problem.initial_solution(rng);
    let mut current_energy = problem.energy(&current)?;
    let initial_energy = current_energy;
    let mut best = current.clone();
    let mut best_energy = current_energy;
    let mut best_iteration = 0usize;

    let mut temperature = config.start_temperature;
    let mut iterations = 0usize;
    let mut accepted_moves = 0usize;
    let mut improving_moves = 0usize;
    let mut cancelled = false;
    let mut trace = Vec::with_capacity(config.planned_iterations() + 1);

    info!(
        event = "anneal_start",
        start_temperature = config.start_temperature,
        end_temperature = config.end_temperature,
        cooling_rate = config.cooling_rate,
        planned_iterations = config.planned_iterations(),
        initial_energy = initial_energy,
    );

    while temperature > config.end_temperature {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            cancelled = true;
            break;
        }

        let neighbor = problem.neighbor(&current, rng);
        let neighbor_energy = problem.energy(&neighbor)?;
        let delta = neighbor_energy - current_energy;

        // Metropolis acceptance criterion
        let accept = if delta < 0.0 {
            improving_moves += 1;
            true
        } else {
            let probability = (-delta / temperature).exp();
            rng.random_range(0.0..1.0) < probability
        };

        if accept {
            current = neighbor;
            current_energy = neighbor_energy;
            accepted_moves += 1;
        }

        iterations += 1;

        if current_energy < best_energy {
            best = current.clone();
            best_energy = current_energy;
            best_iteration = iterations;
        }

        trace.push(TracePoint {
            energy: current_energy,
            temperature,
        });

        temperature = config.cool(temperature);
    }

    info!(
        event = "anneal_end",
        iterations = iterations,
        best_energy = best_energy,
        best_iteration = best_iteration,
        accepted_moves = accepted_moves,
        improving_moves = improving_moves,
        cancelled = cancelled,
        duration_ms = started.elapsed().as_millis() as u64,
    );

    Ok(SaResult {
        best,
        best_energy,
        initial_energy,
        iterations,
        best_iteration,
        final_temperature: temperature,
        accepted_moves,
        improving_moves,
        cancelled,
        trace,
    })
}
