//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases over time (temperature), allowing the search to escape
//! local optima.
//!
//! [`SaRunner`] is generic over any [`SaProblem`]; [`TourProblem`] and
//! [`anneal`] apply it to tours of a [`CityGrid`](crate::grid::CityGrid).
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;
mod tour;
mod types;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner, TracePoint};
pub use tour::{anneal, anneal_with_rng, TourProblem, MIN_ANNEAL_CITIES};
pub use types::SaProblem;
