//! Exact search.
//!
//! Enumerates all `(n - 1)!` anchored cycles of a small [`CityGrid`] and
//! returns the shortest. Used as ground truth for checking the annealer.
//!
//! [`CityGrid`]: crate::grid::CityGrid

mod config;
mod solver;

pub use config::{ExactConfig, DEFAULT_MAX_CITIES};
pub use solver::{ExactResult, ExactSolver};
