//! Small Euclidean Travelling-Salesman toolkit.
//!
//! Finds short closed tours through cities placed on an integer grid:
//!
//! - **Grid**: [`grid::CityGrid`] holds cities on unique grid vertices,
//!   placed at random from a [`grid::GridConfig`] or given explicitly.
//! - **Metric**: [`metric::route_length`] measures a closed route; both
//!   solvers use it so their results are comparable.
//! - **Exact search**: [`exact::ExactSolver`] enumerates every anchored
//!   cycle of a small grid and returns the true optimum.
//! - **Simulated Annealing (SA)**: [`sa::anneal`] runs a swap-neighborhood
//!   annealer with geometric cooling on grids of any size and returns the
//!   best tour plus an `(energy, temperature)` trace.
//!
//! # Example
//!
//! ```
//! use u_tsp::exact::ExactSolver;
//! use u_tsp::grid::{CityGrid, GridConfig};
//! use u_tsp::sa::{anneal, SaConfig};
//!
//! let grid = CityGrid::generate(&GridConfig::new(7).with_seed(1)).unwrap();
//! let exact = ExactSolver::solve(&grid).unwrap();
//! let annealed = anneal(&grid, &SaConfig::default().with_seed(1)).unwrap();
//! assert!(annealed.best_energy >= exact.length - 1e-9);
//! ```
//!
//! # Randomness
//!
//! Every random operation either takes a seed in its configuration or a
//! caller-owned [`rand::Rng`]. Seeded runs are reproducible; see
//! [`random::create_rng`].
//!
//! # Logging
//!
//! Solvers emit `tracing` events at start and end of each run. Install a
//! subscriber to see them.

pub mod error;
pub mod exact;
pub mod grid;
pub mod metric;
pub mod random;
pub mod sa;
pub mod tour;

pub use error::{Result, TourError};
