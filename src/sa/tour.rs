//! Annealing over tours of a [`CityGrid`].

use rand::Rng;

use super::config::SaConfig;
use super::runner::{SaResult, SaRunner};
use super::types::SaProblem;
use crate::error::{Result, TourError};
use crate::grid::CityGrid;
use crate::tour::Tour;

/// Smallest grid with two non-anchor cities to swap.
pub const MIN_ANNEAL_CITIES: usize = 3;

/// Tour search over a grid: energy is the closed route length and a
/// neighbor swaps two non-anchor cities.
#[derive(Debug, Clone, Copy)]
pub struct TourProblem<'a> {
    grid: &'a CityGrid,
}

impl<'a> TourProblem<'a> {
    /// Fails with [`TourError::InstanceTooSmall`] below
    /// [`MIN_ANNEAL_CITIES`] cities.
    pub fn new(grid: &'a CityGrid) -> Result<Self> {
        if grid.len() < MIN_ANNEAL_CITIES {
            return Err(TourError::InstanceTooSmall {
                cities: grid.len(),
                min: MIN_ANNEAL_CITIES,
            });
        }
        Ok(Self { grid })
    }

    pub fn grid(&self) -> &'a CityGrid {
        self.grid
    }
}

impl SaProblem for TourProblem<'_> {
    type Solution = Tour;

    /// The identity tour; no randomness is drawn.
    fn initial_solution<R: Rng>(&self, _rng: &mut R) -> Tour {
        Tour::identity(self.grid.len())
    }

    fn energy(&self, tour: &Tour) -> Result<f64> {
        self.grid.tour_length(tour)
    }

    /// Swaps two distinct positions drawn uniformly from `1..n`.
    fn neighbor<R: Rng>(&self, tour: &Tour, rng: &mut R) -> Tour {
        let n = tour.len();
        let a = rng.random_range(1..n);
        let mut b = rng.random_range(1..n - 1);
        if b >= a {
            b += 1;
        }
        let mut next = tour.clone();
        next.swap(a, b);
        next
    }
}

/// Anneals `grid` with a generator seeded from `config.seed`.
///
/// # Errors
///
/// - [`TourError::InstanceTooSmall`] for fewer than 3 cities
/// - [`TourError::InvalidConfiguration`] for a bad `config`
pub fn anneal(grid: &CityGrid, config: &SaConfig) -> Result<SaResult<Tour>> {
    config.validate()?;
    SaRunner::run(&TourProblem::new(grid)?, config)
}

/// Anneals `grid` drawing from a caller-owned generator.
pub fn anneal_with_rng<R: Rng>(
    grid: &CityGrid,
    config: &SaConfig,
    rng: &mut R,
) -> Result<SaResult<Tour>> {
    config.validate()?;
    SaRunner::run_with_rng(&TourProblem::new(grid)?, config, rng)
}
