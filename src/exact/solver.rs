//! Exhaustive permutation search.
//!
//! # Algorithm
//!
//! 1. Fix city 0 as the anchor
//! 2. Walk every permutation of cities `1..n` in lexicographic order
//! 3. Measure `[anchor] + permutation` as a closed route
//! 4. Keep the first shortest cycle seen
//!
//! Each undirected cycle is visited twice, once per direction. Both
//! directions have the same length so the optimum is unaffected.

use std::time::Instant;

use tracing::{debug, info};

use super::config::ExactConfig;
use crate::error::{Result, TourError};
use crate::grid::{CityGrid, Point};
use crate::metric::route_length;
use crate::tour::Tour;

/// Lengths closer than this count as the same optimum.
const TIE_EPSILON: f64 = 1e-9;

/// Result of an exact search.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExactResult {
    /// A shortest cycle, anchor first.
    pub tour: Tour,

    /// Its closed length.
    pub length: f64,

    /// Number of candidate cycles measured, `(n - 1)!`.
    pub evaluated: usize,

    /// Number of candidates tying the optimum, the returned one included.
    /// At least 2 for `n >= 3` because reversals are not deduplicated.
    pub ties: usize,
}

/// Brute-force solver giving the true optimum for small grids.
pub struct ExactSolver;

impl ExactSolver {
    /// Solves with the default size limit.
    pub fn solve(grid: &CityGrid) -> Result<ExactResult> {
        Self::solve_with_config(grid, &ExactConfig::default())
    }

    /// Solves, failing with [`TourError::InstanceTooLarge`] before any
    /// enumeration when `grid` has more than `config.max_cities` cities.
    ///
    /// A single-city grid fails with [`TourError::DegenerateRoute`].
    pub fn solve_with_config(grid: &CityGrid, config: &ExactConfig) -> Result<ExactResult> {
        config.validate()?;

        let n = grid.len();
        if n > config.max_cities {
            return Err(TourError::InstanceTooLarge {
                cities: n,
                max: config.max_cities,
            });
        }

        info!(event = "exact_start", cities = n);
        let started = Instant::now();

        let points = grid.points();
        let mut order: Vec<usize> = (0..n).collect();
        let mut coords: Vec<Point> = Vec::with_capacity(n);

        let mut best_order = order.clone();
        let mut best_length = f64::INFINITY;
        let mut evaluated = 0usize;
        let mut ties = 0usize;

        loop {
            coords.clear();
            coords.extend(order.iter().map(|&i| points[i]));
            let length = route_length(&coords)?;
            evaluated += 1;

            if length < best_length - TIE_EPSILON {
                best_length = length;
                best_order.copy_from_slice(&order);
                ties = 1;
            } else if (length - best_length).abs() <= TIE_EPSILON {
                ties += 1;
            }

            if !next_permutation(&mut order[1..]) {
                break;
            }
        }

        debug!(event = "exact_ties", ties = ties);
        info!(
            event = "exact_end",
            cities = n,
            evaluated = evaluated,
            length = best_length,
            duration_ms = started.elapsed().as_millis() as u64,
        );

        Ok(ExactResult {
            tour: Tour::from_order(best_order, n)?,
            length: best_length,
            evaluated,
            ties,
        })
    }
}

/// Advances `items` to the next permutation in lexicographic order.
///
/// Returns `false`, leaving `items` untouched, once the last permutation
/// (descending order) has been reached.
fn next_permutation(items: &mut [usize]) -> bool {
    if items.len() < 2 {
        return false;
    }

    // Longest non-increasing suffix starts at `pivot + 1`.
    let Some(pivot) = (0..items.len() - 1).rev().find(|&i| items[i] < items[i + 1]) else {
        return false;
    };

    let successor = (pivot + 1..items.len())
        .rev()
        .find(|&j| items[j] > items[pivot])
        .unwrap_or(pivot + 1);
    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridConfig;

    fn grid_of(raw: &[(i64, i64)], side: usize) -> CityGrid {
        let points = raw.iter().copied().map(Point::from).collect();
        CityGrid::from_points(points, side, side).unwrap()
    }

    fn factorial(n: usize) -> usize {
        (1..=n).product()
    }

    #[test]
    fn test_next_permutation_order() {
        let mut items = vec![1, 2, 3];
        let mut seen = vec![items.clone()];
        while next_permutation(&mut items) {
            seen.push(items.clone());
        }
        assert_eq!(
            seen,
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
        // Exhausted sequence stays put.
        assert_eq!(items, vec![3, 2, 1]);
    }

    #[test]
    fn test_next_permutation_short() {
        let mut empty: [usize; 0] = [];
        assert!(!next_permutation(&mut empty));
        assert!(!next_permutation(&mut [4]));
    }

    #[test]
    fn test_unit_square_perimeter() {
        // Listed in crossing order so the identity tour is not optimal.
        let grid = grid_of(&[(0, 0), (1, 1), (0, 1), (1, 0)], 2);
        let result = ExactSolver::solve(&grid).unwrap();

        assert!((result.length - 4.0).abs() < 1e-12);
        assert_eq!(result.evaluated, 6);
        assert_eq!(result.ties, 2);
        assert_eq!(result.tour.as_slice()[0], 0);
        assert!((grid.tour_length(&result.tour).unwrap() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_first_minimum_wins() {
        // Square in order: identity is optimal and is enumerated first.
        let grid = grid_of(&[(0, 0), (0, 1), (1, 1), (1, 0)], 2);
        let result = ExactSolver::solve(&grid).unwrap();
        assert_eq!(result.tour, Tour::identity(4));
    }

    #[test]
    fn test_two_cities() {
        let grid = grid_of(&[(0, 0), (3, 4)], 5);
        let result = ExactSolver::solve(&grid).unwrap();
        assert!((result.length - 10.0).abs() < 1e-12);
        assert_eq!(result.evaluated, 1);
    }

    #[test]
    fn test_single_city_is_degenerate() {
        let grid = grid_of(&[(0, 0)], 1);
        assert_eq!(
            ExactSolver::solve(&grid).unwrap_err(),
            TourError::DegenerateRoute { len: 1 }
        );
    }

    #[test]
    fn test_evaluates_all_cycles() {
        let config = GridConfig::new(7).with_seed(5);
        let grid = CityGrid::generate(&config).unwrap();
        let result = ExactSolver::solve(&grid).unwrap();
        assert_eq!(result.evaluated, factorial(6));
        assert!(result.ties >= 2);
    }

    #[test]
    fn test_too_large_fails_fast() {
        let config = GridConfig::new(10).with_seed(1);
        let grid = CityGrid::generate(&config).unwrap();
        assert_eq!(
            ExactSolver::solve(&grid).unwrap_err(),
            TourError::InstanceTooLarge { cities: 10, max: 9 }
        );
    }

    #[test]
    fn test_custom_limit() {
        let config = GridConfig::new(5).with_seed(2);
        let grid = CityGrid::generate(&config).unwrap();
        let limit = ExactConfig::default().with_max_cities(4);
        assert!(matches!(
            ExactSolver::solve_with_config(&grid, &limit),
            Err(TourError::InstanceTooLarge { cities: 5, max: 4 })
        ));
    }

    #[test]
    fn test_optimum_not_beaten_by_identity() {
        let config = GridConfig::new(8).with_dimensions(12, 12).with_seed(1);
        let grid = CityGrid::generate(&config).unwrap();
        let result = ExactSolver::solve(&grid).unwrap();
        let identity = grid.tour_length(&Tour::identity(8)).unwrap();
        assert!(result.length <= identity + 1e-9);
    }
}
