//! The immutable city set.

use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use super::config::GridConfig;
use super::types::Point;
use crate::error::{Result, TourError};
use crate::metric::route_length;
use crate::random::rng_from_seed;
use crate::tour::Tour;

/// A fixed set of cities on unique vertices of a `width × height` grid.
///
/// City `i` is identified by its index into [`points`](Self::points).
/// The grid never changes after construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityGrid {
    points: Vec<Point>,
    width: usize,
    height: usize,
}

impl CityGrid {
    /// Places cities at random using the seed in `config`.
    pub fn generate(config: &GridConfig) -> Result<Self> {
        let mut rng = rng_from_seed(config.seed);
        Self::generate_with_rng(config, &mut rng)
    }

    /// Places cities uniformly at random on distinct grid vertices.
    ///
    /// A coordinate already taken is redrawn until a free one comes up.
    /// `config.seed` is ignored; all draws come from `rng`.
    pub fn generate_with_rng<R: Rng>(config: &GridConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let width = config.width as i64;
        let height = config.height as i64;
        let mut taken = HashSet::with_capacity(config.cities);
        let mut points = Vec::with_capacity(config.cities);
        let mut redraws = 0usize;

        while points.len() < config.cities {
            let p = Point::new(rng.random_range(0..width), rng.random_range(0..height));
            if taken.insert(p) {
                points.push(p);
            } else {
                redraws += 1;
            }
        }

        debug!(
            event = "grid_generated",
            cities = config.cities,
            width = config.width,
            height = config.height,
            redraws = redraws,
        );

        Ok(Self {
            points,
            width: config.width,
            height: config.height,
        })
    }

    /// Builds a grid from known coordinates.
    ///
    /// Fails with [`TourError::InvalidConfiguration`] if the list is empty,
    /// a point lies outside `[0, width) × [0, height)`, or two points
    /// coincide.
    pub fn from_points(points: Vec<Point>, width: usize, height: usize) -> Result<Self> {
        GridConfig::new(points.len())
            .with_dimensions(width, height)
            .validate()?;

        let mut seen = HashSet::with_capacity(points.len());
        for p in &points {
            let inside = p.x >= 0 && p.y >= 0 && (p.x as usize) < width && (p.y as usize) < height;
            if !inside {
                return Err(TourError::InvalidConfiguration(format!(
                    "point ({}, {}) lies outside the {width}x{height} grid",
                    p.x, p.y
                )));
            }
            if !seen.insert(*p) {
                return Err(TourError::InvalidConfiguration(format!(
                    "duplicate point ({}, {})",
                    p.x, p.y
                )));
            }
        }

        Ok(Self {
            points,
            width,
            height,
        })
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed grid.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// All city coordinates, indexed by city.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Coordinates of city `index`.
    pub fn point(&self, index: usize) -> Result<Point> {
        self.points
            .get(index)
            .copied()
            .ok_or(TourError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
    }

    /// Euclidean distance between cities `i` and `j`.
    pub fn distance(&self, i: usize, j: usize) -> Result<f64> {
        Ok(self.point(i)?.distance(&self.point(j)?))
    }

    /// Maps city indices to their coordinates, in order.
    pub fn coordinates_of(&self, indices: &[usize]) -> Result<Vec<Point>> {
        indices.iter().map(|&i| self.point(i)).collect()
    }

    /// Closed length of `tour` over this grid's coordinates.
    pub fn tour_length(&self, tour: &Tour) -> Result<f64> {
        route_length(&self.coordinates_of(tour.as_slice())?)
    }
}
