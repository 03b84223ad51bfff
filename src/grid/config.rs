//! Grid generation parameters.

use crate::error::{Result, TourError};

/// Configuration for random city placement.
///
/// Width and height default to the number of cities, giving an
/// `n × n` grid.
///
/// # Examples
///
/// ```
/// use u_tsp::grid::GridConfig;
///
/// let config = GridConfig::new(8).with_dimensions(12, 12).with_seed(1);
/// assert_eq!(config.cities, 8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// Number of cities to place.
    pub cities: usize,

    /// Grid width; x coordinates lie in `[0, width)`.
    pub width: usize,

    /// Grid height; y coordinates lie in `[0, height)`.
    pub height: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl GridConfig {
    /// Square `cities × cities` grid.
    pub fn new(cities: usize) -> Self {
        Self {
            cities,
            width: cities,
            height: cities,
            seed: None,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    pub fn with_dimensions(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of distinct vertices on the grid, saturating on overflow.
    pub fn capacity(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Validates the configuration.
    ///
    /// Fails unless `1 <= cities <= width * height`, since every city
    /// needs its own vertex.
    pub fn validate(&self) -> Result<()> {
        if self.cities < 1 {
            return Err(TourError::InvalidConfiguration(
                "at least one city is required".into(),
            ));
        }
        if i64::try_from(self.width).is_err() || i64::try_from(self.height).is_err() {
            return Err(TourError::InvalidConfiguration(format!(
                "grid {}x{} exceeds the coordinate range",
                self.width, self.height
            )));
        }
        if self.cities > self.capacity() {
            return Err(TourError::InvalidConfiguration(format!(
                "{} cities do not fit on a {}x{} grid",
                self.cities, self.width, self.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_square() {
        let config = GridConfig::new(5);
        assert_eq!(config.width, 5);
        assert_eq!(config.height, 5);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_zero_cities() {
        assert!(matches!(
            GridConfig::new(0).validate(),
            Err(TourError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_validate_too_many_cities() {
        let config = GridConfig::new(10).with_dimensions(3, 3);
        assert!(config.validate().is_err());

        let config = GridConfig::new(9).with_dimensions(3, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_width() {
        let config = GridConfig::new(1).with_width(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_single_cell_grid() {
        let config = GridConfig::new(1);
        assert_eq!(config.capacity(), 1);
        assert!(config.validate().is_ok());
    }
}
