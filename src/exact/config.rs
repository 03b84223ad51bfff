//! Exact-search limits.

use crate::error::{Result, TourError};

/// Largest instance searched exhaustively by default: `8! = 40320` cycles.
pub const DEFAULT_MAX_CITIES: usize = 9;

/// Configuration for [`ExactSolver`](super::ExactSolver).
///
/// # Examples
///
/// ```
/// use u_tsp::exact::ExactConfig;
///
/// let config = ExactConfig::default().with_max_cities(10);
/// assert_eq!(config.max_cities, 10);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExactConfig {
    /// Instances with more cities fail with `InstanceTooLarge`.
    /// The search visits `(max_cities - 1)!` cycles at this size.
    pub max_cities: usize,
}

impl Default for ExactConfig {
    fn default() -> Self {
        Self {
            max_cities: DEFAULT_MAX_CITIES,
        }
    }
}

impl ExactConfig {
    pub fn with_max_cities(mut self, n: usize) -> Self {
        self.max_cities = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_cities < 2 {
            return Err(TourError::InvalidConfiguration(format!(
                "max_cities must be at least 2, got {}",
                self.max_cities
            )));
        }
        Ok(())
    }
}
