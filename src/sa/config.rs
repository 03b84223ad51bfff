//! SA configuration and cooling schedule.

use crate::error::{Result, TourError};

/// Configuration for the Simulated Annealing algorithm.
///
/// Cooling is geometric: after every iteration the temperature is
/// multiplied by `1 - cooling_rate`. The run ends once the temperature
/// is no longer above `end_temperature`, so the three parameters fix the
/// iteration count (see [`planned_iterations`](Self::planned_iterations)).
///
/// # Examples
///
/// ```
/// use u_tsp::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_start_temperature(100.0)
///     .with_end_temperature(0.01)
///     .with_cooling_rate(0.003)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Initial temperature. Higher values accept more uphill moves early.
    pub start_temperature: f64,

    /// The algorithm stops once the temperature drops to this value.
    pub end_temperature: f64,

    /// Fraction of the temperature lost per iteration, in (0, 1).
    pub cooling_rate: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            start_temperature: 1e4,
            end_temperature: 1.0,
            cooling_rate: 0.003,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_start_temperature(mut self, t: f64) -> Self {
        self.start_temperature = t;
        self
    }

    pub fn with_end_temperature(mut self, t: f64) -> Self {
        self.end_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Temperature after one cooling step from `temperature`.
    pub fn cool(&self, temperature: f64) -> f64 {
        temperature * (1.0 - self.cooling_rate)
    }

    /// Number of iterations a full run performs:
    /// `ceil(ln(end / start) / ln(1 - cooling_rate))`.
    ///
    /// Floating-point rounding in the loop itself may shift the actual
    /// count by one.
    pub fn planned_iterations(&self) -> usize {
        let ratio = (self.end_temperature / self.start_temperature).ln();
        let step = (1.0 - self.cooling_rate).ln();
        (ratio / step).ceil().max(0.0) as usize
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.start_temperature.is_finite() && self.start_temperature > 0.0) {
            return Err(TourError::InvalidConfiguration(format!(
                "start_temperature must be positive, got {}",
                self.start_temperature
            )));
        }
        if !(self.end_temperature.is_finite() && self.end_temperature > 0.0) {
            return Err(TourError::InvalidConfiguration(format!(
                "end_temperature must be positive, got {}",
                self.end_temperature
            )));
        }
        if self.end_temperature >= self.start_temperature {
            return Err(TourError::InvalidConfiguration(
                "end_temperature must be less than start_temperature".into(),
            ));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(TourError::InvalidConfiguration(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        Ok(())
    }
}
