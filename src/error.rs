//! Error types shared by every solver in the crate.

use thiserror::Error;

/// Errors raised by grid construction, route measurement and the solvers.
///
/// Every variant is a precondition violation detected before any
/// expensive work starts, so no partial result accompanies it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TourError {
    /// Bad construction or solver parameters.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A city index outside `0..len`.
    #[error("city index {index} out of range for {len} cities")]
    IndexOutOfRange { index: usize, len: usize },

    /// A route with fewer than two stops has no closed length.
    #[error("route with {len} stop(s) is too short to measure")]
    DegenerateRoute { len: usize },

    /// Too many cities for exhaustive search.
    #[error("{cities} cities exceed the exact-search limit of {max}")]
    InstanceTooLarge { cities: usize, max: usize },

    /// Too few cities for the requested solver.
    #[error("{cities} cities are fewer than the required {min}")]
    InstanceTooSmall { cities: usize, min: usize },
}

/// Result alias for crate operations.
pub type Result<T> = std::result::Result<T, TourError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_values() {
        let err = TourError::IndexOutOfRange { index: 7, len: 5 };
        assert_eq!(err.to_string(), "city index 7 out of range for 5 cities");

        let err = TourError::InstanceTooLarge { cities: 12, max: 9 };
        assert!(err.to_string().contains("12"));
        assert!(err.to_string().contains("9"));
    }
}
