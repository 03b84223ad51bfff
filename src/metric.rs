//! Route length.
//!
//! The single distance metric in the crate is plain Euclidean distance.
//! Both solvers measure candidate tours with [`route_length`], so their
//! energies are directly comparable.

use crate::error::{Result, TourError};
use crate::grid::Point;

/// Length of the closed route through `points`.
///
/// Sums the distance between consecutive points plus the distance from
/// the last point back to the first.
///
/// # Errors
///
/// [`TourError::DegenerateRoute`] if fewer than two points are given.
///
/// # Examples
///
/// ```
/// use u_tsp::grid::Point;
/// use u_tsp::metric::route_length;
///
/// let square = [(0, 0), (0, 1), (1, 1), (1, 0)].map(|(x, y)| Point::new(x, y));
/// assert_eq!(route_length(&square).unwrap(), 4.0);
/// ```
pub fn route_length(points: &[Point]) -> Result<f64> {
    if points.len() < 2 {
        return Err(TourError::DegenerateRoute { len: points.len() });
    }

    let mut total = 0.0;
    let mut prev = &points[points.len() - 1];
    for p in points {
        total += prev.distance(p);
        prev = p;
    }
    Ok(total)
}

/// Euclidean distance between two points of any dimension.
///
/// # Errors
///
/// [`TourError::InvalidConfiguration`] if the dimensions differ.
pub fn euclidean(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(TourError::InvalidConfiguration(format!(
            "dimension mismatch: {} vs {}",
            a.len(),
            b.len()
        )));
    }
    Ok(a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(i64, i64)]) -> Vec<Point> {
        raw.iter().copied().map(|(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_two_points_out_and_back() {
        let route = pts(&[(0, 0), (3, 4)]);
        assert!((route_length(&route).unwrap() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_closes_the_cycle() {
        // Open path would be 2.0; closing edge adds 2.0.
        let route = pts(&[(0, 0), (1, 0), (2, 0)]);
        assert!((route_length(&route).unwrap() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_routes() {
        assert_eq!(
            route_length(&[]),
            Err(TourError::DegenerateRoute { len: 0 })
        );
        assert_eq!(
            route_length(&pts(&[(1, 1)])),
            Err(TourError::DegenerateRoute { len: 1 })
        );
    }

    #[test]
    fn test_crossing_route_is_longer() {
        let square = pts(&[(0, 0), (0, 1), (1, 1), (1, 0)]);
        let bowtie = pts(&[(0, 0), (1, 1), (0, 1), (1, 0)]);
        assert!(route_length(&bowtie).unwrap() > route_length(&square).unwrap());
    }

    #[test]
    fn test_euclidean_3d() {
        let d = euclidean(&[1.0, 2.0, 2.0], &[0.0, 0.0, 0.0]).unwrap();
        assert!((d - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_euclidean_dimension_mismatch() {
        assert!(matches!(
            euclidean(&[1.0], &[1.0, 2.0]),
            Err(TourError::InvalidConfiguration(_))
        ));
    }
}
