//! Tours as anchored permutations of city indices.

use crate::error::{Result, TourError};

/// The city every tour is anchored on.
pub const ANCHOR: usize = 0;

/// A Hamiltonian cycle over cities `0..n`.
///
/// The sequence is cyclic: the last city connects back to the first.
/// Tours are stored rotated so that [`ANCHOR`] sits at position 0, which
/// makes rotation-equivalent cycles compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour(Vec<usize>);

impl Tour {
    /// The tour `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// Validates `order` as a permutation of `0..n` and anchors it.
    ///
    /// # Errors
    ///
    /// - [`TourError::IndexOutOfRange`] for an index `>= n`
    /// - [`TourError::InvalidConfiguration`] for a wrong length or a
    ///   repeated city
    pub fn from_order(mut order: Vec<usize>, n: usize) -> Result<Self> {
        if order.len() != n {
            return Err(TourError::InvalidConfiguration(format!(
                "tour visits {} cities, expected {n}",
                order.len()
            )));
        }
        let mut seen = vec![false; n];
        for &city in &order {
            if city >= n {
                return Err(TourError::IndexOutOfRange { index: city, len: n });
            }
            if std::mem::replace(&mut seen[city], true) {
                return Err(TourError::InvalidConfiguration(format!(
                    "city {city} visited twice"
                )));
            }
        }
        if let Some(pos) = order.iter().position(|&c| c == ANCHOR) {
            order.rotate_left(pos);
        }
        Ok(Self(order))
    }

    /// City indices in visiting order, anchor first.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Number of cities visited.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The visiting order with the anchor repeated at the end, as drawn
    /// when rendering the closed route.
    pub fn closed(&self) -> Vec<usize> {
        let mut path = self.0.clone();
        if let Some(&first) = self.0.first() {
            path.push(first);
        }
        path
    }

    /// Same cycle traversed in the opposite direction, still anchored.
    pub fn reversed(&self) -> Self {
        let mut order = self.0.clone();
        if order.len() > 1 {
            order[1..].reverse();
        }
        Self(order)
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    /// Swaps the cities at two positions. Position 0 holds the anchor and
    /// must not be passed.
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        debug_assert!(a != 0 && b != 0, "anchor position is fixed");
        self.0.swap(a, b);
    }
}

impl AsRef<[usize]> for Tour {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(Tour::identity(4).as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_from_order_rotates_anchor_first() {
        let tour = Tour::from_order(vec![2, 3, 0, 1], 4).unwrap();
        assert_eq!(tour.as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_from_order_rejects_bad_input() {
        assert!(matches!(
            Tour::from_order(vec![0, 1, 1], 3),
            Err(TourError::InvalidConfiguration(_))
        ));
        assert_eq!(
            Tour::from_order(vec![0, 1, 5], 3),
            Err(TourError::IndexOutOfRange { index: 5, len: 3 })
        );
        assert!(Tour::from_order(vec![0, 1], 3).is_err());
    }

    #[test]
    fn test_closed_repeats_anchor() {
        let tour = Tour::from_order(vec![0, 2, 1], 3).unwrap();
        assert_eq!(tour.closed(), vec![0, 2, 1, 0]);
    }

    #[test]
    fn test_reversed_keeps_anchor() {
        let tour = Tour::identity(5);
        assert_eq!(tour.reversed().as_slice(), &[0, 4, 3, 2, 1]);
        assert_eq!(tour.reversed().reversed(), tour);
    }
}
