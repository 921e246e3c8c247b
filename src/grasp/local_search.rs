//! First-improvement 2-opt local search.

use crate::error::TspResult;
use crate::matrix::{DistanceMatrix, Tour};

/// Smallest cost decrease accepted as an improvement.
const IMPROVEMENT_EPS: f64 = 1e-12;

/// Improves a tour to a 2-opt local optimum.
///
/// A move reverses the segment `tour[i..j]` for `1 <= i` and
/// `i + 2 <= j <= n - 1`, so city 0 and the last city keep their
/// positions. Scanning restarts from the first pair after every accepted
/// move and stops after a full pass without improvement. Cost strictly
/// decreases over a finite set of tours, so the loop terminates.
pub struct TwoOptLocalSearch;

impl TwoOptLocalSearch {
    /// Returns the locally optimal tour and its cyclic cost.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::{DistanceMatrix, Point, TwoOptLocalSearch};
    ///
    /// // Visiting the square corners in a crossing order.
    /// let square = [
    ///     Point::new(0.0, 0.0),
    ///     Point::new(1.0, 0.0),
    ///     Point::new(1.0, 1.0),
    ///     Point::new(0.0, 1.0),
    /// ];
    /// let dm = DistanceMatrix::from_points(&square).unwrap();
    /// let (tour, cost) = TwoOptLocalSearch::improve(&dm, vec![0, 2, 1, 3]).unwrap();
    /// assert_eq!(tour, vec![0, 1, 2, 3]);
    /// assert!((cost - 4.0).abs() < 1e-12);
    /// ```
    pub fn improve(matrix: &DistanceMatrix, tour: Tour) -> TspResult<(Tour, f64)> {
        matrix.validate_tour(&tour)?;

        let mut tour = tour;
        let mut best_cost = matrix.tour_cost(&tour);
        while let Some((i, j)) = first_improving_move(matrix, &tour) {
            tour[i..j].reverse();
            best_cost = matrix.tour_cost(&tour);
        }

        Ok((tour, best_cost))
    }

    /// Returns `true` if no 2-opt move improves `tour`.
    pub fn is_local_optimum(matrix: &DistanceMatrix, tour: &[usize]) -> bool {
        first_improving_move(matrix, tour).is_none()
    }
}

/// Scans `(i, j)` pairs in order and returns the first improving reversal.
fn first_improving_move(matrix: &DistanceMatrix, tour: &[usize]) -> Option<(usize, usize)> {
    let n = tour.len();
    for i in 1..n.saturating_sub(1) {
        for j in (i + 2)..n {
            if reversal_delta(matrix, tour, i, j) < -IMPROVEMENT_EPS {
                return Some((i, j));
            }
        }
    }
    None
}

/// Cost change of reversing `tour[i..j]`.
///
/// Edges `(a, b)` and `(c, e)` become `(a, c)` and `(b, e)`. On asymmetric
/// matrices the reversed segment is also traversed backwards.
fn reversal_delta(matrix: &DistanceMatrix, tour: &[usize], i: usize, j: usize) -> f64 {
    let (a, b) = (tour[i - 1], tour[i]);
    let (c, e) = (tour[j - 1], tour[j]);
    let mut delta = matrix.get(a, c) + matrix.get(b, e) - matrix.get(a, b) - matrix.get(c, e);
    if !matrix.is_symmetric() {
        delta += tour[i..j]
            .windows(2)
            .map(|w| matrix.get(w[1], w[0]) - matrix.get(w[0], w[1]))
            .sum::<f64>();
    }
    delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::random_instance;
    use crate::TspError;

    /// Reference scan: recompute the whole cycle for every candidate.
    fn naive_improve(dm: &DistanceMatrix, mut tour: Tour) -> (Tour, f64) {
        let n = tour.len();
        let mut best_cost = dm.tour_cost(&tour);
        let mut improved = true;
        while improved {
            improved = false;
            'scan: for i in 1..n.saturating_sub(1) {
                for j in (i + 2)..n {
                    let mut candidate = tour.clone();
                    candidate[i..j].reverse();
                    let cost = dm.tour_cost(&candidate);
                    if cost < best_cost {
                        tour = candidate;
                        best_cost = cost;
                        improved = true;
                        break 'scan;
                    }
                }
            }
        }
        (tour, best_cost)
    }

    #[test]
    fn test_never_increases_cost() {
        let dm = random_instance(20, 5).expect("non-empty");
        let tour: Tour = (0..20).rev().collect();
        let before = dm.tour_cost(&tour);
        let (improved, cost) = TwoOptLocalSearch::improve(&dm, tour).expect("valid tour");
        assert!(cost <= before);
        assert_eq!(cost, dm.tour_cost(&improved));
        dm.validate_tour(&improved).expect("permutation");
    }

    #[test]
    fn test_result_is_local_optimum_and_idempotent() {
        let dm = random_instance(18, 12).expect("non-empty");
        let (tour, cost) = TwoOptLocalSearch::improve(&dm, (0..18).collect()).expect("valid tour");
        assert!(TwoOptLocalSearch::is_local_optimum(&dm, &tour));

        let (again, again_cost) = TwoOptLocalSearch::improve(&dm, tour.clone()).expect("valid tour");
        assert_eq!(again, tour);
        assert_eq!(again_cost, cost);
    }

    #[test]
    fn test_matches_full_recompute_scan() {
        for seed in 0..6 {
            let dm = random_instance(12, seed).expect("non-empty");
            let start: Tour = (0..12).collect();
            let expected = naive_improve(&dm, start.clone());
            let actual = TwoOptLocalSearch::improve(&dm, start).expect("valid tour");
            assert_eq!(actual, expected, "seed {seed}");
        }
    }

    #[test]
    fn test_asymmetric_matches_full_recompute_scan() {
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 9.0, 2.0, 8.0, 4.0, 7.0],
            vec![1.0, 0.0, 6.0, 3.0, 9.0, 2.0],
            vec![7.0, 3.0, 0.0, 5.0, 1.0, 8.0],
            vec![4.0, 8.0, 2.0, 0.0, 6.0, 3.0],
            vec![9.0, 1.0, 7.0, 2.0, 0.0, 5.0],
            vec![3.0, 6.0, 4.0, 9.0, 2.0, 0.0],
        ])
        .expect("valid");
        assert!(!dm.is_symmetric());
        let start: Tour = (0..6).collect();
        let expected = naive_improve(&dm, start.clone());
        let actual = TwoOptLocalSearch::improve(&dm, start).expect("valid tour");
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_small_tours_untouched() {
        let dm = random_instance(3, 2).expect("non-empty");
        let (tour, cost) = TwoOptLocalSearch::improve(&dm, vec![0, 2, 1]).expect("valid tour");
        assert_eq!(tour, vec![0, 2, 1]);
        assert_eq!(cost, dm.tour_cost(&[0, 2, 1]));

        let single = DistanceMatrix::from_rows(vec![vec![0.0]]).expect("valid");
        assert_eq!(
            TwoOptLocalSearch::improve(&single, vec![0]),
            Ok((vec![0], 0.0))
        );
    }

    #[test]
    fn test_rejects_foreign_tour() {
        let dm = random_instance(5, 2).expect("non-empty");
        let err = TwoOptLocalSearch::improve(&dm, vec![0, 1, 2]).unwrap_err();
        assert!(matches!(err, TspError::InvalidTour { .. }));
    }
}
