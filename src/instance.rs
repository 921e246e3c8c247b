//! Synthetic instances from planar coordinates.
//!
//! Random instances place cities on an integer grid and truncate the
//! Euclidean distance toward zero, which keeps every cost integral and
//! makes solver comparisons exact.

use crate::matrix::DistanceMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A city location in the plane.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a point at `(x, y)`.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl DistanceMatrix {
    /// Euclidean distance matrix over `points`.
    ///
    /// Returns `None` when `points` is empty or a coordinate is not finite.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        Self::from_metric(points, |a, b| a.distance_to(b))
    }

    /// Euclidean distance matrix with every entry truncated toward zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::{DistanceMatrix, Point};
    ///
    /// let square = [
    ///     Point::new(0.0, 0.0),
    ///     Point::new(1.0, 0.0),
    ///     Point::new(1.0, 1.0),
    ///     Point::new(0.0, 1.0),
    /// ];
    /// let dm = DistanceMatrix::from_points_truncated(&square).unwrap();
    /// assert_eq!(dm.get(0, 2), 1.0); // trunc(sqrt(2))
    /// ```
    pub fn from_points_truncated(points: &[Point]) -> Option<Self> {
        Self::from_metric(points, |a, b| a.distance_to(b).trunc())
    }

    fn from_metric<F>(points: &[Point], metric: F) -> Option<Self>
    where
        F: Fn(&Point, &Point) -> f64,
    {
        let n = points.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = metric(&points[i], &points[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self::from_data(n, data).ok()
    }
}

/// Generates `n` integer-valued points in `[0, grid)²`.
///
/// The same `seed` always yields the same points.
pub fn random_points(n: usize, grid: u32, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let grid = grid.max(1);
    (0..n)
        .map(|_| {
            let x = rng.random_range(0..grid);
            let y = rng.random_range(0..grid);
            Point::new(f64::from(x), f64::from(y))
        })
        .collect()
}

/// A random `n`-city instance on a 100×100 grid with truncated distances.
///
/// Returns `None` for `n == 0`.
pub fn random_instance(n: usize, seed: u64) -> Option<DistanceMatrix> {
    DistanceMatrix::from_points_truncated(&random_points(n, 100, seed))
}

/// Percentage by which `cost` exceeds `optimum`.
///
/// Returns 0 when `optimum` is 0.
pub fn relative_gap(cost: f64, optimum: f64) -> f64 {
    if optimum == 0.0 {
        return 0.0;
    }
    (cost - optimum) / optimum * 100.0
}
