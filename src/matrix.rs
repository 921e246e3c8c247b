//! Dense distance matrix and tour helpers.

use crate::error::{TspError, TspResult};

/// A tour: a permutation of `0..n`, implicitly closed back to its first city.
pub type Tour = Vec<usize>;

/// A dense n×n distance matrix stored in row-major order.
///
/// Construction rejects empty, ragged, negative and non-finite input.
/// Symmetry and a zero diagonal are the caller's responsibility; symmetry
/// is detected once here so the local search can pick its move evaluator.
///
/// # Examples
///
/// ```
/// use u_tsp::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 2.0, 9.0],
///     vec![2.0, 0.0, 6.0],
///     vec![9.0, 6.0, 0.0],
/// ])
/// .expect("valid matrix");
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(1, 2), 6.0);
/// assert_eq!(dm.tour_cost(&[0, 1, 2]), 17.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
    symmetric: bool,
}

impl DistanceMatrix {
    /// Creates a matrix from an explicit list of rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> TspResult<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(TspError::EmptyMatrix);
        }
        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(TspError::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            data.extend(values);
        }
        Self::from_data(size, data)
    }

    /// Creates a matrix from `size * size` values in row-major order.
    pub fn from_data(size: usize, data: Vec<f64>) -> TspResult<Self> {
        if size == 0 {
            return Err(TspError::EmptyMatrix);
        }
        if data.len() != size * size {
            return Err(TspError::NotSquare {
                row: data.len() / size,
                len: data.len() % size,
                expected: size,
            });
        }
        if let Some(pos) = data.iter().position(|d| !d.is_finite() || *d < 0.0) {
            return Err(TspError::InvalidDistance {
                from: pos / size,
                to: pos % size,
                value: data[pos],
            });
        }

        let mut dm = Self {
            data,
            size,
            symmetric: false,
        };
        dm.symmetric = dm.check_symmetric();
        Ok(dm)
    }

    /// Returns the distance from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Distances from city `from` to every city.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Copies the matrix back into a list of rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.size).map(<[f64]>::to_vec).collect()
    }

    /// Returns `true` if `dist[i][j] == dist[j][i]` for every pair.
    pub fn is_symmetric(&self) -> bool {
        self.symmetric
    }

    fn check_symmetric(&self) -> bool {
        (0..self.size).all(|i| ((i + 1)..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Cyclic cost of a tour: consecutive edges plus the edge closing it.
    ///
    /// An empty tour costs 0.
    pub fn tour_cost(&self, tour: &[usize]) -> f64 {
        let (Some(&first), Some(&last)) = (tour.first(), tour.last()) else {
            return 0.0;
        };
        let open: f64 = tour.windows(2).map(|w| self.get(w[0], w[1])).sum();
        open + self.get(last, first)
    }

    /// Checks that `tour` visits every city of this matrix exactly once.
    pub fn validate_tour(&self, tour: &[usize]) -> TspResult<()> {
        if tour.len() != self.size {
            return Err(TspError::tour(format!(
                "tour has {} cities, matrix has {}",
                tour.len(),
                self.size
            )));
        }
        let mut seen = vec![false; self.size];
        for &city in tour {
            if city >= self.size {
                return Err(TspError::tour(format!("city {city} out of range")));
            }
            if seen[city] {
                return Err(TspError::tour(format!("city {city} visited twice")));
            }
            seen[city] = true;
        }
        Ok(())
    }
}

impl TryFrom<Vec<Vec<f64>>> for DistanceMatrix {
    type Error = TspError;

    fn try_from(rows: Vec<Vec<f64>>) -> TspResult<Self> {
        Self::from_rows(rows)
    }
}

impl From<DistanceMatrix> for Vec<Vec<f64>> {
    fn from(dm: DistanceMatrix) -> Self {
        dm.to_rows()
    }
}
