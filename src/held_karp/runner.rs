//! Held-Karp table construction and tour recovery.

use crate::error::{TspError, TspResult};
use crate::matrix::{DistanceMatrix, Tour};
use crate::telemetry::{log_info, InfoLogger};
use std::fmt;

/// Default bound on the number of cities the exact solver accepts.
pub const DEFAULT_MAX_CITIES: usize = 22;

/// Parent marker for paths that come straight from city 0.
const FROM_START: u8 = u8::MAX;

/// Result of an exact solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeldKarpResult {
    /// Optimal tour cost.
    pub cost: f64,

    /// An optimal tour starting at city 0.
    pub tour: Tour,
}

/// Exact TSP solver.
///
/// # Examples
///
/// ```
/// use u_tsp::{DistanceMatrix, HeldKarpSolver};
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 10.0, 15.0, 20.0],
///     vec![10.0, 0.0, 35.0, 25.0],
///     vec![15.0, 35.0, 0.0, 30.0],
///     vec![20.0, 25.0, 30.0, 0.0],
/// ])
/// .unwrap();
///
/// let cost = HeldKarpSolver::new().solve(&dm).unwrap();
/// assert_eq!(cost, 80.0);
/// ```
#[derive(Clone)]
pub struct HeldKarpSolver {
    max_cities: usize,
    logger: Option<InfoLogger>,
}

impl Default for HeldKarpSolver {
    fn default() -> Self {
        Self {
            max_cities: DEFAULT_MAX_CITIES,
            logger: None,
        }
    }
}

impl fmt::Debug for HeldKarpSolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeldKarpSolver")
            .field("max_cities", &self.max_cities)
            .field("logger", &self.logger.is_some())
            .finish()
    }
}

impl HeldKarpSolver {
    /// Creates a solver with [`DEFAULT_MAX_CITIES`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the largest instance the solver will attempt.
    pub fn with_max_cities(mut self, n: usize) -> Self {
        self.max_cities = n;
        self
    }

    /// Attaches a progress logger.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Largest instance the solver will attempt.
    pub fn max_cities(&self) -> usize {
        self.max_cities
    }

    /// Returns the optimal tour cost. Instances with one city cost 0.
    pub fn solve(&self, matrix: &DistanceMatrix) -> TspResult<f64> {
        self.run(matrix, false).map(|result| result.cost)
    }

    /// Returns the optimal tour cost together with one optimal tour.
    ///
    /// Costs an extra byte per table cell for the parent pointers.
    pub fn solve_with_tour(&self, matrix: &DistanceMatrix) -> TspResult<HeldKarpResult> {
        self.run(matrix, true)
    }

    fn run(&self, matrix: &DistanceMatrix, track_tour: bool) -> TspResult<HeldKarpResult> {
        if self.max_cities == 0 {
            return Err(TspError::config("max_cities must be at least 1"));
        }

        let n = matrix.size();
        if n <= 1 {
            return Ok(HeldKarpResult {
                cost: 0.0,
                tour: (0..n).collect(),
            });
        }

        // City 0 is in every state, so subsets range over cities 1..n only:
        // bit b of a subset stands for city b + 1.
        let m = n - 1;
        let limit = self.max_cities.min(usize::BITS as usize);
        let out_of_resources = || TspError::OutOfResources { cities: n, limit };
        if n > limit {
            return Err(out_of_resources());
        }
        let subsets = 1usize << m;
        let cells = subsets.checked_mul(m).ok_or_else(out_of_resources)?;

        let mut dp = alloc_table(cells, f64::INFINITY).ok_or_else(out_of_resources)?;
        let mut parent = if track_tour {
            alloc_table(cells, FROM_START).ok_or_else(out_of_resources)?
        } else {
            Vec::new()
        };

        for j in 0..m {
            dp[(1 << j) * m + j] = matrix.get(0, j + 1);
        }

        for set in 1..subsets {
            if set.count_ones() < 2 {
                continue;
            }
            let mut ends = set;
            while ends != 0 {
                let j = ends.trailing_zeros() as usize;
                ends &= ends - 1;

                let prev = set ^ (1 << j);
                let prev_row = &dp[prev * m..(prev + 1) * m];
                let mut best = f64::INFINITY;
                let mut best_k = FROM_START;
                let mut via = prev;
                while via != 0 {
                    let k = via.trailing_zeros() as usize;
                    via &= via - 1;
                    let cost = prev_row[k] + matrix.get(k + 1, j + 1);
                    if cost < best {
                        best = cost;
                        best_k = k as u8;
                    }
                }

                dp[set * m + j] = best;
                if track_tour {
                    parent[set * m + j] = best_k;
                }
            }
        }

        let full = subsets - 1;
        let mut cost = f64::INFINITY;
        let mut last = 0;
        for j in 0..m {
            let closed = dp[full * m + j] + matrix.get(j + 1, 0);
            if closed < cost {
                cost = closed;
                last = j;
            }
        }

        let tour = if track_tour {
            recover_tour(&parent, m, full, last)
        } else {
            Vec::new()
        };

        log_info(self.logger.as_ref(), || {
            format!("held-karp: n={n} states={cells} optimal cost={cost}")
        });

        Ok(HeldKarpResult { cost, tour })
    }
}

/// Allocates a table, reporting `None` instead of aborting when the
/// allocator refuses the request.
fn alloc_table<T: Copy>(cells: usize, fill: T) -> Option<Vec<T>> {
    let mut table = Vec::new();
    table.try_reserve_exact(cells).ok()?;
    table.resize(cells, fill);
    Some(table)
}

/// Walks parent pointers back from `(full, last)` to city 0.
fn recover_tour(parent: &[u8], m: usize, full: usize, last: usize) -> Tour {
    let mut tour = Vec::with_capacity(m + 1);
    let mut set = full;
    let mut j = last;
    loop {
        tour.push(j + 1);
        let p = parent[set * m + j];
        set ^= 1 << j;
        if p == FROM_START {
            break;
        }
        j = p as usize;
    }
    tour.push(0);
    tour.reverse();
    tour
}
