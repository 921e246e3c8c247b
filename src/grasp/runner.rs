//! GRASP restart loop.

use super::config::GraspConfig;
use super::construct::RandomizedGreedyConstructor;
use super::local_search::TwoOptLocalSearch;
use crate::error::TspResult;
use crate::matrix::{DistanceMatrix, Tour};
use crate::telemetry::{log_info, InfoLogger};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of a GRASP run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraspResult {
    /// Best tour found, starting at city 0.
    pub best_tour: Tour,

    /// Cost of the best tour.
    pub best_cost: f64,

    /// Number of restarts executed.
    pub iterations: usize,

    /// Restart (0-based) that produced the best tour.
    pub best_iteration: usize,

    /// Best cost after each restart.
    pub cost_history: Vec<f64>,
}

/// Executes GRASP: randomized greedy construction followed by 2-opt,
/// repeated `max_iterations` times, keeping the cheapest local optimum.
///
/// No optimality guarantee: the result is never below the Held-Karp
/// optimum and more restarts only narrow the expected gap.
pub struct GraspSolver;

impl GraspSolver {
    /// Runs GRASP with an RNG seeded from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::{random_instance, GraspConfig, GraspSolver, HeldKarpSolver};
    ///
    /// let dm = random_instance(9, 1).unwrap();
    /// let config = GraspConfig::default().with_seed(42);
    /// let result = GraspSolver::solve(&dm, &config).unwrap();
    ///
    /// let optimum = HeldKarpSolver::new().solve(&dm).unwrap();
    /// assert!(result.best_cost >= optimum);
    /// assert_eq!(result.iterations, 50);
    /// ```
    pub fn solve(matrix: &DistanceMatrix, config: &GraspConfig) -> TspResult<GraspResult> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::solve_with_rng(matrix, config, &mut rng)
    }

    /// Runs GRASP drawing all randomness from `rng`. `config.seed` is ignored.
    pub fn solve_with_rng<R: Rng>(
        matrix: &DistanceMatrix,
        config: &GraspConfig,
        rng: &mut R,
    ) -> TspResult<GraspResult> {
        config.validate()?;

        #[cfg(feature = "parallel")]
        {
            if config.parallel {
                return solve_parallel(matrix, config, rng);
            }
        }

        let mut tracker = BestTracker::new(config.max_iterations);
        for iteration in 0..config.max_iterations {
            let tour = RandomizedGreedyConstructor::construct(matrix, config.alpha, rng)?;
            let (tour, cost) = TwoOptLocalSearch::improve(matrix, tour)?;
            tracker.offer(iteration, tour, cost, config.logger.as_ref());
        }

        Ok(tracker.finish())
    }
}

/// Runs every restart on its own RNG, seeded from `rng` in restart order.
#[cfg(feature = "parallel")]
fn solve_parallel<R: Rng>(
    matrix: &DistanceMatrix,
    config: &GraspConfig,
    rng: &mut R,
) -> TspResult<GraspResult> {
    use rayon::prelude::*;

    let seeds: Vec<u64> = (0..config.max_iterations).map(|_| rng.random()).collect();
    let alpha = config.alpha;
    let restarts = seeds
        .par_iter()
        .map(|&seed| {
            let mut local = StdRng::seed_from_u64(seed);
            let tour = RandomizedGreedyConstructor::construct(matrix, alpha, &mut local)?;
            TwoOptLocalSearch::improve(matrix, tour)
        })
        .collect::<TspResult<Vec<_>>>()?;

    let mut tracker = BestTracker::new(config.max_iterations);
    for (iteration, (tour, cost)) in restarts.into_iter().enumerate() {
        tracker.offer(iteration, tour, cost, config.logger.as_ref());
    }
    Ok(tracker.finish())
}

/// Keeps the earliest cheapest restart.
struct BestTracker {
    best_tour: Tour,
    best_cost: f64,
    best_iteration: usize,
    cost_history: Vec<f64>,
}

impl BestTracker {
    fn new(iterations: usize) -> Self {
        Self {
            best_tour: Vec::new(),
            best_cost: f64::INFINITY,
            best_iteration: 0,
            cost_history: Vec::with_capacity(iterations),
        }
    }

    fn offer(&mut self, iteration: usize, tour: Tour, cost: f64, logger: Option<&InfoLogger>) {
        if cost < self.best_cost {
            self.best_tour = tour;
            self.best_cost = cost;
            self.best_iteration = iteration;
            log_info(logger, || {
                format!("grasp: iteration {iteration} new best cost {cost}")
            });
        }
        self.cost_history.push(self.best_cost);
    }

    fn finish(self) -> GraspResult {
        GraspResult {
            iterations: self.cost_history.len(),
            best_tour: self.best_tour,
            best_cost: self.best_cost,
            best_iteration: self.best_iteration,
            cost_history: self.cost_history,
        }
    }
}
