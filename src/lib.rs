//! Exact and metaheuristic solvers for the symmetric Traveling Salesman Problem.
//!
//! Two independent solvers work over an explicit [`DistanceMatrix`]:
//!
//! - **Held-Karp**: exact subset dynamic programming, `O(n² · 2ⁿ)` time
//!   and `O(n · 2ⁿ)` memory. Practical up to about 22 cities.
//! - **GRASP**: randomized greedy construction with a restricted
//!   candidate list, followed by first-improvement 2-opt, restarted a
//!   fixed number of times.
//!
//! Randomness is always an explicit, seedable input, so every GRASP run
//! can be reproduced exactly.
//!
//! # Example
//!
//! ```
//! use u_tsp::{random_instance, GraspConfig, GraspSolver, HeldKarpSolver};
//!
//! let dm = random_instance(10, 7).unwrap();
//! let optimum = HeldKarpSolver::new().solve(&dm).unwrap();
//! let grasp = GraspSolver::solve(&dm, &GraspConfig::default().with_seed(1)).unwrap();
//! assert!(grasp.best_cost >= optimum);
//! ```
//!
//! # Features
//!
//! - `parallel`: run GRASP restarts on the rayon thread pool.
//! - `serde`: (de)serialize matrices, points, configs and results.

pub mod error;
pub mod grasp;
pub mod held_karp;
pub mod instance;
pub mod matrix;
pub mod telemetry;

pub use error::{TspError, TspResult};
pub use grasp::{
    GraspConfig, GraspResult, GraspSolver, RandomizedGreedyConstructor, TwoOptLocalSearch,
};
pub use held_karp::{HeldKarpResult, HeldKarpSolver, DEFAULT_MAX_CITIES};
pub use instance::{random_instance, random_points, relative_gap, Point};
pub use matrix::{DistanceMatrix, Tour};
pub use telemetry::InfoLogger;
