//! Greedy Randomized Adaptive Search Procedure (GRASP) for the TSP.
//!
//! Each restart builds a tour with a randomized greedy rule (restricted
//! candidate list controlled by `alpha`) and polishes it with
//! first-improvement 2-opt. The cheapest local optimum across restarts is
//! returned.
//!
//! # References
//!
//! - Feo & Resende (1995), "Greedy Randomized Adaptive Search Procedures"
//! - Croes (1958), "A Method for Solving Traveling-Salesman Problems"

mod config;
mod construct;
mod local_search;
mod runner;

pub use config::GraspConfig;
pub use construct::RandomizedGreedyConstructor;
pub use local_search::TwoOptLocalSearch;
pub use runner::{GraspResult, GraspSolver};
