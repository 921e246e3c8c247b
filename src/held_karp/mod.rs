//! Held-Karp exact solver.
//!
//! Bottom-up dynamic programming over subsets of visited cities. The
//! state `(S, j)` holds the cheapest path that leaves city 0, visits
//! exactly the cities in `S` and stops at `j`; the optimal tour closes the
//! cheapest full-set path back to city 0.
//!
//! Time is `O(n² · 2ⁿ)` and memory `O(n · 2ⁿ)`. Beyond roughly 22 cities
//! the table no longer fits in memory, so the solver refuses larger
//! instances with [`TspError::OutOfResources`](crate::TspError::OutOfResources)
//! instead of exhausting the host.
//!
//! # References
//!
//! - Held & Karp (1962), "A Dynamic Programming Approach to Sequencing Problems"
//! - Bellman (1962), "Dynamic Programming Treatment of the Travelling Salesman Problem"

mod runner;

pub use runner::{HeldKarpResult, HeldKarpSolver, DEFAULT_MAX_CITIES};
