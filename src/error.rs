//! Error types for u-tsp.
//!
//! Every fallible operation returns [`TspResult`]. Solvers fail fast on
//! malformed input and never hand back partial results.

use thiserror::Error;

/// Result type alias for u-tsp operations.
pub type TspResult<T> = Result<T, TspError>;

/// Unified error type for all u-tsp operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    // ===== Invalid input =====
    /// The distance matrix has no cities.
    #[error("distance matrix is empty")]
    EmptyMatrix,

    /// A row of the distance matrix has the wrong length.
    #[error("distance matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
        /// Expected row length (number of rows).
        expected: usize,
    },

    /// A distance is negative, NaN or infinite.
    #[error("invalid distance {value} from city {from} to city {to}")]
    InvalidDistance {
        /// Origin city.
        from: usize,
        /// Destination city.
        to: usize,
        /// The rejected value.
        value: f64,
    },

    /// A tour is not a permutation of the matrix's cities.
    #[error("invalid tour: {reason}")]
    InvalidTour {
        /// What is wrong with the tour.
        reason: String,
    },

    // ===== Configuration =====
    /// A configuration parameter is outside its domain.
    #[error("configuration error: {message}")]
    InvalidConfig {
        /// Description of the configuration error.
        message: String,
    },

    // ===== Resources =====
    /// The exact solver cannot hold its table for this many cities.
    #[error("out of resources: {cities} cities exceed the exact solver limit of {limit}")]
    OutOfResources {
        /// Number of cities requested.
        cities: usize,
        /// Largest number of cities the solver accepts.
        limit: usize,
    },
}

impl TspError {
    /// Returns `true` for errors caused by a malformed matrix or tour.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            TspError::EmptyMatrix
                | TspError::NotSquare { .. }
                | TspError::InvalidDistance { .. }
                | TspError::InvalidTour { .. }
        )
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        TspError::InvalidConfig {
            message: message.into(),
        }
    }

    pub(crate) fn tour(reason: impl Into<String>) -> Self {
        TspError::InvalidTour {
            reason: reason.into(),
        }
    }
}
