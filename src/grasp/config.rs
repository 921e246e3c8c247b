//! GRASP configuration.

use crate::error::{TspError, TspResult};
use crate::telemetry::InfoLogger;
use std::fmt;

/// Configuration for the GRASP solver.
///
/// # Examples
///
/// ```
/// use u_tsp::GraspConfig;
///
/// let config = GraspConfig::default()
///     .with_max_iterations(200)
///     .with_alpha(0.2)
///     .with_seed(42);
/// assert_eq!(config.max_iterations, 200);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraspConfig {
    /// Number of construct + local-search restarts. Must be positive.
    pub max_iterations: usize,

    /// Greediness of construction in `[0, 1]`.
    ///
    /// `0` builds the nearest-neighbor tour, `1` picks uniformly among all
    /// unvisited cities.
    pub alpha: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Whether to run restarts on the rayon pool.
    ///
    /// Only honored with the `parallel` cargo feature; otherwise restarts
    /// run sequentially.
    pub parallel: bool,

    /// Receives one line per new best tour.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub logger: Option<InfoLogger>,
}

impl Default for GraspConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            alpha: 0.3,
            seed: None,
            parallel: false,
            logger: None,
        }
    }
}

impl fmt::Debug for GraspConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraspConfig")
            .field("max_iterations", &self.max_iterations)
            .field("alpha", &self.alpha)
            .field("seed", &self.seed)
            .field("parallel", &self.parallel)
            .field("logger", &self.logger.is_some())
            .finish()
    }
}

impl GraspConfig {
    /// Sets the number of restarts.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the RCL greediness parameter.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel restarts.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Attaches a progress logger.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> TspResult<()> {
        if self.max_iterations == 0 {
            return Err(TspError::config("max_iterations must be positive"));
        }
        validate_alpha(self.alpha)
    }
}

pub(crate) fn validate_alpha(alpha: f64) -> TspResult<()> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(TspError::config(format!(
            "alpha must be in [0, 1], got {alpha}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GraspConfig::default();
        assert_eq!(config.max_iterations, 50);
        assert!((config.alpha - 0.3).abs() < 1e-12);
        assert!(config.seed.is_none());
        assert!(!config.parallel);
    }

    #[test]
    fn test_validate_ok() {
        assert!(GraspConfig::default().validate().is_ok());
        assert!(GraspConfig::default().with_alpha(0.0).validate().is_ok());
        assert!(GraspConfig::default().with_alpha(1.0).validate().is_ok());
    }

    #[test]
    fn test_validate_zero_iterations() {
        let config = GraspConfig::default().with_max_iterations(0);
        assert!(matches!(
            config.validate(),
            Err(TspError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_validate_bad_alpha() {
        assert!(GraspConfig::default().with_alpha(-0.1).validate().is_err());
        assert!(GraspConfig::default().with_alpha(1.5).validate().is_err());
        assert!(GraspConfig::default().with_alpha(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_debug_hides_logger() {
        let config = GraspConfig::default().with_logger(std::sync::Arc::new(|_: &str| {}));
        let text = format!("{config:?}");
        assert!(text.contains("logger: true"));
    }
}
