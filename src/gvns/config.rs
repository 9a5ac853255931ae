//! GVNS configuration.

/// Configuration parameters for the GVNS driver.
///
/// # Examples
///
/// ```
/// use alwabp::gvns::GvnsConfig;
///
/// let config = GvnsConfig::default()
///     .with_max_iterations(200)
///     .with_k_max(3)
///     .with_seed(42);
/// assert_eq!(config.max_iterations, 200);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct GvnsConfig {
    /// Number of outer iterations (complete k = 1..k_max passes).
    pub max_iterations: usize,
    /// Number of shaking neighborhoods. Indices above 3 degenerate to the
    /// task-reassignment move.
    pub k_max: usize,
    /// Bounded retries of the constructive heuristic with a fresh random
    /// worker permutation when construction comes back infeasible.
    /// 0 keeps the single-attempt reference behavior.
    pub construction_retries: usize,
    /// Random seed (None for the default seed).
    pub seed: Option<u64>,
}

impl Default for GvnsConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            k_max: 3,
            construction_retries: 0,
            seed: None,
        }
    }
}

impl GvnsConfig {
    /// Sets the number of outer iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the number of shaking neighborhoods.
    pub fn with_k_max(mut self, k: usize) -> Self {
        self.k_max = k;
        self
    }

    /// Sets the number of constructive retries on infeasible construction.
    pub fn with_construction_retries(mut self, n: usize) -> Self {
        self.construction_retries = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        if self.k_max == 0 {
            return Err("k_max must be at least 1".into());
        }
        Ok(())
    }
}
