//! Harness configuration.
//!
//! [`EvolveConfig`] holds all parameters that control the generation loop.

use super::error::EvolveError;

/// Configuration for the evolutionary search.
///
/// # Defaults
///
/// ```
/// use evo_harness::evolve::EvolveConfig;
///
/// let config = EvolveConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.survivor_count, 5);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use evo_harness::evolve::EvolveConfig;
///
/// let config = EvolveConfig::default()
///     .with_population_size(40)
///     .with_survivor_count(8)
///     .with_mutation_probability(0.7)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolveConfig {
    /// Number of genes in the population.
    ///
    /// The population is refilled to exactly this size at the end of every
    /// generation. Must be at least 1.
    pub population_size: usize,

    /// Number of highest-fitness genes carried over each generation
    /// (elitist truncation). Must satisfy `1 <= survivor_count <=
    /// population_size`.
    ///
    /// A value below 2 makes breeding impossible; see
    /// [`EvolveError::InsufficientSurvivors`].
    pub survivor_count: usize,

    /// Probability that a refill slot is produced by mutation rather than
    /// breeding (0.0–1.0).
    ///
    /// At 1.0 offspring are mutation-only; at 0.0 breeding-only.
    pub mutation_probability: f64,

    /// Whether to evaluate genes in parallel using rayon.
    ///
    /// Only effective with the `parallel` cargo feature; evaluation is the
    /// expected bottleneck, and it is the only parallelized step.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EvolveConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            survivor_count: 5,
            mutation_probability: 0.5,
            parallel: false,
            seed: None,
        }
    }
}

impl EvolveConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the survivor count.
    pub fn with_survivor_count(mut self, k: usize) -> Self {
        self.survivor_count = k;
        self
    }

    /// Sets the mutation probability, clamped to [0, 1].
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Called by [`Population::new`](super::Population::new) before any
    /// strategy is invoked.
    pub fn validate(&self) -> Result<(), EvolveError> {
        if self.population_size < 1 {
            return Err(EvolveError::Config(
                "population_size must be at least 1".into(),
            ));
        }
        if self.survivor_count < 1 {
            return Err(EvolveError::Config("survivor_count must be at least 1".into()));
        }
        if self.survivor_count > self.population_size {
            return Err(EvolveError::Config(format!(
                "survivor_count ({}) exceeds population_size ({})",
                self.survivor_count, self.population_size
            )));
        }
        if !self.mutation_probability.is_finite()
            || !(0.0..=1.0).contains(&self.mutation_probability)
        {
            return Err(EvolveError::Config(format!(
                "mutation_probability must be within [0, 1], got {}",
                self.mutation_probability
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EvolveConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.survivor_count, 5);
        assert!((config.mutation_probability - 0.5).abs() < 1e-10);
        assert!(!config.parallel);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EvolveConfig::default()
            .with_population_size(40)
            .with_survivor_count(8)
            .with_mutation_probability(0.7)
            .with_parallel(true)
            .with_seed(42);

        assert_eq!(config.population_size, 40);
        assert_eq!(config.survivor_count, 8);
        assert!((config.mutation_probability - 0.7).abs() < 1e-10);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_clamp_probability() {
        let config = EvolveConfig::default().with_mutation_probability(1.5);
        assert!((config.mutation_probability - 1.0).abs() < 1e-10);

        let config = EvolveConfig::default().with_mutation_probability(-0.5);
        assert!(config.mutation_probability.abs() < 1e-10);
    }

    #[test]
    fn test_validate_zero_population() {
        let config = EvolveConfig::default().with_population_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_survivors() {
        let config = EvolveConfig::default().with_survivor_count(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_survivors_exceed_population() {
        let config = EvolveConfig::default()
            .with_population_size(3)
            .with_survivor_count(5);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("survivor_count (5)"));
    }

    #[test]
    fn test_validate_nan_probability() {
        let mut config = EvolveConfig::default();
        config.mutation_probability = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_survivors_equal_population() {
        // K == N leaves zero refill slots, which is legal.
        let config = EvolveConfig::default()
            .with_population_size(5)
            .with_survivor_count(5);
        assert!(config.validate().is_ok());
    }
}
