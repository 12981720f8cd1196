//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{KnapsackError, Result};

/// Configuration for the Genetic Algorithm.
///
/// Controls population size, generation count, operator rates, elitism
/// and the random seed.
///
/// # Defaults
///
/// ```
/// use u_knapsack::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 100);
/// assert_eq!(config.tournament_size, 5);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_knapsack::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_elite_size(20)
///     .with_mutation_rate(0.02)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    ///
    /// Larger populations increase diversity but slow down each generation.
    pub population_size: usize,

    /// Number of generations to evolve. There is no early stopping.
    pub generations: usize,

    /// Per-bit flip probability applied to every offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of fittest individuals appended unchanged after the
    /// offspring. Must be smaller than `population_size`.
    pub elite_size: usize,

    /// Whether elites are guaranteed a place in the next generation.
    ///
    /// With `false` (the default) offspring and elites are concatenated in
    /// that order and cut back to `population_size`; since crossover yields
    /// a full population of offspring, the elites are cut. With `true`
    /// the offspring are cut instead, so the elites always survive.
    pub preserve_elites: bool,

    /// Individuals drawn (without replacement) per tournament.
    ///
    /// Clamped to the population size at selection time.
    pub tournament_size: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a fresh seed, reported back in
    /// [`GaResult::seed`](super::GaResult::seed).
    pub seed: Option<u64>,

    /// Whether to evaluate fitness in parallel using rayon.
    ///
    /// Only effective with the `parallel` feature. Results are identical
    /// either way.
    pub parallel: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 100,
            mutation_rate: 0.1,
            elite_size: 10,
            preserve_elites: false,
            tournament_size: 5,
            seed: None,
            parallel: true,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the per-bit mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the number of elites.
    pub fn with_elite_size(mut self, n: usize) -> Self {
        self.elite_size = n;
        self
    }

    /// Enables or disables guaranteed elite survival.
    pub fn with_preserve_elites(mut self, preserve: bool) -> Self {
        self.preserve_elites = preserve;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Preset for quick runs: population 50, 50 generations, 5 elites.
    pub fn fast() -> Self {
        Self {
            population_size: 50,
            generations: 50,
            elite_size: 5,
            ..Self::default()
        }
    }

    /// Preset matching the defaults: population 100, 100 generations.
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Preset for large instances: population 200, 300 generations,
    /// 20 elites, lower mutation.
    pub fn quality() -> Self {
        Self {
            population_size: 200,
            generations: 300,
            mutation_rate: 0.05,
            elite_size: 20,
            ..Self::default()
        }
    }

    /// Picks a preset by item count.
    ///
    /// - `n_items < 50` → [`fast()`](Self::fast)
    /// - `50 ≤ n_items < 200` → [`balanced()`](Self::balanced)
    /// - `n_items ≥ 200` → [`quality()`](Self::quality)
    pub fn auto_select(n_items: usize) -> Self {
        if n_items < 50 {
            Self::fast()
        } else if n_items < 200 {
            Self::balanced()
        } else {
            Self::quality()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(KnapsackError::InvalidConfig(
                "population_size must be at least 2".into(),
            ));
        }
        if self.generations == 0 {
            return Err(KnapsackError::InvalidConfig(
                "generations must be at least 1".into(),
            ));
        }
        if self.elite_size >= self.population_size {
            return Err(KnapsackError::InvalidConfig(
                "elite_size too high: elites fill entire population".into(),
            ));
        }
        if self.tournament_size == 0 {
            return Err(KnapsackError::InvalidConfig(
                "tournament_size must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(KnapsackError::InvalidConfig(
                "mutation_rate must lie in [0, 1]".into(),
            ));
        }
        Ok(())
    }
}
