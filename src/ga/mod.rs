//! Genetic Algorithm for the 0/1 knapsack.
//!
//! A binary-encoded GA: each [`Chromosome`] holds one bit per item, and
//! its fitness is the total value when the load fits, `0` otherwise, so
//! infeasible individuals never win a tournament against a feasible one.
//!
//! # Generation loop
//!
//! 1. Tournament selection builds a parent pool of `population_size`
//! 2. Consecutive parents are paired for single-point crossover
//! 3. Every offspring bit flips with probability `mutation_rate`
//! 4. The `elite_size` fittest individuals of the current generation are
//!    appended after the offspring and the list is cut back to
//!    `population_size` (elites survive only with
//!    [`GaConfig::preserve_elites`])
//!
//! The best individual seen in any generation is tracked and returned.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, generations, presets)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best selection found with run statistics
//! - [`GaSolver`]: [`KnapsackSolver`](crate::KnapsackSolver) adapter
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Chu & Beasley (1998), "A Genetic Algorithm for the Multidimensional Knapsack Problem"

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner, GaSolver};
pub use selection::tournament;
pub use types::Chromosome;
