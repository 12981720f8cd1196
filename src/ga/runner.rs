//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation →
//! elitism → repeat.

use super::config::GaConfig;
use super::operators::{bit_flip_mutation, single_point_crossover};
use super::selection::tournament;
use super::types::Chromosome;
use crate::error::Result;
use crate::instance::Instance;
use crate::solution::Solution;
use crate::solver::KnapsackSolver;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

/// Result of a GA optimization run.
#[derive(Debug, Clone, PartialEq)]
pub struct GaResult {
    /// Best selection seen in any generation.
    pub best_selection: Vec<bool>,

    /// Fitness of `best_selection` (its total value; it is always feasible).
    pub best_value: f64,

    /// Total weight of `best_selection`.
    pub best_weight: f64,

    /// Indices set in `best_selection`, ascending.
    pub selected_items: Vec<usize>,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best-ever fitness after initialization and after each generation.
    pub fitness_history: Vec<f64>,

    /// Best fitness within the final population alone.
    ///
    /// Never exceeds `best_value`; the two differ when the champion of an
    /// earlier generation was lost.
    pub final_generation_best: f64,

    /// Seed the run used, so an unseeded run can be replayed.
    pub seed: u64,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_knapsack::{ga::{GaConfig, GaRunner}, Instance};
///
/// let inst = Instance::new(vec![10.0, 20.0, 30.0], vec![60.0, 100.0, 120.0], 50.0).unwrap();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&inst, &config).unwrap();
/// assert!(result.best_weight <= 50.0);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA on `instance`.
    ///
    /// Fails only if `config` does not validate.
    pub fn run(instance: &Instance, config: &GaConfig) -> Result<GaResult> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let n = instance.len();
        let size = config.population_size;
        debug!(
            "ga: seed {seed}, population {size}, {} generations, {n} items",
            config.generations
        );

        // 1. Initialize population
        let mut population: Vec<Chromosome> =
            (0..size).map(|_| Chromosome::random(n, &mut rng)).collect();

        // 2. Evaluate initial population
        evaluate_population(instance, &mut population, config.parallel);

        // 3. Track best. The empty selection is a feasible baseline, so the
        //    reported champion is feasible even if no individual ever is.
        let mut best = Chromosome::empty(n);
        best.evaluate(instance);
        update_best(&mut best, &population, 0);
        let mut fitness_history = Vec::with_capacity(config.generations + 1);
        fitness_history.push(best.fitness);

        // 4. Evolutionary loop
        for gen in 0..config.generations {
            // Selection
            let parents: Vec<usize> = (0..size)
                .map(|_| tournament(&population, config.tournament_size, &mut rng))
                .collect();

            // Crossover on consecutive pairs; an odd last parent is copied
            let mut offspring: Vec<Chromosome> = Vec::with_capacity(size);
            for pair in parents.chunks(2) {
                match *pair {
                    [a, b] => {
                        let (c1, c2) = single_point_crossover(
                            &population[a].genes,
                            &population[b].genes,
                            &mut rng,
                        );
                        offspring.push(Chromosome::new(c1));
                        offspring.push(Chromosome::new(c2));
                    }
                    [a] => offspring.push(Chromosome::new(population[a].genes.clone())),
                    _ => unreachable!("chunks(2) yields one or two parents"),
                }
            }

            // Mutation
            for child in &mut offspring {
                bit_flip_mutation(&mut child.genes, config.mutation_rate, &mut rng);
            }
            evaluate_population(instance, &mut offspring, config.parallel);

            // Elitism
            let elites = elites(&population, config.elite_size);
            population = next_generation(offspring, elites, size, config.preserve_elites);

            update_best(&mut best, &population, gen + 1);
            fitness_history.push(best.fitness);
        }

        let final_generation_best = find_best(&population).fitness;
        info!(
            "ga: best value {:.3} (final generation {:.3}), weight {:.3}/{:.3}",
            best.fitness,
            final_generation_best,
            best.weight,
            instance.capacity()
        );

        Ok(GaResult {
            selected_items: best.selected_items(),
            best_value: best.fitness,
            best_weight: best.weight,
            best_selection: best.genes,
            generations: config.generations,
            fitness_history,
            final_generation_best,
            seed,
        })
    }
}

/// [`KnapsackSolver`] adapter around [`GaRunner`].
#[derive(Debug, Clone, Default)]
pub struct GaSolver {
    config: GaConfig,
}

impl GaSolver {
    pub fn new(config: GaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }
}

impl KnapsackSolver for GaSolver {
    fn name(&self) -> &'static str {
        "ga"
    }

    fn solve(&self, instance: &Instance) -> Result<Solution> {
        let start = Instant::now();
        let result = GaRunner::run(instance, &self.config)?;
        Ok(Solution::from_selection(
            instance,
            &result.best_selection,
            start.elapsed(),
        ))
    }
}

/// Evaluate all individuals in the population.
#[cfg(feature = "parallel")]
fn evaluate_population(instance: &Instance, population: &mut [Chromosome], parallel: bool) {
    use rayon::prelude::*;

    if parallel {
        population
            .par_iter_mut()
            .for_each(|ind| ind.evaluate(instance));
    } else {
        for ind in population.iter_mut() {
            ind.evaluate(instance);
        }
    }
}

/// Evaluate all individuals in the population.
#[cfg(not(feature = "parallel"))]
fn evaluate_population(instance: &Instance, population: &mut [Chromosome], _parallel: bool) {
    for ind in population.iter_mut() {
        ind.evaluate(instance);
    }
}

/// Replaces `best` with the population champion if strictly fitter.
fn update_best(best: &mut Chromosome, population: &[Chromosome], generation: usize) {
    let champion = find_best(population);
    if champion.fitness > best.fitness {
        debug!(
            "ga: generation {generation} improved best {:.3} -> {:.3}",
            best.fitness, champion.fitness
        );
        *best = champion.clone();
    }
}

/// Find the individual with the highest fitness (first on ties).
///
/// # Panics
/// Panics if `population` is empty.
fn find_best(population: &[Chromosome]) -> &Chromosome {
    let mut best = &population[0];
    for ind in &population[1..] {
        if ind.fitness > best.fitness {
            best = ind;
        }
    }
    best
}

/// Offspring followed by elites, cut back to `size`.
///
/// With `preserve_elites` the offspring are cut first so every elite
/// survives.
fn next_generation(
    mut offspring: Vec<Chromosome>,
    elites: Vec<Chromosome>,
    size: usize,
    preserve_elites: bool,
) -> Vec<Chromosome> {
    if preserve_elites {
        offspring.truncate(size.saturating_sub(elites.len()));
    }
    offspring.extend(elites);
    offspring.truncate(size);
    offspring
}

/// The `count` fittest individuals, best first.
fn elites(population: &[Chromosome], count: usize) -> Vec<Chromosome> {
    let mut order: Vec<usize> = (0..population.len()).collect();
    order.sort_by(|&a, &b| population[b].fitness.total_cmp(&population[a].fitness));
    order
        .into_iter()
        .take(count)
        .map(|i| population[i].clone())
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
