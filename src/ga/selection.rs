//! Parent selection.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Chromosome;
use rand::seq::index;
use rand::Rng;

/// Tournament selection without replacement.
///
/// Draws `k` distinct individuals uniformly and returns the index of the
/// fittest (highest fitness). Ties go to the first one drawn. `k` is
/// clamped to `[1, population.len()]`.
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<R: Rng>(population: &[Chromosome], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    let n = population.len();
    let k = k.clamp(1, n);

    let mut best_idx = usize::MAX;
    for idx in index::sample(rng, n, k).iter() {
        if best_idx == usize::MAX || population[idx].fitness > population[best_idx].fitness {
            best_idx = idx;
        }
    }
    best_idx
}
