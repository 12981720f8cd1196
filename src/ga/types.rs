//! Binary chromosome representation.

use crate::instance::Instance;
use rand::Rng;

/// A candidate selection in the GA population.
///
/// `fitness` and `weight` are caches filled by [`evaluate`](Self::evaluate);
/// freshly built or mutated chromosomes must be re-evaluated before they
/// take part in selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome {
    /// One bit per item.
    pub genes: Vec<bool>,
    /// Total value if the load fits, `0.0` otherwise.
    pub fitness: f64,
    /// Total weight of the selected items.
    pub weight: f64,
}

impl Chromosome {
    /// Wraps `genes` with zeroed caches.
    pub fn new(genes: Vec<bool>) -> Self {
        Self {
            genes,
            fitness: 0.0,
            weight: 0.0,
        }
    }

    /// The all-zero selection. Always feasible.
    pub fn empty(n: usize) -> Self {
        Self::new(vec![false; n])
    }

    /// Draws each bit uniformly from {0, 1}.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        Self::new((0..n).map(|_| rng.random_bool(0.5)).collect())
    }

    /// Recomputes `weight` and `fitness` against `instance`.
    pub fn evaluate(&mut self, instance: &Instance) {
        self.weight = instance.selection_weight(&self.genes);
        self.fitness = if instance.fits(self.weight) {
            instance.selection_value(&self.genes)
        } else {
            0.0
        };
    }

    pub fn is_feasible(&self, instance: &Instance) -> bool {
        instance.fits(self.weight)
    }

    /// Indices of set bits, ascending.
    pub fn selected_items(&self) -> Vec<usize> {
        self.genes
            .iter()
            .enumerate()
            .filter(|(_, &on)| on)
            .map(|(i, _)| i)
            .collect()
    }
}
