//! Ratio-ordered greedy heuristic.
//!
//! Items are visited by value/weight ratio, highest first (ties keep index
//! order), and each is taken if it still fits. There is no backtracking,
//! so the result is feasible but not necessarily optimal.
//!
//! # Complexity
//! O(n log n)

use crate::error::Result;
use crate::instance::Instance;
use crate::solution::Solution;
use crate::solver::KnapsackSolver;
use log::info;
use std::time::Instant;

/// Greedy solver. Stateless.
///
/// # Examples
///
/// ```
/// use u_knapsack::{greedy::GreedySolver, Instance};
///
/// let inst = Instance::new(vec![10.0, 20.0, 30.0], vec![60.0, 100.0, 120.0], 50.0).unwrap();
/// let sol = GreedySolver.solve(&inst);
/// assert_eq!(sol.selected_items, vec![0, 1]);
/// assert_eq!(sol.total_value, 160.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySolver;

impl GreedySolver {
    /// Runs the greedy pass. Selected items are listed in the order taken.
    pub fn solve(&self, instance: &Instance) -> Solution {
        let start = Instant::now();
        let selected = greedy_fill(instance, &mut vec![false; instance.len()]);
        let solution = Solution::from_items(instance, selected, start.elapsed());
        info!(
            "greedy: value {:.3}, weight {:.3}/{:.3}",
            solution.total_value,
            solution.total_weight,
            instance.capacity()
        );
        solution
    }
}

impl KnapsackSolver for GreedySolver {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn solve(&self, instance: &Instance) -> Result<Solution> {
        Ok(GreedySolver::solve(self, instance))
    }
}

/// Adds unselected items to `selection` in descending ratio order while
/// they fit, returning the indices added.
///
/// Shared with the capacity-maximization stage of the repair pipeline.
pub(crate) fn greedy_fill(instance: &Instance, selection: &mut [bool]) -> Vec<usize> {
    let mut added = Vec::new();
    for idx in instance.indices_by_ratio_desc() {
        if !selection[idx] && instance.edit_fits(selection, &[], &[idx]) {
            selection[idx] = true;
            added.push(idx);
        }
    }
    added
}
