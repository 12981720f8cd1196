//! Stage sequencing.

use super::capacity::maximize_capacity;
use super::config::RepairConfig;
use super::feasibility::repair_feasibility;
use super::local_search::swap_search;
use crate::error::Result;
use crate::instance::Instance;
use crate::solution::Solution;
use log::debug;
use std::time::Instant;

/// Reads a raw vector as a selection of exactly `n` items.
///
/// Entries past `n` are discarded, missing entries count as unselected,
/// and an entry is selected when it is strictly above `threshold` (NaN
/// never is).
pub fn binarize(raw: &[f64], n: usize, threshold: f64) -> Vec<bool> {
    let mut selection: Vec<bool> = raw.iter().take(n).map(|&x| x > threshold).collect();
    selection.resize(n, false);
    selection
}

/// Turns a raw selection into a feasible, locally improved solution.
///
/// Fails only if `config` does not validate.
///
/// # Examples
///
/// ```
/// use u_knapsack::{repair::{improve, RepairConfig}, Instance};
///
/// let inst = Instance::new(
///     vec![10.0, 20.0, 30.0, 40.0, 50.0],
///     vec![100.0, 150.0, 200.0, 250.0, 300.0],
///     100.0,
/// ).unwrap();
/// // Over capacity (150 > 100) and padded to a fixed width.
/// let raw = [1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 1.0];
/// let sol = improve(&raw, &inst, &RepairConfig::default()).unwrap();
/// assert_eq!(sol.selected_items, vec![0, 1, 2, 3]);
/// assert_eq!(sol.total_value, 700.0);
/// ```
pub fn improve(raw: &[f64], instance: &Instance, config: &RepairConfig) -> Result<Solution> {
    config.validate()?;
    let start = Instant::now();

    let mut selection = binarize(raw, instance.len(), config.threshold);
    let removed = repair_feasibility(instance, &mut selection);

    let mut rounds = 0;
    let mut swaps = 0;
    let mut fills = 0;
    loop {
        rounds += 1;
        swaps += swap_search(instance, &mut selection, config.swap_iteration_cap);
        let changed = maximize_capacity(instance, &mut selection, config);
        fills += changed;
        if changed == 0 || rounds >= config.max_rounds {
            break;
        }
    }

    let solution = Solution::from_selection(instance, &selection, start.elapsed());
    debug!(
        "improve: removed {}, {swaps} swap(s), {fills} fill move(s), {rounds} round(s); \
         value {:.3}, weight {:.3}/{:.3}",
        removed.len(),
        solution.total_value,
        solution.total_weight,
        instance.capacity()
    );
    Ok(solution)
}
