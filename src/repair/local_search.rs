//! Stage 2: 1-for-1 swap local search.
//!
//! First-improvement hill climbing: the scan visits selected items in
//! index order and, for each, unselected items in index order. The first
//! swap that keeps the load within capacity and strictly raises the total
//! value is applied, and the scan restarts from the beginning. The
//! tie-break decides which of several equal-value local optima is reached.

use crate::instance::Instance;
use log::debug;

/// Applies improving swaps until none remains or `max_swaps` is reached.
///
/// `selection` must be feasible and exactly `instance.len()` long.
/// Returns the number of swaps applied.
pub fn swap_search(instance: &Instance, selection: &mut [bool], max_swaps: usize) -> usize {
    let values = instance.values();
    let mut swaps = 0;

    while swaps < max_swaps {
        let Some((out, into)) = first_improving_swap(instance, selection) else {
            break;
        };
        selection[out] = false;
        selection[into] = true;
        let weight = instance.selection_weight(selection);
        swaps += 1;
        debug!(
            "swap: {out} -> {into} (+{:.3} value), weight {:.3}",
            values[into] - values[out],
            weight
        );
    }

    if swaps == max_swaps && max_swaps > 0 {
        debug!("swap: iteration cap {max_swaps} reached");
    }
    swaps
}

fn first_improving_swap(instance: &Instance, selection: &[bool]) -> Option<(usize, usize)> {
    let values = instance.values();
    let n = instance.len();

    for out in (0..n).filter(|&i| selection[i]) {
        for into in (0..n).filter(|&j| !selection[j]) {
            if values[into] > values[out] && instance.edit_fits(selection, &[out], &[into]) {
                return Some((out, into));
            }
        }
    }
    None
}
