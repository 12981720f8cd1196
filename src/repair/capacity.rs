//! Stage 3: capacity maximization.
//!
//! Runs only when the unused capacity is at least
//! [`RepairConfig::fill_slack_ratio`] of the total. It first adds
//! unselected items greedily by ratio, then looks for replacement moves
//! that swap one selected item for one or two unselected items so that
//! the load strictly grows (still within capacity) while the value does
//! not drop.

use super::config::RepairConfig;
use crate::greedy::greedy_fill;
use crate::instance::Instance;
use log::debug;

/// A replacement of one selected item by one or two unselected ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replacement {
    pub out: usize,
    pub first: usize,
    pub second: Option<usize>,
}

/// Raises capacity utilization without lowering the total value.
///
/// `selection` must be feasible and exactly `instance.len()` long.
/// Returns the number of moves applied (additions plus replacements).
pub fn maximize_capacity(
    instance: &Instance,
    selection: &mut [bool],
    config: &RepairConfig,
) -> usize {
    let capacity = instance.capacity();
    let slack = capacity - instance.selection_weight(selection);
    if slack < config.fill_slack_ratio * capacity {
        return 0;
    }

    let mut moves = greedy_fill(instance, selection).len();
    let mut replacements = 0;
    while replacements < config.utilization_iteration_cap {
        let Some(mv) = first_utilization_move(instance, selection) else {
            break;
        };
        apply(selection, mv);
        replacements += 1;
        // The item just swapped out may fit again in the remaining room.
        let refilled = greedy_fill(instance, selection).len();
        moves += 1 + refilled;
        debug!(
            "capacity: {:?}, +{refilled} refill, weight {:.3}/{:.3}",
            mv,
            instance.selection_weight(selection),
            capacity
        );
    }
    moves
}

fn apply(selection: &mut [bool], mv: Replacement) {
    selection[mv.out] = false;
    selection[mv.first] = true;
    if let Some(second) = mv.second {
        selection[second] = true;
    }
}

/// First replacement in scan order: selected items ascending; for each,
/// single unselected items ascending, then unselected pairs
/// lexicographically.
fn first_utilization_move(instance: &Instance, selection: &[bool]) -> Option<Replacement> {
    let weights = instance.weights();
    let values = instance.values();
    let n = instance.len();
    let unselected: Vec<usize> = (0..n).filter(|&j| !selection[j]).collect();

    let accepts = |out: usize, added: &[usize]| {
        let added_weight: f64 = added.iter().map(|&j| weights[j]).sum();
        let added_value: f64 = added.iter().map(|&j| values[j]).sum();
        added_weight > weights[out]
            && added_value >= values[out]
            && instance.edit_fits(selection, &[out], added)
    };

    for out in (0..n).filter(|&i| selection[i]) {
        for &first in &unselected {
            if accepts(out, &[first]) {
                return Some(Replacement {
                    out,
                    first,
                    second: None,
                });
            }
        }
        for (a, &first) in unselected.iter().enumerate() {
            for &second in &unselected[a + 1..] {
                if accepts(out, &[first, second]) {
                    return Some(Replacement {
                        out,
                        first,
                        second: Some(second),
                    });
                }
            }
        }
    }
    None
}
