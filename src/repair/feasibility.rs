//! Stage 1: feasibility repair.

use crate::instance::Instance;
use log::debug;

/// Drops selected items, lowest value/weight ratio first, until the load
/// fits. Equal ratios are dropped in index order.
///
/// Returns the removed indices in removal order; empty when the selection
/// was already feasible. Always terminates, since removing every item
/// reaches weight 0. Entries beyond `instance.len()` are ignored.
pub fn repair_feasibility(instance: &Instance, selection: &mut [bool]) -> Vec<usize> {
    let mut weight = instance.selection_weight(selection);
    if instance.fits(weight) {
        return Vec::new();
    }

    let mut order: Vec<usize> = selection
        .iter()
        .take(instance.len())
        .enumerate()
        .filter(|(_, &on)| on)
        .map(|(i, _)| i)
        .collect();
    order.sort_by(|&a, &b| instance.ratio(a).total_cmp(&instance.ratio(b)));

    let weights = instance.weights();
    let mut removed = Vec::new();
    let mut order = order.into_iter();
    loop {
        if instance.fits(weight) {
            // Running total may have drifted; confirm with a fresh sum.
            weight = instance.selection_weight(selection);
            if instance.fits(weight) {
                break;
            }
        }
        let Some(idx) = order.next() else { break };
        selection[idx] = false;
        weight -= weights[idx];
        removed.push(idx);
    }

    debug!(
        "repair: removed {} item(s) {:?}, weight now {:.3}/{:.3}",
        removed.len(),
        removed,
        weight,
        instance.capacity()
    );
    removed
}
