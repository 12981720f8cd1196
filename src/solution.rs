//! Solver output and strategy keys.

use crate::error::{KnapsackError, Result};
use crate::instance::{Instance, Item};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// The result of one solver invocation.
///
/// Totals are always recomputed from `selection`, and `is_feasible` is
/// derived as `total_weight <= capacity`, so the flag can never disagree
/// with the reported weight.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Selected item indices. Order reflects how the solver chose them.
    pub selected_items: Vec<usize>,
    pub total_value: f64,
    pub total_weight: f64,
    pub is_feasible: bool,
    /// One `0`/`1` entry per item.
    pub selection: Vec<u8>,
    /// Wall-clock solve time in seconds.
    pub solve_time: f64,
}

impl Solution {
    /// Builds a solution from a selected-index list in solver order.
    ///
    /// Out-of-range and duplicate indices are dropped.
    pub fn from_items(
        instance: &Instance,
        selected_items: Vec<usize>,
        elapsed: Duration,
    ) -> Self {
        let n = instance.len();
        let mut bits = vec![false; n];
        let mut kept = Vec::with_capacity(selected_items.len());
        for idx in selected_items {
            if idx >= n || bits[idx] {
                continue;
            }
            bits[idx] = true;
            kept.push(idx);
        }
        // Index-order sums, independent of listing order.
        let total_weight = instance.selection_weight(&bits);
        let total_value = instance.selection_value(&bits);
        let selection = bits.iter().map(|&on| u8::from(on)).collect();
        Self {
            selected_items: kept,
            total_value,
            total_weight,
            is_feasible: instance.fits(total_weight),
            selection,
            solve_time: elapsed.as_secs_f64(),
        }
    }

    /// Builds a solution from a boolean selection, listing items ascending.
    ///
    /// Entries beyond `instance.len()` are truncated.
    pub fn from_selection(instance: &Instance, selection: &[bool], elapsed: Duration) -> Self {
        let items = selection
            .iter()
            .take(instance.len())
            .enumerate()
            .filter(|(_, &on)| on)
            .map(|(i, _)| i)
            .collect();
        Self::from_items(instance, items, elapsed)
    }

    /// The selection as booleans.
    pub fn selection_bits(&self) -> Vec<bool> {
        self.selection.iter().map(|&b| b == 1).collect()
    }

    /// Selected items with their weights and values, in solver order.
    pub fn items<'a>(&'a self, instance: &'a Instance) -> impl Iterator<Item = Item> + 'a {
        self.selected_items.iter().map(move |&i| instance.item(i))
    }

    /// Selected indices in ascending order.
    pub fn sorted_items(&self) -> Vec<usize> {
        let mut items = self.selected_items.clone();
        items.sort_unstable();
        items
    }
}

/// Strategy requested by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Exact dynamic programming.
    Dp,
    /// Ratio-ordered greedy.
    Greedy,
    /// Genetic algorithm on its own.
    Ga,
    /// Predictor output fed through the repair pipeline (`ml` or `hybrid`).
    Hybrid,
    /// Every strategy above.
    All,
}

impl Strategy {
    /// The concrete strategies run by [`Strategy::All`], in run order.
    pub const CONCRETE: [Strategy; 4] = [
        Strategy::Dp,
        Strategy::Greedy,
        Strategy::Ga,
        Strategy::Hybrid,
    ];

    /// Key used for this strategy in result maps.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Dp => "dp",
            Strategy::Greedy => "greedy",
            Strategy::Ga => "ga",
            Strategy::Hybrid => "hybrid",
            Strategy::All => "all",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = KnapsackError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dp" => Ok(Strategy::Dp),
            "greedy" => Ok(Strategy::Greedy),
            "ga" | "genetic" => Ok(Strategy::Ga),
            "ml" | "hybrid" => Ok(Strategy::Hybrid),
            "all" => Ok(Strategy::All),
            other => Err(KnapsackError::UnknownStrategy(other.to_string())),
        }
    }
}
