//! Repair and local-search pipeline for raw selection vectors.
//!
//! [`improve`] accepts any selection vector (from a predictor, the GA, or
//! built by hand), possibly longer than the item count, possibly
//! probabilistic, possibly over capacity, and turns it into a feasible,
//! locally improved [`Solution`](crate::Solution).
//!
//! # Stages
//!
//! 1. [`repair_feasibility`]: drop lowest-ratio items until the load fits
//! 2. [`swap_search`]: first-improvement 1-for-1 swaps that raise value
//! 3. [`maximize_capacity`]: greedy fill, then weight-raising replacements
//!    that keep the value
//!
//! Stages 2 and 3 repeat while stage 3 still changes the selection (up to
//! [`RepairConfig::max_rounds`]), so the output is a fixed point of both.
//!
//! # References
//!
//! - Chu & Beasley (1998), "A Genetic Algorithm for the Multidimensional
//!   Knapsack Problem" (ratio-based drop/add repair)
//! - Hoos & Stützle (2004), *Stochastic Local Search*, ch. 2

mod capacity;
mod config;
mod feasibility;
mod local_search;
mod pipeline;

pub use capacity::{maximize_capacity, Replacement};
pub use config::RepairConfig;
pub use feasibility::repair_feasibility;
pub use local_search::swap_search;
pub use pipeline::{binarize, improve};
