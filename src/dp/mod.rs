//! Exact 0/1 knapsack solver by dynamic programming.
//!
//! Weights and capacity are scaled to integers, then the classic table
//! `dp[i][w]` (best value using the first `i` items within scaled capacity
//! `w`) is filled with
//!
//! ```text
//! dp[i][w] = max(dp[i-1][w], dp[i-1][w - weight[i]] + value[i])   if weight[i] <= w
//! dp[i][w] = dp[i-1][w]                                           otherwise
//! ```
//!
//! A parallel `keep[i][w]` table records whether item `i` was taken, and
//! the selected set is reconstructed by walking back from `(n, capacity)`.
//!
//! # Complexity
//!
//! O(n · capacity · scale) time and space. [`DpConfig::max_table_cells`]
//! bounds the table so oversized instances fail fast.
//!
//! # References
//!
//! - Bellman (1957), *Dynamic Programming*
//! - Kellerer, Pferschy & Pisinger (2004), *Knapsack Problems*, ch. 2

mod config;
mod solver;

pub use config::DpConfig;
pub use solver::DpSolver;
