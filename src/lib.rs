//! 0/1 knapsack solving engine.
//!
//! Given item weights, item values and a capacity, selects a subset of
//! items maximizing total value without exceeding the capacity. Four
//! strategies are provided behind one [`KnapsackSolver`] seam:
//!
//! - **DP** ([`dp`]): exact dynamic programming over integer-scaled
//!   weights, with a configurable table-size ceiling.
//! - **Greedy** ([`greedy`]): value/weight ratio ordering, no backtracking.
//! - **Genetic Algorithm** ([`ga`]): binary-encoded GA with tournament
//!   selection, single-point crossover, bit-flip mutation and elitism.
//!   Seedable for reproducible runs.
//! - **Hybrid** ([`hybrid`]): a raw selection from a [`hybrid::Predictor`]
//!   (or greedy, as fallback) fed through the [`repair`] pipeline of
//!   feasibility repair, 1-for-1 swap search and capacity maximization.
//!
//! The [`Orchestrator`] runs a requested [`Strategy`] (or all of them) and
//! returns the solutions keyed by strategy.
//!
//! # Quick Start
//!
//! ```
//! use u_knapsack::{dp::DpSolver, Instance, KnapsackSolver};
//!
//! let inst = Instance::new(
//!     vec![10.0, 20.0, 30.0, 40.0, 50.0],
//!     vec![100.0, 150.0, 200.0, 250.0, 300.0],
//!     100.0,
//! ).unwrap();
//! let solver: &dyn KnapsackSolver = &DpSolver::default();
//! let sol = solver.solve(&inst).unwrap();
//! assert_eq!(sol.total_value, 700.0);
//! assert!(sol.is_feasible);
//! ```
//!
//! # Features
//!
//! - `parallel`: rayon-based GA fitness evaluation
//! - `serde`: `Serialize`/`Deserialize` on configs, solutions and strategies
//!
//! Progress and fallbacks are reported through the `log` facade; install
//! any logger to see them.

pub mod dp;
pub mod error;
pub mod ga;
pub mod greedy;
pub mod hybrid;
pub mod instance;
pub mod orchestrator;
pub mod repair;
pub mod solution;
pub mod solver;

pub use error::{KnapsackError, Result};
pub use instance::{Instance, Item};
pub use orchestrator::{Orchestrator, SolverConfig};
pub use solution::{Solution, Strategy};
pub use solver::KnapsackSolver;
