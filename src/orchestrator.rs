//! Strategy dispatch.
//!
//! The [`Orchestrator`] maps a requested [`Strategy`] onto the configured
//! solvers and collects their solutions keyed by strategy. For
//! [`Strategy::All`] it also applies the size policy for the exact
//! solver: DP is skipped (with a warning) when the instance exceeds
//! [`SolverConfig::dp_item_limit`] or the DP table ceiling.

use crate::dp::{DpConfig, DpSolver};
use crate::error::{KnapsackError, Result};
use crate::ga::{GaConfig, GaSolver};
use crate::greedy::GreedySolver;
use crate::hybrid::{GaPredictor, HybridSolver, Predictor};
use crate::instance::Instance;
use crate::repair::RepairConfig;
use crate::solution::{Solution, Strategy};
use crate::solver::KnapsackSolver;
use log::{debug, warn};
use std::collections::BTreeMap;

/// Settings for every solver the orchestrator can run.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    pub dp: DpConfig,
    pub ga: GaConfig,
    pub repair: RepairConfig,
    /// Item count above which [`Strategy::All`] skips DP. `None` never skips
    /// by size.
    pub dp_item_limit: Option<usize>,
}

impl SolverConfig {
    pub fn with_dp(mut self, dp: DpConfig) -> Self {
        self.dp = dp;
        self
    }

    pub fn with_ga(mut self, ga: GaConfig) -> Self {
        self.ga = ga;
        self
    }

    pub fn with_repair(mut self, repair: RepairConfig) -> Self {
        self.repair = repair;
        self
    }

    pub fn with_dp_item_limit(mut self, limit: usize) -> Self {
        self.dp_item_limit = Some(limit);
        self
    }

    /// GA parameters sized for `n_items` via [`GaConfig::auto_select`].
    pub fn auto_select(n_items: usize) -> Self {
        Self::default().with_ga(GaConfig::auto_select(n_items))
    }

    pub fn validate(&self) -> Result<()> {
        self.dp.validate()?;
        self.ga.validate()?;
        self.repair.validate()
    }
}

/// Runs one or all strategies over an instance.
///
/// The hybrid strategy uses a [`GaPredictor`] built from the GA settings
/// unless another predictor is installed.
///
/// # Examples
///
/// ```
/// use u_knapsack::{Instance, Orchestrator, SolverConfig, Strategy};
/// use u_knapsack::ga::GaConfig;
///
/// let inst = Instance::new(
///     vec![10.0, 20.0, 30.0, 40.0, 50.0],
///     vec![100.0, 150.0, 200.0, 250.0, 300.0],
///     100.0,
/// ).unwrap();
/// let config = SolverConfig::default().with_ga(GaConfig::fast().with_seed(7));
/// let results = Orchestrator::new(config).solve(&inst, Strategy::All).unwrap();
///
/// assert_eq!(results.len(), 4);
/// assert_eq!(results[&Strategy::Dp].total_value, 700.0);
/// assert!(results.values().all(|s| s.is_feasible));
/// ```
pub struct Orchestrator {
    config: SolverConfig,
    dp: DpSolver,
    ga: GaSolver,
    hybrid: HybridSolver,
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

impl Orchestrator {
    pub fn new(config: SolverConfig) -> Self {
        let hybrid = HybridSolver::new()
            .with_predictor(GaPredictor::new(config.ga.clone()))
            .with_repair_config(config.repair.clone());
        Self {
            dp: DpSolver::new(config.dp.clone()),
            ga: GaSolver::new(config.ga.clone()),
            hybrid,
            config,
        }
    }

    /// Replaces the hybrid strategy's predictor.
    pub fn with_predictor<P: Predictor + 'static>(mut self, predictor: P) -> Self {
        self.hybrid = HybridSolver::new()
            .with_predictor(predictor)
            .with_repair_config(self.config.repair.clone());
        self
    }

    /// Removes the predictor, so the hybrid strategy repairs greedy output.
    pub fn without_predictor(mut self) -> Self {
        self.hybrid = HybridSolver::new().with_repair_config(self.config.repair.clone());
        self
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The solver behind a concrete strategy; `None` for [`Strategy::All`].
    pub fn solver(&self, strategy: Strategy) -> Option<&dyn KnapsackSolver> {
        match strategy {
            Strategy::Dp => Some(&self.dp),
            Strategy::Greedy => Some(&GreedySolver),
            Strategy::Ga => Some(&self.ga),
            Strategy::Hybrid => Some(&self.hybrid),
            Strategy::All => None,
        }
    }

    /// Runs `strategy` and returns each produced solution under its
    /// strategy key.
    ///
    /// A single strategy propagates every error. Under [`Strategy::All`],
    /// DP is skipped instead of failing when the instance is too large for
    /// it; other errors still propagate.
    pub fn solve(
        &self,
        instance: &Instance,
        strategy: Strategy,
    ) -> Result<BTreeMap<Strategy, Solution>> {
        self.config.validate()?;

        let run_all = strategy == Strategy::All;
        let strategies: &[Strategy] = if run_all {
            &Strategy::CONCRETE
        } else {
            std::slice::from_ref(&strategy)
        };

        let mut results = BTreeMap::new();
        for &s in strategies {
            let Some(solver) = self.solver(s) else {
                continue;
            };
            if run_all && s == Strategy::Dp {
                if let Some(limit) = self.config.dp_item_limit {
                    if instance.len() > limit {
                        warn!("dp skipped: {} items exceeds limit {limit}", instance.len());
                        continue;
                    }
                }
            }
            match solver.solve(instance) {
                Ok(solution) => {
                    debug!(
                        "{}: value {:.3} in {:.6}s",
                        solver.name(),
                        solution.total_value,
                        solution.solve_time
                    );
                    results.insert(s, solution);
                }
                Err(err @ KnapsackError::InstanceTooLarge { .. }) if run_all => {
                    warn!("dp skipped: {err}");
                }
                Err(err) => return Err(err),
            }
        }
        Ok(results)
    }
}

/// Validates raw inputs and runs `strategy` with default settings.
///
/// Invalid inputs are rejected before any solver runs.
///
/// ```
/// use u_knapsack::{orchestrator::solve, KnapsackError, Strategy};
///
/// let err = solve(vec![1.0, 2.0], vec![1.0], 5.0, Strategy::All).unwrap_err();
/// assert!(matches!(err, KnapsackError::LengthMismatch { .. }));
/// ```
pub fn solve(
    weights: Vec<f64>,
    values: Vec<f64>,
    capacity: f64,
    strategy: Strategy,
) -> Result<BTreeMap<Strategy, Solution>> {
    let instance = Instance::new(weights, values, capacity)?;
    Orchestrator::default().solve(&instance, strategy)
}


#[cfg(test)]
mod proptests {
    use super::{Orchestrator, SolverConfig};
    use crate::ga::{GaConfig, GaRunner};
    use crate::hybrid::HybridSolver;
    use crate::instance::Instance;
    use crate::repair::{
        improve, maximize_capacity, repair_feasibility, swap_search, RepairConfig,
    };
    use crate::solution::Strategy as Request;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseError;

    // Integer-valued data keeps every sum exact and the DP lossless.
    fn instance() -> impl Strategy<Value = Instance> {
        (prop::collection::vec((1u32..50, 1u32..100), 1..12), 1u32..200).prop_map(
            |(items, capacity)| {
                let (weights, values) = items
                    .into_iter()
                    .map(|(w, v)| (f64::from(w), f64::from(v)))
                    .unzip();
                Instance::new(weights, values, f64::from(capacity)).unwrap()
            },
        )
    }

    // One-decimal weights and capacity, where float sums round.
    fn fractional_instance() -> impl Strategy<Value = Instance> {
        (prop::collection::vec((1u32..1000, 1u32..100), 1..12), 10u32..3000).prop_map(
            |(items, capacity)| {
                let (weights, values) = items
                    .into_iter()
                    .map(|(w, v)| (f64::from(w) / 10.0, f64::from(v)))
                    .unzip();
                Instance::new(weights, values, f64::from(capacity) / 10.0).unwrap()
            },
        )
    }

    fn with_bits(
        instances: impl Strategy<Value = Instance>,
    ) -> impl Strategy<Value = (Instance, Vec<bool>)> {
        instances.prop_flat_map(|inst| {
            let n = inst.len();
            (Just(inst), prop::collection::vec(any::<bool>(), n))
        })
    }

    fn instance_and_bits() -> impl Strategy<Value = (Instance, Vec<bool>)> {
        with_bits(instance())
    }

    fn assert_dominance_and_flags(inst: &Instance, seed: u64) -> Result<(), TestCaseError> {
        let config = SolverConfig::default().with_ga(GaConfig::fast().with_seed(seed));
        let results = Orchestrator::new(config).solve(inst, Request::All).unwrap();
        let best = results[&Request::Dp].total_value;
        for (s, sol) in &results {
            prop_assert!(sol.total_value <= best, "{s} beat dp");
            prop_assert_eq!(sol.is_feasible, sol.total_weight <= inst.capacity());
            prop_assert!(sol.is_feasible, "{s} infeasible");
        }
        Ok(())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_dp_dominates_and_flags_hold(inst in instance(), seed in any::<u64>()) {
            assert_dominance_and_flags(&inst, seed)?;
        }

        #[test]
        fn prop_fractional_dp_dominates_and_flags_hold(
            inst in fractional_instance(),
            seed in any::<u64>(),
        ) {
            assert_dominance_and_flags(&inst, seed)?;
        }

        #[test]
        fn prop_hybrid_is_feasible_on_fractional_data(
            (inst, bits) in with_bits(fractional_instance()),
        ) {
            let raw: Vec<f64> = bits.iter().map(|&b| f64::from(u8::from(b))).collect();
            let solver =
                HybridSolver::new().with_predictor(move |_: &Instance| Some(raw.clone()));
            let sol = solver.solve(&inst).unwrap();
            prop_assert!(sol.is_feasible);
            prop_assert!(sol.total_weight <= inst.capacity());
        }

        #[test]
        fn prop_repair_respects_ratio_order((inst, bits) in instance_and_bits()) {
            let mut sel = bits.clone();
            let removed = repair_feasibility(&inst, &mut sel);
            prop_assert!(inst.selection_weight(&sel) <= inst.capacity());
            let worst_removed = removed
                .iter()
                .map(|&i| inst.ratio(i))
                .fold(f64::NEG_INFINITY, f64::max);
            for (i, &on) in sel.iter().enumerate() {
                if on {
                    prop_assert!(bits[i]);
                    prop_assert!(inst.ratio(i) >= worst_removed);
                }
            }
        }

        #[test]
        fn prop_local_search_is_monotone((inst, bits) in instance_and_bits()) {
            let config = RepairConfig::default();
            let mut sel = bits;
            repair_feasibility(&inst, &mut sel);

            let before = inst.selection_value(&sel);
            swap_search(&inst, &mut sel, config.swap_iteration_cap);
            let after_swaps = inst.selection_value(&sel);
            prop_assert!(after_swaps >= before);

            let weight = inst.selection_weight(&sel);
            maximize_capacity(&inst, &mut sel, &config);
            prop_assert!(inst.selection_value(&sel) >= after_swaps);
            prop_assert!(inst.selection_weight(&sel) >= weight);
            prop_assert!(inst.selection_weight(&sel) <= inst.capacity());
        }

        #[test]
        fn prop_improve_is_idempotent((inst, bits) in instance_and_bits()) {
            let config = RepairConfig::default().with_max_rounds(100);
            let raw: Vec<f64> = bits.iter().map(|&b| f64::from(u8::from(b))).collect();
            let once = improve(&raw, &inst, &config).unwrap();
            let raw: Vec<f64> = once.selection.iter().map(|&b| f64::from(b)).collect();
            let twice = improve(&raw, &inst, &config).unwrap();
            prop_assert_eq!(once.selection, twice.selection);
        }

        #[test]
        fn prop_ga_is_seed_deterministic(inst in instance(), seed in any::<u64>()) {
            let config = GaConfig::fast().with_seed(seed);
            let a = GaRunner::run(&inst, &config).unwrap();
            let b = GaRunner::run(&inst, &config).unwrap();
            prop_assert_eq!(a.best_selection, b.best_selection);
            prop_assert_eq!(a.fitness_history, b.fitness_history);
        }
    }
}
