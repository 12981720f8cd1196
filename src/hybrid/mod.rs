//! Hybrid solving: external prediction followed by repair.
//!
//! A [`Predictor`] proposes a raw (possibly infeasible, possibly
//! probabilistic) selection; the [`repair`](crate::repair) pipeline turns
//! it into a feasible local optimum. When no predictor is configured, or
//! it declines an instance, the greedy solution is used as the raw input
//! instead, in which case the pipeline typically has little left to do.

mod predictor;

pub use predictor::{GaPredictor, Predictor};

use crate::error::Result;
use crate::greedy::GreedySolver;
use crate::instance::Instance;
use crate::repair::{improve, RepairConfig};
use crate::solution::Solution;
use crate::solver::KnapsackSolver;
use log::{info, warn};
use std::time::Instant;

/// Predictor-plus-repair solver.
///
/// # Examples
///
/// ```
/// use u_knapsack::{hybrid::HybridSolver, Instance};
///
/// let inst = Instance::new(
///     vec![10.0, 20.0, 30.0, 40.0, 50.0],
///     vec![100.0, 150.0, 200.0, 250.0, 300.0],
///     100.0,
/// ).unwrap();
/// let solver = HybridSolver::new().with_predictor(|i: &Instance| Some(vec![1.0_f64; i.len()]));
/// let sol = solver.solve(&inst).unwrap();
/// assert_eq!(sol.total_value, 700.0);
/// ```
pub struct HybridSolver {
    predictor: Option<Box<dyn Predictor>>,
    repair: RepairConfig,
}

impl Default for HybridSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl HybridSolver {
    /// A hybrid solver with no predictor (greedy fallback) and default
    /// repair settings.
    pub fn new() -> Self {
        Self {
            predictor: None,
            repair: RepairConfig::default(),
        }
    }

    /// Sets the raw-selection source.
    pub fn with_predictor<P: Predictor + 'static>(mut self, predictor: P) -> Self {
        self.predictor = Some(Box::new(predictor));
        self
    }

    /// Sets an already boxed raw-selection source.
    pub fn with_boxed_predictor(mut self, predictor: Box<dyn Predictor>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    /// Sets the repair pipeline configuration.
    pub fn with_repair_config(mut self, config: RepairConfig) -> Self {
        self.repair = config;
        self
    }

    pub fn repair_config(&self) -> &RepairConfig {
        &self.repair
    }

    pub fn has_predictor(&self) -> bool {
        self.predictor.is_some()
    }

    /// Predicts, falls back to greedy if needed, then repairs and improves.
    pub fn solve(&self, instance: &Instance) -> Result<Solution> {
        let start = Instant::now();
        let raw = match self.predictor.as_ref().and_then(|p| p.predict(instance)) {
            Some(raw) => raw,
            None => {
                warn!("hybrid: predictor unavailable, using greedy selection as raw input");
                GreedySolver
                    .solve(instance)
                    .selection
                    .iter()
                    .map(|&b| f64::from(b))
                    .collect()
            }
        };

        let mut solution = improve(&raw, instance, &self.repair)?;
        solution.solve_time = start.elapsed().as_secs_f64();
        info!(
            "hybrid: value {:.3}, weight {:.3}/{:.3}",
            solution.total_value,
            solution.total_weight,
            instance.capacity()
        );
        Ok(solution)
    }
}

impl KnapsackSolver for HybridSolver {
    fn name(&self) -> &'static str {
        "hybrid"
    }

    fn solve(&self, instance: &Instance) -> Result<Solution> {
        HybridSolver::solve(self, instance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dp::DpSolver;
    use crate::ga::GaConfig;

    fn scenario_a() -> Instance {
        Instance::new(
            vec![10.0, 20.0, 30.0, 40.0, 50.0],
            vec![100.0, 150.0, 200.0, 250.0, 300.0],
            100.0,
        )
        .unwrap()
    }

    #[test]
    fn test_fixed_width_predictor_is_truncated() {
        let solver = HybridSolver::new().with_predictor(|_: &Instance| Some(vec![1.0_f64; 50]));
        let sol = solver.solve(&scenario_a()).unwrap();
        assert_eq!(sol.selection.len(), 5);
        assert_eq!(sol.selected_items, vec![0, 1, 2, 3]);
        assert!(sol.is_feasible);
    }

    #[test]
    fn test_falls_back_to_greedy_without_predictor() {
        let inst = scenario_a();
        let sol = HybridSolver::new().solve(&inst).unwrap();
        let greedy = GreedySolver.solve(&inst);
        assert_eq!(sol.sorted_items(), greedy.sorted_items());
    }

    #[test]
    fn test_falls_back_when_predictor_declines() {
        let inst = scenario_a();
        let solver =
            HybridSolver::new().with_predictor(|_: &Instance| -> Option<Vec<f64>> { None });
        assert!(solver.has_predictor());
        let sol = solver.solve(&inst).unwrap();
        assert_eq!(sol.total_value, 700.0);
    }

    #[test]
    fn test_ga_predictor_pipeline() {
        let inst = Instance::new(
            vec![12.0, 7.0, 9.0, 4.0, 15.0, 3.0, 8.0],
            vec![10.0, 8.0, 9.0, 2.0, 11.0, 1.0, 7.0],
            33.0,
        )
        .unwrap();
        let solver =
            HybridSolver::new().with_predictor(GaPredictor::new(GaConfig::fast().with_seed(4)));
        let sol = solver.solve(&inst).unwrap();
        let dp = DpSolver::default().solve(&inst).unwrap();
        assert!(sol.is_feasible);
        assert!(sol.total_value <= dp.total_value);
    }

    #[test]
    fn test_invalid_repair_config() {
        let solver =
            HybridSolver::new().with_repair_config(RepairConfig::default().with_max_rounds(0));
        assert!(solver.solve(&scenario_a()).is_err());
    }
}
