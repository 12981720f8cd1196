//! Table construction and reconstruction.

use super::config::DpConfig;
use crate::error::{KnapsackError, Result};
use crate::instance::Instance;
use crate::solution::Solution;
use crate::solver::KnapsackSolver;
use log::{debug, info, warn};
use std::time::Instant;

/// Absorbs representation error such as `0.29 * 1000 = 289.999…`
/// before truncation.
const SCALE_EPSILON: f64 = 1e-6;

/// Exact dynamic-programming solver.
///
/// The result is optimal over the scaled integer weights and always
/// feasible in real units.
///
/// # Examples
///
/// ```
/// use u_knapsack::{dp::DpSolver, Instance};
///
/// let inst = Instance::new(
///     vec![10.0, 20.0, 30.0, 40.0, 50.0],
///     vec![100.0, 150.0, 200.0, 250.0, 300.0],
///     100.0,
/// ).unwrap();
/// let sol = DpSolver::default().solve(&inst).unwrap();
/// assert_eq!(sol.total_value, 700.0);
/// assert!(sol.is_feasible);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DpSolver {
    config: DpConfig,
}

impl DpSolver {
    pub fn new(config: DpConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DpConfig {
        &self.config
    }

    /// Solves `instance` to optimality.
    ///
    /// Fails with [`KnapsackError::InstanceTooLarge`] when the table would
    /// exceed [`DpConfig::max_table_cells`].
    pub fn solve(&self, instance: &Instance) -> Result<Solution> {
        self.config.validate()?;
        let start = Instant::now();

        let n = instance.len();
        let scale = f64::from(self.config.scale);
        let capacity_scaled = scale_down(instance.capacity(), scale);

        let cells = (n as u128 + 1) * (capacity_scaled as u128 + 1);
        let limit = u128::from(self.config.max_table_cells);
        if cells > limit {
            return Err(KnapsackError::InstanceTooLarge { cells, limit });
        }
        let cap = capacity_scaled as usize;
        let width = cap + 1;

        let weights: Vec<usize> = instance
            .weights()
            .iter()
            .map(|&w| scale_down(w, scale) as usize)
            .collect();
        let values = instance.values();

        // Only two rows of `dp` are live at a time; `keep` is kept whole
        // for reconstruction.
        let mut prev = vec![0.0f64; width];
        let mut cur = vec![0.0f64; width];
        let mut keep = vec![false; (n + 1) * width];

        for i in 1..=n {
            let wi = weights[i - 1];
            let vi = values[i - 1];
            let row = &mut keep[i * width..(i + 1) * width];
            for w in 0..width {
                if wi <= w {
                    let with_item = prev[w - wi] + vi;
                    if with_item > prev[w] {
                        cur[w] = with_item;
                        row[w] = true;
                    } else {
                        cur[w] = prev[w];
                    }
                } else {
                    cur[w] = prev[w];
                }
            }
            std::mem::swap(&mut prev, &mut cur);
        }

        // Truncated weights can make a set that fills the scaled capacity
        // overflow in real units. Each column of `keep` reconstructs the best
        // set for a smaller scaled capacity, so step down until one fits.
        let mut column = cap;
        let selected = loop {
            let selected = reconstruct(&keep, &weights, width, column);
            if instance.fits(selected_weight(instance, &selected)) || column == 0 {
                break selected;
            }
            column -= 1;
        };
        if column < cap {
            warn!(
                "dp: scale {} lost precision, stepped scaled capacity down {} -> {}",
                self.config.scale, cap, column
            );
        }
        debug!(
            "dp: {} items, scaled capacity {}, {} cells, best scaled value {}",
            n, cap, cells, prev[column]
        );

        let solution = Solution::from_items(instance, selected, start.elapsed());
        info!(
            "dp: value {:.3}, weight {:.3}/{:.3} in {:.6}s",
            solution.total_value,
            solution.total_weight,
            instance.capacity(),
            solution.solve_time
        );
        Ok(solution)
    }
}

impl KnapsackSolver for DpSolver {
    fn name(&self) -> &'static str {
        "dp"
    }

    fn solve(&self, instance: &Instance) -> Result<Solution> {
        DpSolver::solve(self, instance)
    }
}

/// Walks `keep` back from `column`, listing taken items in descending
/// index order.
fn reconstruct(keep: &[bool], weights: &[usize], width: usize, column: usize) -> Vec<usize> {
    let mut selected = Vec::new();
    let mut w = column;
    for i in (1..=weights.len()).rev() {
        if keep[i * width + w] {
            selected.push(i - 1);
            w -= weights[i - 1];
        }
    }
    selected
}

/// Real-unit weight of `items`, summed the way [`Solution`] sums it.
fn selected_weight(instance: &Instance, items: &[usize]) -> f64 {
    let mut bits = vec![false; instance.len()];
    for &i in items {
        bits[i] = true;
    }
    instance.selection_weight(&bits)
}

/// Scales `x` and truncates toward zero. Saturates for huge inputs.
fn scale_down(x: f64, scale: f64) -> u64 {
    (x * scale + SCALE_EPSILON).floor().max(0.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::greedy::GreedySolver;

    fn scenario_a() -> Instance {
        Instance::new(
            vec![10.0, 20.0, 30.0, 40.0, 50.0],
            vec![100.0, 150.0, 200.0, 250.0, 300.0],
            100.0,
        )
        .unwrap()
    }

    #[test]
    fn test_scenario_a_optimum() {
        let sol = DpSolver::default().solve(&scenario_a()).unwrap();
        assert_eq!(sol.sorted_items(), vec![0, 1, 2, 3]);
        assert_eq!(sol.total_value, 700.0);
        assert_eq!(sol.total_weight, 100.0);
        assert!(sol.is_feasible);
        assert_eq!(sol.selection, vec![1, 1, 1, 1, 0]);
    }

    #[test]
    fn test_reconstruction_walks_backwards() {
        let sol = DpSolver::default().solve(&scenario_a()).unwrap();
        assert_eq!(sol.selected_items, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_beats_greedy_on_classic_trap() {
        // Greedy takes item 0 (ratio 6) and then nothing else fits well.
        let inst = Instance::new(vec![10.0, 20.0, 30.0], vec![60.0, 100.0, 120.0], 50.0).unwrap();
        let dp = DpSolver::default().solve(&inst).unwrap();
        let greedy = GreedySolver.solve(&inst);
        assert_eq!(dp.total_value, 220.0);
        assert_eq!(dp.sorted_items(), vec![1, 2]);
        assert!(greedy.total_value < dp.total_value);
    }

    #[test]
    fn test_fractional_weights() {
        let inst = Instance::new(vec![0.5, 0.25, 0.375], vec![3.0, 2.0, 2.5], 0.875).unwrap();
        let sol = DpSolver::default().solve(&inst).unwrap();
        assert_eq!(sol.sorted_items(), vec![0, 2]);
        assert_eq!(sol.total_weight, 0.875);
        assert!(sol.is_feasible);
    }

    #[test]
    fn test_nothing_fits() {
        let inst = Instance::new(vec![5.0, 6.0], vec![1.0, 1.0], 4.0).unwrap();
        let sol = DpSolver::default().solve(&inst).unwrap();
        assert!(sol.selected_items.is_empty());
        assert_eq!(sol.total_value, 0.0);
        assert!(sol.is_feasible);
    }

    #[test]
    fn test_precision_loss_steps_down_capacity() {
        // With scale 1 both weights truncate to 1, so the table believes
        // both fit in capacity 2 even though 1.6 + 1.6 > 2.
        let inst = Instance::new(vec![1.6, 1.6], vec![5.0, 4.0], 2.0).unwrap();
        let sol = DpSolver::new(DpConfig::default().with_scale(1))
            .solve(&inst)
            .unwrap();
        assert!(sol.is_feasible);
        assert!(sol.total_weight <= 2.0);
        assert_eq!(sol.sorted_items(), vec![0]);
    }

    #[test]
    fn test_exact_scaled_fit_that_overflows_in_real_units() {
        // {0, 2, 3} scales to exactly 100800 but sums to
        // 100.80000000000001; the best set that really fits is {2, 3, 6}.
        let inst = Instance::new(
            vec![61.300000000000004, 57.7, 38.6, 0.9, 48.2, 91.8, 37.2],
            vec![79.0, 63.0, 91.0, 33.0, 76.0, 13.0, 77.0],
            100.8,
        )
        .unwrap();
        let dp = DpSolver::default().solve(&inst).unwrap();
        let greedy = crate::greedy::GreedySolver.solve(&inst);
        assert!(dp.is_feasible);
        assert_eq!(dp.sorted_items(), vec![2, 3, 6]);
        assert_eq!(dp.total_value, 201.0);
        assert!(dp.total_value >= greedy.total_value);
    }

    #[test]
    fn test_too_large_fails_fast() {
        let inst = Instance::new(vec![1.0; 10], vec![1.0; 10], 1e9).unwrap();
        let err = DpSolver::default().solve(&inst).unwrap_err();
        assert!(matches!(err, KnapsackError::InstanceTooLarge { .. }));
    }

    #[test]
    fn test_ceiling_is_configurable() {
        let inst = scenario_a();
        // (5 + 1) * (100_000 + 1) cells at default scale
        let tight = DpSolver::new(DpConfig::default().with_max_table_cells(600_005));
        assert!(tight.solve(&inst).is_err());
        let loose = DpSolver::new(DpConfig::default().with_max_table_cells(600_006));
        assert!(loose.solve(&inst).is_ok());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let solver = DpSolver::new(DpConfig::default().with_scale(0));
        assert!(matches!(
            solver.solve(&scenario_a()),
            Err(KnapsackError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_scale_down_absorbs_representation_error() {
        assert_eq!(scale_down(0.29, 1000.0), 290);
        assert_eq!(scale_down(1.2345, 1000.0), 1234);
        assert_eq!(scale_down(1e300, 1000.0), u64::MAX);
    }
}
