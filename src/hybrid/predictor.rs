//! Raw-selection sources for the hybrid solver.

use crate::ga::{GaConfig, GaRunner};
use crate::instance::Instance;
use log::warn;

/// Something that proposes a raw selection for an instance.
///
/// The returned vector may be longer than the item count (fixed-width
/// models pad it) and may hold probabilities instead of bits; the repair
/// pipeline truncates and binarizes it. `None` means the predictor is
/// unavailable for this instance, and callers fall back to another
/// source.
///
/// Closures of the right shape implement this trait, which keeps test
/// stubs short:
///
/// ```
/// use u_knapsack::{hybrid::Predictor, Instance};
///
/// let all_in = |inst: &Instance| Some(vec![1.0_f64; inst.len()]);
/// let inst = Instance::new(vec![1.0, 2.0], vec![3.0, 4.0], 2.5).unwrap();
/// assert_eq!(all_in.predict(&inst), Some(vec![1.0, 1.0]));
/// ```
pub trait Predictor: Send + Sync {
    fn predict(&self, instance: &Instance) -> Option<Vec<f64>>;
}

impl<F> Predictor for F
where
    F: Fn(&Instance) -> Option<Vec<f64>> + Send + Sync,
{
    fn predict(&self, instance: &Instance) -> Option<Vec<f64>> {
        self(instance)
    }
}

/// Uses a GA run as the raw selection.
#[derive(Debug, Clone, Default)]
pub struct GaPredictor {
    config: GaConfig,
}

impl GaPredictor {
    pub fn new(config: GaConfig) -> Self {
        Self { config }
    }
}

impl Predictor for GaPredictor {
    fn predict(&self, instance: &Instance) -> Option<Vec<f64>> {
        match GaRunner::run(instance, &self.config) {
            Ok(result) => Some(
                result
                    .best_selection
                    .iter()
                    .map(|&on| if on { 1.0 } else { 0.0 })
                    .collect(),
            ),
            Err(err) => {
                warn!("ga predictor unavailable: {err}");
                None
            }
        }
    }
}
