//! The common seam every knapsack strategy plugs into.

use crate::error::Result;
use crate::instance::Instance;
use crate::solution::Solution;

/// A strategy that turns an [`Instance`] into a [`Solution`].
///
/// Implementations own all of their intermediate state for the duration
/// of one call, so a single solver value can serve concurrent solves on
/// separate instances.
pub trait KnapsackSolver: Send + Sync {
    /// Key under which this solver's result is reported.
    fn name(&self) -> &'static str;

    /// Solves `instance`.
    fn solve(&self, instance: &Instance) -> Result<Solution>;
}
