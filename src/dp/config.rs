//! Exact solver configuration.

use crate::error::{KnapsackError, Result};

/// Configuration for the dynamic-programming solver.
///
/// Fractional weights are multiplied by `scale` and truncated to integers
/// before the table is built. The default of 1000 keeps three decimal
/// places; anything finer is lost. Raising `scale` buys precision at the
/// cost of a proportionally larger table.
///
/// # Examples
///
/// ```
/// use u_knapsack::dp::DpConfig;
///
/// let config = DpConfig::default().with_scale(100).with_max_table_cells(1_000_000);
/// assert_eq!(config.scale, 100);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DpConfig {
    /// Integer scaling factor applied to weights and capacity.
    pub scale: u32,

    /// Upper bound on `(n + 1) * (scaled_capacity + 1)`.
    ///
    /// Instances above this fail with
    /// [`KnapsackError::InstanceTooLarge`] instead of allocating.
    pub max_table_cells: u64,
}

impl Default for DpConfig {
    fn default() -> Self {
        Self {
            scale: 1000,
            max_table_cells: 50_000_000,
        }
    }
}

impl DpConfig {
    /// Sets the weight scaling factor.
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the table size ceiling.
    pub fn with_max_table_cells(mut self, cells: u64) -> Self {
        self.max_table_cells = cells;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.scale == 0 {
            return Err(KnapsackError::InvalidConfig(
                "scale must be at least 1".into(),
            ));
        }
        if self.max_table_cells == 0 {
            return Err(KnapsackError::InvalidConfig(
                "max_table_cells must be positive".into(),
            ));
        }
        Ok(())
    }
}
