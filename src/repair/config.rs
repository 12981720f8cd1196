//! Repair pipeline configuration.

use crate::error::{KnapsackError, Result};

/// Parameters for [`improve`](super::improve).
///
/// # Examples
///
/// ```
/// use u_knapsack::repair::RepairConfig;
///
/// let config = RepairConfig::default().with_swap_iteration_cap(50);
/// assert_eq!(config.swap_iteration_cap, 50);
/// assert!((config.fill_slack_ratio - 0.05).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RepairConfig {
    /// Raw entries strictly above this are read as "selected".
    pub threshold: f64,

    /// Maximum number of 1-for-1 swaps applied by the local search.
    pub swap_iteration_cap: usize,

    /// Capacity maximization only runs when the unused capacity is at
    /// least this fraction of the total capacity.
    pub fill_slack_ratio: f64,

    /// Maximum number of replacement moves in capacity maximization.
    pub utilization_iteration_cap: usize,

    /// Maximum number of swap-search / capacity-maximization rounds.
    ///
    /// Rounds repeat only while capacity maximization still changes the
    /// selection.
    pub max_rounds: usize,
}

impl Default for RepairConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            swap_iteration_cap: 100,
            fill_slack_ratio: 0.05,
            utilization_iteration_cap: 200,
            max_rounds: 10,
        }
    }
}

impl RepairConfig {
    /// Sets the binarization threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the swap cap (0 disables the local search).
    pub fn with_swap_iteration_cap(mut self, cap: usize) -> Self {
        self.swap_iteration_cap = cap;
        self
    }

    /// Sets the slack fraction that triggers capacity maximization.
    pub fn with_fill_slack_ratio(mut self, ratio: f64) -> Self {
        self.fill_slack_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the replacement-move cap.
    pub fn with_utilization_iteration_cap(mut self, cap: usize) -> Self {
        self.utilization_iteration_cap = cap;
        self
    }

    /// Sets the round cap.
    pub fn with_max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() {
            return Err(KnapsackError::InvalidConfig(
                "threshold must be finite".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.fill_slack_ratio) {
            return Err(KnapsackError::InvalidConfig(
                "fill_slack_ratio must lie in [0, 1]".into(),
            ));
        }
        if self.max_rounds == 0 {
            return Err(KnapsackError::InvalidConfig(
                "max_rounds must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RepairConfig::default();
        assert!((config.threshold - 0.5).abs() < 1e-12);
        assert_eq!(config.swap_iteration_cap, 100);
        assert_eq!(config.utilization_iteration_cap, 200);
        assert_eq!(config.max_rounds, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_clamp_slack_ratio() {
        let config = RepairConfig::default().with_fill_slack_ratio(3.0);
        assert!((config.fill_slack_ratio - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(RepairConfig::default()
            .with_threshold(f64::NAN)
            .validate()
            .is_err());
        assert!(RepairConfig::default()
            .with_max_rounds(0)
            .validate()
            .is_err());
        let raw = RepairConfig {
            fill_slack_ratio: -0.1,
            ..RepairConfig::default()
        };
        assert!(raw.validate().is_err());
    }
}
