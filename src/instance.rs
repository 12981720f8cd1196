//! Validated knapsack instances.
//!
//! An [`Instance`] is built once per solve request through
//! [`Instance::new`], which rejects malformed input before any solver
//! sees it. After construction it is read-only.

use crate::error::{KnapsackError, Result};

/// A single item, borrowed view into an [`Instance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    /// Position of the item in the instance (its identity).
    pub index: usize,
    pub weight: f64,
    pub value: f64,
}

impl Item {
    /// Value per unit of weight.
    ///
    /// A non-positive weight yields `f64::INFINITY` instead of NaN/inf
    /// arithmetic, ranking such items first in descending sorts.
    pub fn ratio(&self) -> f64 {
        if self.weight > 0.0 {
            self.value / self.weight
        } else {
            f64::INFINITY
        }
    }
}

/// A 0/1 knapsack instance: item weights, item values and a capacity.
///
/// # Invariants
///
/// - `weights.len() == values.len() > 0`
/// - `capacity > 0`
/// - every weight and value is finite and `> 0`
///
/// # Examples
///
/// ```
/// use u_knapsack::Instance;
///
/// let inst = Instance::new(vec![10.0, 20.0], vec![60.0, 100.0], 25.0).unwrap();
/// assert_eq!(inst.len(), 2);
/// assert!(Instance::new(vec![1.0, 2.0], vec![1.0], 5.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    weights: Vec<f64>,
    values: Vec<f64>,
    capacity: f64,
}

impl Instance {
    /// Validates and builds an instance.
    ///
    /// Checks run in this order: length mismatch, emptiness, capacity,
    /// then each item.
    pub fn new(weights: Vec<f64>, values: Vec<f64>, capacity: f64) -> Result<Self> {
        if weights.len() != values.len() {
            return Err(KnapsackError::LengthMismatch {
                weights: weights.len(),
                values: values.len(),
            });
        }
        if weights.is_empty() {
            return Err(KnapsackError::EmptyInstance);
        }
        if !capacity.is_finite() {
            return Err(KnapsackError::NonFinite { field: "capacity" });
        }
        if capacity <= 0.0 {
            return Err(KnapsackError::NonPositiveCapacity(capacity));
        }
        for (index, (&weight, &value)) in weights.iter().zip(values.iter()).enumerate() {
            if !weight.is_finite() {
                return Err(KnapsackError::NonFinite { field: "weights" });
            }
            if !value.is_finite() {
                return Err(KnapsackError::NonFinite { field: "values" });
            }
            if weight <= 0.0 {
                return Err(KnapsackError::NonPositiveWeight { index, weight });
            }
            if value <= 0.0 {
                return Err(KnapsackError::NonPositiveValue { index, value });
            }
        }
        Ok(Self {
            weights,
            values,
            capacity,
        })
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always `false` for a validated instance.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Returns the item at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn item(&self, index: usize) -> Item {
        Item {
            index,
            weight: self.weights[index],
            value: self.values[index],
        }
    }

    /// Iterates over all items in index order.
    pub fn items(&self) -> impl Iterator<Item = Item> + '_ {
        (0..self.len()).map(move |i| self.item(i))
    }

    /// Value/weight ratio of item `index`, guarded against zero weight.
    pub fn ratio(&self, index: usize) -> f64 {
        self.item(index).ratio()
    }

    /// Total weight of the selected items.
    ///
    /// Entries of `selection` beyond `self.len()` are ignored.
    pub fn selection_weight(&self, selection: &[bool]) -> f64 {
        selection
            .iter()
            .zip(self.weights.iter())
            .filter(|(&on, _)| on)
            .map(|(_, &w)| w)
            .sum()
    }

    /// Total weight of `selection` after clearing `removed` and setting
    /// `added`, without materializing the edited selection.
    ///
    /// Summed in index order, so the result is bit-identical to
    /// [`selection_weight`](Self::selection_weight) on the edited vector.
    pub fn edited_selection_weight(
        &self,
        selection: &[bool],
        removed: &[usize],
        added: &[usize],
    ) -> f64 {
        selection
            .iter()
            .zip(self.weights.iter())
            .enumerate()
            .filter(|&(i, (&on, _))| {
                !removed.contains(&i) && (on || added.contains(&i))
            })
            .map(|(_, (_, &w))| w)
            .sum()
    }

    /// Whether `selection`, edited as in
    /// [`edited_selection_weight`](Self::edited_selection_weight), fits.
    pub fn edit_fits(&self, selection: &[bool], removed: &[usize], added: &[usize]) -> bool {
        self.fits(self.edited_selection_weight(selection, removed, added))
    }

    /// Total value of the selected items.
    ///
    /// Entries of `selection` beyond `self.len()` are ignored.
    pub fn selection_value(&self, selection: &[bool]) -> f64 {
        selection
            .iter()
            .zip(self.values.iter())
            .filter(|(&on, _)| on)
            .map(|(_, &v)| v)
            .sum()
    }

    /// Whether `weight` fits within the capacity.
    pub fn fits(&self, weight: f64) -> bool {
        weight <= self.capacity
    }

    /// Indices sorted by ratio, highest first. Ties keep index order.
    pub fn indices_by_ratio_desc(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_by(|&a, &b| self.ratio(b).total_cmp(&self.ratio(a)));
        order
    }
}
