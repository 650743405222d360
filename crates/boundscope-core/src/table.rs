//! The immutable dataset → window → metrics table.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::cell::MetricsCell;
use crate::error::TableError;
use crate::registry::BoundRegistry;
use crate::window::WindowKey;

/// A benchmark dataset name, e.g. `"ECG200"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DatasetName(String);

impl DatasetName {
    /// Create a dataset name from a non-empty string.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::EmptyDatasetName`] if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, TableError> {
        let name = name.into();
        if name.is_empty() {
            return Err(TableError::EmptyDatasetName);
        }
        Ok(Self(name))
    }

    /// Return the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DatasetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for DatasetName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// All cells recorded for one dataset, ordered numerically by window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetResults {
    windows: BTreeMap<WindowKey, MetricsCell>,
}

impl DatasetResults {
    /// Return the cell for `window`, if recorded.
    #[must_use]
    pub fn cell(&self, window: &WindowKey) -> Option<&MetricsCell> {
        self.windows.get(window)
    }

    /// Iterate over `(window, cell)` pairs in numeric window order.
    pub fn iter(&self) -> impl Iterator<Item = (&WindowKey, &MetricsCell)> + '_ {
        self.windows.iter()
    }

    /// Return the window keys in numeric order.
    pub fn windows(&self) -> impl Iterator<Item = &WindowKey> + '_ {
        self.windows.keys()
    }

    /// Return the number of recorded windows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Return true if no windows are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

/// Raw benchmark results: dataset → window → [`MetricsCell`].
///
/// Built once through [`ResultTableBuilder`] and never mutated afterwards.
/// Every cell is aligned with [`ResultTable::registry`]. Datasets iterate in
/// lexicographic order and windows in numeric order, so every traversal is
/// independent of the order the source listed them in.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    registry: BoundRegistry,
    datasets: BTreeMap<DatasetName, DatasetResults>,
}

impl ResultTable {
    /// Create a table with no datasets. Valid input for every view.
    #[must_use]
    pub fn empty(registry: BoundRegistry) -> Self {
        Self {
            registry,
            datasets: BTreeMap::new(),
        }
    }

    /// Return the registry every cell is aligned with.
    #[must_use]
    pub fn registry(&self) -> &BoundRegistry {
        &self.registry
    }

    /// Look up one cell. A missing dataset or window is `None`, never an error.
    #[must_use]
    pub fn cell(&self, dataset: &str, window: &str) -> Option<&MetricsCell> {
        self.datasets
            .get(dataset)?
            .cell(&WindowKey::parse(window))
    }

    /// Return the results for `dataset`.
    #[must_use]
    pub fn dataset(&self, dataset: &str) -> Option<&DatasetResults> {
        self.datasets.get(dataset)
    }

    /// Return the stored name and results for `dataset`.
    #[must_use]
    pub fn dataset_entry(&self, dataset: &str) -> Option<(&DatasetName, &DatasetResults)> {
        self.datasets.get_key_value(dataset)
    }

    /// Return all dataset names in sorted order.
    #[must_use]
    pub fn dataset_names(&self) -> Vec<&DatasetName> {
        self.datasets.keys().collect()
    }

    /// Iterate over `(dataset, results)` pairs in sorted dataset order.
    pub fn iter(&self) -> impl Iterator<Item = (&DatasetName, &DatasetResults)> + '_ {
        self.datasets.iter()
    }

    /// Return the windows recorded for `dataset` in numeric order, or `None`
    /// if the dataset is unknown.
    #[must_use]
    pub fn windows(&self, dataset: &str) -> Option<Vec<&WindowKey>> {
        self.datasets.get(dataset).map(|d| d.windows().collect())
    }

    /// Return the numerically sorted union of windows across all datasets.
    #[must_use]
    pub fn all_windows(&self) -> Vec<&WindowKey> {
        let mut union: Vec<&WindowKey> = self
            .datasets
            .values()
            .flat_map(DatasetResults::windows)
            .collect();
        union.sort();
        union.dedup();
        union
    }

    /// Iterate over every recorded cell as `(dataset, window, cell)`.
    pub fn cells(&self) -> impl Iterator<Item = (&DatasetName, &WindowKey, &MetricsCell)> + '_ {
        self.datasets
            .iter()
            .flat_map(|(name, d)| d.iter().map(move |(w, c)| (name, w, c)))
    }

    /// Return the number of datasets.
    #[must_use]
    pub fn dataset_count(&self) -> usize {
        self.datasets.len()
    }

    /// Return the number of recorded cells across all datasets.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.datasets.values().map(DatasetResults::len).sum()
    }

    /// Return true if the table has no datasets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}

/// Incremental builder for a [`ResultTable`].
///
/// Validation happens on each insert, so `build` itself cannot fail.
#[derive(Debug, Clone)]
pub struct ResultTableBuilder {
    registry: BoundRegistry,
    datasets: BTreeMap<DatasetName, DatasetResults>,
}

impl ResultTableBuilder {
    /// Start a table aligned with `registry`.
    #[must_use]
    pub fn new(registry: BoundRegistry) -> Self {
        Self {
            registry,
            datasets: BTreeMap::new(),
        }
    }

    /// Register a dataset with no cells. Inserting it again is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::EmptyDatasetName`] if `dataset` is empty.
    pub fn dataset(&mut self, dataset: &str) -> Result<&mut Self, TableError> {
        let name = DatasetName::new(dataset)?;
        self.datasets.entry(name).or_default();
        Ok(self)
    }

    /// Validate and insert the cell for `(dataset, window)`.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`TableError::EmptyDatasetName`] | `dataset` is empty |
    /// | [`TableError::EmptyWindowKey`] | `window` is empty |
    /// | [`TableError::InvalidCell`] | The sequences fail [`MetricsCell::from_series`] |
    /// | [`TableError::DuplicateCell`] | The pair was already inserted |
    pub fn insert(
        &mut self,
        dataset: &str,
        window: &str,
        accuracy: Option<&[f64]>,
        pruned: Option<&[f64]>,
        times: Option<&[f64]>,
    ) -> Result<&mut Self, TableError> {
        let name = DatasetName::new(dataset)?;
        if window.is_empty() {
            return Err(TableError::EmptyWindowKey {
                dataset: dataset.to_string(),
            });
        }
        let cell = MetricsCell::from_series(&self.registry, accuracy, pruned, times).map_err(
            |e| TableError::InvalidCell {
                dataset: dataset.to_string(),
                window: window.to_string(),
                source: Box::new(e),
            },
        )?;

        let results = self.datasets.entry(name).or_default();
        let key = WindowKey::parse(window);
        if results.windows.contains_key(&key) {
            return Err(TableError::DuplicateCell {
                dataset: dataset.to_string(),
                window: window.to_string(),
            });
        }
        results.windows.insert(key, cell);
        Ok(self)
    }

    /// Finish the table.
    #[must_use]
    pub fn build(self) -> ResultTable {
        ResultTable {
            registry: self.registry,
            datasets: self.datasets,
        }
    }
}
