//! Chart-ready per-bound series.

use boundscope_core::{BoundId, BoundRegistry};
use serde::Serialize;

/// One bound's values along a shared axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundSeries {
    /// Registry position of the bound.
    pub bound: BoundId,
    /// Bound name.
    pub name: String,
    /// Display color.
    pub color: String,
    /// One value per axis label.
    pub values: Vec<f64>,
}

/// A set of per-bound series sharing one axis, e.g. windows or datasets.
///
/// `series` is in registry order and every `values` vector has
/// `labels.len()` entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedSeries {
    /// Axis labels.
    pub labels: Vec<String>,
    /// One series per bound.
    pub series: Vec<BoundSeries>,
}

impl GroupedSeries {
    /// Build one series per registry bound, calling `value(bound, column)`
    /// for every axis position.
    pub(crate) fn from_fn<F>(registry: &BoundRegistry, labels: Vec<String>, mut value: F) -> Self
    where
        F: FnMut(BoundId, usize) -> f64,
    {
        let series = registry
            .iter()
            .map(|(bound, name)| BoundSeries {
                bound,
                name: name.to_string(),
                color: registry.color(bound).unwrap_or_default().to_string(),
                values: (0..labels.len()).map(|col| value(bound, col)).collect(),
            })
            .collect();
        Self { labels, series }
    }

    /// Return the series for `bound`.
    #[must_use]
    pub fn get(&self, bound: BoundId) -> Option<&BoundSeries> {
        self.series.iter().find(|s| s.bound == bound)
    }

    /// Return the value of `bound` at axis position `column`.
    #[must_use]
    pub fn value(&self, bound: BoundId, column: usize) -> Option<f64> {
        self.get(bound)?.values.get(column).copied()
    }
}
