//! View of one (dataset, window) cell.

use boundscope_core::{DatasetName, Metric, MetricsCell, ResultTable, WindowKey};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::SelectionMiss;
use crate::series::GroupedSeries;

/// Bound-indexed metrics of one cell plus the dataset's efficiency trend.
///
/// The metric vectors are the cell's own sequences, unchanged. A metric the
/// cell did not record is `None` rather than a row of zeros.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SingleView {
    /// Selected dataset.
    pub dataset: DatasetName,
    /// Selected window.
    pub window: WindowKey,
    /// Bound names, aligned with the metric vectors.
    pub bounds: Vec<String>,
    /// Accuracy per bound.
    pub accuracy: Option<Vec<f64>>,
    /// Pruned count per bound.
    pub pruned: Option<Vec<f64>>,
    /// Elapsed time per bound.
    pub times: Option<Vec<f64>>,
    /// Pruned count of every bound across every window of the dataset.
    pub efficiency_trend: GroupedSeries,
}

/// Build the [`SingleView`] for `(dataset, window)`.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`SelectionMiss::UnknownDataset`] | `dataset` is not in the table |
/// | [`SelectionMiss::MissingCell`] | The dataset has no cell for `window` |
#[instrument(skip(table))]
pub fn single_view(
    table: &ResultTable,
    dataset: &str,
    window: &str,
) -> Result<SingleView, SelectionMiss> {
    let (name, results) = table
        .dataset_entry(dataset)
        .ok_or_else(|| SelectionMiss::UnknownDataset {
            dataset: dataset.to_string(),
        })?;
    let key = WindowKey::parse(window);
    let cell = results.cell(&key).ok_or_else(|| SelectionMiss::MissingCell {
        dataset: dataset.to_string(),
        window: window.to_string(),
    })?;

    let registry = table.registry();
    let windows: Vec<&WindowKey> = results.windows().collect();
    let efficiency_trend = GroupedSeries::from_fn(
        registry,
        windows.iter().map(|w| w.label()).collect(),
        |bound, col| {
            results
                .cell(windows[col])
                .and_then(|c| c.value(bound, Metric::Pruned))
                .unwrap_or(0.0)
        },
    );

    debug!(n_windows = windows.len(), "single view built");

    Ok(SingleView {
        dataset: name.clone(),
        window: key,
        bounds: registry.names().to_vec(),
        accuracy: recorded(cell, Metric::Accuracy),
        pruned: recorded(cell, Metric::Pruned),
        times: recorded(cell, Metric::Time),
        efficiency_trend,
    })
}

fn recorded(cell: &MetricsCell, metric: Metric) -> Option<Vec<f64>> {
    cell.has(metric).then(|| cell.series(metric))
}
