//! View of every window of one dataset.

use boundscope_core::{BoundId, DatasetName, Metric, ResultTable, WindowKey};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::SelectionMiss;
use crate::series::GroupedSeries;

/// The most efficient bound at one window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowWinner {
    /// The window.
    pub window: WindowKey,
    /// Registry position of the winning bound.
    pub bound: BoundId,
    /// Winning bound name.
    pub name: String,
    /// Pruned count achieved by the winner.
    pub pruned: f64,
    /// Accuracy of the winner, if the cell recorded accuracy.
    pub accuracy: Option<f64>,
}

/// Evolution of each bound's metrics across the windows of one dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllWindowsView {
    /// Selected dataset.
    pub dataset: DatasetName,
    /// The dataset's windows in numeric order.
    pub windows: Vec<WindowKey>,
    /// Accuracy per bound per window. Missing values are 0.
    pub accuracy: GroupedSeries,
    /// Pruned count per bound per window. Missing values are 0.
    pub pruned: GroupedSeries,
    /// Elapsed time per bound per window. Missing values are 0.
    pub times: GroupedSeries,
    /// Winner of every window that recorded pruned counts.
    pub best_per_window: Vec<WindowWinner>,
}

/// Build the [`AllWindowsView`] for `dataset`.
///
/// The winner of a window is the bound with the largest pruned count, the
/// lowest bound index on ties. Windows without pruned data are left out of
/// `best_per_window` but still appear, zero-filled, in the evolution series.
///
/// # Errors
///
/// Returns [`SelectionMiss::UnknownDataset`] if `dataset` is not in the table.
#[instrument(skip(table))]
pub fn all_windows_view(
    table: &ResultTable,
    dataset: &str,
) -> Result<AllWindowsView, SelectionMiss> {
    let (name, results) = table
        .dataset_entry(dataset)
        .ok_or_else(|| SelectionMiss::UnknownDataset {
            dataset: dataset.to_string(),
        })?;
    let registry = table.registry();
    let windows: Vec<WindowKey> = results.windows().cloned().collect();
    let labels: Vec<String> = windows.iter().map(WindowKey::label).collect();

    let evolution = |metric: Metric| {
        GroupedSeries::from_fn(registry, labels.clone(), |bound, col| {
            results
                .cell(&windows[col])
                .and_then(|c| c.value(bound, metric))
                .unwrap_or(0.0)
        })
    };
    let accuracy = evolution(Metric::Accuracy);
    let pruned = evolution(Metric::Pruned);
    let times = evolution(Metric::Time);

    let best_per_window: Vec<WindowWinner> = results
        .iter()
        .filter_map(|(window, cell)| {
            let bound = cell.best_bound(Metric::Pruned)?;
            Some(WindowWinner {
                window: window.clone(),
                bound,
                name: registry.name(bound)?.to_string(),
                pruned: cell.value(bound, Metric::Pruned)?,
                accuracy: cell.value(bound, Metric::Accuracy),
            })
        })
        .collect();

    debug!(
        n_windows = windows.len(),
        n_winners = best_per_window.len(),
        "all-windows view built"
    );

    Ok(AllWindowsView {
        dataset: name.clone(),
        windows,
        accuracy,
        pruned,
        times,
        best_per_window,
    })
}
