//! View of every dataset at every window.

use boundscope_core::{Metric, ResultTable};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::distribution::{WinDistribution, win_distribution};
use crate::heatmap::{HeatmapMatrix, heatmap};
use crate::ranking::Ranking;
use crate::series::GroupedSeries;
use crate::summary::{BoundSummary, SummaryAccumulator};

/// Size of the benchmark grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlobalStats {
    /// Number of datasets.
    pub datasets: usize,
    /// Number of distinct windows across datasets.
    pub windows: usize,
    /// Number of bounds in the registry.
    pub bounds: usize,
    /// Number of recorded (dataset, window) cells.
    pub cells: usize,
    /// `datasets × windows`, the cell count of a complete grid.
    pub grid_size: usize,
}

/// Aggregates over every recorded cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalView {
    /// Grid dimensions.
    pub stats: GlobalStats,
    /// Averages in registry order.
    pub summaries: Vec<BoundSummary>,
    /// Bounds by mean pruned count, best first.
    pub ranking: Ranking,
    /// Bound with the highest mean accuracy.
    pub best_accuracy: Option<BoundSummary>,
    /// Bound with the lowest mean time.
    pub fastest: Option<BoundSummary>,
    /// Mean pruned count per (dataset, window).
    pub heatmap: HeatmapMatrix,
    /// Cells won per bound.
    pub wins: WinDistribution,
    /// Mean pruned count of each bound per window, across datasets.
    pub efficiency_by_window: GroupedSeries,
}

/// Per-bound averages over every recorded cell, in registry order.
///
/// `sample_count` is the number of cells. A metric a cell did not record
/// contributes 0 to that cell's share of the average.
#[must_use]
pub fn global_summaries(table: &ResultTable) -> Vec<BoundSummary> {
    let registry = table.registry();
    let mut acc = SummaryAccumulator::new(registry.len());
    for (_, _, cell) in table.cells() {
        acc.add(cell);
    }
    acc.finish(registry)
}

/// Mean pruned count of each bound at each window of the union, averaged over
/// the datasets that recorded a value there. Windows nobody recorded are 0.
#[must_use]
pub fn efficiency_by_window(table: &ResultTable) -> GroupedSeries {
    let windows = table.all_windows();
    let labels = windows.iter().map(|w| w.label()).collect();
    GroupedSeries::from_fn(table.registry(), labels, |bound, col| {
        let (sum, n) = table
            .iter()
            .filter_map(|(_, results)| results.cell(windows[col])?.value(bound, Metric::Pruned))
            .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
        if n == 0 { 0.0 } else { sum / n as f64 }
    })
}

/// Build the [`GlobalView`] for `table`.
///
/// The accuracy and time leaders come from their own rankings of the same
/// summaries; both are `None` for a table with no cells.
#[instrument(skip_all, fields(n_datasets = table.dataset_count()))]
pub fn global_view(table: &ResultTable) -> GlobalView {
    let summaries = global_summaries(table);
    let ranking = Ranking::by(&summaries, Metric::Pruned);
    let best_accuracy = Ranking::leader(&summaries, Metric::Accuracy);
    let fastest = Ranking::leader(&summaries, Metric::Time);

    let heatmap = heatmap(table);
    let (datasets, windows) = heatmap.shape();
    let stats = GlobalStats {
        datasets,
        windows,
        bounds: table.registry().len(),
        cells: table.cell_count(),
        grid_size: datasets * windows,
    };

    debug!(
        cells = stats.cells,
        grid_size = stats.grid_size,
        heatmap_max = heatmap.max(),
        "global view built"
    );

    GlobalView {
        stats,
        summaries,
        ranking,
        best_accuracy,
        fastest,
        heatmap,
        wins: win_distribution(table),
        efficiency_by_window: efficiency_by_window(table),
    }
}
