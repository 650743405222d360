//! View of one window across every dataset.

use boundscope_core::{Metric, ResultTable, WindowKey};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::ranking::Ranking;
use crate::series::GroupedSeries;
use crate::summary::{BoundSummary, SummaryAccumulator};

/// Per-bound averages at one window over every dataset that has data there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonView {
    /// Selected window.
    pub window: WindowKey,
    /// Number of datasets with a cell at the window.
    pub datasets_with_data: usize,
    /// Averages in registry order.
    pub summaries: Vec<BoundSummary>,
    /// Bounds by mean pruned count, best first.
    pub ranking: Ranking,
    /// Bound with the highest mean accuracy; `None` when no dataset has data.
    pub best_accuracy: Option<BoundSummary>,
    /// Pruned count of every bound for every dataset. Datasets without a cell
    /// at the window show 0.
    pub per_dataset: GroupedSeries,
}

/// Build the [`ComparisonView`] for `window`.
///
/// A window no dataset recorded is not an error: every average is 0 and
/// `datasets_with_data` is 0.
#[instrument(skip(table))]
pub fn comparison_view(table: &ResultTable, window: &str) -> ComparisonView {
    let registry = table.registry();
    let key = WindowKey::parse(window);

    let mut acc = SummaryAccumulator::new(registry.len());
    for (_, results) in table.iter() {
        if let Some(cell) = results.cell(&key) {
            acc.add(cell);
        }
    }
    let summaries = acc.finish(registry);
    let ranking = Ranking::by(&summaries, Metric::Pruned);
    let best_accuracy = Ranking::leader(&summaries, Metric::Accuracy);

    let datasets: Vec<_> = table.iter().collect();
    let per_dataset = GroupedSeries::from_fn(
        registry,
        datasets.iter().map(|(name, _)| name.to_string()).collect(),
        |bound, col| {
            datasets[col]
                .1
                .cell(&key)
                .and_then(|c| c.value(bound, Metric::Pruned))
                .unwrap_or(0.0)
        },
    );

    debug!(datasets_with_data = acc.count(), "comparison view built");

    ComparisonView {
        window: key,
        datasets_with_data: acc.count(),
        summaries,
        ranking,
        best_accuracy,
        per_dataset,
    }
}

#[cfg(test)]
mod tests {
    use boundscope_core::{BoundId, BoundRegistry, ResultTableBuilder};

    use super::*;

    fn table() -> ResultTable {
        let reg = BoundRegistry::new(["A", "B"]).unwrap();
        let mut b = ResultTableBuilder::new(reg);
        b.insert("DS1", "w5", Some(&[0.75, 0.5]), Some(&[10.0, 30.0]), Some(&[2.0, 4.0])).unwrap();
        b.insert("DS2", "w5", Some(&[0.25, 0.5]), Some(&[20.0, 10.0]), Some(&[4.0, 6.0])).unwrap();
        b.insert("DS3", "w1", Some(&[1.0, 1.0]), Some(&[99.0, 99.0]), Some(&[9.0, 9.0])).unwrap();
        b.build()
    }

    #[test]
    fn averages_over_datasets_with_data() {
        let v = comparison_view(&table(), "w5");
        assert_eq!(v.datasets_with_data, 2);
        assert!((v.summaries[0].avg_pruned - 15.0).abs() < 1e-12);
        assert!((v.summaries[1].avg_pruned - 20.0).abs() < 1e-12);
        assert!((v.summaries[0].avg_accuracy - 0.5).abs() < 1e-12);
        assert!((v.summaries[1].avg_time - 5.0).abs() < 1e-12);
    }

    #[test]
    fn ranking_by_pruned() {
        let v = comparison_view(&table(), "w5");
        let order: Vec<&str> = v.ranking.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(order, vec!["B", "A"]);
    }

    #[test]
    fn best_accuracy_tie_goes_to_lowest_index() {
        // A: (0.75 + 0.25) / 2 = 0.5, B: (0.5 + 0.5) / 2 = 0.5
        let v = comparison_view(&table(), "w5");
        assert_eq!(v.best_accuracy.unwrap().bound, BoundId::new(0));
    }

    #[test]
    fn per_dataset_series_zero_fills() {
        let v = comparison_view(&table(), "w5");
        assert_eq!(v.per_dataset.labels, vec!["DS1", "DS2", "DS3"]);
        assert_eq!(v.per_dataset.series[1].values, vec![30.0, 10.0, 0.0]);
    }

    #[test]
    fn unknown_window_degrades_to_zero() {
        let v = comparison_view(&table(), "w42");
        assert_eq!(v.datasets_with_data, 0);
        assert!(v.best_accuracy.is_none());
        for s in &v.summaries {
            assert_eq!(s.sample_count, 0);
            assert_eq!(s.avg_pruned, 0.0);
            assert_eq!(s.avg_accuracy, 0.0);
            assert_eq!(s.avg_time, 0.0);
        }
    }
}
