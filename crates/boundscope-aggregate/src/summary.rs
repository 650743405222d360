//! Per-bound averages over a selection of cells.

use boundscope_core::{BoundId, BoundRegistry, Metric, MetricsCell};
use serde::Serialize;

/// Mean metrics of one bound over some selection of cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundSummary {
    /// Registry position of the bound.
    pub bound: BoundId,
    /// Bound name.
    pub name: String,
    /// Mean pruned count.
    pub avg_pruned: f64,
    /// Mean accuracy.
    pub avg_accuracy: f64,
    /// Mean elapsed time in milliseconds.
    pub avg_time: f64,
    /// Number of cells averaged over. Zero means every average is 0.
    pub sample_count: usize,
}

impl BoundSummary {
    /// Return the average for `metric`.
    #[must_use]
    pub fn average(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Accuracy => self.avg_accuracy,
            Metric::Pruned => self.avg_pruned,
            Metric::Time => self.avg_time,
        }
    }
}

/// Running per-bound sums. A cell contributes to every bound's count; a
/// metric the cell did not record contributes 0 to the sum.
#[derive(Debug, Clone)]
pub(crate) struct SummaryAccumulator {
    // [accuracy, pruned, time] per bound
    sums: Vec<[f64; 3]>,
    count: usize,
}

impl SummaryAccumulator {
    pub(crate) fn new(n_bounds: usize) -> Self {
        Self {
            sums: vec![[0.0; 3]; n_bounds],
            count: 0,
        }
    }

    pub(crate) fn add(&mut self, cell: &MetricsCell) {
        for (bound, m) in cell.iter() {
            if let Some(sum) = self.sums.get_mut(bound.index()) {
                sum[0] += m.accuracy.unwrap_or(0.0);
                sum[1] += m.pruned.unwrap_or(0.0);
                sum[2] += m.time.unwrap_or(0.0);
            }
        }
        self.count += 1;
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }

    /// One summary per bound in registry order.
    pub(crate) fn finish(&self, registry: &BoundRegistry) -> Vec<BoundSummary> {
        let mean = |sum: f64| {
            if self.count == 0 {
                0.0
            } else {
                sum / self.count as f64
            }
        };
        registry
            .iter()
            .zip(&self.sums)
            .map(|((bound, name), sum)| BoundSummary {
                bound,
                name: name.to_string(),
                avg_accuracy: mean(sum[0]),
                avg_pruned: mean(sum[1]),
                avg_time: mean(sum[2]),
                sample_count: self.count,
            })
            .collect()
    }
}
