//! Per-bound metrics for one (dataset, window) combination.

use crate::error::TableError;
use crate::metric::Metric;
use crate::registry::{BoundId, BoundRegistry};

/// The three measurements recorded for one bound. A field is `None` when the
/// source omitted that metric's sequence for the cell.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundMetrics {
    /// Classification accuracy in `[0, 1]`.
    pub accuracy: Option<f64>,
    /// Number of pruned DTW computations.
    pub pruned: Option<f64>,
    /// Elapsed time in milliseconds.
    pub time: Option<f64>,
}

impl BoundMetrics {
    /// Return the value recorded for `metric`.
    #[must_use]
    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Accuracy => self.accuracy,
            Metric::Pruned => self.pruned,
            Metric::Time => self.time,
        }
    }
}

/// Validated metrics for one (dataset, window) cell, keyed by [`BoundId`].
///
/// Positional arrays only exist at the edges: they are validated against the
/// registry on the way in and rebuilt by [`MetricsCell::series`] on the way
/// out.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsCell {
    bounds: Vec<BoundMetrics>,
    present: [bool; 3],
}

impl MetricsCell {
    /// Build a cell from the three optional parallel sequences.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`TableError::SeriesLengthMismatch`] | A present sequence is not `registry.len()` long |
    /// | [`TableError::NonFiniteValue`] | A value is NaN or infinite |
    /// | [`TableError::NegativeValue`] | A pruned count or time is negative |
    /// | [`TableError::AccuracyOutOfRange`] | An accuracy lies outside `[0, 1]` |
    pub fn from_series(
        registry: &BoundRegistry,
        accuracy: Option<&[f64]>,
        pruned: Option<&[f64]>,
        times: Option<&[f64]>,
    ) -> Result<Self, TableError> {
        let n = registry.len();
        let mut bounds = vec![BoundMetrics::default(); n];
        let mut present = [false; 3];

        for (slot, (metric, values)) in [
            (Metric::Accuracy, accuracy),
            (Metric::Pruned, pruned),
            (Metric::Time, times),
        ]
        .into_iter()
        .enumerate()
        {
            let Some(values) = values else { continue };
            validate(metric, values, n)?;
            present[slot] = true;
            for (entry, &value) in bounds.iter_mut().zip(values) {
                match metric {
                    Metric::Accuracy => entry.accuracy = Some(value),
                    Metric::Pruned => entry.pruned = Some(value),
                    Metric::Time => entry.time = Some(value),
                }
            }
        }

        Ok(Self { bounds, present })
    }

    /// Return the metrics recorded for `bound`.
    #[must_use]
    pub fn bound(&self, bound: BoundId) -> Option<&BoundMetrics> {
        self.bounds.get(bound.index())
    }

    /// Return the value of `metric` for `bound`, if recorded.
    #[must_use]
    pub fn value(&self, bound: BoundId, metric: Metric) -> Option<f64> {
        self.bound(bound).and_then(|m| m.get(metric))
    }

    /// Return true if the cell carried the sequence for `metric`.
    #[must_use]
    pub fn has(&self, metric: Metric) -> bool {
        self.present[slot(metric)]
    }

    /// Iterate over `(bound, metrics)` pairs in registry order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (BoundId, &BoundMetrics)> + '_ {
        self.bounds
            .iter()
            .enumerate()
            .map(|(i, m)| (BoundId::new(i), m))
    }

    /// Return the number of bounds in the cell (the registry length).
    #[must_use]
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    /// Return true if the cell covers no bounds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Positional series for `metric`, indexed by bound. Missing values are
    /// zero-filled for charting.
    #[must_use]
    pub fn series(&self, metric: Metric) -> Vec<f64> {
        self.bounds
            .iter()
            .map(|m| m.get(metric).unwrap_or(0.0))
            .collect()
    }

    /// Return the bound with the best value of `metric` (highest accuracy or
    /// pruned count, lowest time), or `None` when the cell has no values for
    /// it. Ties go to the lowest bound index.
    #[must_use]
    pub fn best_bound(&self, metric: Metric) -> Option<BoundId> {
        let mut best: Option<(BoundId, f64)> = None;
        for (bound, m) in self.iter() {
            let Some(value) = m.get(metric) else { continue };
            // Strict comparison keeps the earliest bound on ties.
            match best {
                Some((_, current)) if metric.better_first(value, current).is_lt() => {
                    best = Some((bound, value));
                }
                None => best = Some((bound, value)),
                _ => {}
            }
        }
        best.map(|(bound, _)| bound)
    }
}

fn slot(metric: Metric) -> usize {
    match metric {
        Metric::Accuracy => 0,
        Metric::Pruned => 1,
        Metric::Time => 2,
    }
}

fn validate(metric: Metric, values: &[f64], expected: usize) -> Result<(), TableError> {
    if values.len() != expected {
        return Err(TableError::SeriesLengthMismatch {
            metric,
            expected,
            got: values.len(),
        });
    }
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(TableError::NonFiniteValue { metric, index });
        }
        match metric {
            Metric::Accuracy if !(0.0..=1.0).contains(&value) => {
                return Err(TableError::AccuracyOutOfRange { index, value });
            }
            Metric::Pruned | Metric::Time if value < 0.0 => {
                return Err(TableError::NegativeValue { metric, index, value });
            }
            _ => {}
        }
    }
    Ok(())
}
