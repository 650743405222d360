//! Dataset × window matrix of mean pruned counts.

use boundscope_core::{DatasetName, Metric, MetricsCell, ResultTable, WindowKey};
use serde::Serialize;

/// Mean pruned count across all bounds for every (dataset, window) pair.
///
/// Rows are datasets in sorted order, columns the numerically sorted union of
/// windows across datasets. A pair with no cell holds 0, so the matrix is
/// always rectangular.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapMatrix {
    rows: Vec<DatasetName>,
    columns: Vec<WindowKey>,
    values: Vec<Vec<f64>>,
    max: f64,
}

impl HeatmapMatrix {
    /// Return the row labels (datasets).
    #[must_use]
    pub fn rows(&self) -> &[DatasetName] {
        &self.rows
    }

    /// Return the column labels (windows).
    #[must_use]
    pub fn columns(&self) -> &[WindowKey] {
        &self.columns
    }

    /// Return the matrix rows: `values()[row][column]`.
    #[must_use]
    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Return the value at `(row, column)`.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.values.get(row)?.get(column).copied()
    }

    /// Return the largest value in the matrix, 0 for an empty matrix.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Return the value at `(row, column)` scaled into `[0, 1]` by the matrix
    /// maximum. An all-zero matrix has zero intensity everywhere.
    #[must_use]
    pub fn intensity(&self, row: usize, column: usize) -> Option<f64> {
        let value = self.get(row, column)?;
        Some(if self.max > 0.0 { value / self.max } else { 0.0 })
    }

    /// Return `(rows, columns)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    /// Return true if the matrix has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }
}

/// Build the [`HeatmapMatrix`] for `table`.
#[must_use]
pub fn heatmap(table: &ResultTable) -> HeatmapMatrix {
    let columns: Vec<WindowKey> = table.all_windows().into_iter().cloned().collect();
    let mut rows = Vec::with_capacity(table.dataset_count());
    let mut values = Vec::with_capacity(table.dataset_count());
    let mut max = 0.0f64;

    for (name, results) in table.iter() {
        let row: Vec<f64> = columns
            .iter()
            .map(|w| results.cell(w).map_or(0.0, mean_pruned))
            .collect();
        max = row.iter().copied().fold(max, f64::max);
        rows.push(name.clone());
        values.push(row);
    }

    HeatmapMatrix {
        rows,
        columns,
        values,
        max,
    }
}

fn mean_pruned(cell: &MetricsCell) -> f64 {
    let (sum, n) = cell
        .iter()
        .filter_map(|(_, m)| m.get(Metric::Pruned))
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 { 0.0 } else { sum / n as f64 }
}

#[cfg(test)]
mod tests {
    use boundscope_core::{BoundRegistry, ResultTableBuilder};

    use super::*;

    #[test]
    fn rectangular_with_divergent_windows() {
        let reg = BoundRegistry::new(["A", "B"]).unwrap();
        let mut b = ResultTableBuilder::new(reg);
        b.insert("A", "w1", None, Some(&[10.0, 20.0]), None).unwrap();
        b.insert("A", "w2", None, Some(&[30.0, 50.0]), None).unwrap();
        b.insert("B", "w1", None, Some(&[4.0, 6.0]), None).unwrap();
        let h = heatmap(&b.build());

        assert_eq!(h.shape(), (2, 2));
        assert_eq!(h.get(0, 0), Some(15.0));
        assert_eq!(h.get(0, 1), Some(40.0));
        assert_eq!(h.get(1, 0), Some(5.0));
        assert_eq!(h.get(1, 1), Some(0.0));
        assert_eq!(h.max(), 40.0);
        assert_eq!(h.intensity(0, 1), Some(1.0));
        assert_eq!(h.intensity(1, 0), Some(0.125));
    }

    #[test]
    fn cell_without_pruned_is_zero() {
        let reg = BoundRegistry::new(["A"]).unwrap();
        let mut b = ResultTableBuilder::new(reg);
        b.insert("DS", "w1", Some(&[0.5]), None, Some(&[1.0])).unwrap();
        let h = heatmap(&b.build());
        assert_eq!(h.values(), &[vec![0.0]]);
    }

    #[test]
    fn zero_max_gives_zero_intensity() {
        let reg = BoundRegistry::new(["A"]).unwrap();
        let mut b = ResultTableBuilder::new(reg);
        b.insert("DS", "w1", None, Some(&[0.0]), None).unwrap();
        let h = heatmap(&b.build());
        assert_eq!(h.max(), 0.0);
        assert_eq!(h.intensity(0, 0), Some(0.0));
    }

    #[test]
    fn empty_table_gives_empty_matrix() {
        let h = heatmap(&ResultTable::empty(BoundRegistry::standard()));
        assert!(h.is_empty());
        assert_eq!(h.max(), 0.0);
        assert_eq!(h.intensity(0, 0), None);
    }
}
