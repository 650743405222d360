//! Validation errors for registries, metrics cells and result tables.

use crate::metric::Metric;

/// Errors raised while building a [`BoundRegistry`](crate::BoundRegistry) or a
/// [`ResultTable`](crate::ResultTable).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    /// Returned when a registry is constructed with no bounds.
    #[error("bound registry must contain at least one bound")]
    EmptyRegistry,

    /// Returned when a bound name is empty.
    #[error("bound name at position {index} is empty")]
    EmptyBoundName {
        /// Position of the empty name in the registry.
        index: usize,
    },

    /// Returned when the same bound name appears twice in a registry.
    #[error("duplicate bound name \"{name}\" at positions {first} and {second}")]
    DuplicateBoundName {
        /// The duplicated name.
        name: String,
        /// Position of the first occurrence.
        first: usize,
        /// Position of the second occurrence.
        second: usize,
    },

    /// Returned when a metrics sequence is not aligned with the registry.
    #[error("{metric} series has {got} entries, registry has {expected} bounds")]
    SeriesLengthMismatch {
        /// The metric whose sequence is misaligned.
        metric: Metric,
        /// Registry length.
        expected: usize,
        /// Length of the supplied sequence.
        got: usize,
    },

    /// Returned when a metric value is NaN or infinite.
    #[error("{metric} value for bound {index} is not finite")]
    NonFiniteValue {
        /// The offending metric.
        metric: Metric,
        /// Bound position of the value.
        index: usize,
    },

    /// Returned when a pruned count or elapsed time is negative.
    #[error("{metric} value {value} for bound {index} is negative")]
    NegativeValue {
        /// The offending metric.
        metric: Metric,
        /// Bound position of the value.
        index: usize,
        /// The negative value.
        value: f64,
    },

    /// Returned when an accuracy value lies outside `[0, 1]`.
    #[error("accuracy {value} for bound {index} is outside [0, 1]")]
    AccuracyOutOfRange {
        /// Bound position of the value.
        index: usize,
        /// The out-of-range value.
        value: f64,
    },

    /// Returned when a dataset name is empty.
    #[error("dataset name must be non-empty")]
    EmptyDatasetName,

    /// Returned when a window identifier is empty.
    #[error("window identifier for dataset \"{dataset}\" must be non-empty")]
    EmptyWindowKey {
        /// Dataset the window belongs to.
        dataset: String,
    },

    /// Wraps a cell validation error with the location of the offending cell.
    #[error("invalid cell for dataset \"{dataset}\", window \"{window}\": {source}")]
    InvalidCell {
        /// Dataset of the rejected cell.
        dataset: String,
        /// Window of the rejected cell.
        window: String,
        /// The underlying validation failure.
        source: Box<TableError>,
    },

    /// Returned when the same (dataset, window) pair is inserted twice.
    #[error("duplicate cell for dataset \"{dataset}\", window \"{window}\"")]
    DuplicateCell {
        /// Dataset of the duplicated cell.
        dataset: String,
        /// Window of the duplicated cell.
        window: String,
    },
}
