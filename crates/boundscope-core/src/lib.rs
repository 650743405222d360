//! Data model for DTW lower-bound benchmark results.
//!
//! Pure data library with zero I/O. Provides the bound registry that fixes
//! the canonical bound order, numerically ordered window keys, validated
//! per-bound metrics cells, and the immutable result table that every
//! aggregation view reads from.

mod cell;
mod error;
mod metric;
mod registry;
mod table;
mod window;

pub use cell::{BoundMetrics, MetricsCell};
pub use error::TableError;
pub use metric::{Direction, Metric};
pub use registry::{BoundId, BoundRegistry, STANDARD_BOUNDS, STANDARD_COLORS};
pub use table::{DatasetName, DatasetResults, ResultTable, ResultTableBuilder};
pub use window::WindowKey;
