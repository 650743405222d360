//! Aggregation and ranking engine for DTW lower-bound benchmark results.
//!
//! Pure functions from an immutable [`ResultTable`](boundscope_core::ResultTable)
//! to freshly computed views: a single (dataset, window) cell, every window of
//! one dataset, every dataset at one window, and the global picture with its
//! heatmap and win distribution. Nothing here performs I/O or keeps state
//! between calls.

mod all_windows;
mod comparison;
mod distribution;
mod error;
mod global;
mod heatmap;
mod navigation;
mod ranking;
mod series;
mod single;
mod summary;

pub use all_windows::{AllWindowsView, WindowWinner, all_windows_view};
pub use comparison::{ComparisonView, comparison_view};
pub use distribution::{WinDistribution, WinEntry, win_distribution};
pub use error::SelectionMiss;
pub use global::{GlobalStats, GlobalView, efficiency_by_window, global_summaries, global_view};
pub use heatmap::{HeatmapMatrix, heatmap};
pub use navigation::{Selection, View};
pub use ranking::{RankedBound, Ranking};
pub use series::{BoundSeries, GroupedSeries};
pub use single::{SingleView, single_view};
pub use summary::BoundSummary;
