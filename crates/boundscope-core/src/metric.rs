use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

/// One of the three per-bound measurements recorded in a metrics cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Classification accuracy, a fraction in `[0, 1]`.
    Accuracy,
    /// Number of DTW computations avoided by the bound.
    Pruned,
    /// Elapsed classification time in milliseconds.
    Time,
}

/// Which end of a metric's scale is preferable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Larger values rank first.
    HigherIsBetter,
    /// Smaller values rank first.
    LowerIsBetter,
}

impl Metric {
    /// All metrics in their canonical order.
    pub const ALL: [Metric; 3] = [Metric::Accuracy, Metric::Pruned, Metric::Time];

    /// Return the preferred direction for ranking by this metric.
    #[must_use]
    pub fn direction(self) -> Direction {
        match self {
            Metric::Accuracy | Metric::Pruned => Direction::HigherIsBetter,
            Metric::Time => Direction::LowerIsBetter,
        }
    }

    /// Compare two values so that the better one orders first.
    ///
    /// Uses [`f64::total_cmp`], so the ordering is total even for values that
    /// bypassed validation.
    #[must_use]
    pub fn better_first(self, a: f64, b: f64) -> Ordering {
        match self.direction() {
            Direction::HigherIsBetter => b.total_cmp(&a),
            Direction::LowerIsBetter => a.total_cmp(&b),
        }
    }

    /// Return the field name used in result documents.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Accuracy => "accuracy",
            Metric::Pruned => "pruned",
            Metric::Time => "times",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
