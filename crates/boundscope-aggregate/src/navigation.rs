//! Explicit view selection.

use boundscope_core::ResultTable;
use serde::Serialize;

use crate::all_windows::{AllWindowsView, all_windows_view};
use crate::comparison::{ComparisonView, comparison_view};
use crate::error::SelectionMiss;
use crate::global::{GlobalView, global_view};
use crate::single::{SingleView, single_view};

/// Which view to compute, with every selector it needs spelled out.
///
/// There are no defaults: a caller that wants "the first dataset" must look
/// it up and pass it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// One dataset at one window.
    Single {
        /// Dataset name.
        dataset: String,
        /// Window identifier.
        window: String,
    },
    /// Every window of one dataset.
    AllWindows {
        /// Dataset name.
        dataset: String,
    },
    /// Every dataset at one window.
    Comparison {
        /// Window identifier.
        window: String,
    },
    /// Every dataset at every window.
    Global,
}

/// A computed view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    /// See [`single_view`].
    Single(SingleView),
    /// See [`all_windows_view`].
    AllWindows(AllWindowsView),
    /// See [`comparison_view`].
    Comparison(ComparisonView),
    /// See [`global_view`].
    Global(GlobalView),
}

impl Selection {
    /// Short name of the selected view, used in artifact file names.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Selection::Single { .. } => "single",
            Selection::AllWindows { .. } => "windows",
            Selection::Comparison { .. } => "compare",
            Selection::Global => "global",
        }
    }

    /// Compute the selected view from `table`.
    ///
    /// # Errors
    ///
    /// Propagates the [`SelectionMiss`] of the single and all-windows views.
    /// The comparison and global views never miss.
    pub fn evaluate(&self, table: &ResultTable) -> Result<View, SelectionMiss> {
        Ok(match self {
            Selection::Single { dataset, window } => View::Single(single_view(table, dataset, window)?),
            Selection::AllWindows { dataset } => View::AllWindows(all_windows_view(table, dataset)?),
            Selection::Comparison { window } => View::Comparison(comparison_view(table, window)),
            Selection::Global => View::Global(global_view(table)),
        })
    }
}

#[cfg(test)]
mod tests {
    use boundscope_core::{BoundRegistry, ResultTableBuilder};

    use super::*;

    fn table() -> ResultTable {
        let reg = BoundRegistry::new(["A", "B"]).unwrap();
        let mut b = ResultTableBuilder::new(reg);
        b.insert("DS", "w1", Some(&[0.9, 0.8]), Some(&[100.0, 50.0]), Some(&[5.0, 6.0])).unwrap();
        b.build()
    }

    #[test]
    fn dispatches_to_each_view() {
        let t = table();
        let single = Selection::Single { dataset: "DS".into(), window: "w1".into() };
        assert!(matches!(single.evaluate(&t), Ok(View::Single(_))));
        let windows = Selection::AllWindows { dataset: "DS".into() };
        assert!(matches!(windows.evaluate(&t), Ok(View::AllWindows(_))));
        let compare = Selection::Comparison { window: "w1".into() };
        assert!(matches!(compare.evaluate(&t), Ok(View::Comparison(_))));
        assert!(matches!(Selection::Global.evaluate(&t), Ok(View::Global(_))));
    }

    #[test]
    fn miss_propagates() {
        let sel = Selection::AllWindows { dataset: "absent".into() };
        assert!(matches!(sel.evaluate(&table()), Err(SelectionMiss::UnknownDataset { .. })));
    }

    #[test]
    fn kinds() {
        assert_eq!(Selection::Global.kind(), "global");
        assert_eq!(Selection::Comparison { window: "w1".into() }.kind(), "compare");
    }

    #[test]
    fn view_serializes_with_tag() {
        let view = Selection::Global.evaluate(&table()).unwrap();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["view"], "global");
        assert_eq!(json["wins"]["A"], 1);
    }
}
