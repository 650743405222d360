//! How often each bound was the most efficient.

use boundscope_core::{BoundId, Metric, ResultTable};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Win count of one bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinEntry {
    /// Registry position of the bound.
    pub bound: BoundId,
    /// Bound name.
    pub name: String,
    /// Number of cells the bound won.
    pub wins: usize,
}

/// Number of (dataset, window) cells each bound won on pruned count.
///
/// Every registry bound is listed, in registry order, including bounds that
/// never won. Serializes as a `name → wins` map in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinDistribution {
    entries: Vec<WinEntry>,
}

impl WinDistribution {
    /// Return the win count of `bound`, 0 for unknown bounds.
    #[must_use]
    pub fn wins(&self, bound: BoundId) -> usize {
        self.entries.get(bound.index()).map_or(0, |e| e.wins)
    }

    /// Return the win count of the bound called `name`.
    #[must_use]
    pub fn wins_by_name(&self, name: &str) -> Option<usize> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.wins)
    }

    /// Return the total number of credited cells.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.wins).sum()
    }

    /// Return the entries in registry order.
    #[must_use]
    pub fn entries(&self) -> &[WinEntry] {
        &self.entries
    }
}

impl Serialize for WinDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, &entry.wins)?;
        }
        map.end()
    }
}

/// Credit each cell that recorded pruned counts to its best bound.
///
/// Ties go to the lowest bound index.
#[must_use]
pub fn win_distribution(table: &ResultTable) -> WinDistribution {
    let registry = table.registry();
    let mut entries: Vec<WinEntry> = registry
        .iter()
        .map(|(bound, name)| WinEntry {
            bound,
            name: name.to_string(),
            wins: 0,
        })
        .collect();

    for (_, _, cell) in table.cells() {
        if let Some(best) = cell.best_bound(Metric::Pruned)
            && let Some(entry) = entries.get_mut(best.index())
        {
            entry.wins += 1;
        }
    }

    WinDistribution { entries }
}

#[cfg(test)]
mod tests {
    use boundscope_core::{BoundRegistry, ResultTableBuilder};

    use super::*;

    #[test]
    fn counts_every_bound_including_zero() {
        let reg = BoundRegistry::new(["A", "B", "C"]).unwrap();
        let mut b = ResultTableBuilder::new(reg);
        b.insert("DS1", "w1", None, Some(&[5.0, 9.0, 1.0]), None).unwrap();
        b.insert("DS1", "w2", None, Some(&[8.0, 2.0, 1.0]), None).unwrap();
        b.insert("DS2", "w1", None, Some(&[1.0, 7.0, 3.0]), None).unwrap();
        let d = win_distribution(&b.build());
        assert_eq!(d.wins(BoundId::new(0)), 1);
        assert_eq!(d.wins(BoundId::new(1)), 2);
        assert_eq!(d.wins(BoundId::new(2)), 0);
        assert_eq!(d.wins_by_name("C"), Some(0));
        assert_eq!(d.total(), 3);
    }

    #[test]
    fn tie_credits_lower_index() {
        let reg = BoundRegistry::new(["A", "B"]).unwrap();
        let mut b = ResultTableBuilder::new(reg);
        b.insert("DS", "w1", None, Some(&[4.0, 4.0]), None).unwrap();
        let d = win_distribution(&b.build());
        assert_eq!(d.wins_by_name("A"), Some(1));
        assert_eq!(d.wins_by_name("B"), Some(0));
    }

    #[test]
    fn cells_without_pruned_are_not_credited() {
        let reg = BoundRegistry::new(["A", "B"]).unwrap();
        let mut b = ResultTableBuilder::new(reg);
        b.insert("DS", "w1", Some(&[0.5, 0.6]), None, None).unwrap();
        assert_eq!(win_distribution(&b.build()).total(), 0);
    }

    #[test]
    fn serializes_as_ordered_map() {
        let reg = BoundRegistry::new(["Zed", "Alpha"]).unwrap();
        let mut b = ResultTableBuilder::new(reg);
        b.insert("DS", "w1", None, Some(&[1.0, 2.0]), None).unwrap();
        let json = serde_json::to_string(&win_distribution(&b.build())).unwrap();
        assert_eq!(json, r#"{"Zed":0,"Alpha":1}"#);
    }
}
