//! The ordered bound registry and its index type.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::error::TableError;

/// Names of the six lower bounds benchmarked by a standard run, in canonical order.
pub const STANDARD_BOUNDS: [&str; 6] = [
    "None",
    "Keogh",
    "Improved",
    "Enhanced(5)",
    "Petitjean",
    "Webb",
];

/// Display colors paired with [`STANDARD_BOUNDS`] by position.
pub const STANDARD_COLORS: [&str; 6] = [
    "#667eea", "#764ba2", "#f093fb", "#4facfe", "#43e97b", "#fa709a",
];

/// Position of a bound in its [`BoundRegistry`]. Wraps a zero-based index.
///
/// Ordering follows registry order, so "lowest index wins" tie-breaks are
/// expressed as `min` over `BoundId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BoundId(usize);

impl BoundId {
    /// Create a bound id from a zero-based index.
    ///
    /// The index is not checked against any registry; lookups through
    /// [`BoundRegistry::name`] return `None` for out-of-range ids.
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Return the zero-based registry index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for BoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered list of bound names. Position in the list is the canonical
/// [`BoundId`] used by every metrics cell and derived view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundRegistry {
    names: Vec<String>,
    colors: Vec<String>,
}

impl BoundRegistry {
    /// The six-bound registry used by standard benchmark runs.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            names: STANDARD_BOUNDS.iter().map(|s| (*s).to_string()).collect(),
            colors: STANDARD_COLORS.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Build a registry from bound names in canonical order.
    ///
    /// Colors are assigned from [`STANDARD_COLORS`], cycling when there are
    /// more than six bounds.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`TableError::EmptyRegistry`] | `names` is empty |
    /// | [`TableError::EmptyBoundName`] | A name is the empty string |
    /// | [`TableError::DuplicateBoundName`] | A name appears more than once |
    pub fn new<I, S>(names: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(TableError::EmptyRegistry);
        }

        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(names.len());
        for (index, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err(TableError::EmptyBoundName { index });
            }
            if let Some(&first) = seen.get(name.as_str()) {
                return Err(TableError::DuplicateBoundName {
                    name: name.clone(),
                    first,
                    second: index,
                });
            }
            seen.insert(name, index);
        }

        let colors = (0..names.len())
            .map(|i| STANDARD_COLORS[i % STANDARD_COLORS.len()].to_string())
            .collect();
        Ok(Self { names, colors })
    }

    /// Return the number of bounds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Return true if the registry has no bounds.
    ///
    /// Registries built through [`BoundRegistry::new`] or
    /// [`BoundRegistry::standard`] are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Return the name of `id`, or `None` if it is out of range.
    #[must_use]
    pub fn name(&self, id: BoundId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    /// Return the display color of `id`, or `None` if it is out of range.
    #[must_use]
    pub fn color(&self, id: BoundId) -> Option<&str> {
        self.colors.get(id.index()).map(String::as_str)
    }

    /// Return the id of the bound called `name`.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<BoundId> {
        self.names.iter().position(|n| n == name).map(BoundId::new)
    }

    /// Iterate over all bound ids in registry order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = BoundId> + '_ {
        (0..self.names.len()).map(BoundId::new)
    }

    /// Iterate over `(id, name)` pairs in registry order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (BoundId, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (BoundId::new(i), name.as_str()))
    }

    /// Return all bound names in registry order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for BoundRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
