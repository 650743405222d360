//! Window identifiers with numeric ordering.

use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

/// A window identifier such as `"w5"`.
///
/// Keys order by the number embedded in the identifier, so `"w2"` sorts
/// before `"w10"`. The number is the first run of ASCII digits. Keys with the
/// same number, or with no digits at all, fall back to comparing the raw
/// string, and digit-less keys sort after every numbered key.
#[derive(Debug, Clone)]
pub struct WindowKey {
    raw: String,
    number: Option<u64>,
}

impl WindowKey {
    /// Parse a window identifier. Never fails; identifiers without digits
    /// simply have no numeric part.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let number = embedded_number(&raw);
        Self { raw, number }
    }

    /// Return the identifier exactly as it appeared in the results.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Return the number embedded in the identifier, typically a window
    /// size in percent.
    #[must_use]
    pub fn percent(&self) -> Option<u64> {
        self.number
    }

    /// Return a short axis label: the embedded number (`"w5"` → `"5"`), or
    /// the raw identifier if it has none.
    #[must_use]
    pub fn label(&self) -> String {
        match self.number {
            Some(n) => n.to_string(),
            None => self.raw.clone(),
        }
    }
}

fn embedded_number(raw: &str) -> Option<u64> {
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let digits: &str = raw[start..]
        .split(|c: char| !c.is_ascii_digit())
        .next()
        .unwrap_or("");
    // Saturate absurdly long digit runs rather than dropping the key's order.
    Some(digits.parse().unwrap_or(u64::MAX))
}

impl PartialEq for WindowKey {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for WindowKey {}

impl std::hash::Hash for WindowKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl Ord for WindowKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.number, other.number) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.raw.cmp(&other.raw)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.raw.cmp(&other.raw),
        }
    }
}

impl PartialOrd for WindowKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for WindowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for WindowKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl From<&str> for WindowKey {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}
