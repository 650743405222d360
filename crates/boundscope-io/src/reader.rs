//! JSON results reader with full input validation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use boundscope_core::{BoundRegistry, ResultTable, ResultTableBuilder, TableError};
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use crate::IoError;

const MEMORY_ORIGIN: &str = "<memory>";

/// One cell as it appears in the results document. Any sequence may be absent.
#[derive(Debug, Deserialize)]
struct RawCell {
    #[serde(default)]
    accuracy: Option<Vec<f64>>,
    #[serde(default)]
    pruned: Option<Vec<f64>>,
    #[serde(default)]
    times: Option<Vec<f64>>,
}

type RawDocument = BTreeMap<String, BTreeMap<String, RawCell>>;

/// Reads a benchmark results document into a [`ResultTable`].
///
/// Expected JSON format:
///
/// ```json
/// {
///   "ECG200": {
///     "w1": { "accuracy": [..], "pruned": [..], "times": [..] },
///     "w2": { .. }
///   }
/// }
/// ```
///
/// Every present sequence must have one entry per registry bound. The
/// standard six-bound registry is used unless overridden.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`IoError::FileNotFound`] | File doesn't exist or is unreadable |
/// | [`IoError::JsonParse`] | Malformed JSON or wrong document shape |
/// | [`IoError::InvalidTable`] | A cell fails validation against the registry |
pub struct ResultsReader {
    path: PathBuf,
    registry: BoundRegistry,
}

impl ResultsReader {
    /// Create a new reader for the given results file.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            registry: BoundRegistry::standard(),
        }
    }

    /// Use `registry` instead of the standard six bounds.
    #[must_use]
    pub fn with_registry(mut self, registry: BoundRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Use a registry built from `names`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidRegistry`] if the names are empty or repeat.
    pub fn with_bound_names<I, S>(self, names: I) -> Result<Self, IoError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let registry =
            BoundRegistry::new(names).map_err(|source| IoError::InvalidRegistry { source })?;
        Ok(self.with_registry(registry))
    }

    /// Return the registry cells will be validated against.
    pub fn registry(&self) -> &BoundRegistry {
        &self.registry
    }

    /// Read and validate the results file.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn read(&self) -> Result<ResultTable, IoError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| IoError::FileNotFound {
            path: self.path.clone(),
            source: e,
        })?;
        debug!(bytes = text.len(), "read results file");

        let table = parse_document(&text, &self.path.display().to_string(), &self.registry)?;
        info!(
            n_datasets = table.dataset_count(),
            n_cells = table.cell_count(),
            n_bounds = self.registry.len(),
            "results loaded"
        );
        Ok(table)
    }

    /// Parse an in-memory results document, e.g. an embedded fixture.
    ///
    /// # Errors
    ///
    /// Same as [`ResultsReader::read`], minus [`IoError::FileNotFound`].
    pub fn parse_str(json: &str, registry: BoundRegistry) -> Result<ResultTable, IoError> {
        parse_document(json, MEMORY_ORIGIN, &registry)
    }
}

fn parse_document(
    json: &str,
    origin: &str,
    registry: &BoundRegistry,
) -> Result<ResultTable, IoError> {
    let raw: RawDocument = serde_json::from_str(json).map_err(|e| IoError::JsonParse {
        origin: origin.to_string(),
        line: e.line(),
        column: e.column(),
        source: e,
    })?;

    let invalid = |source: TableError| IoError::InvalidTable {
        origin: origin.to_string(),
        source,
    };

    let mut builder = ResultTableBuilder::new(registry.clone());
    for (dataset, windows) in &raw {
        if windows.is_empty() {
            warn!(dataset = %dataset, "dataset has no windows");
            builder.dataset(dataset).map_err(invalid)?;
            continue;
        }
        for (window, cell) in windows {
            builder
                .insert(
                    dataset,
                    window,
                    cell.accuracy.as_deref(),
                    cell.pruned.as_deref(),
                    cell.times.as_deref(),
                )
                .map_err(invalid)?;
        }
    }

    if raw.is_empty() {
        warn!(origin, "results document has no datasets");
    }

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use boundscope_core::Metric;
    use tempfile::NamedTempFile;

    fn write_json(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    fn two_bounds() -> BoundRegistry {
        BoundRegistry::new(["A", "B"]).unwrap()
    }

    #[test]
    fn read_valid_document() {
        let json = r#"{"DS1": {"w1": {"accuracy": [0.9, 0.8], "pruned": [100, 50], "times": [5, 6]}}}"#;
        let f = write_json(json);
        let table = ResultsReader::new(f.path())
            .with_registry(two_bounds())
            .read()
            .unwrap();
        assert_eq!(table.cell_count(), 1);
        let cell = table.cell("DS1", "w1").unwrap();
        assert_eq!(cell.series(Metric::Pruned), vec![100.0, 50.0]);
    }

    #[test]
    fn missing_fields_are_tolerated() {
        let json = r#"{"DS": {"w1": {"pruned": [1, 2]}, "w2": {}}}"#;
        let table = ResultsReader::parse_str(json, two_bounds()).unwrap();
        assert!(!table.cell("DS", "w1").unwrap().has(Metric::Accuracy));
        assert!(!table.cell("DS", "w2").unwrap().has(Metric::Pruned));
    }

    #[test]
    fn empty_document_is_valid() {
        let table = ResultsReader::parse_str("{}", BoundRegistry::standard()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn dataset_without_windows_is_kept() {
        let table = ResultsReader::parse_str(r#"{"Empty": {}}"#, two_bounds()).unwrap();
        assert_eq!(table.dataset_count(), 1);
        assert_eq!(table.cell_count(), 0);
    }

    #[test]
    fn standard_registry_by_default() {
        let reader = ResultsReader::new(Path::new("results.json"));
        assert_eq!(reader.registry().len(), 6);
    }

    #[test]
    fn bound_name_override() {
        let reader = ResultsReader::new(Path::new("results.json"))
            .with_bound_names(["X", "Y", "Z"])
            .unwrap();
        assert_eq!(reader.registry().len(), 3);

        let err = ResultsReader::new(Path::new("results.json"))
            .with_bound_names(["X", "X"])
            .err()
            .unwrap();
        assert!(matches!(err, IoError::InvalidRegistry { .. }));
    }

    #[test]
    fn error_file_not_found() {
        let result = ResultsReader::new(Path::new("/nonexistent/results.json")).read();
        assert!(matches!(result, Err(IoError::FileNotFound { .. })));
    }

    #[test]
    fn error_malformed_json() {
        let result = ResultsReader::parse_str(r#"{"DS": {"w1": "#, two_bounds());
        assert!(matches!(result, Err(IoError::JsonParse { .. })));
    }

    #[test]
    fn error_wrong_shape() {
        let result = ResultsReader::parse_str(r#"{"DS": [1, 2, 3]}"#, two_bounds());
        assert!(matches!(result, Err(IoError::JsonParse { .. })));
    }

    #[test]
    fn error_misaligned_series() {
        let json = r#"{"DS": {"w1": {"pruned": [1, 2, 3]}}}"#;
        let f = write_json(json);
        let result = ResultsReader::new(f.path()).with_registry(two_bounds()).read();
        match result {
            Err(IoError::InvalidTable { source: TableError::InvalidCell { window, .. }, .. }) => {
                assert_eq!(window, "w1");
            }
            other => panic!("expected InvalidTable, got {other:?}"),
        }
    }

    #[test]
    fn error_standard_registry_rejects_two_bound_cells() {
        let json = r#"{"DS": {"w1": {"pruned": [1, 2]}}}"#;
        let result = ResultsReader::parse_str(json, BoundRegistry::standard());
        assert!(matches!(result, Err(IoError::InvalidTable { .. })));
    }
}
