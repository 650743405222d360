//! I/O error types for boundscope-io.

use std::path::PathBuf;

use boundscope_core::TableError;

/// Errors from loading results and writing report artifacts.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when the results file does not exist or is unreadable.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when the results document is not valid JSON or does not have
    /// the dataset → window → metrics shape.
    #[error("JSON parse error in {origin} at line {line}, column {column}")]
    JsonParse {
        /// File path, or `<memory>` for in-memory documents.
        origin: String,
        /// Line of the error (1-based).
        line: usize,
        /// Column of the error (1-based).
        column: usize,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// Returned when the document parses but a cell fails validation.
    #[error("invalid results in {origin}")]
    InvalidTable {
        /// File path, or `<memory>` for in-memory documents.
        origin: String,
        /// Underlying validation error.
        source: TableError,
    },

    /// Returned when a bound override list fails registry validation.
    #[error("invalid bound registry")]
    InvalidRegistry {
        /// Underlying validation error.
        source: TableError,
    },

    /// Returned when the report name contains characters outside `[a-zA-Z0-9_-]`.
    #[error("invalid report name \"{name}\": must match [a-zA-Z0-9_-]+")]
    InvalidReportName {
        /// The invalid name.
        name: String,
    },

    /// Returned when the output directory cannot be created.
    #[error("cannot create output directory {path}")]
    OutputDirCreate {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when a JSON artifact cannot be serialized.
    #[error("cannot serialize {path}")]
    Serialize {
        /// Destination path.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// Returned when a result file cannot be written.
    #[error("cannot write file {path}")]
    WriteFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when a CSV artifact cannot be written.
    #[error("cannot write CSV {path}")]
    CsvWrite {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying CSV error.
        source: csv::Error,
    },
}
