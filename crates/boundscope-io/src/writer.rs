//! JSON and CSV artifact writer for computed views.

use std::fs;
use std::path::{Path, PathBuf};

use boundscope_aggregate::{
    AllWindowsView, ComparisonView, GlobalView, HeatmapMatrix, SingleView, View,
};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::domain::ReportName;
use crate::IoError;

/// Writes computed views to report artifacts.
///
/// Creates the output directory on construction if it does not exist.
/// Output files are named `{report}_{view}.json`, plus
/// `{report}_heatmap.csv` for the global heatmap.
pub struct ReportWriter {
    output_dir: PathBuf,
    report: ReportName,
}

#[derive(Serialize)]
struct Artifact<'a, T: Serialize> {
    report: &'a str,
    view: &'a str,
    #[serde(flatten)]
    data: &'a T,
}

impl ReportWriter {
    /// Create a new writer targeting the given directory and report name.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::OutputDirCreate`] if the directory cannot be created.
    #[instrument(skip_all, fields(dir = %output_dir.display(), report = %report))]
    pub fn new(output_dir: &Path, report: ReportName) -> Result<Self, IoError> {
        fs::create_dir_all(output_dir).map_err(|e| IoError::OutputDirCreate {
            path: output_dir.to_path_buf(),
            source: e,
        })?;
        debug!("output directory ready");
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            report,
        })
    }

    /// Write a single-cell view to `{report}_single.json`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::WriteFile`] if the file cannot be written.
    pub fn write_single(&self, view: &SingleView) -> Result<PathBuf, IoError> {
        self.write_json("single", view)
    }

    /// Write an all-windows view to `{report}_windows.json`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::WriteFile`] if the file cannot be written.
    pub fn write_all_windows(&self, view: &AllWindowsView) -> Result<PathBuf, IoError> {
        self.write_json("windows", view)
    }

    /// Write a comparison view to `{report}_compare.json`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::WriteFile`] if the file cannot be written.
    pub fn write_comparison(&self, view: &ComparisonView) -> Result<PathBuf, IoError> {
        self.write_json("compare", view)
    }

    /// Write a global view to `{report}_global.json`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::WriteFile`] if the file cannot be written.
    pub fn write_global(&self, view: &GlobalView) -> Result<PathBuf, IoError> {
        self.write_json("global", view)
    }

    /// Write whichever view was computed, plus the heatmap CSV for a global
    /// view. Returns every path written.
    ///
    /// # Errors
    ///
    /// Propagates the first write failure.
    pub fn write_view(&self, view: &View) -> Result<Vec<PathBuf>, IoError> {
        Ok(match view {
            View::Single(v) => vec![self.write_single(v)?],
            View::AllWindows(v) => vec![self.write_all_windows(v)?],
            View::Comparison(v) => vec![self.write_comparison(v)?],
            View::Global(v) => vec![self.write_global(v)?, self.write_heatmap_csv(&v.heatmap)?],
        })
    }

    /// Write the heatmap to `{report}_heatmap.csv`.
    ///
    /// The header is `dataset` followed by one column per window label; each
    /// following row holds one dataset's mean pruned counts.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::CsvWrite`] if the file cannot be created or written.
    #[instrument(skip_all)]
    pub fn write_heatmap_csv(&self, heatmap: &HeatmapMatrix) -> Result<PathBuf, IoError> {
        let path = self
            .output_dir
            .join(format!("{}_heatmap.csv", self.report.as_str()));
        let csv_err = |e: csv::Error| IoError::CsvWrite {
            path: path.clone(),
            source: e,
        };

        let mut wtr = csv::Writer::from_path(&path).map_err(csv_err)?;

        let mut header = Vec::with_capacity(heatmap.columns().len() + 1);
        header.push("dataset".to_string());
        header.extend(heatmap.columns().iter().map(|w| w.label()));
        wtr.write_record(&header).map_err(csv_err)?;

        for (name, row) in heatmap.rows().iter().zip(heatmap.values()) {
            let mut record = Vec::with_capacity(row.len() + 1);
            record.push(name.to_string());
            record.extend(row.iter().map(|v| v.to_string()));
            wtr.write_record(&record).map_err(csv_err)?;
        }
        wtr.flush().map_err(|e| IoError::WriteFile {
            path: path.clone(),
            source: e,
        })?;

        info!(path = %path.display(), rows = heatmap.rows().len(), "heatmap written");
        Ok(path)
    }

    #[instrument(skip(self, data))]
    fn write_json<T: Serialize>(&self, view: &str, data: &T) -> Result<PathBuf, IoError> {
        let path = self
            .output_dir
            .join(format!("{}_{view}.json", self.report.as_str()));

        let artifact = Artifact {
            report: self.report.as_str(),
            view,
            data,
        };
        let json = serde_json::to_string_pretty(&artifact).map_err(|e| IoError::Serialize {
            path: path.clone(),
            source: e,
        })?;
        fs::write(&path, &json).map_err(|e| IoError::WriteFile {
            path: path.clone(),
            source: e,
        })?;

        info!(path = %path.display(), "{view} view written");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boundscope_aggregate::{comparison_view, global_view};
    use boundscope_core::{BoundRegistry, ResultTable, ResultTableBuilder};
    use tempfile::TempDir;

    fn table() -> ResultTable {
        let reg = BoundRegistry::new(["A", "B"]).unwrap();
        let mut b = ResultTableBuilder::new(reg);
        b.insert("DS1", "w1", Some(&[0.9, 0.8]), Some(&[100.0, 50.0]), Some(&[5.0, 6.0])).unwrap();
        b.insert("DS2", "w10", Some(&[0.5, 0.5]), Some(&[10.0, 30.0]), Some(&[1.0, 2.0])).unwrap();
        b.build()
    }

    fn writer(dir: &TempDir) -> ReportWriter {
        ReportWriter::new(dir.path(), ReportName::new("unit".into()).unwrap()).unwrap()
    }

    #[test]
    fn creates_nested_output_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        ReportWriter::new(&nested, ReportName::new("r".into()).unwrap()).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn comparison_artifact_has_header_fields() {
        let dir = TempDir::new().unwrap();
        let path = writer(&dir).write_comparison(&comparison_view(&table(), "w1")).unwrap();
        assert_eq!(path.file_name().unwrap(), "unit_compare.json");

        let content: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(content["report"], "unit");
        assert_eq!(content["view"], "compare");
        assert_eq!(content["window"], "w1");
        assert_eq!(content["datasets_with_data"], 1);
    }

    #[test]
    fn heatmap_csv_layout() {
        let dir = TempDir::new().unwrap();
        let view = global_view(&table());
        let path = writer(&dir).write_heatmap_csv(&view.heatmap).unwrap();
        let text = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["dataset,1,10", "DS1,75,0", "DS2,0,20"]);
    }

    #[test]
    fn global_view_writes_json_and_csv() {
        let dir = TempDir::new().unwrap();
        let view = View::Global(global_view(&table()));
        let paths = writer(&dir).write_view(&view).unwrap();
        assert_eq!(paths.len(), 2);
        assert!(paths.iter().all(|p| p.exists()));
    }

    #[test]
    fn output_dir_blocked_by_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("occupied");
        fs::write(&file, b"x").unwrap();
        let result = ReportWriter::new(&file.join("sub"), ReportName::new("r".into()).unwrap());
        assert!(matches!(result, Err(IoError::OutputDirCreate { .. })));
    }
}
