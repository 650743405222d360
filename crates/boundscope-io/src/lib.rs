//! Results loading and report writing for boundscope.

mod domain;
mod error;
mod reader;
mod writer;

pub use domain::ReportName;
pub use error::IoError;
pub use reader::ResultsReader;
pub use writer::ReportWriter;
