//! Error types for nmap-report.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Not an XML file: {0}")]
    NotXml(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse XML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: quick_xml::DeError,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("No scan records found in the supplied files")]
    NoRecords,

    #[error("No open ports found after filtering")]
    NoOpenPorts,
}

/// Result type alias for operations using ReportError.
pub type Result<T> = std::result::Result<T, ReportError>;
