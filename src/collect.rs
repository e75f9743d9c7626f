//! Folds a list of input files into one merged record list.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ReportError;
use crate::parser::parse_document;
use crate::record::ScanRecord;

/// A file that was skipped, and why.
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: ReportError,
}

/// Everything a pass over the input files produced.
///
/// `sources` holds the per-file record counts of the files that
/// parsed, in input order.
#[derive(Debug, Default)]
pub struct Collected {
    pub records: Vec<ScanRecord>,
    pub skipped: Vec<SkippedFile>,
    pub sources: Vec<(PathBuf, usize)>,
}

/// Extract records from every input file, in the order given.
///
/// Per-file failures (wrong extension, unreadable file, malformed
/// XML) land in `skipped`; they never abort the pass. Emitting the
/// warnings is the caller's job, which keeps this a pure fold over
/// the file list.
pub fn collect_records(paths: &[PathBuf]) -> Collected {
    paths.iter().fold(Collected::default(), |mut acc, path| {
        match extract_file(path) {
            Ok(records) => {
                acc.sources.push((path.clone(), records.len()));
                acc.records.extend(records);
            }
            Err(reason) => acc.skipped.push(SkippedFile {
                path: path.clone(),
                reason,
            }),
        }
        acc
    })
}

fn extract_file(path: &Path) -> Result<Vec<ScanRecord>, ReportError> {
    if !has_xml_extension(path) {
        return Err(ReportError::NotXml(path.to_path_buf()));
    }
    let xml = fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let source_file = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    parse_document(&xml, &source_file)
}

fn has_xml_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
}
