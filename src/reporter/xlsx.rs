//! XLSX output formatting.
//!
//! Serialization mechanics are delegated to `rust_xlsxwriter`; this
//! module only lays the record table onto one worksheet.

use rust_xlsxwriter::{Format, Workbook};

use crate::error::Result;
use crate::record::ReportSet;
use crate::reporter::{Reporter, COLUMNS};

/// Writes the record table as a single-sheet XLSX workbook.
pub struct XlsxReporter;

impl Reporter for XlsxReporter {
    fn render(&self, report: &ReportSet) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let bold = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Scan Results")?;

        for (col, name) in COLUMNS.iter().enumerate() {
            worksheet.write_with_format(0, col as u16, *name, &bold)?;
        }

        for (row, record) in report.records().iter().enumerate() {
            let row = row as u32 + 1;
            worksheet.write(row, 0, record.ip.as_str())?;
            worksheet.write(row, 1, record.hostname.as_str())?;
            worksheet.write(row, 2, record.port_number.as_str())?;
            worksheet.write(row, 3, record.protocol.as_str())?;
            worksheet.write(row, 4, record.state.as_str())?;
            worksheet.write(row, 5, record.service.as_str())?;
            worksheet.write(row, 6, record.details.as_str())?;
            worksheet.write(row, 7, record.source_file.as_str())?;
        }

        Ok(workbook.save_to_buffer()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::create_record;

    #[test]
    fn test_xlsx_renders_a_zip_container() {
        let report = ReportSet::new(vec![create_record("10.0.0.1", "22", "open", "ssh")]);
        let bytes = XlsxReporter.render(&report).unwrap();

        // XLSX is a zip archive; the local file header magic is "PK".
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_xlsx_renders_empty_table() {
        let report = ReportSet::new(vec![]);
        let bytes = XlsxReporter.render(&report).unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn test_xlsx_handles_many_rows() {
        let records = (0..500)
            .map(|i| create_record(&format!("10.0.{}.{}", i / 250, i % 250), "80", "open", "http"))
            .collect();
        let report = ReportSet::new(records);
        assert!(XlsxReporter.render(&report).is_ok());
    }
}
