//! CSV output formatting.

use csv::Writer;

use crate::error::Result;
use crate::record::ReportSet;
use crate::reporter::{Reporter, COLUMNS};

/// Writes the record table as UTF-8 CSV, values verbatim.
pub struct CsvReporter;

impl Reporter for CsvReporter {
    fn render(&self, report: &ReportSet) -> Result<Vec<u8>> {
        let mut wtr = Writer::from_writer(Vec::new());

        wtr.write_record(COLUMNS)?;
        for record in report.records() {
            wtr.write_record([
                &record.ip,
                &record.hostname,
                &record.port_number,
                &record.protocol,
                &record.state,
                &record.service,
                &record.details,
                &record.source_file,
            ])?;
        }

        Ok(wtr
            .into_inner()
            .map_err(|e| crate::error::ReportError::Csv(e.into_error().into()))?)
    }
}
