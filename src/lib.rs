pub mod cli;
pub mod collect;
pub mod error;
pub mod parser;
pub mod record;
pub mod reporter;
pub mod run;

#[cfg(test)]
pub mod test_utils;

pub use cli::Cli;
pub use collect::{collect_records, Collected, SkippedFile};
pub use error::{ReportError, Result};
pub use parser::parse_document;
pub use record::{ReportSet, ReportSummary, ScanRecord, CRITICAL_SERVICES};
pub use reporter::{
    csv::CsvReporter, html::HtmlReporter, terminal::TerminalSummary, xlsx::XlsxReporter, Reporter,
};
