pub mod csv;
pub mod html;
pub mod terminal;
pub mod xlsx;

use crate::error::Result;
use crate::record::ReportSet;

/// Column order shared by the tabular outputs.
pub const COLUMNS: [&str; 8] = [
    "IP",
    "Hostname",
    "Port Number",
    "Protocol",
    "State",
    "Service",
    "Details",
    "Source File",
];

/// Renders a report to the bytes of one output artifact.
pub trait Reporter {
    fn render(&self, report: &ReportSet) -> Result<Vec<u8>>;
}
