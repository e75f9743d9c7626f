//! Terminal summary output.

use colored::Colorize;

use crate::record::ReportSet;

/// Renders the post-run summary printed to stdout.
pub struct TerminalSummary;

impl TerminalSummary {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, report: &ReportSet) -> String {
        let summary = report.summary();
        let mut output = String::new();

        output.push_str(&format!(
            "{} {} records across {} hosts ({} services)\n",
            "Parsed:".bold(),
            summary.total,
            summary.hosts,
            summary.services
        ));
        output.push_str(&format!(
            "  {} {}   {} {}   {} {}\n",
            "open".green().bold(),
            summary.open,
            "closed".red(),
            summary.closed,
            "filtered".yellow(),
            summary.filtered
        ));

        let critical = report.critical_open();
        if !critical.is_empty() {
            output.push_str(&format!(
                "{} {} critical service(s) open:\n",
                "Warning:".yellow().bold(),
                critical.len()
            ));
            for record in critical {
                output.push_str(&format!(
                    "  {}:{} {}\n",
                    record.ip, record.port_number, record.service
                ));
            }
        }

        output
    }
}

impl Default for TerminalSummary {
    fn default() -> Self {
        Self::new()
    }
}
