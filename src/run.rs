//! Run orchestration: collect records, enforce the fatal conditions,
//! write the requested artifacts, and map outcomes to an exit code.
//!
//! Exit codes: 0 on success, 1 when the run produced no data (nothing
//! is written), 2 when an artifact could not be written.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use colored::Colorize;

use crate::cli::Cli;
use crate::collect::collect_records;
use crate::error::{ReportError, Result};
use crate::record::ReportSet;
use crate::reporter::{
    csv::CsvReporter, html::HtmlReporter, terminal::TerminalSummary, xlsx::XlsxReporter, Reporter,
};

/// Output file names are fixed, written to the working directory.
pub const CSV_OUTPUT: &str = "nmap_parser_output.csv";
pub const XLSX_OUTPUT: &str = "nmap_parser_output.xlsx";
pub const HTML_OUTPUT: &str = "nmap_report.html";

pub fn run(cli: &Cli) -> ExitCode {
    let collected = collect_records(&cli.files);

    for skip in &collected.skipped {
        eprintln!("{} {}", "Warning:".yellow(), skip.reason);
    }
    if cli.verbose {
        for (path, count) in &collected.sources {
            println!("{}: {} record(s)", path.display(), count);
        }
    }

    let report = ReportSet::new(collected.records);
    if report.is_empty() {
        eprintln!("{} {}", "Error:".red().bold(), ReportError::NoRecords);
        return ExitCode::from(1);
    }

    let report = if cli.open_only {
        report.open_only()
    } else {
        report
    };
    if report.is_empty() {
        eprintln!("{} {}", "Error:".red().bold(), ReportError::NoOpenPorts);
        return ExitCode::from(1);
    }

    match write_artifacts(cli, &report) {
        Ok(written) => {
            print!("{}", TerminalSummary::new().render(&report));
            for path in written {
                println!("Report written to {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn write_artifacts(cli: &Cli, report: &ReportSet) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    write_artifact(CSV_OUTPUT, &CsvReporter.render(report)?, &mut written)?;
    if cli.xlsx {
        write_artifact(XLSX_OUTPUT, &XlsxReporter.render(report)?, &mut written)?;
    }
    if cli.html {
        write_artifact(HTML_OUTPUT, &HtmlReporter::new().render(report)?, &mut written)?;
    }
    Ok(written)
}

fn write_artifact(name: &str, bytes: &[u8], written: &mut Vec<PathBuf>) -> Result<()> {
    let path = PathBuf::from(name);
    fs::write(&path, bytes).map_err(|source| ReportError::Write {
        path: path.clone(),
        source,
    })?;
    written.push(path);
    Ok(())
}
