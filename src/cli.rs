use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "nmap-report",
    version,
    about = "Convert nmap XML scan output into CSV, XLSX, and HTML reports",
    long_about = "nmap-report flattens one or more nmap XML documents into a uniform \
port table and renders it as CSV (always), an XLSX workbook, and a self-contained \
HTML dashboard with client-side filtering."
)]
pub struct Cli {
    /// Nmap XML files to convert
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Keep only ports reported as open
    #[arg(short, long)]
    pub open_only: bool,

    /// Also write an XLSX workbook (nmap_parser_output.xlsx)
    #[arg(short, long)]
    pub xlsx: bool,

    /// Also write an HTML dashboard (nmap_report.html)
    #[arg(long)]
    pub html: bool,

    /// Print per-file record counts
    #[arg(short, long)]
    pub verbose: bool,
}
