use clap::Parser;
use nmap_report::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    nmap_report::run::run(&cli)
}
