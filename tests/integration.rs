use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SAMPLE_SCAN: &str = include_str!("fixtures/sample_scan.xml");
const ALL_CLOSED_SCAN: &str = include_str!("fixtures/all_closed.xml");
const SECOND_SCAN: &str = include_str!("fixtures/second_scan.xml");

fn cmd() -> Command {
    Command::cargo_bin("nmap-report").unwrap()
}

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn read_csv(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("nmap_parser_output.csv")).unwrap()
}

#[test]
fn test_single_file_writes_csv() {
    let dir = TempDir::new().unwrap();
    let scan = write_fixture(&dir, "scan.xml", SAMPLE_SCAN);

    cmd()
        .current_dir(dir.path())
        .arg(scan)
        .assert()
        .success()
        .stdout(predicate::str::contains("nmap_parser_output.csv"))
        .stdout(predicate::str::contains("4 records across 2 hosts"));

    let csv = read_csv(&dir);
    assert!(csv.starts_with("IP,Hostname,Port Number,Protocol,State,Service,Details,Source File"));
    assert_eq!(csv.lines().count(), 5);
    assert!(csv.contains("192.168.1.10,gateway.lan,22,tcp,open,ssh,OpenSSH (8.9p1) Ubuntu Linux,scan.xml"));
}

#[test]
fn test_no_valid_inputs_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let not_xml = write_fixture(&dir, "scan.txt", SAMPLE_SCAN);

    cmd()
        .current_dir(dir.path())
        .arg(not_xml)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Warning:"))
        .stderr(predicate::str::contains("No scan records found"));

    assert!(!dir.path().join("nmap_parser_output.csv").exists());
}

#[test]
fn test_missing_file_warns_and_exits_nonzero() {
    let dir = TempDir::new().unwrap();

    cmd()
        .current_dir(dir.path())
        .arg("/no/such/scan.xml")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_open_only_on_all_closed_input_is_fatal() {
    let dir = TempDir::new().unwrap();
    let scan = write_fixture(&dir, "closed.xml", ALL_CLOSED_SCAN);

    cmd()
        .current_dir(dir.path())
        .arg("--open-only")
        .arg(scan)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No open ports found"));

    assert!(!dir.path().join("nmap_parser_output.csv").exists());
}

#[test]
fn test_open_only_keeps_only_open_rows() {
    let dir = TempDir::new().unwrap();
    let scan = write_fixture(&dir, "scan.xml", SAMPLE_SCAN);

    cmd()
        .current_dir(dir.path())
        .arg("--open-only")
        .arg(scan)
        .assert()
        .success();

    let csv = read_csv(&dir);
    assert_eq!(csv.lines().count(), 3);
    assert!(csv.lines().skip(1).all(|line| line.contains(",open,")));
}

#[test]
fn test_merging_preserves_file_order() {
    let dir = TempDir::new().unwrap();
    let first = write_fixture(&dir, "first.xml", SAMPLE_SCAN);
    let second = write_fixture(&dir, "second.xml", SECOND_SCAN);

    cmd()
        .current_dir(dir.path())
        .arg(first)
        .arg(second)
        .assert()
        .success();

    let csv = read_csv(&dir);
    let rows: Vec<&str> = csv.lines().skip(1).collect();
    assert_eq!(rows.len(), 6);
    assert!(rows[..4].iter().all(|row| row.ends_with("first.xml")));
    assert!(rows[4..].iter().all(|row| row.ends_with("second.xml")));
}

#[test]
fn test_malformed_file_is_skipped_with_warning() {
    let dir = TempDir::new().unwrap();
    let broken = write_fixture(&dir, "broken.xml", "<nmaprun><host>");
    let good = write_fixture(&dir, "good.xml", SAMPLE_SCAN);

    cmd()
        .current_dir(dir.path())
        .arg(broken)
        .arg(good)
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning:"))
        .stderr(predicate::str::contains("broken.xml"));

    let csv = read_csv(&dir);
    assert_eq!(csv.lines().count(), 5);
}

#[test]
fn test_xlsx_flag_writes_workbook() {
    let dir = TempDir::new().unwrap();
    let scan = write_fixture(&dir, "scan.xml", SAMPLE_SCAN);

    cmd()
        .current_dir(dir.path())
        .arg("--xlsx")
        .arg(scan)
        .assert()
        .success()
        .stdout(predicate::str::contains("nmap_parser_output.xlsx"));

    let bytes = fs::read(dir.path().join("nmap_parser_output.xlsx")).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_html_flag_writes_dashboard() {
    let dir = TempDir::new().unwrap();
    let scan = write_fixture(&dir, "scan.xml", SAMPLE_SCAN);

    cmd()
        .current_dir(dir.path())
        .arg("--html")
        .arg(scan)
        .assert()
        .success()
        .stdout(predicate::str::contains("nmap_report.html"));

    let html = fs::read_to_string(dir.path().join("nmap_report.html")).unwrap();
    assert!(html.contains("<!DOCTYPE html>"));
    assert_eq!(html.matches("<tr data-state=").count(), 4);
    assert!(html.contains("data-ip=\"192.168.1.10\""));
}

#[test]
fn test_xlsx_and_html_not_written_unless_requested() {
    let dir = TempDir::new().unwrap();
    let scan = write_fixture(&dir, "scan.xml", SAMPLE_SCAN);

    cmd().current_dir(dir.path()).arg(scan).assert().success();

    assert!(dir.path().join("nmap_parser_output.csv").exists());
    assert!(!dir.path().join("nmap_parser_output.xlsx").exists());
    assert!(!dir.path().join("nmap_report.html").exists());
}

#[test]
fn test_rerun_produces_identical_csv() {
    let dir = TempDir::new().unwrap();
    let scan = write_fixture(&dir, "scan.xml", SAMPLE_SCAN);

    cmd()
        .current_dir(dir.path())
        .arg(&scan)
        .assert()
        .success();
    let first = read_csv(&dir);

    cmd()
        .current_dir(dir.path())
        .arg(&scan)
        .assert()
        .success();
    let second = read_csv(&dir);

    assert_eq!(first, second);
}

#[test]
fn test_verbose_prints_per_file_counts() {
    let dir = TempDir::new().unwrap();
    let scan = write_fixture(&dir, "scan.xml", SAMPLE_SCAN);

    cmd()
        .current_dir(dir.path())
        .arg("--verbose")
        .arg(&scan)
        .assert()
        .success()
        .stdout(predicate::str::contains("4 record(s)"));
}

#[test]
fn test_no_arguments_is_a_usage_error() {
    cmd().assert().failure();
}

#[test]
fn test_fixture_files_exist() {
    // include_str! already guarantees this at compile time; keep a
    // runtime anchor so the fixture directory is not pruned.
    assert!(Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/sample_scan.xml")
        .exists());
}
