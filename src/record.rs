//! Scan records and the derived report statistics.

use std::collections::HashSet;

/// Placeholder for absent optional scan data.
pub const UNKNOWN: &str = "Unknown";

/// Placeholder for an absent hostname.
pub const NOT_AVAILABLE: &str = "N/A";

/// Services considered high-risk when found open.
pub const CRITICAL_SERVICES: [&str; 12] = [
    "ssh",
    "telnet",
    "ftp",
    "http",
    "https",
    "rdp",
    "ms-wbt-server",
    "mysql",
    "postgresql",
    "mssql",
    "smb",
    "microsoft-ds",
];

/// Substitute a sentinel for absent optional data.
///
/// Every optional element or attribute in the source XML goes through
/// this, so downstream consumers never see an empty field.
pub fn or_sentinel(value: Option<String>, sentinel: &str) -> String {
    value.unwrap_or_else(|| sentinel.to_string())
}

/// One (host, port) pair discovered in a scan.
///
/// Port numbers stay textual: some scanners emit non-numeric
/// identifiers, and the reports never do arithmetic on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRecord {
    pub ip: String,
    pub hostname: String,
    pub port_number: String,
    pub protocol: String,
    pub state: String,
    pub service: String,
    pub details: String,
    pub source_file: String,
}

impl ScanRecord {
    /// Whether this record is an open port running a critical service.
    pub fn is_critical(&self) -> bool {
        self.state == "open" && CRITICAL_SERVICES.contains(&self.service.as_str())
    }
}

/// Aggregate counts over a [`ReportSet`].
///
/// States other than open/closed/filtered count only toward the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    pub total: usize,
    pub hosts: usize,
    pub services: usize,
    pub open: usize,
    pub closed: usize,
    pub filtered: usize,
}

impl ReportSummary {
    pub fn from_records(records: &[ScanRecord]) -> Self {
        let (open, closed, filtered) =
            records
                .iter()
                .fold((0, 0, 0), |(o, c, f), r| match r.state.as_str() {
                    "open" => (o + 1, c, f),
                    "closed" => (o, c + 1, f),
                    "filtered" => (o, c, f + 1),
                    _ => (o, c, f),
                });

        let hosts: HashSet<&str> = records.iter().map(|r| r.ip.as_str()).collect();
        let services: HashSet<&str> = records.iter().map(|r| r.service.as_str()).collect();

        Self {
            total: records.len(),
            hosts: hosts.len(),
            services: services.len(),
            open,
            closed,
            filtered,
        }
    }
}

/// The full in-memory table: an ordered sequence of records plus
/// derived read-only statistics.
#[derive(Debug, Clone)]
pub struct ReportSet {
    pub records: Vec<ScanRecord>,
}

impl ReportSet {
    pub fn new(records: Vec<ScanRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ScanRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Retain only records whose state is exactly "open".
    pub fn open_only(self) -> Self {
        Self {
            records: self
                .records
                .into_iter()
                .filter(|r| r.state == "open")
                .collect(),
        }
    }

    pub fn summary(&self) -> ReportSummary {
        ReportSummary::from_records(&self.records)
    }

    /// The `limit` most frequent service names among open records,
    /// descending by count. Ties keep first-encountered order.
    pub fn top_services(&self, limit: usize) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for record in self.records.iter().filter(|r| r.state == "open") {
            match counts.iter_mut().find(|(name, _)| *name == record.service) {
                Some((_, n)) => *n += 1,
                None => counts.push((record.service.clone(), 1)),
            }
        }
        // Stable sort keeps first-encountered order within equal counts.
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(limit);
        counts
    }

    /// Open records running a service on the critical allow-list.
    pub fn critical_open(&self) -> Vec<&ScanRecord> {
        self.records.iter().filter(|r| r.is_critical()).collect()
    }
}
