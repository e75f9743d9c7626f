//! Nmap XML extraction.
//!
//! Deserializes one scan document into a flat sequence of
//! [`ScanRecord`]s. The models are intentionally partial: only the
//! elements and attributes the reports consume are mapped, everything
//! else in the document is ignored.

use serde::Deserialize;

use crate::error::{ReportError, Result};
use crate::record::{or_sentinel, ScanRecord, NOT_AVAILABLE, UNKNOWN};

#[derive(Debug, Deserialize)]
struct NmapRun {
    #[serde(rename = "host", default)]
    hosts: Vec<Host>,
}

#[derive(Debug, Deserialize)]
struct Host {
    #[serde(rename = "address", default)]
    addresses: Vec<Address>,
    hostnames: Option<Hostnames>,
    ports: Option<Ports>,
}

#[derive(Debug, Deserialize)]
struct Address {
    #[serde(rename = "@addr")]
    addr: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Hostnames {
    #[serde(rename = "hostname", default)]
    hostnames: Vec<Hostname>,
}

#[derive(Debug, Deserialize)]
struct Hostname {
    #[serde(rename = "@name")]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Ports {
    #[serde(rename = "port", default)]
    ports: Vec<Port>,
}

#[derive(Debug, Deserialize)]
struct Port {
    #[serde(rename = "@protocol")]
    protocol: Option<String>,
    #[serde(rename = "@portid")]
    portid: Option<String>,
    state: Option<State>,
    service: Option<Service>,
}

#[derive(Debug, Deserialize)]
struct State {
    #[serde(rename = "@state")]
    state: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Service {
    #[serde(rename = "@name")]
    name: Option<String>,
    #[serde(rename = "@product")]
    product: Option<String>,
    #[serde(rename = "@version")]
    version: Option<String>,
    #[serde(rename = "@extrainfo")]
    extrainfo: Option<String>,
}

/// Parse one scan document into records.
///
/// `source_file` labels every record so rows stay attributable after
/// multiple documents are merged. Malformed XML is the only failure;
/// missing optional elements and attributes become sentinels.
pub fn parse_document(xml: &str, source_file: &str) -> Result<Vec<ScanRecord>> {
    let run: NmapRun = quick_xml::de::from_str(xml).map_err(|source| ReportError::Parse {
        path: source_file.into(),
        source,
    })?;

    let mut records = Vec::new();
    for host in run.hosts {
        // A host with no address child carries nothing attributable.
        let Some(address) = host.addresses.into_iter().next() else {
            continue;
        };
        let Some(ports) = host.ports else {
            continue;
        };

        let ip = or_sentinel(address.addr, UNKNOWN);
        let hostname = or_sentinel(
            host.hostnames
                .and_then(|h| h.hostnames.into_iter().next())
                .and_then(|h| h.name),
            NOT_AVAILABLE,
        );

        for port in ports.ports {
            records.push(ScanRecord {
                ip: ip.clone(),
                hostname: hostname.clone(),
                port_number: or_sentinel(port.portid, UNKNOWN),
                protocol: or_sentinel(port.protocol, UNKNOWN),
                state: or_sentinel(port.state.and_then(|s| s.state), UNKNOWN),
                service: or_sentinel(
                    port.service.as_ref().and_then(|s| s.name.clone()),
                    UNKNOWN,
                ),
                details: compose_details(port.service.as_ref()),
                source_file: source_file.to_string(),
            });
        }
    }
    Ok(records)
}

/// Join product, "(version)", and extrainfo with single spaces,
/// keeping whichever are present in that order.
fn compose_details(service: Option<&Service>) -> String {
    let Some(service) = service else {
        return UNKNOWN.to_string();
    };

    let mut parts = Vec::new();
    if let Some(product) = &service.product {
        parts.push(product.clone());
    }
    if let Some(version) = &service.version {
        parts.push(format!("({})", version));
    }
    if let Some(extrainfo) = &service.extrainfo {
        parts.push(extrainfo.clone());
    }

    if parts.is_empty() {
        UNKNOWN.to_string()
    } else {
        parts.join(" ")
    }
}
