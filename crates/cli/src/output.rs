//! Host-style and JSON rendering of a [`RecordMap`].

use rootwalk_domain::RecordMap;
use serde::Serialize;

/// Lines in CNAME, A, AAAA, MX order, each type in record map order.
pub fn host_lines(records: &RecordMap) -> Vec<String> {
    let mut lines = Vec::with_capacity(records.len());

    for entry in &records.cname {
        lines.push(format!("{} is an alias for {}", entry.alias, entry.name));
    }
    for entry in &records.a {
        lines.push(format!("{} has address {}", entry.name, entry.address));
    }
    for entry in &records.aaaa {
        lines.push(format!("{} has IPv6 address {}", entry.name, entry.address));
    }
    for entry in &records.mx {
        lines.push(format!(
            "{} mail is handled by {} {}",
            entry.name, entry.preference, entry.exchange
        ));
    }

    lines
}

#[derive(Serialize)]
struct JsonLine<'a> {
    name: &'a str,
    #[serde(flatten)]
    records: &'a RecordMap,
}

/// One JSON object per looked-up name.
pub fn json_line(name: &str, records: &RecordMap) -> serde_json::Result<String> {
    serde_json::to_string(&JsonLine { name, records })
}
