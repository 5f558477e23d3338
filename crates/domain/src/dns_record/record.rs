use std::net::{Ipv4Addr, Ipv6Addr};

/// Decoded RDATA of the record types the resolver inspects.
///
/// An SOA only matters as a marker for an authoritative negative, and any
/// other type is kept as `Other` so section lengths and ordering stay
/// faithful to the wire message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    CNAME(String),
    MX { preference: u16, exchange: String },
    NS(String),
    SOA,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    /// Owner name in absolute form, e.g. `google.com.`
    pub name: String,

    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(name: impl Into<String>, data: RecordData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    pub fn is_soa(&self) -> bool {
        matches!(self.data, RecordData::SOA)
    }
}
