use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// `{alias} is an alias for {name}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CnameEntry {
    /// Canonical name the alias points at.
    pub name: String,
    /// The name that was looked up.
    pub alias: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressEntry {
    pub name: String,
    pub address: IpAddr,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MxEntry {
    pub name: String,
    pub preference: u16,
    pub exchange: String,
}

/// Everything a host lookup found for one name, keyed by record type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMap {
    #[serde(rename = "CNAME")]
    pub cname: Vec<CnameEntry>,

    #[serde(rename = "A")]
    pub a: Vec<AddressEntry>,

    #[serde(rename = "AAAA")]
    pub aaaa: Vec<AddressEntry>,

    #[serde(rename = "MX")]
    pub mx: Vec<MxEntry>,
}

impl RecordMap {
    pub fn is_empty(&self) -> bool {
        self.cname.is_empty() && self.a.is_empty() && self.aaaa.is_empty() && self.mx.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cname.len() + self.a.len() + self.aaaa.len() + self.mx.len()
    }
}
