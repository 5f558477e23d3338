use super::{RecordData, ResourceRecord};
use std::fmt;
use std::net::IpAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseStatus {
    #[default]
    NoError,
    FormErr,
    ServFail,
    NxDomain,
    NotImp,
    Refused,
    Other(u16),
}

impl ResponseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseStatus::NoError => "NOERROR",
            ResponseStatus::FormErr => "FORMERR",
            ResponseStatus::ServFail => "SERVFAIL",
            ResponseStatus::NxDomain => "NXDOMAIN",
            ResponseStatus::NotImp => "NOTIMP",
            ResponseStatus::Refused => "REFUSED",
            ResponseStatus::Other(_) => "UNKNOWN",
        }
    }

    /// NOERROR and NXDOMAIN carry usable sections; everything else is a
    /// server-side failure.
    pub fn is_usable(&self) -> bool {
        matches!(self, ResponseStatus::NoError | ResponseStatus::NxDomain)
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseStatus::Other(code) => write!(f, "RCODE{}", code),
            _ => write!(f, "{}", self.as_str()),
        }
    }
}

/// One parsed DNS response, reduced to the three record sections the
/// referral walk classifies on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsResponse {
    pub status: ResponseStatus,

    pub answers: Vec<ResourceRecord>,

    pub authority: Vec<ResourceRecord>,

    pub additional: Vec<ResourceRecord>,
}

impl DnsResponse {
    /// The "no information" response a failed query degrades to.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty() && self.authority.is_empty() && self.additional.is_empty()
    }

    pub fn has_answers(&self) -> bool {
        !self.answers.is_empty()
    }

    /// Authority section opens with an SOA: the zone exists but holds nothing
    /// of the requested type.
    pub fn is_negative(&self) -> bool {
        self.authority.first().is_some_and(ResourceRecord::is_soa)
    }

    pub fn is_terminal(&self) -> bool {
        self.has_answers() || self.is_negative()
    }

    /// Target of the leading CNAME answer, if the answer opens with one.
    pub fn cname_target(&self) -> Option<&str> {
        match self.answers.first().map(|r| &r.data) {
            Some(RecordData::CNAME(target)) => Some(target),
            _ => None,
        }
    }

    /// IPv4 glue from the additional section, in section order.
    pub fn glue_addresses(&self) -> Vec<IpAddr> {
        self.additional
            .iter()
            .filter_map(|record| match record.data {
                RecordData::A(v4) => Some(IpAddr::V4(v4)),
                _ => None,
            })
            .collect()
    }

    /// First A record among the answers.
    pub fn first_ipv4_answer(&self) -> Option<IpAddr> {
        self.answers.iter().find_map(|record| match record.data {
            RecordData::A(v4) => Some(IpAddr::V4(v4)),
            _ => None,
        })
    }
}
