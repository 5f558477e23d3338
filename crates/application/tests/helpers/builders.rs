use rootwalk_domain::{
    DnsResponse, RecordData, ResolverConfig, ResourceRecord, ResponseStatus,
};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

pub const ROOT_A: IpAddr = IpAddr::V4(Ipv4Addr::new(198, 41, 0, 4));
pub const ROOT_B: IpAddr = IpAddr::V4(Ipv4Addr::new(199, 9, 14, 201));
pub const COM_TLD: IpAddr = IpAddr::V4(Ipv4Addr::new(192, 5, 6, 30));
pub const COM_TLD_2: IpAddr = IpAddr::V4(Ipv4Addr::new(192, 33, 14, 30));
pub const GOOGLE_NS: IpAddr = IpAddr::V4(Ipv4Addr::new(216, 239, 32, 10));
pub const EXAMPLE_NS: IpAddr = IpAddr::V4(Ipv4Addr::new(192, 0, 2, 53));

pub fn resolver_config(roots: &[IpAddr]) -> ResolverConfig {
    ResolverConfig {
        root_servers: roots.to_vec(),
        ..Default::default()
    }
}

pub fn a(name: &str, address: &str) -> ResourceRecord {
    let v4: Ipv4Addr = address.parse().unwrap();
    ResourceRecord::new(name, RecordData::A(v4))
}

pub fn aaaa(name: &str, address: &str) -> ResourceRecord {
    let v6: Ipv6Addr = address.parse().unwrap();
    ResourceRecord::new(name, RecordData::AAAA(v6))
}

pub fn cname(name: &str, target: &str) -> ResourceRecord {
    ResourceRecord::new(name, RecordData::CNAME(target.to_string()))
}

pub fn mx(name: &str, preference: u16, exchange: &str) -> ResourceRecord {
    ResourceRecord::new(
        name,
        RecordData::MX {
            preference,
            exchange: exchange.to_string(),
        },
    )
}

pub fn ns(zone: &str, nameserver: &str) -> ResourceRecord {
    ResourceRecord::new(zone, RecordData::NS(nameserver.to_string()))
}

pub fn soa(zone: &str) -> ResourceRecord {
    ResourceRecord::new(zone, RecordData::SOA)
}

pub fn answer(records: Vec<ResourceRecord>) -> DnsResponse {
    DnsResponse {
        answers: records,
        ..Default::default()
    }
}

pub fn referral(authority: Vec<ResourceRecord>, glue: Vec<ResourceRecord>) -> DnsResponse {
    DnsResponse {
        authority,
        additional: glue,
        ..Default::default()
    }
}

/// NOERROR/NODATA: SOA in the authority section and nothing else.
pub fn nodata(zone: &str) -> DnsResponse {
    DnsResponse {
        authority: vec![soa(zone)],
        ..Default::default()
    }
}

pub fn nxdomain(zone: &str) -> DnsResponse {
    DnsResponse {
        status: ResponseStatus::NxDomain,
        authority: vec![soa(zone)],
        ..Default::default()
    }
}

pub fn with_status(status: ResponseStatus) -> DnsResponse {
    DnsResponse {
        status,
        ..Default::default()
    }
}
