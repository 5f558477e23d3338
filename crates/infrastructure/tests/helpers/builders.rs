#![allow(dead_code)]
use super::Reply;
use hickory_proto::rr::rdata::{A, AAAA, CNAME, MX, NS, SOA};
use hickory_proto::rr::{Name, RData, Record};
use rootwalk_domain::ResolverConfig;
use std::net::IpAddr;
use std::str::FromStr;

pub fn name(s: &str) -> Name {
    Name::from_str(s).unwrap()
}

pub fn a(owner: &str, address: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::A(A(address.parse().unwrap())))
}

pub fn aaaa(owner: &str, address: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::AAAA(AAAA(address.parse().unwrap())))
}

pub fn cname(owner: &str, target: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::CNAME(CNAME(name(target))))
}

pub fn mx(owner: &str, preference: u16, exchange: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::MX(MX::new(preference, name(exchange))))
}

pub fn ns(zone: &str, host: &str) -> Record {
    Record::from_rdata(name(zone), 172800, RData::NS(NS(name(host))))
}

pub fn soa(zone: &str) -> Record {
    let soa = SOA::new(
        name(&format!("ns1.{}", zone)),
        name(&format!("hostmaster.{}", zone)),
        1,
        3600,
        900,
        604800,
        300,
    );
    Record::from_rdata(name(zone), 900, RData::SOA(soa))
}

pub fn answer(answers: Vec<Record>) -> Reply {
    Reply::Sections {
        answers,
        authority: vec![],
        additional: vec![],
    }
}

pub fn referral(authority: Vec<Record>, additional: Vec<Record>) -> Reply {
    Reply::Sections {
        answers: vec![],
        authority,
        additional,
    }
}

pub fn nodata(zone: &str) -> Reply {
    referral(vec![soa(zone)], vec![])
}

/// Resolver pointed at one or more mock servers sharing `port`.
pub fn resolver_config(roots: &[IpAddr], port: u16) -> ResolverConfig {
    ResolverConfig {
        root_servers: roots.to_vec(),
        port,
        query_timeout_ms: 200,
        max_depth: 30,
    }
}
