//! Iterative resolution from the root servers down.
//!
//! Two halves call into each other: the root driver (`driver.rs`) tries each
//! root server in turn and restarts on CNAME answers, and the referral walker
//! (`walker.rs`) follows glue and NS referrals from one server until a
//! terminal response. Only one query is ever in flight.
//!
//! Each top-level resolution keeps the set of (server, question) pairs it has
//! already sent. A pair is never sent twice, which bounds the walk by the
//! number of distinct pairs even when referrals point back at each other.

mod driver;
mod walker;

use crate::ports::{DnsResolver, QueryTransport};
use async_trait::async_trait;
use rustc_hash::FxHashSet;
use rootwalk_domain::{DnsQuery, DnsResponse, DomainError, ResolverConfig};
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Questions already sent to each server during one top-level resolution.
pub(crate) type Visited = FxHashSet<(IpAddr, DnsQuery)>;

pub struct IterativeResolver {
    transport: Arc<dyn QueryTransport>,
    root_servers: Arc<[IpAddr]>,
    query_timeout: Duration,
    max_depth: usize,
}

impl IterativeResolver {
    pub fn new(transport: Arc<dyn QueryTransport>, config: &ResolverConfig) -> Self {
        info!(
            root_servers = config.root_servers.len(),
            timeout_ms = config.query_timeout_ms,
            max_depth = config.max_depth,
            "Iterative resolver created"
        );

        Self {
            transport,
            root_servers: Arc::from(config.root_servers.as_slice()),
            query_timeout: config.query_timeout(),
            max_depth: config.max_depth,
        }
    }

    pub fn root_servers(&self) -> &[IpAddr] {
        &self.root_servers
    }
}

#[async_trait]
impl DnsResolver for IterativeResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResponse, DomainError> {
        let mut visited = Visited::default();
        self.resolve_from_roots(query, 0, &mut visited).await
    }
}
