use async_trait::async_trait;
use rootwalk_domain::{DnsQuery, DnsResponse, DomainError};
use std::net::IpAddr;
use std::time::Duration;

/// Sends one question to one server and waits for one answer.
#[async_trait]
pub trait QueryTransport: Send + Sync {
    async fn query(
        &self,
        query: &DnsQuery,
        server: IpAddr,
        timeout: Duration,
    ) -> Result<DnsResponse, DomainError>;
}
