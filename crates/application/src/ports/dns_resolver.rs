use async_trait::async_trait;
use rootwalk_domain::{DnsQuery, DnsResponse, DomainError};

#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Resolve `query` to its final response.
    ///
    /// Unreachable or misbehaving servers never surface as errors: a query
    /// nobody could answer comes back as an empty response. `Err` is reserved
    /// for problems with the query itself.
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResponse, DomainError>;
}
