mod dns_resolver;
mod query_transport;

pub use dns_resolver::DnsResolver;
pub use query_transport::QueryTransport;

// Re-export for convenience
pub use rootwalk_domain::{DnsQuery, DnsResponse};
