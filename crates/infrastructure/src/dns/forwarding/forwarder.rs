use super::message_builder::MessageBuilder;
use super::response_parser::ResponseParser;
use crate::dns::transport::UdpTransport;
use async_trait::async_trait;
use rootwalk_application::ports::QueryTransport;
use rootwalk_domain::{DnsQuery, DnsResponse, DomainError};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::debug;

/// Sends one question to one server over UDP and parses what comes back.
pub struct DnsForwarder {
    port: u16,
}

impl DnsForwarder {
    pub fn new(port: u16) -> Self {
        Self { port }
    }
}

#[async_trait]
impl QueryTransport for DnsForwarder {
    async fn query(
        &self,
        query: &DnsQuery,
        server: IpAddr,
        timeout: Duration,
    ) -> Result<DnsResponse, DomainError> {
        let (id, request_bytes) = MessageBuilder::build_query_with_id(query)?;
        let server_addr = SocketAddr::new(server, self.port);

        debug!(query = %query, server = %server_addr, id = id, "Forwarding query");

        let transport = UdpTransport::new(server_addr);
        let response_bytes = transport.send(&request_bytes, timeout).await?;

        ResponseParser::parse(&response_bytes)
    }
}
