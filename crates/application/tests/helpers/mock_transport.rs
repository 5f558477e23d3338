use async_trait::async_trait;
use rootwalk_application::ports::{DnsResolver, QueryTransport};
use rootwalk_domain::{DnsQuery, DnsResponse, DomainError, RecordType};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

type ScriptKey = (IpAddr, DnsQuery);

/// In-memory network: every (server, name, type) has a canned outcome.
/// Anything not scripted times out.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Arc<RwLock<HashMap<ScriptKey, Result<DnsResponse, DomainError>>>>,
    sent: Arc<Mutex<Vec<ScriptKey>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&self, server: IpAddr, name: &str, record_type: RecordType, response: DnsResponse) {
        self.script
            .write()
            .unwrap()
            .insert((server, DnsQuery::new(name, record_type)), Ok(response));
    }

    pub fn fail(&self, server: IpAddr, name: &str, record_type: RecordType, error: DomainError) {
        self.script
            .write()
            .unwrap()
            .insert((server, DnsQuery::new(name, record_type)), Err(error));
    }

    pub fn query_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn sent(&self) -> Vec<(IpAddr, String, RecordType)> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|(server, query)| (*server, query.domain.to_string(), query.record_type))
            .collect()
    }

    pub fn servers_queried(&self) -> Vec<IpAddr> {
        self.sent.lock().unwrap().iter().map(|(server, _)| *server).collect()
    }

    pub fn was_queried(&self, server: IpAddr, name: &str, record_type: RecordType) -> bool {
        self.sent
            .lock()
            .unwrap()
            .contains(&(server, DnsQuery::new(name, record_type)))
    }
}

#[async_trait]
impl QueryTransport for ScriptedTransport {
    async fn query(
        &self,
        query: &DnsQuery,
        server: IpAddr,
        _timeout: Duration,
    ) -> Result<DnsResponse, DomainError> {
        let key = (server, query.clone());
        self.sent.lock().unwrap().push(key.clone());

        self.script
            .read()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| {
                Err(DomainError::TransportTimeout {
                    server: format!("{}:53", server),
                })
            })
    }
}

/// Resolver stub keyed by query, for exercising the record collector
/// without a referral chain.
#[derive(Clone, Default)]
pub struct MockDnsResolver {
    responses: Arc<RwLock<HashMap<DnsQuery, Result<DnsResponse, DomainError>>>>,
    calls: Arc<Mutex<usize>>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, name: &str, record_type: RecordType, response: DnsResponse) {
        self.responses
            .write()
            .unwrap()
            .insert(DnsQuery::new(name, record_type), Ok(response));
    }

    pub fn set_error(&self, name: &str, record_type: RecordType, error: DomainError) {
        self.responses
            .write()
            .unwrap()
            .insert(DnsQuery::new(name, record_type), Err(error));
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResponse, DomainError> {
        *self.calls.lock().unwrap() += 1;
        self.responses
            .read()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_else(|| Ok(DnsResponse::empty()))
    }
}
