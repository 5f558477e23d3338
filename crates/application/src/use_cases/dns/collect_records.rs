use crate::ports::DnsResolver;
use rootwalk_domain::{
    AddressEntry, CnameEntry, DnsQuery, DnsResponse, DomainError, MxEntry, RecordData, RecordMap,
    RecordType,
};
use std::sync::Arc;
use tracing::debug;

/// Looks a name up as CNAME, A, AAAA and MX and gathers the answers into a
/// [`RecordMap`].
pub struct CollectRecordsUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl CollectRecordsUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, name: &str) -> Result<RecordMap, DomainError> {
        let mut records = RecordMap::default();

        for record_type in RecordType::HOST_LOOKUP {
            let response = self
                .resolver
                .resolve(&DnsQuery::new(name, record_type))
                .await?;
            Self::collect(name, record_type, &response, &mut records);
        }

        debug!(name = %name, records = records.len(), "Record map assembled");
        Ok(records)
    }

    fn collect(name: &str, record_type: RecordType, response: &DnsResponse, records: &mut RecordMap) {
        for record in &response.answers {
            match (record_type, &record.data) {
                (RecordType::CNAME, RecordData::CNAME(target)) => records.cname.push(CnameEntry {
                    name: target.clone(),
                    alias: name.to_string(),
                }),
                (RecordType::A, RecordData::A(address)) => records.a.push(AddressEntry {
                    name: record.name.clone(),
                    address: (*address).into(),
                }),
                (RecordType::AAAA, RecordData::AAAA(address)) => records.aaaa.push(AddressEntry {
                    name: record.name.clone(),
                    address: (*address).into(),
                }),
                (
                    RecordType::MX,
                    RecordData::MX {
                        preference,
                        exchange,
                    },
                ) => records.mx.push(MxEntry {
                    name: record.name.clone(),
                    preference: *preference,
                    exchange: exchange.clone(),
                }),
                _ => {}
            }
        }
    }
}
