use super::CollectRecordsUseCase;
use crate::services::NameCache;
use rootwalk_domain::{DomainError, RecordMap};
use tracing::debug;

/// Top-level lookup driver: serves repeated names from the [`NameCache`] and
/// collects the rest.
pub struct LookupHostsUseCase {
    collector: CollectRecordsUseCase,
    cache: NameCache,
}

impl LookupHostsUseCase {
    pub fn new(collector: CollectRecordsUseCase) -> Self {
        Self {
            collector,
            cache: NameCache::new(),
        }
    }

    pub async fn execute(&mut self, name: &str) -> Result<RecordMap, DomainError> {
        if let Some(records) = self.cache.get(name) {
            debug!(name = %name, "Name cache hit");
            return Ok(records.clone());
        }

        let records = self.collector.execute(name).await?;
        self.cache.put(name, records.clone());
        Ok(records)
    }

    pub fn cache(&self) -> &NameCache {
        &self.cache
    }
}
