use rootwalk_application::services::IterativeResolver;
use rootwalk_application::use_cases::{CollectRecordsUseCase, LookupHostsUseCase};
use rootwalk_domain::Config;
use rootwalk_infrastructure::dns::DnsForwarder;
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub lookup: LookupHostsUseCase,
}

impl DnsServices {
    pub fn new(config: &Config) -> Self {
        info!("Initializing iterative resolver");

        let transport = Arc::new(DnsForwarder::new(config.resolver.port));
        let resolver = Arc::new(IterativeResolver::new(transport, &config.resolver));
        let collector = CollectRecordsUseCase::new(resolver);

        Self {
            lookup: LookupHostsUseCase::new(collector),
        }
    }
}
