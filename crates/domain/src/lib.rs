//! Rootwalk Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod dns_response;
pub mod errors;
pub mod record_map;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ResolverConfig, ROOT_SERVERS};
pub use dns_query::DnsQuery;
pub use dns_record::{RecordData, RecordType, ResourceRecord};
pub use dns_response::{DnsResponse, ResponseStatus};
pub use errors::DomainError;
pub use record_map::{AddressEntry, CnameEntry, MxEntry, RecordMap};
