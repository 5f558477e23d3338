mod collect_records;
mod lookup_hosts;

pub use collect_records::CollectRecordsUseCase;
pub use lookup_hosts::LookupHostsUseCase;
