#![allow(dead_code)]
#![allow(unused_imports)]

pub mod builders;

pub use builders::*;
pub use dns_server_mock::{MockDnsServer, Reply};
