#![allow(dead_code)]
#![allow(unused_imports)]

mod builders;
mod mock_transport;

pub use builders::*;
pub use mock_transport::{MockDnsResolver, ScriptedTransport};
