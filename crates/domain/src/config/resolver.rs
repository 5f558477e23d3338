use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::time::Duration;

use super::root_servers::ROOT_SERVERS;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Servers every resolution starts from, tried in order.
    #[serde(default = "default_root_servers")]
    pub root_servers: Vec<IpAddr>,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Upper bound on nested walk steps, NS address lookups and CNAME
    /// restarts for one top-level resolution.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl ResolverConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_servers: default_root_servers(),
            port: default_port(),
            query_timeout_ms: default_query_timeout_ms(),
            max_depth: default_max_depth(),
        }
    }
}

fn default_root_servers() -> Vec<IpAddr> {
    ROOT_SERVERS.iter().copied().map(IpAddr::V4).collect()
}

fn default_port() -> u16 {
    53
}

fn default_query_timeout_ms() -> u64 {
    3000
}

fn default_max_depth() -> usize {
    30
}
