use rootwalk_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    info!(
        root_servers = config.resolver.root_servers.len(),
        port = config.resolver.port,
        timeout_ms = config.resolver.query_timeout_ms,
        "Configuration loaded"
    );

    Ok(config)
}
