pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod root_servers;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use root_servers::ROOT_SERVERS;
