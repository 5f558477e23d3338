use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Transport timeout querying {server}")]
    TransportTimeout { server: String },

    #[error("Server {server} answered {rcode}")]
    ServerFailure { server: String, rcode: String },

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// Errors a single query can fail with that only close off one branch of
    /// the referral walk.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidDnsResponse(_)
                | DomainError::TransportTimeout { .. }
                | DomainError::ServerFailure { .. }
                | DomainError::IoError(_)
        )
    }
}
