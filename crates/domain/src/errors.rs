use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Malformed DNS message: {0}")]
    MalformedMessage(String),

    #[error("Upstream exchange failed: {0}")]
    UpstreamExchange(String),

    #[error("Transport timeout talking to {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("Store write failed: {0}")]
    StoreWrite(String),

    #[error("Store read failed: {0}")]
    StoreRead(String),

    #[error("Failed to write response to client: {0}")]
    ResponseWrite(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// Errors raised while talking to the upstream resolver.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::UpstreamExchange(_)
                | Self::TransportTimeout { .. }
                | Self::TransportConnectionRefused { .. }
        )
    }
}
