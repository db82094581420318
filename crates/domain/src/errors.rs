use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Transport timeout requesting {url}")]
    TransportTimeout { url: String },

    #[error("Transport connection refused by {url}")]
    TransportConnectionRefused { url: String },

    #[error("Request to {url} failed: {message}")]
    TransportFailed { url: String, message: String },

    #[error("Unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },
}

impl DomainError {
    /// True for failures raised before or while talking to the server, as
    /// opposed to a response the server chose to send.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. }
                | DomainError::TransportConnectionRefused { .. }
                | DomainError::TransportFailed { .. }
        )
    }
}
