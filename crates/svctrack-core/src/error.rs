//! Shared error type across svctrack crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input (bad service name, malformed config).
    BadRequest,
    /// Response body could not be encoded.
    Serialization,
    /// Configuration could not be loaded.
    Config,
    /// Listener could not be started.
    Bind,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and error bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::Serialization => "SERIALIZATION",
            ClientCode::Config => "CONFIG",
            ClientCode::Bind => "BIND",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SvcTrackError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum SvcTrackError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("serialization failed: {0}")]
    Serialization(String),
    #[error("config: {0}")]
    Config(String),
    #[error("bind failed: {0}")]
    Bind(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl SvcTrackError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            SvcTrackError::BadRequest(_) => ClientCode::BadRequest,
            SvcTrackError::Serialization(_) => ClientCode::Serialization,
            SvcTrackError::Config(_) => ClientCode::Config,
            SvcTrackError::Bind(_) => ClientCode::Bind,
            SvcTrackError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Whether the caller is at fault (4xx) rather than the server (5xx).
    pub fn is_client_error(&self) -> bool {
        matches!(self, SvcTrackError::BadRequest(_))
    }
}

impl From<serde_json::Error> for SvcTrackError {
    fn from(e: serde_json::Error) -> Self {
        SvcTrackError::Serialization(e.to_string())
    }
}
