use serde_json::Value;
use thiserror::Error;

/// Coarse classification of a failure, used by front ends to decide how to
/// surface it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected locally before any network call.
    Validation,
    /// The backend rejected the presented credential (HTTP 401).
    Authorization,
    /// Any other non-success status from the backend.
    Backend,
    /// Connectivity problems, including timeouts.
    Network,
    /// The session could not be recovered; the user must log in again.
    Session,
    /// Failure inside the client itself (token storage, decoding).
    Client,
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{message}")]
    Backend {
        status: u16,
        message: String,
        payload: Option<Value>,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Session expired")]
    SessionExpired,

    #[error("Token storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Builds a backend failure from a status and the (possibly absent) JSON
    /// error body. The body's `message` field wins over the generic text.
    pub fn backend(status: u16, payload: Option<Value>) -> Self {
        let message = payload
            .as_ref()
            .and_then(|p| p.get("message"))
            .and_then(message_text)
            .unwrap_or_else(|| format!("Error {}", status));

        Self::Backend {
            status,
            message,
            payload,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Backend { status: 401, .. } => ErrorKind::Authorization,
            Self::Backend { .. } => ErrorKind::Backend,
            Self::Network(_) | Self::Timeout(_) => ErrorKind::Network,
            Self::SessionExpired => ErrorKind::Session,
            Self::Storage(_) | Self::Serialization(_) | Self::IoError(_) | Self::Internal(_) => {
                ErrorKind::Client
            }
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Backend { status, .. } => Some(*status),
            Self::SessionExpired => Some(401),
            _ => None,
        }
    }

    pub fn payload(&self) -> Option<&Value> {
        match self {
            Self::Backend { payload, .. } => payload.as_ref(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Backend { status: 401, .. })
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Backend { status: 404, .. })
    }
}

// NestJS validation errors send `message` as an array of strings.
fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join("; "))
            }
        }
        _ => None,
    }
}
