//! Remote call errors, split into authorization and transient failures.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// The caller's identity is not allowed to make this call. Never retried.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Actor not available")]
    ActorUnavailable,

    /// Network or service failure. Retried with backoff.
    #[error("Service error: {0}")]
    Service(String),
}

impl RemoteError {
    /// Classify a raw error message reported by the actor.
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.contains("Unauthorized") {
            RemoteError::Unauthorized(message)
        } else {
            RemoteError::Service(message)
        }
    }

    pub fn is_authorization(&self) -> bool {
        matches!(self, RemoteError::Unauthorized(_))
    }

    pub fn is_transient(&self) -> bool {
        !self.is_authorization()
    }
}

pub type RemoteResult<T> = std::result::Result<T, RemoteError>;
