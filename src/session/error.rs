use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur during session operations.
///
/// Domain-level failure modes (missing selections, unknown option keys)
/// never surface here; they degrade to documented defaults. These errors
/// cover the actor plumbing and attempts to mutate a confirmed order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(String),
    #[error("Order {0} is already confirmed")]
    AlreadyConfirmed(String),
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<FrameworkError> for SessionError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => SessionError::NotFound(id),
            other => SessionError::ActorCommunication(other.to_string()),
        }
    }
}
