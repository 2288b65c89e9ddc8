use thiserror::Error;
use crate::actor_framework::FrameworkError;
use crate::domain::UserId;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(UserId),
    #[error("User already exists: {0}")]
    AlreadyExists(String),
    #[error("User validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl UserError {
    /// Maps a store error raised while addressing `id`, keeping the typed id
    /// for lookups that missed.
    pub fn for_id(id: UserId, error: FrameworkError) -> Self {
        match error {
            FrameworkError::NotFound(_) => UserError::NotFound(id),
            other => UserError::from(other),
        }
    }
}

impl From<FrameworkError> for UserError {
    fn from(error: FrameworkError) -> Self {
        match error {
            FrameworkError::NotFound(id) => match id.parse() {
                Ok(id) => UserError::NotFound(id),
                Err(_) => UserError::ActorCommunicationError(format!("Item not found: {}", id)),
            },
            FrameworkError::DuplicateId(id) => UserError::AlreadyExists(id),
            FrameworkError::Rejected(reason) => UserError::ValidationError(reason),
            other => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}
