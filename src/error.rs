use thiserror::Error;

/// Errors raised while talking to the notification banner actor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NotifierError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

/// Errors from fetching or mapping the remote seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Seed endpoint returned status {status}")]
    Status { status: u16 },
    #[error("Failed to parse seed response: {0}")]
    Parse(String),
    #[error("Seed endpoint is invalid: {0}")]
    InvalidEndpoint(String),
}

/// Errors from loading or validating the application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
