use tokio::sync::oneshot;
use crate::error::NotifierError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Messages understood by the notification banner actor.
#[derive(Debug)]
pub enum NotifierRequest {
    /// Replace the visible banner and restart its timer.
    Show {
        message: String,
        respond_to: ServiceResponse<(), NotifierError>,
    },
    Current {
        respond_to: ServiceResponse<Option<String>, NotifierError>,
    },
    Shutdown,
}
