use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};
use crate::error::NotifierError;
use crate::messages::NotifierRequest;

/// Handle to the notification banner actor.
#[derive(Clone)]
pub struct NotifierClient {
    sender: mpsc::Sender<NotifierRequest>,
}

impl NotifierClient {
    pub fn new(sender: mpsc::Sender<NotifierRequest>) -> Self {
        Self { sender }
    }

    /// Ask the banner actor to stop even while other clients are alive.
    pub async fn shutdown(&self) {
        let _ = self.sender.send(NotifierRequest::Shutdown).await;
    }
}

client_method!(NotifierClient => fn show(message: String) -> () as NotifierRequest::Show, Error = NotifierError);
client_method!(NotifierClient => fn current() -> Option<String> as NotifierRequest::Current, Error = NotifierError);
