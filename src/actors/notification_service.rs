use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, instrument};
use crate::clients::NotifierClient;
use crate::error::NotifierError;
use crate::messages::{NotifierRequest, ServiceResponse};

/// How long a banner stays visible unless configured otherwise.
pub const DEFAULT_BANNER_DURATION: Duration = Duration::from_secs(3);

/// Single-slot banner. A new message replaces the visible one and restarts
/// the timer, there is no queue.
pub struct NotificationService {
    receiver: mpsc::Receiver<NotifierRequest>,
    duration: Duration,
    banner: Option<String>,
    expires_at: Option<Instant>,
}

impl NotificationService {
    pub fn new(buffer_size: usize, duration: Duration) -> (Self, NotifierClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            duration,
            banner: None,
            expires_at: None,
        };
        (service, NotifierClient::new(sender))
    }

    #[instrument(name = "notification_service", skip(self))]
    pub async fn run(mut self) {
        info!("NotificationService starting");
        loop {
            let expires_at = self.expires_at;
            let expiry = async move {
                match expires_at {
                    Some(deadline) => sleep_until(deadline).await,
                    None => std::future::pending::<()>().await,
                }
            };

            tokio::select! {
                // Expiry wins ties so a read at the deadline never sees a stale banner.
                biased;
                _ = expiry => self.clear(),
                msg = self.receiver.recv() => match msg {
                    Some(NotifierRequest::Show { message, respond_to }) => {
                        self.handle_show(message, respond_to);
                    }
                    Some(NotifierRequest::Current { respond_to }) => {
                        let _ = respond_to.send(Ok(self.banner.clone()));
                    }
                    Some(NotifierRequest::Shutdown) | None => {
                        info!("NotificationService shutting down");
                        break;
                    }
                },
            }
        }
        info!("NotificationService stopped");
    }

    #[instrument(skip(self, respond_to))]
    fn handle_show(&mut self, message: String, respond_to: ServiceResponse<(), NotifierError>) {
        if let Some(previous) = self.banner.replace(message) {
            debug!(previous = %previous, "Replacing visible banner");
        }
        self.expires_at = Some(Instant::now() + self.duration);
        let _ = respond_to.send(Ok(()));
    }

    fn clear(&mut self) {
        debug!("Banner expired");
        self.banner = None;
        self.expires_at = None;
    }
}
