use tracing::{info, error};
use crate::actor_framework::ResourceActor;
use crate::actors::NotificationService;
use crate::clients::{NotifierClient, UserClient};
use crate::config::AppConfig;
use crate::domain::User;
use crate::user_actor::timestamp_ids;

/// Owns the dashboard's actors.
///
/// Responsible for starting them, handing out their clients, and handling shutdown.
pub struct DashboardSystem {
    pub user_client: UserClient,
    pub notifier_client: NotifierClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl DashboardSystem {
    pub fn new(config: &AppConfig) -> Self {
        info!("Starting dashboard system");

        // 1. User store
        let (user_actor, user_resource_client) =
            ResourceActor::<User>::new(config.store.buffer_size, timestamp_ids());
        let user_client = UserClient::new(user_resource_client);
        let user_handle = tokio::spawn(user_actor.run());

        // 2. Notification banner
        let (notification_service, notifier_client) =
            NotificationService::new(config.store.buffer_size, config.notification.duration());
        let notifier_handle = tokio::spawn(notification_service.run());

        Self {
            user_client,
            notifier_client,
            handles: vec![user_handle, notifier_handle],
        }
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        // The banner actor also listens for an explicit request; the store
        // actor stops once every client is dropped.
        self.notifier_client.shutdown().await;
        drop(self.notifier_client);
        drop(self.user_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
