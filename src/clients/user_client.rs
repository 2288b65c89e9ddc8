use tracing::{debug, instrument};
use crate::domain::{User, UserCreate, UserId, UserUpdate};
use crate::user_actor::UserError;
use crate::actor_framework::ResourceClient;

/// Client for interacting with the user store actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl_basic_client!(UserClient, User, UserId, UserError, user);

impl UserClient {
    /// Appends a new user and returns the id the store assigned.
    #[instrument(skip(self), fields(user_name = %payload.name))]
    pub async fn create_user(&self, payload: UserCreate) -> Result<UserId, UserError> {
        debug!("Sending request");
        self.inner.create(payload).await.map_err(UserError::from)
    }

    #[instrument(skip(self, update))]
    pub async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(|e| UserError::for_id(id, e))
    }

    /// Swaps the whole store for `users`, as done once by the seeder.
    #[instrument(skip(self, users), fields(count = users.len()))]
    pub async fn replace_users(&self, users: Vec<User>) -> Result<usize, UserError> {
        debug!("Sending request");
        self.inner.replace_all(users).await.map_err(UserError::from)
    }
}
