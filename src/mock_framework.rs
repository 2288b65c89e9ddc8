//! # Mock Framework
//!
//! Utilities for testing clients and the dashboard in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_update`] to assert behavior.
//! [`MockSeedSource`] and [`ScriptedConfirm`] stand in for the network and the user.

use std::collections::VecDeque;
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use crate::dashboard::Confirm;
use crate::error::SeedError;
use crate::seeder::{RemoteAddress, RemoteUser, SeedSource};

type Responder<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Creates a mock client and a receiver for asserting requests.
///
/// Instead of spinning up a `ResourceActor`, the client sends to a channel the
/// test controls. The test inspects each request and answers it by hand, which
/// makes success, failure and ordering deterministic.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::CreatePayload, Responder<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, Responder<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, T::Patch, Responder<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update { id, patch, respond_to }) => Some((id, patch, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, Responder<()>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Seed source answering from memory.
pub enum MockSeedSource {
    Users(Vec<RemoteUser>),
    Unreachable,
}

impl MockSeedSource {
    /// `count` remote users with ids `1..=count`, each with a street.
    pub fn with_users(count: u64) -> Self {
        MockSeedSource::Users(
            (1..=count)
                .map(|id| RemoteUser {
                    id,
                    name: format!("Remote {}", id),
                    address: Some(RemoteAddress { street: Some(format!("Street {}", id)) }),
                })
                .collect(),
        )
    }
}

#[async_trait]
impl SeedSource for MockSeedSource {
    async fn fetch(&self) -> Result<Vec<RemoteUser>, SeedError> {
        match self {
            MockSeedSource::Users(users) => Ok(users.clone()),
            MockSeedSource::Unreachable => Err(SeedError::Status { status: 503 }),
        }
    }
}

/// Answers confirmation prompts from a script and records what was asked.
#[derive(Default)]
pub struct ScriptedConfirm {
    answers: VecDeque<bool>,
    pub prompts: Vec<String>,
}

impl ScriptedConfirm {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            prompts: Vec::new(),
        }
    }
}

#[async_trait]
impl Confirm for ScriptedConfirm {
    async fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::domain::{Gender, User, UserCreate};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<User>(10);

        let create_task = tokio::spawn(async move {
            let user = UserCreate {
                name: "Test".to_string(),
                address: "Jl. Uji".to_string(),
                gender: Gender::Male,
                birth_date: NaiveDate::from_ymd_opt(2001, 2, 3).unwrap(),
            };
            client.create(user).await
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.name, "Test");
        responder.send(Ok(41)).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(41));
    }

    #[tokio::test]
    async fn test_mock_delete_maps_not_found() {
        use crate::clients::UserClient;
        use crate::user_actor::UserError;

        let (inner, mut receiver) = create_mock_client::<User>(10);
        let client = UserClient::new(inner);
        let delete_task = tokio::spawn(async move { client.delete_user(12).await });

        let (id, responder) = expect_delete(&mut receiver).await.expect("Expected Delete request");
        assert_eq!(id, 12);
        responder.send(Err(FrameworkError::NotFound("12".into()))).unwrap();

        assert_eq!(delete_task.await.unwrap(), Err(UserError::NotFound(12)));
    }

    #[tokio::test]
    async fn test_not_found_keeps_requested_id() {
        use crate::clients::UserClient;
        use crate::domain::UserUpdate;
        use crate::user_actor::UserError;

        let (inner, mut receiver) = create_mock_client::<User>(10);
        let client = UserClient::new(inner);
        let task = tokio::spawn(async move {
            let update = UserUpdate {
                name: "Eka".into(),
                address: "Jl. Uji".into(),
                gender: Gender::Female,
                birth_date: NaiveDate::from_ymd_opt(1995, 4, 1).unwrap(),
            };
            let updated = client.update_user(31, update).await;
            let fetched = client.get_user(32).await;
            (updated, fetched)
        });

        let (id, _, responder) = expect_update(&mut receiver).await.expect("Expected Update request");
        assert_eq!(id, 31);
        responder.send(Err(FrameworkError::NotFound("user-31".into()))).unwrap();

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, 32);
        responder.send(Err(FrameworkError::ActorDropped)).unwrap();

        let (updated, fetched) = task.await.unwrap();
        assert_eq!(updated, Err(UserError::NotFound(31)));
        assert!(matches!(fetched, Err(UserError::ActorCommunicationError(_))));
    }

    #[tokio::test]
    async fn test_scripted_confirm_defaults_to_no() {
        let mut confirm = ScriptedConfirm::answering(&[true]);
        assert!(confirm.confirm("first?").await);
        assert!(!confirm.confirm("second?").await);
        assert_eq!(confirm.prompts, vec!["first?", "second?"]);
    }
}
