//! One-shot population of the user store from a remote collection endpoint.
//!
//! The remote data has no gender or birth date, so the seeder fills both with
//! placeholders drawn from an injected random source. Pass a fixed
//! `rng_seed` in the configuration to get the same placeholders on every run.

use std::time::Duration;
use async_trait::async_trait;
use chrono::{DateTime, Months, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, instrument};
use crate::config::SeedConfig;
use crate::domain::{Gender, User, UserId};
use crate::error::SeedError;

/// One entry of the remote collection. Only the fields the dashboard uses.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteUser {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub address: Option<RemoteAddress>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteAddress {
    #[serde(default)]
    pub street: Option<String>,
}

/// Where seed data comes from.
#[async_trait]
pub trait SeedSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<RemoteUser>, SeedError>;
}

/// Reads the seed collection with a single unauthenticated GET.
pub struct HttpSeedSource {
    http: Client,
    endpoint: String,
}

impl HttpSeedSource {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, SeedError> {
        let endpoint = endpoint.into();
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(SeedError::InvalidEndpoint(
                "endpoint must start with http:// or https://".into(),
            ));
        }

        let mut builder = Client::builder()
            .user_agent(format!("UserDashboard/{}", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            endpoint,
        })
    }
}

#[async_trait]
impl SeedSource for HttpSeedSource {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch(&self) -> Result<Vec<RemoteUser>, SeedError> {
        debug!("Fetching seed users");
        let response = self.http.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SeedError::Status { status: status.as_u16() });
        }

        response
            .json::<Vec<RemoteUser>>()
            .await
            .map_err(|e| SeedError::Parse(e.to_string()))
    }
}

/// Turns remote entries into user records with placeholder demographics.
pub struct Seeder<S> {
    source: S,
    limit: usize,
    placeholder_address: String,
    max_age_years: u32,
    rng: StdRng,
}

impl<S: SeedSource> Seeder<S> {
    pub fn new(source: S, config: &SeedConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            source,
            limit: config.limit,
            placeholder_address: config.placeholder_address.clone(),
            max_age_years: config.max_age_years,
            rng,
        }
    }

    /// Fetches the remote collection and maps its first `limit` entries.
    ///
    /// Every record gets `now` as its creation instant and a birth date
    /// between 0 and `max_age_years - 1` whole years before `today`.
    #[instrument(skip(self))]
    pub async fn fetch_users(&mut self, today: NaiveDate, now: DateTime<Utc>) -> Result<Vec<User>, SeedError> {
        let remote = self.source.fetch().await?;
        let fetched = remote.len();

        let users: Vec<User> = remote
            .into_iter()
            .take(self.limit)
            .map(|entry| self.map_user(entry, today, now))
            .collect();

        info!(fetched, kept = users.len(), "Seed users mapped");
        Ok(users)
    }

    fn map_user(&mut self, entry: RemoteUser, today: NaiveDate, now: DateTime<Utc>) -> User {
        let address = entry
            .address
            .and_then(|address| address.street)
            .filter(|street| !street.trim().is_empty())
            .unwrap_or_else(|| self.placeholder_address.clone());
        let gender = Gender::ALL[self.rng.gen_range(0..Gender::ALL.len())];
        let years = self.rng.gen_range(0..self.max_age_years);

        User::new(entry.id, entry.name, address, gender, years_before(today, years), now)
    }
}

/// `today` shifted back by whole years. 29 February lands on 28 February in
/// years without it. Saturates at `NaiveDate::MIN`.
pub fn years_before(today: NaiveDate, years: u32) -> NaiveDate {
    years
        .checked_mul(12)
        .and_then(|months| today.checked_sub_months(Months::new(months)))
        .unwrap_or(NaiveDate::MIN)
}
