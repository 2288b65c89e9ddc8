/// Dashboard configuration
use std::path::Path;
use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::actors::DEFAULT_BANNER_DURATION;
use crate::error::ConfigError;

pub const DEFAULT_SEED_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";
pub const ENV_PREFIX: &str = "USER_DASHBOARD";
/// Upper bound for `seed.max_age_years`.
pub const MAX_AGE_YEARS_LIMIT: u32 = 150;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub seed: SeedConfig,
    pub notification: NotificationConfig,
    pub store: StoreConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SeedConfig {
    pub endpoint: String,
    /// Number of remote entries kept.
    pub limit: usize,
    pub placeholder_address: String,
    /// Placeholder birth dates are drawn from `0..max_age_years` years ago.
    pub max_age_years: u32,
    /// Fixed seed for the placeholder generator. Entropy when absent.
    pub rng_seed: Option<u64>,
    /// No timeout when absent.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Capacity of each actor mailbox.
    pub buffer_size: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiConfig {
    /// Name printed in the footer copyright line.
    pub footer_owner: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SEED_ENDPOINT.to_string(),
            limit: 10,
            placeholder_address: "Tidak Ada Alamat".to_string(),
            max_age_years: 30,
            rng_seed: None,
            timeout_secs: None,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { duration_ms: DEFAULT_BANNER_DURATION.as_millis() as u64 }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { buffer_size: 32 }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { footer_owner: "User Dashboard".to_string() }
    }
}

impl SeedConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl NotificationConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the optional TOML file, then
    /// `USER_DASHBOARD__SECTION__KEY` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            settings = settings.add_source(config::File::from(path).required(true));
        }

        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = &self.seed.endpoint;
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "seed.endpoint must be an http(s) URL, got {:?}",
                endpoint
            )));
        }
        if self.seed.limit == 0 {
            return Err(ConfigError::Invalid("seed.limit must be at least 1".into()));
        }
        if self.seed.max_age_years == 0 || self.seed.max_age_years > MAX_AGE_YEARS_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "seed.max_age_years must be between 1 and {}",
                MAX_AGE_YEARS_LIMIT
            )));
        }
        if self.seed.timeout_secs == Some(0) {
            return Err(ConfigError::Invalid("seed.timeout_secs must be positive when set".into()));
        }
        if self.notification.duration_ms == 0 {
            return Err(ConfigError::Invalid("notification.duration_ms must be positive".into()));
        }
        if self.store.buffer_size == 0 {
            return Err(ConfigError::Invalid("store.buffer_size must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Config, File, FileFormat};

    fn from_toml(toml: &str) -> AppConfig {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.seed.endpoint, DEFAULT_SEED_ENDPOINT);
        assert_eq!(config.seed.limit, 10);
        assert_eq!(config.seed.max_age_years, 30);
        assert_eq!(config.notification.duration(), Duration::from_secs(3));
        assert!(config.seed.timeout().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = from_toml(
            r#"
            [seed]
            limit = 5
            rng_seed = 9

            [notification]
            duration_ms = 1500
            "#,
        );
        assert_eq!(config.seed.limit, 5);
        assert_eq!(config.seed.rng_seed, Some(9));
        assert_eq!(config.seed.placeholder_address, "Tidak Ada Alamat");
        assert_eq!(config.notification.duration(), Duration::from_millis(1500));
        assert_eq!(config.store.buffer_size, 32);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.seed.endpoint = "ftp://example.com".into();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = AppConfig::default();
        config.seed.limit = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.notification.duration_ms = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.seed.max_age_years = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = AppConfig::default();
        config.seed.max_age_years = MAX_AGE_YEARS_LIMIT + 1;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = AppConfig::default();
        config.seed.timeout_secs = Some(0);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = AppConfig::default();
        config.store.buffer_size = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    // Environment variables are process-wide, so every env-dependent check
    // lives in this one test.
    #[test]
    fn test_load_layers_file_then_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.toml");
        std::fs::write(
            &path,
            r#"
            [seed]
            limit = 5
            placeholder_address = "Alamat Kosong"

            [ui]
            footer_owner = "Tim Data"
            "#,
        )
        .unwrap();

        let from_file = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(from_file.seed.limit, 5);
        assert_eq!(from_file.seed.placeholder_address, "Alamat Kosong");
        assert_eq!(from_file.ui.footer_owner, "Tim Data");
        assert_eq!(from_file.store.buffer_size, 32);

        std::env::set_var("USER_DASHBOARD__SEED__LIMIT", "4");
        let env_only = AppConfig::load(None);
        let env_over_file = AppConfig::load(Some(&path));
        std::env::remove_var("USER_DASHBOARD__SEED__LIMIT");

        let env_only = env_only.unwrap();
        assert_eq!(env_only.seed.limit, 4);
        assert_eq!(env_only.seed.placeholder_address, "Tidak Ada Alamat");

        let env_over_file = env_over_file.unwrap();
        assert_eq!(env_over_file.seed.limit, 4);
        assert_eq!(env_over_file.ui.footer_owner, "Tim Data");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/user-dashboard.toml")));
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }
}
