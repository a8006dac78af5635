use serde::{Deserialize, Serialize};
use sitekit_admin::AdminOptions;
use sitekit_store::RestConfig;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_CONFIG_NAME: &str = "sitekit.config.json";

pub const STORE_URL_ENV: &str = "SITEKIT_STORE_URL";
pub const STORE_KEY_ENV: &str = "SITEKIT_STORE_KEY";
pub const ADMIN_EMAIL_ENV: &str = "SITEKIT_ADMIN_EMAIL";
pub const ADMIN_PASSWORD_ENV: &str = "SITEKIT_ADMIN_PASSWORD";

/// Sitekit configuration file format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    /// Admin account used to publish to a configured store
    #[serde(default)]
    pub auth: AuthConfig,

    /// Seconds a save notice stays visible
    #[serde(default = "default_notice_seconds")]
    pub notice_seconds: u64,

    /// Validation errors listed before the rest are collapsed
    #[serde(default = "default_max_displayed_errors")]
    pub max_displayed_errors: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub anon_key: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl AuthConfig {
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

fn default_notice_seconds() -> u64 {
    3
}

fn default_max_displayed_errors() -> usize {
    5
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load config from a directory, then apply environment overrides
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config = Self::load_file(cwd)?;
        Ok(config.with_overrides(|name| std::env::var(name).ok()))
    }

    fn load_file(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "loaded config");
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Replace store and admin credentials with non-empty values from `lookup`
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(STORE_URL_ENV).filter(|v| !v.is_empty()) {
            self.store.url = url;
        }
        if let Some(key) = lookup(STORE_KEY_ENV).filter(|v| !v.is_empty()) {
            self.store.anon_key = key;
        }
        if let Some(email) = lookup(ADMIN_EMAIL_ENV).filter(|v| !v.is_empty()) {
            self.auth.email = email;
        }
        if let Some(password) = lookup(ADMIN_PASSWORD_ENV).filter(|v| !v.is_empty()) {
            self.auth.password = password;
        }
        self
    }

    pub fn rest_config(&self) -> RestConfig {
        RestConfig::new(&self.store.url, &self.store.anon_key)
            .with_timeout(Duration::from_secs(self.store.timeout_secs))
    }

    pub fn admin_options(&self) -> AdminOptions {
        AdminOptions {
            notice_duration: Duration::from_secs(self.notice_seconds),
            max_displayed_errors: self.max_displayed_errors,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            auth: AuthConfig::default(),
            notice_seconds: default_notice_seconds(),
            max_displayed_errors: default_max_displayed_errors(),
        }
    }
}
