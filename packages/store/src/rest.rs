//! Hosted table API backend.
//!
//! Talks to a PostgREST-style endpoint exposing the `site_content` table:
//!
//! ```text
//! GET  {url}/rest/v1/site_content?select=key,content
//! POST {url}/rest/v1/site_content?on_conflict=key   (merge duplicates)
//! ```
//!
//! Sign-in for the same project goes through [`crate::RestAuth`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;
use url::Url;

use crate::{ContentStore, StoreError, StoredRow};

const TABLE_PATH: &str = "rest/v1/site_content";

/// Connection settings for [`RestStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestConfig {
    pub url: String,
    pub anon_key: String,
    pub timeout: Duration,
}

impl RestConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Both the URL and the key are present
    pub fn is_complete(&self) -> bool {
        !self.url.trim().is_empty() && !self.anon_key.trim().is_empty()
    }
}

pub struct RestStore {
    config: RestConfig,
    table: Option<Url>,
    access_token: Option<String>,
    client: reqwest::Client,
}

impl RestStore {
    pub fn new(config: RestConfig) -> Result<Self, StoreError> {
        let table = if config.is_complete() {
            Some(service_url(&config.url, TABLE_PATH)?)
        } else {
            None
        };

        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            config,
            table,
            access_token: None,
            client,
        })
    }

    /// Send requests as a signed-in user instead of with the anonymous key
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    fn table(&self) -> Result<&Url, StoreError> {
        self.table.as_ref().ok_or(StoreError::NotConfigured)
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let bearer = self.access_token.as_deref().unwrap_or(&self.config.anon_key);
        request
            .header("apikey", &self.config.anon_key)
            .bearer_auth(bearer)
    }
}

/// `path` under the project URL, whether or not it ends in a slash
pub(crate) fn service_url(base: &str, path: &str) -> Result<Url, url::ParseError> {
    let base = Url::parse(&format!("{}/", base.trim().trim_end_matches('/')))?;
    base.join(path)
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(StoreError::Status {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl ContentStore for RestStore {
    fn is_configured(&self) -> bool {
        self.table.is_some()
    }

    async fn fetch_all(&self) -> Result<Vec<StoredRow>, StoreError> {
        let mut url = self.table()?.clone();
        url.query_pairs_mut().append_pair("select", "key,content");

        tracing::debug!(%url, "fetching site content");
        let response = self.authorized(self.client.get(url)).send().await?;
        let rows: Vec<StoredRow> = check_status(response).await?.json().await?;

        tracing::debug!(rows = rows.len(), "fetched site content");
        Ok(rows)
    }

    async fn upsert(
        &self,
        key: &str,
        content: serde_json::Value,
        updated_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let mut url = self.table()?.clone();
        url.query_pairs_mut().append_pair("on_conflict", "key");

        let row = StoredRow {
            key: key.to_string(),
            content,
            updated_at: Some(updated_at),
        };

        tracing::debug!(%url, key, "upserting site content");
        let request = self
            .client
            .post(url)
            .header("Prefer", "resolution=merge-duplicates")
            .json(&[row]);
        let response = self.authorized(request).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_url_ignores_trailing_slash() {
        assert_eq!(
            service_url("https://example.supabase.co/", TABLE_PATH).unwrap().as_str(),
            "https://example.supabase.co/rest/v1/site_content"
        );
        assert_eq!(
            service_url("https://example.supabase.co", TABLE_PATH).unwrap().as_str(),
            "https://example.supabase.co/rest/v1/site_content"
        );
    }

    #[test]
    fn test_configured_only_with_url_and_key() {
        let store = RestStore::new(RestConfig::new("https://example.supabase.co", "anon")).unwrap();
        assert!(store.is_configured());

        let store = RestStore::new(RestConfig::new("https://example.supabase.co", "")).unwrap();
        assert!(!store.is_configured());

        let store = RestStore::new(RestConfig::new("", "anon")).unwrap();
        assert!(!store.is_configured());
    }

    #[test]
    fn test_malformed_url_is_rejected() {
        assert!(matches!(
            RestStore::new(RestConfig::new("not a url", "anon")),
            Err(StoreError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_access_token_replaces_anon_bearer() {
        let store = RestStore::new(RestConfig::new("https://example.supabase.co", "anon"))
            .unwrap()
            .with_access_token("user-token");

        let request = store.authorized(store.client.get("https://example.supabase.co")).build().unwrap();
        assert_eq!(request.headers()["apikey"], "anon");
        assert_eq!(request.headers()["authorization"], "Bearer user-token");
    }

    #[tokio::test]
    async fn test_unconfigured_rest_store_makes_no_requests() {
        let store = RestStore::new(RestConfig::new("", "")).unwrap();
        assert!(matches!(store.fetch_all().await, Err(StoreError::NotConfigured)));
    }
}
