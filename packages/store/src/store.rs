//! Content store abstraction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::StoreError;

/// One row of the `site_content` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRow {
    pub key: String,
    pub content: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Persistence backend for section documents.
///
/// Rows are keyed by the section's store key. Writing a key that already
/// exists replaces its content.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Whether the backend has what it needs to serve requests
    fn is_configured(&self) -> bool;

    async fn fetch_all(&self) -> Result<Vec<StoredRow>, StoreError>;

    async fn upsert(
        &self,
        key: &str,
        content: serde_json::Value,
        updated_at: DateTime<Utc>,
    ) -> Result<(), StoreError>;
}

#[async_trait]
impl<T: ContentStore + ?Sized> ContentStore for Box<T> {
    fn is_configured(&self) -> bool {
        (**self).is_configured()
    }

    async fn fetch_all(&self) -> Result<Vec<StoredRow>, StoreError> {
        (**self).fetch_all().await
    }

    async fn upsert(
        &self,
        key: &str,
        content: serde_json::Value,
        updated_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        (**self).upsert(key, content, updated_at).await
    }
}

/// Store used when no backend credentials are available
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredStore;

#[async_trait]
impl ContentStore for UnconfiguredStore {
    fn is_configured(&self) -> bool {
        false
    }

    async fn fetch_all(&self) -> Result<Vec<StoredRow>, StoreError> {
        Err(StoreError::NotConfigured)
    }

    async fn upsert(
        &self,
        _key: &str,
        _content: serde_json::Value,
        _updated_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        Err(StoreError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_decodes_without_timestamp() {
        let row: StoredRow =
            serde_json::from_str(r#"{ "key": "faq", "content": { "sectionTitle": "FAQ" } }"#).unwrap();
        assert_eq!(row.key, "faq");
        assert_eq!(row.updated_at, None);
    }

    #[tokio::test]
    async fn test_unconfigured_store_refuses_everything() {
        let store = UnconfiguredStore;
        assert!(!store.is_configured());
        assert!(matches!(store.fetch_all().await, Err(StoreError::NotConfigured)));
        assert!(matches!(
            store.upsert("faq", serde_json::json!({}), Utc::now()).await,
            Err(StoreError::NotConfigured)
        ));
    }
}
