//! In-process content store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{ContentStore, StoreError, StoredRow};

/// Map-backed store with failure injection.
///
/// Clones share the same rows, so a test can keep a handle while the
/// facade owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    rows: BTreeMap<String, StoredRow>,
    failing_upserts: usize,
    failing_fetches: bool,
    upserts: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `(key, content)` rows
    pub fn with_rows<I, K>(rows: I) -> Self
    where
        I: IntoIterator<Item = (K, serde_json::Value)>,
        K: Into<String>,
    {
        let rows = rows
            .into_iter()
            .map(|(key, content)| {
                let key = key.into();
                let row = StoredRow {
                    key: key.clone(),
                    content,
                    updated_at: None,
                };
                (key, row)
            })
            .collect();

        Self {
            state: Arc::new(Mutex::new(MemoryState {
                rows,
                ..MemoryState::default()
            })),
        }
    }

    /// Make the next `n` upserts fail
    pub async fn fail_next_upserts(&self, n: usize) {
        self.state.lock().await.failing_upserts = n;
    }

    pub async fn fail_fetches(&self, fail: bool) {
        self.state.lock().await.failing_fetches = fail;
    }

    /// Upserts attempted so far, failed ones included
    pub async fn upsert_count(&self) -> usize {
        self.state.lock().await.upserts
    }

    pub async fn row(&self, key: &str) -> Option<StoredRow> {
        self.state.lock().await.rows.get(key).cloned()
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    fn is_configured(&self) -> bool {
        true
    }

    async fn fetch_all(&self) -> Result<Vec<StoredRow>, StoreError> {
        let state = self.state.lock().await;
        if state.failing_fetches {
            return Err(StoreError::Unavailable("fetch failed".to_string()));
        }
        Ok(state.rows.values().cloned().collect())
    }

    async fn upsert(
        &self,
        key: &str,
        content: serde_json::Value,
        updated_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        state.upserts += 1;

        if state.failing_upserts > 0 {
            state.failing_upserts -= 1;
            return Err(StoreError::Unavailable(format!("upsert of '{}' failed", key)));
        }

        state.rows.insert(
            key.to_string(),
            StoredRow {
                key: key.to_string(),
                content,
                updated_at: Some(updated_at),
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_upsert_replaces_existing_row() {
        let store = MemoryStore::with_rows([("faq", json!({ "sectionTitle": "Old" }))]);

        store
            .upsert("faq", json!({ "sectionTitle": "New" }), Utc::now())
            .await
            .unwrap();

        let rows = store.fetch_all().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].content["sectionTitle"], "New");
        assert!(rows[0].updated_at.is_some());
    }

    #[tokio::test]
    async fn test_injected_upsert_failures_run_out() {
        let store = MemoryStore::new();
        store.fail_next_upserts(1).await;

        assert!(store.upsert("faq", json!({}), Utc::now()).await.is_err());
        assert!(store.upsert("faq", json!({}), Utc::now()).await.is_ok());
        assert_eq!(store.upsert_count().await, 2);
    }

    #[tokio::test]
    async fn test_clones_share_rows() {
        let store = MemoryStore::new();
        let handle = store.clone();

        store.upsert("hero", json!({}), Utc::now()).await.unwrap();

        assert!(handle.row("hero").await.is_some());
    }

    #[tokio::test]
    async fn test_failing_fetches() {
        let store = MemoryStore::new();
        store.fail_fetches(true).await;
        assert!(store.fetch_all().await.is_err());

        store.fail_fetches(false).await;
        assert!(store.fetch_all().await.unwrap().is_empty());
    }
}
