//! Published content, loaded from a store with defaults as the fallback.

use chrono::Utc;
use sitekit_content::{ContentMap, SectionContent, SectionKey};

use crate::ContentStore;

/// Message shown when the store could not be read
pub const LOAD_ERROR: &str = "Failed to load content from database";

/// Read side and save entry point for site content.
///
/// Store failures never escape as errors: a failed load keeps whatever
/// content is already held (the built-in defaults before the first load)
/// and records [`LOAD_ERROR`], a failed save reports `false`.
pub struct ContentFacade<S> {
    store: S,
    content: ContentMap,
    loading: bool,
    load_error: Option<String>,
}

impl<S: ContentStore> ContentFacade<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            content: ContentMap::defaults(),
            loading: true,
            load_error: None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn content(&self) -> &ContentMap {
        &self.content
    }

    pub fn section(&self, key: SectionKey) -> SectionContent {
        self.content.get(key)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn is_configured(&self) -> bool {
        self.store.is_configured()
    }

    /// Refresh from the store. Only a non-empty fetch replaces the held content.
    pub async fn load(&mut self) {
        self.loading = true;

        if !self.store.is_configured() {
            tracing::info!("content store not configured, keeping current content");
            self.load_error = None;
            self.loading = false;
            return;
        }

        match self.store.fetch_all().await {
            Ok(rows) if rows.is_empty() => {
                tracing::info!("content store is empty, keeping current content");
                self.load_error = None;
            }
            Ok(rows) => {
                let mut content = ContentMap::defaults();
                let applied = content.overlay(rows.into_iter().map(|row| (row.key, row.content)));
                tracing::info!(sections = applied, "loaded site content");
                self.content = content;
                self.load_error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load content, keeping current content");
                self.load_error = Some(LOAD_ERROR.to_string());
            }
        }

        self.loading = false;
    }

    /// Persist one section, then reload. Returns whether the write succeeded.
    ///
    /// The saved section is applied locally before the reload, so it stays
    /// visible even when the reload fails.
    pub async fn save(&mut self, key: SectionKey, content: &SectionContent) -> bool {
        if !self.store.is_configured() {
            tracing::error!(section = %key, "content store not configured");
            return false;
        }
        if content.key() != key {
            tracing::error!(section = %key, found = %content.key(), "content belongs to another section");
            return false;
        }

        let value = match content.to_value() {
            Ok(value) => value,
            Err(err) => {
                tracing::error!(section = %key, error = %err, "failed to serialize content");
                return false;
            }
        };

        if let Err(err) = self.store.upsert(key.store_key(), value, Utc::now()).await {
            tracing::error!(section = %key, error = %err, "failed to save content");
            return false;
        }

        tracing::info!(section = %key, "saved content");
        self.content.set(content.clone());
        self.load().await;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryStore, UnconfiguredStore};
    use serde_json::json;

    #[tokio::test]
    async fn test_unconfigured_loads_defaults_without_error() {
        let mut facade = ContentFacade::new(UnconfiguredStore);
        assert!(facade.is_loading());

        facade.load().await;

        assert!(!facade.is_loading());
        assert_eq!(facade.load_error(), None);
        assert_eq!(facade.content(), &ContentMap::defaults());
    }

    #[tokio::test]
    async fn test_fetch_failure_records_error() {
        let store = MemoryStore::new();
        store.fail_fetches(true).await;
        let mut facade = ContentFacade::new(store);

        facade.load().await;

        assert_eq!(facade.load_error(), Some(LOAD_ERROR));
        assert_eq!(facade.content(), &ContentMap::defaults());
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_loaded_content() {
        let store = MemoryStore::with_rows([(
            "faq",
            json!({ "sectionTitle": "Questions", "sectionSubtitle": "", "faqs": [] }),
        )]);
        let mut facade = ContentFacade::new(store.clone());
        facade.load().await;

        store.fail_fetches(true).await;
        facade.load().await;

        assert_eq!(facade.load_error(), Some(LOAD_ERROR));
        assert_eq!(facade.content().faq.section_title, "Questions");

        store.fail_fetches(false).await;
        facade.load().await;
        assert_eq!(facade.load_error(), None);
    }

    #[tokio::test]
    async fn test_stored_rows_overlay_defaults() {
        let store = MemoryStore::with_rows([(
            "faq",
            json!({ "sectionTitle": "Questions", "sectionSubtitle": "", "faqs": [] }),
        )]);
        let mut facade = ContentFacade::new(store);

        facade.load().await;

        assert_eq!(facade.content().faq.section_title, "Questions");
        assert_eq!(facade.content().hero, ContentMap::defaults().hero);
    }

    #[tokio::test]
    async fn test_save_on_unconfigured_store_fails() {
        let mut facade = ContentFacade::new(UnconfiguredStore);
        let faq = facade.section(SectionKey::Faq);
        assert!(!facade.save(SectionKey::Faq, &faq).await);
    }

    #[tokio::test]
    async fn test_save_with_wrong_key_fails() {
        let store = MemoryStore::new();
        let mut facade = ContentFacade::new(store.clone());
        let faq = facade.section(SectionKey::Faq);

        assert!(!facade.save(SectionKey::Hero, &faq).await);
        assert_eq!(store.upsert_count().await, 0);
    }
}
