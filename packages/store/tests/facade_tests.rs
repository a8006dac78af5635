//! Facade behaviour against the in-memory store

use sitekit_content::{ContentMap, SectionContent, SectionKey};
use sitekit_store::{ContentFacade, ContentStore, MemoryStore};

fn retitled_faq(title: &str) -> SectionContent {
    let mut faq = ContentMap::defaults().faq;
    faq.section_title = title.to_string();
    SectionContent::Faq(faq)
}

#[tokio::test]
async fn test_save_persists_and_refreshes() {
    let store = MemoryStore::new();
    let mut facade = ContentFacade::new(store.clone());
    facade.load().await;

    let faq = retitled_faq("Common Questions");
    assert!(facade.save(SectionKey::Faq, &faq).await);

    let row = store.row("faq").await.unwrap();
    assert_eq!(row.content["sectionTitle"], "Common Questions");
    assert!(row.updated_at.is_some());

    // Reloaded from the store after the write
    assert_eq!(facade.section(SectionKey::Faq), faq);
    assert_eq!(facade.load_error(), None);
}

#[tokio::test]
async fn test_failed_save_leaves_content_alone() {
    let store = MemoryStore::new();
    store.fail_next_upserts(1).await;
    let mut facade = ContentFacade::new(store.clone());
    facade.load().await;

    assert!(!facade.save(SectionKey::Faq, &retitled_faq("Nope")).await);

    assert_eq!(facade.content(), &ContentMap::defaults());
    assert!(store.row("faq").await.is_none());
    assert_eq!(store.upsert_count().await, 1);
}

#[tokio::test]
async fn test_invalid_stored_row_falls_back_for_that_section_only() {
    let store = MemoryStore::with_rows([
        ("faq", serde_json::json!({ "faqs": "not a list" })),
        ("contact", serde_json::json!({ "sectionTitle": "Say hello" })),
        ("site_config", serde_json::json!({})),
    ]);
    let mut facade = ContentFacade::new(store);

    facade.load().await;

    assert_eq!(facade.content().faq, ContentMap::defaults().faq);
    assert_eq!(facade.content().contact.section_title, "Say hello");
    assert_eq!(facade.load_error(), None);
}

#[tokio::test]
async fn test_memory_store_is_always_configured() {
    let facade = ContentFacade::new(MemoryStore::new());
    assert!(facade.is_configured());
    assert!(facade.store().is_configured());
}

#[tokio::test]
async fn test_save_survives_failed_reload() {
    let store = MemoryStore::with_rows([(
        "faq",
        serde_json::json!({ "sectionTitle": "Your Questions", "sectionSubtitle": "", "faqs": [] }),
    )]);
    let mut facade = ContentFacade::new(store.clone());
    facade.load().await;
    assert_eq!(facade.content().faq.section_title, "Your Questions");

    store.fail_fetches(true).await;
    let mut contact = ContentMap::defaults().contact;
    contact.section_title = "Say hi".to_string();

    assert!(facade.save(SectionKey::Contact, &SectionContent::Contact(contact)).await);

    assert_eq!(store.row("contact").await.unwrap().content["sectionTitle"], "Say hi");
    assert_eq!(facade.content().contact.section_title, "Say hi");
    assert_eq!(facade.content().faq.section_title, "Your Questions");
    assert!(facade.load_error().is_some());
}

#[tokio::test]
async fn test_stored_row_with_nulls_still_applies() {
    let store = MemoryStore::with_rows([(
        "testimonials",
        serde_json::json!({
            "sectionTitle": "Real clients",
            "sectionSubtitle": "",
            "testimonials": [{ "id": 1, "name": "Asha", "role": "", "image": null, "rating": null, "text": "Great" }]
        }),
    )]);
    let mut facade = ContentFacade::new(store);

    facade.load().await;

    let testimonials = &facade.content().testimonials;
    assert_eq!(testimonials.section_title, "Real clients");
    assert_eq!(testimonials.testimonials[0].rating, 0);
    assert_eq!(testimonials.testimonials[0].image, "");
}
