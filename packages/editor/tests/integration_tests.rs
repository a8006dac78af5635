//! Integration tests for editor crate

use serde_json::json;
use sitekit_content::{push_item, ContentMap, Faq, SectionContent, SectionKey, Service};
use sitekit_editor::{describe_changes, EditSession, EditorError, Phase, SaveRequest};

fn stored_faq() -> SectionContent {
    SectionContent::from_value(
        SectionKey::Faq,
        json!({
            "sectionTitle": "FAQ",
            "sectionSubtitle": "",
            "faqs": [
                { "id": 1, "question": "How long is a session?", "answer": "An hour." },
                { "id": 2, "question": "Do you work online?", "answer": "Yes." },
                { "id": 3, "question": "Which diets?", "answer": "All of them." }
            ]
        }),
    )
    .unwrap()
}

#[test]
fn test_full_save_workflow() {
    let mut session = EditSession::new(stored_faq());
    session.open();

    session
        .edit(|content| {
            if let SectionContent::Faq(faq) = content {
                let id = push_item(&mut faq.faqs, Faq::blank);
                let item = faq.faqs.iter_mut().find(|f| f.id == id).unwrap();
                item.question = "Can I bring my own recipes?".to_string();
                item.answer = "Please do.".to_string();
            }
        })
        .unwrap();

    let changes = match session.request_save().unwrap() {
        SaveRequest::Confirm(changes) => changes,
        SaveRequest::Rejected(errors) => panic!("unexpected errors: {:?}", errors),
    };
    assert_eq!(changes, vec!["Added 1 new FAQ"]);

    let ticket = session.begin_save().unwrap();
    assert_eq!(ticket.key(), SectionKey::Faq);
    assert_eq!(session.phase(), Phase::Saving);

    session.complete_save(ticket, true).unwrap();

    assert!(!session.is_dirty());
    assert_eq!(describe_changes(session.original(), session.draft().unwrap()), Vec::<String>::new());
}

#[test]
fn test_cleared_title_is_described_and_rejected() {
    let original = stored_faq();
    let mut session = EditSession::new(original.clone());
    session.open();
    session
        .edit(|content| {
            if let SectionContent::Faq(faq) = content {
                faq.section_title.clear();
            }
        })
        .unwrap();

    assert_eq!(
        describe_changes(&original, session.draft().unwrap()),
        vec!["Cleared Section Title"]
    );

    match session.request_save().unwrap() {
        SaveRequest::Rejected(errors) => {
            assert!(errors.iter().any(|e| e.field == "Section Title"));
        }
        SaveRequest::Confirm(_) => panic!("cleared title must not validate"),
    }
}

#[test]
fn test_removing_plans_from_fees() {
    let mut fees = ContentMap::defaults().fees;
    push_item(&mut fees.services, Service::blank);
    let original = SectionContent::Fees(fees);

    let mut session = EditSession::new(original.clone());
    session.open();
    session
        .edit(|content| {
            if let SectionContent::Fees(fees) = content {
                fees.services.truncate(3);
            }
        })
        .unwrap();

    assert_eq!(
        describe_changes(&original, session.draft().unwrap()),
        vec!["Removed 2 plans"]
    );
}

#[test]
fn test_cancel_edits_leaves_nothing_to_describe() {
    let mut session = EditSession::new(stored_faq());
    session.open();
    session
        .edit(|content| {
            if let SectionContent::Faq(faq) = content {
                faq.faqs.clear();
            }
        })
        .unwrap();
    assert!(session.is_dirty());

    session.reset_draft().unwrap();

    assert!(describe_changes(session.original(), session.draft().unwrap()).is_empty());
    assert_eq!(session.request_save(), Err(EditorError::NothingToSave));
}

#[test]
fn test_close_discards_draft_without_touching_original() {
    let original = stored_faq();
    let mut session = EditSession::new(original.clone());
    session.open();
    session
        .edit(|content| {
            if let SectionContent::Faq(faq) = content {
                faq.section_subtitle = "Ask anything".to_string();
            }
        })
        .unwrap();

    session.close();
    session.open();

    assert_eq!(session.original(), &original);
    assert_eq!(session.draft(), Some(&original));
    assert!(!session.is_dirty());
}
