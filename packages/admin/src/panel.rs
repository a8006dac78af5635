//! # Admin Panel
//!
//! Drives section editing end to end: one section expanded at a time, a
//! draft per section, validation before confirmation, and a single modal.
//!
//! ## Save flow
//!
//! ```text
//! on_field_change ──▶ request_save ──▶ Dialog::ConfirmSave ──▶ confirm_save
//!                         │                    │                   │
//!                   errors shown         cancel_save        notice raised
//! ```
//!
//! `confirm_save` is `begin_confirmed_save` + `persist` + `finish_save`.
//! Callers that need to keep editing while the write is in flight drive
//! the three steps themselves.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sitekit_content::{ContentMap, SectionContent, SectionKey};
use sitekit_editor::{EditSession, SaveRequest, SaveTicket};
use sitekit_store::{ContentFacade, ContentStore};
use sitekit_validator::{ErrorDisplay, ValidationError};
use std::collections::HashMap;

use crate::{AdminError, AdminOptions, Dialog, Notice, Originals};

/// Warning shown for as long as no store is configured
pub const UNCONFIGURED_BANNER: &str =
    "Content store is not configured. Add store credentials to sitekit.config.json to enable saving.";

/// One row of the section list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSummary {
    pub key: SectionKey,
    pub title: &'static str,
    pub expanded: bool,
}

pub struct AdminPanel<S> {
    facade: ContentFacade<S>,
    originals: Originals,
    sessions: HashMap<SectionKey, EditSession>,
    expanded: Option<SectionKey>,
    dialog: Dialog,
    saving: Option<SectionKey>,
    notice: Option<Notice>,
    options: AdminOptions,
}

impl<S: ContentStore> AdminPanel<S> {
    pub fn new(store: S, options: AdminOptions) -> Self {
        let facade = ContentFacade::new(store);
        let originals = Originals::new(facade.content());
        let sessions = SectionKey::ALL
            .into_iter()
            .map(|key| (key, EditSession::new(facade.section(key))))
            .collect();

        Self {
            facade,
            originals,
            sessions,
            expanded: None,
            dialog: Dialog::None,
            saving: None,
            notice: None,
            options,
        }
    }

    pub fn facade(&self) -> &ContentFacade<S> {
        &self.facade
    }

    /// Load published content and reset every baseline.
    ///
    /// Open drafts are kept; their dirty flags are recomputed.
    pub async fn load(&mut self) {
        self.facade.load().await;
        self.originals.seed(self.facade.content());

        for key in SectionKey::ALL {
            let content = self.facade.section(key);
            if let Err(err) = self.session_mut(key).replace_original(content) {
                tracing::error!(section = %key, error = %err, "failed to refresh original");
            }
        }
        tracing::info!(configured = self.facade.is_configured(), "admin content loaded");
    }

    // -- Queries --

    pub fn expanded(&self) -> Option<SectionKey> {
        self.expanded
    }

    /// Unsaved edits in the expanded section
    pub fn is_dirty(&self) -> bool {
        self.expanded_session().map(EditSession::is_dirty).unwrap_or(false)
    }

    pub fn draft(&self, key: SectionKey) -> Option<&SectionContent> {
        self.sessions.get(&key).and_then(EditSession::draft)
    }

    pub fn original(&self, key: SectionKey) -> Option<&SectionContent> {
        self.originals.get(key)
    }

    pub fn validation_errors(&self) -> &[ValidationError] {
        self.expanded_session().map(EditSession::errors).unwrap_or(&[])
    }

    pub fn error_display(&self) -> ErrorDisplay {
        ErrorDisplay::new(self.validation_errors(), self.options.max_displayed_errors)
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    pub fn is_saving(&self) -> bool {
        self.saving.is_some()
    }

    /// Save and cancel buttons are only offered for unsaved edits
    pub fn show_save_actions(&self) -> bool {
        self.is_dirty()
    }

    /// Current save notice, if it has not timed out by `now`
    pub fn notice(&self, now: DateTime<Utc>) -> Option<&Notice> {
        self.notice
            .as_ref()
            .filter(|notice| notice.is_visible(now, self.options.notice_duration))
    }

    pub fn banner(&self) -> Option<&'static str> {
        (!self.facade.is_configured()).then_some(UNCONFIGURED_BANNER)
    }

    pub fn sections(&self) -> Vec<SectionSummary> {
        SectionKey::ALL
            .into_iter()
            .map(|key| SectionSummary {
                key,
                title: key.title(),
                expanded: self.expanded == Some(key),
            })
            .collect()
    }

    // -- Section navigation --

    /// Expand `key`, or collapse it if it is already expanded.
    ///
    /// Switching away from a dirty section asks for confirmation first.
    pub fn toggle_section(&mut self, key: SectionKey) -> Result<(), AdminError> {
        if self.dialog.is_open() {
            return Err(AdminError::DialogOpen);
        }

        match self.expanded {
            Some(current) if current == key => {
                self.session_mut(key).close();
                self.expanded = None;
                tracing::debug!(section = %key, "collapsed");
            }
            Some(current) if self.session(current).is_some_and(EditSession::is_dirty) => {
                tracing::debug!(from = %current, to = %key, "unsaved changes, asking to discard");
                self.dialog = Dialog::DiscardChanges { from: current, to: key };
            }
            current => {
                if let Some(current) = current {
                    self.session_mut(current).close();
                }
                self.expand(key);
            }
        }
        Ok(())
    }

    pub fn confirm_discard_and_switch(&mut self) -> Result<(), AdminError> {
        let Dialog::DiscardChanges { from, to } = self.dialog else {
            return Err(AdminError::NoDiscardPending);
        };

        self.dialog = Dialog::None;
        self.session_mut(from).close();
        tracing::debug!(section = %from, "discarded unsaved changes");
        self.expand(to);
        Ok(())
    }

    pub fn cancel_discard(&mut self) -> Result<(), AdminError> {
        if !matches!(self.dialog, Dialog::DiscardChanges { .. }) {
            return Err(AdminError::NoDiscardPending);
        }
        self.dialog = Dialog::None;
        Ok(())
    }

    // -- Editing --

    /// Replace the draft of the expanded section
    pub fn on_field_change(&mut self, key: SectionKey, draft: SectionContent) -> Result<(), AdminError> {
        self.require_expanded(key)?;
        self.session_mut(key).update(draft)?;
        self.drop_stale_confirmation(key);
        Ok(())
    }

    /// Mutate the draft of the expanded section in place
    pub fn edit_section<F>(&mut self, key: SectionKey, f: F) -> Result<(), AdminError>
    where
        F: FnOnce(&mut SectionContent),
    {
        self.require_expanded(key)?;
        self.session_mut(key).edit(f)?;
        self.drop_stale_confirmation(key);
        Ok(())
    }

    /// Drop unsaved edits in the expanded section
    pub fn cancel_edits(&mut self) -> Result<(), AdminError> {
        let key = self.expanded.ok_or(AdminError::NothingExpanded)?;
        self.session_mut(key).reset_draft()?;
        self.drop_stale_confirmation(key);
        Ok(())
    }

    pub fn dismiss_errors(&mut self) {
        if let Some(key) = self.expanded {
            self.session_mut(key).clear_errors();
        }
    }

    // -- Saving --

    /// Validate the expanded draft and open the confirmation dialog if it
    /// passes. Validation errors are kept for display either way.
    pub fn request_save(&mut self) -> Result<SaveRequest, AdminError> {
        if self.is_saving() {
            return Err(AdminError::SaveInProgress);
        }
        if self.dialog.is_open() {
            return Err(AdminError::DialogOpen);
        }
        let key = self.expanded.ok_or(AdminError::NothingExpanded)?;

        let request = self.session_mut(key).request_save()?;
        if let SaveRequest::Confirm(changes) = &request {
            self.dialog = Dialog::ConfirmSave {
                key,
                changes: changes.clone(),
            };
        }
        Ok(request)
    }

    pub fn cancel_save(&mut self) -> Result<(), AdminError> {
        let Dialog::ConfirmSave { key, .. } = self.dialog else {
            return Err(AdminError::NoSavePending);
        };

        self.dialog = Dialog::None;
        self.session_mut(key).cancel_confirmation()?;
        Ok(())
    }

    /// Publish the confirmed draft
    pub async fn confirm_save(&mut self) -> Result<bool, AdminError> {
        let ticket = self.begin_confirmed_save()?;
        let ok = self.persist(&ticket).await;
        self.finish_save(ticket, ok, Utc::now())?;
        Ok(ok)
    }

    /// Close the confirmation dialog and capture the snapshot to publish
    pub fn begin_confirmed_save(&mut self) -> Result<SaveTicket, AdminError> {
        if self.is_saving() {
            return Err(AdminError::SaveInProgress);
        }
        let Dialog::ConfirmSave { key, .. } = self.dialog else {
            return Err(AdminError::NoSavePending);
        };

        let ticket = self.session_mut(key).begin_save()?;
        self.dialog = Dialog::None;
        self.saving = Some(key);
        self.notice = None;
        tracing::info!(section = %key, "saving");
        Ok(ticket)
    }

    /// Write the ticket's snapshot through the facade
    pub async fn persist(&mut self, ticket: &SaveTicket) -> bool {
        self.facade.save(ticket.key(), ticket.content()).await
    }

    /// Apply the outcome of a persist and raise the matching notice
    pub fn finish_save(&mut self, ticket: SaveTicket, ok: bool, now: DateTime<Utc>) -> Result<(), AdminError> {
        let key = ticket.key();
        let snapshot = ok.then(|| ticket.content().clone());

        self.session_mut(key).complete_save(ticket, ok)?;
        self.saving = None;

        match snapshot {
            Some(snapshot) => {
                self.originals.set(snapshot);
                self.notice = Some(Notice::saved(now));
                tracing::info!(section = %key, "saved");
            }
            None => {
                self.notice = Some(Notice::save_failed(now));
                tracing::error!(section = %key, "save failed, draft kept for retry");
            }
        }
        Ok(())
    }

    // -- Internals --

    fn expand(&mut self, key: SectionKey) {
        self.session_mut(key).open();
        self.expanded = Some(key);
        tracing::debug!(section = %key, "expanded");
    }

    fn require_expanded(&self, key: SectionKey) -> Result<(), AdminError> {
        match self.expanded {
            Some(current) if current == key => Ok(()),
            _ => Err(AdminError::NotExpanded(key)),
        }
    }

    /// An edit invalidates a pending confirmation for that section
    fn drop_stale_confirmation(&mut self, key: SectionKey) {
        if matches!(&self.dialog, Dialog::ConfirmSave { key: pending, .. } if *pending == key) {
            self.dialog = Dialog::None;
        }
    }

    fn expanded_session(&self) -> Option<&EditSession> {
        self.expanded.and_then(|key| self.session(key))
    }

    fn session(&self, key: SectionKey) -> Option<&EditSession> {
        self.sessions.get(&key)
    }

    fn session_mut(&mut self, key: SectionKey) -> &mut EditSession {
        let originals = &self.originals;
        self.sessions.entry(key).or_insert_with(|| {
            let original = originals
                .get(key)
                .cloned()
                .unwrap_or_else(|| ContentMap::defaults().get(key));
            EditSession::new(original)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitekit_store::{MemoryStore, UnconfiguredStore};

    fn retitle(content: &mut SectionContent) {
        if let SectionContent::Faq(faq) = content {
            faq.section_title = "Questions & Answers".to_string();
        }
    }

    async fn loaded() -> AdminPanel<MemoryStore> {
        let mut panel = AdminPanel::new(MemoryStore::new(), AdminOptions::default());
        panel.load().await;
        panel
    }

    #[tokio::test]
    async fn test_toggle_same_section_collapses_and_drops_draft() {
        let mut panel = loaded().await;

        panel.toggle_section(SectionKey::Faq).unwrap();
        panel.edit_section(SectionKey::Faq, retitle).unwrap();
        assert!(panel.is_dirty());

        panel.toggle_section(SectionKey::Faq).unwrap();

        assert_eq!(panel.expanded(), None);
        assert!(!panel.is_dirty());
        assert_eq!(panel.draft(SectionKey::Faq), None);
        assert_eq!(panel.dialog(), &Dialog::None);
    }

    #[tokio::test]
    async fn test_clean_switch_needs_no_confirmation() {
        let mut panel = loaded().await;

        panel.toggle_section(SectionKey::Faq).unwrap();
        panel.toggle_section(SectionKey::Hero).unwrap();

        assert_eq!(panel.expanded(), Some(SectionKey::Hero));
        assert_eq!(panel.draft(SectionKey::Faq), None);
        assert_eq!(panel.draft(SectionKey::Hero), panel.original(SectionKey::Hero));
    }

    #[tokio::test]
    async fn test_edits_only_reach_the_expanded_section() {
        let mut panel = loaded().await;
        panel.toggle_section(SectionKey::Hero).unwrap();

        assert_eq!(
            panel.edit_section(SectionKey::Faq, retitle),
            Err(AdminError::NotExpanded(SectionKey::Faq))
        );
    }

    #[tokio::test]
    async fn test_save_actions_follow_dirty_flag() {
        let mut panel = loaded().await;
        panel.toggle_section(SectionKey::Faq).unwrap();
        assert!(!panel.show_save_actions());

        panel.edit_section(SectionKey::Faq, retitle).unwrap();
        assert!(panel.show_save_actions());

        panel.cancel_edits().unwrap();
        assert!(!panel.show_save_actions());
    }

    #[tokio::test]
    async fn test_edit_while_confirming_closes_dialog() {
        let mut panel = loaded().await;
        panel.toggle_section(SectionKey::Faq).unwrap();
        panel.edit_section(SectionKey::Faq, retitle).unwrap();
        panel.request_save().unwrap();
        assert!(matches!(panel.dialog(), Dialog::ConfirmSave { .. }));

        panel
            .edit_section(SectionKey::Faq, |content| {
                if let SectionContent::Faq(faq) = content {
                    faq.section_subtitle = "Ask away".to_string();
                }
            })
            .unwrap();

        assert_eq!(panel.dialog(), &Dialog::None);
        assert_eq!(panel.begin_confirmed_save(), Err(AdminError::NoSavePending));
    }

    #[tokio::test]
    async fn test_cancel_save_keeps_draft() {
        let mut panel = loaded().await;
        panel.toggle_section(SectionKey::Faq).unwrap();
        panel.edit_section(SectionKey::Faq, retitle).unwrap();
        panel.request_save().unwrap();

        panel.cancel_save().unwrap();

        assert_eq!(panel.dialog(), &Dialog::None);
        assert!(panel.is_dirty());
        assert_eq!(panel.cancel_save(), Err(AdminError::NoSavePending));
    }

    #[tokio::test]
    async fn test_banner_only_without_store() {
        let mut panel = AdminPanel::new(UnconfiguredStore, AdminOptions::default());
        panel.load().await;
        assert_eq!(panel.banner(), Some(UNCONFIGURED_BANNER));

        assert_eq!(loaded().await.banner(), None);
    }

    #[tokio::test]
    async fn test_section_list() {
        let mut panel = loaded().await;
        panel.toggle_section(SectionKey::Fees).unwrap();

        let sections = panel.sections();
        assert_eq!(sections.len(), 7);
        assert_eq!(sections[0].title, "Hero Section");
        let fees = sections.iter().find(|s| s.key == SectionKey::Fees).unwrap();
        assert_eq!(fees.title, "Plans & Fees");
        assert!(fees.expanded);
        assert_eq!(sections.iter().filter(|s| s.expanded).count(), 1);
    }

    #[tokio::test]
    async fn test_error_display_is_capped() {
        let mut panel = loaded().await;
        panel.toggle_section(SectionKey::Faq).unwrap();
        panel
            .edit_section(SectionKey::Faq, |content| {
                if let SectionContent::Faq(faq) = content {
                    for item in faq.faqs.iter_mut() {
                        item.question.clear();
                        item.answer.clear();
                    }
                }
            })
            .unwrap();

        assert!(matches!(panel.request_save(), Ok(SaveRequest::Rejected(_))));

        let display = panel.error_display();
        assert_eq!(display.messages.len(), 5);
        assert_eq!(display.overflow, panel.validation_errors().len() - 5);
        assert_eq!(panel.dialog(), &Dialog::None);

        panel.dismiss_errors();
        assert!(panel.error_display().is_empty());
        assert!(panel.is_dirty());
    }
}
