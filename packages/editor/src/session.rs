//! # Section Edit Session
//!
//! Editing state for one section of the site.
//!
//! ```text
//!            open                request_save (valid)
//! Viewing ─────────▶ Editing ───────────────────────▶ Confirming
//!    ▲                 ▲  ▲                               │
//!    │ close           │  └──── cancel_confirmation ──────┤
//!    │                 │                                  │ begin_save
//!    │                 └────── complete_save ─────── Saving ◀┘
//! ```
//!
//! The snapshot submitted for persistence is captured when the save begins
//! and travels in a [`SaveTicket`]. Edits made while the save is in flight
//! go to the draft only, and the original is replaced with the snapshot,
//! never with the live draft.

use crate::{describe_changes, EditorError};
use sitekit_content::{SectionContent, SectionKey};
use sitekit_validator::{validate_section, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Collapsed, no draft
    Viewing,
    Editing,
    /// Draft validated, waiting for the user to confirm
    Confirming,
    /// Persist in flight
    Saving,
}

/// Outcome of asking to save the draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveRequest {
    /// Draft is valid; these changes go in the confirmation dialog
    Confirm(Vec<String>),
    /// Draft failed validation and stays open for editing
    Rejected(Vec<ValidationError>),
}

/// Handle for one in-flight save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTicket {
    id: u64,
    snapshot: SectionContent,
}

impl SaveTicket {
    pub fn key(&self) -> SectionKey {
        self.snapshot.key()
    }

    /// Content being persisted
    pub fn content(&self) -> &SectionContent {
        &self.snapshot
    }
}

#[derive(Debug, Clone)]
pub struct EditSession {
    original: SectionContent,
    draft: Option<SectionContent>,
    dirty: bool,
    errors: Vec<ValidationError>,
    phase: Phase,
    in_flight: Option<u64>,
    next_ticket: u64,
}

impl EditSession {
    pub fn new(original: SectionContent) -> Self {
        Self {
            original,
            draft: None,
            dirty: false,
            errors: Vec::new(),
            phase: Phase::Viewing,
            in_flight: None,
            next_ticket: 1,
        }
    }

    pub fn key(&self) -> SectionKey {
        self.original.key()
    }

    /// Last published content for this section
    pub fn original(&self) -> &SectionContent {
        &self.original
    }

    pub fn draft(&self) -> Option<&SectionContent> {
        self.draft.as_ref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    /// True while a persist started by this session has not completed
    pub fn is_saving(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start editing with a fresh copy of the original.
    ///
    /// Reopening an already open session keeps its draft.
    pub fn open(&mut self) {
        if self.draft.is_some() {
            return;
        }

        self.draft = Some(self.original.clone());
        self.dirty = false;
        self.errors.clear();
        self.phase = if self.is_saving() {
            Phase::Saving
        } else {
            Phase::Editing
        };
        tracing::debug!(section = %self.key(), "opened for editing");
    }

    /// Collapse the section, dropping the draft without persisting.
    ///
    /// A save already in flight still completes against this session.
    pub fn close(&mut self) {
        self.draft = None;
        self.dirty = false;
        self.errors.clear();
        self.phase = Phase::Viewing;
        tracing::debug!(section = %self.key(), "closed");
    }

    /// Replace the draft
    pub fn update(&mut self, draft: SectionContent) -> Result<(), EditorError> {
        if self.draft.is_none() {
            return Err(EditorError::NotEditing);
        }
        self.check_key(&draft)?;

        self.dirty = draft != self.original;
        self.draft = Some(draft);

        // A changed draft needs a fresh confirmation
        if self.phase == Phase::Confirming {
            self.phase = Phase::Editing;
        }
        Ok(())
    }

    /// Mutate the draft in place
    pub fn edit<F>(&mut self, f: F) -> Result<(), EditorError>
    where
        F: FnOnce(&mut SectionContent),
    {
        let mut draft = self.draft.clone().ok_or(EditorError::NotEditing)?;
        f(&mut draft);
        self.update(draft)
    }

    /// Throw away unsaved edits
    pub fn reset_draft(&mut self) -> Result<(), EditorError> {
        if self.draft.is_none() {
            return Err(EditorError::NotEditing);
        }
        if self.is_saving() {
            return Err(EditorError::SaveInProgress);
        }

        self.draft = Some(self.original.clone());
        self.dirty = false;
        self.errors.clear();
        self.phase = Phase::Editing;
        tracing::debug!(section = %self.key(), "draft reset");
        Ok(())
    }

    /// Validate the draft and, when valid, move to confirmation
    pub fn request_save(&mut self) -> Result<SaveRequest, EditorError> {
        if self.is_saving() {
            return Err(EditorError::SaveInProgress);
        }
        if self.phase != Phase::Editing {
            return Err(EditorError::NotEditing);
        }
        if !self.dirty {
            return Err(EditorError::NothingToSave);
        }
        let draft = self.draft.as_ref().ok_or(EditorError::NotEditing)?;

        let result = validate_section(draft);
        if !result.is_valid {
            tracing::debug!(
                section = %self.key(),
                errors = result.errors.len(),
                "draft rejected"
            );
            self.errors = result.errors.clone();
            return Ok(SaveRequest::Rejected(result.errors));
        }

        let changes = describe_changes(&self.original, draft);
        self.errors.clear();
        self.phase = Phase::Confirming;
        tracing::debug!(section = %self.key(), changes = changes.len(), "awaiting confirmation");
        Ok(SaveRequest::Confirm(changes))
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    pub fn cancel_confirmation(&mut self) -> Result<(), EditorError> {
        if self.phase != Phase::Confirming {
            return Err(EditorError::NotConfirming);
        }
        self.phase = Phase::Editing;
        Ok(())
    }

    /// Capture the confirmed draft for persistence
    pub fn begin_save(&mut self) -> Result<SaveTicket, EditorError> {
        if self.is_saving() {
            return Err(EditorError::SaveInProgress);
        }
        if self.phase != Phase::Confirming {
            return Err(EditorError::NotConfirming);
        }
        let snapshot = self.draft.clone().ok_or(EditorError::NotEditing)?;

        let id = self.next_ticket;
        self.next_ticket += 1;
        self.in_flight = Some(id);
        self.phase = Phase::Saving;
        tracing::debug!(section = %self.key(), ticket = id, "save started");

        Ok(SaveTicket { id, snapshot })
    }

    /// Record the outcome of the persist started by `ticket`
    pub fn complete_save(&mut self, ticket: SaveTicket, ok: bool) -> Result<(), EditorError> {
        if self.in_flight != Some(ticket.id) {
            return Err(EditorError::StaleTicket);
        }
        self.in_flight = None;

        if ok {
            self.original = ticket.snapshot;
            self.errors.clear();
            self.dirty = self
                .draft
                .as_ref()
                .map(|draft| *draft != self.original)
                .unwrap_or(false);
        }

        if self.phase == Phase::Saving {
            self.phase = Phase::Editing;
        }
        tracing::debug!(section = %self.key(), ok, dirty = self.dirty, "save completed");
        Ok(())
    }

    /// Swap in freshly loaded content; an open draft is left alone
    pub fn replace_original(&mut self, content: SectionContent) -> Result<(), EditorError> {
        self.check_key(&content)?;
        self.original = content;
        if let Some(draft) = &self.draft {
            self.dirty = *draft != self.original;
        }
        Ok(())
    }

    fn check_key(&self, content: &SectionContent) -> Result<(), EditorError> {
        let (expected, found) = (self.key(), content.key());
        if expected != found {
            return Err(EditorError::SectionMismatch { expected, found });
        }
        Ok(())
    }
}
