//! # Sitekit Editor
//!
//! Per-section editing state for the site admin.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ content: typed section records              │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: draft lifecycle for one section     │
//! │  - Open / close / reset the draft           │
//! │  - Dirty tracking by deep equality          │
//! │  - Validate, describe, confirm, save        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ admin: one session per section + dialogs    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Original is published state**: it only changes on load or on a
//!    successful save of that section
//! 2. **Snapshots are saved, not drafts**: the content persisted is fixed
//!    when the save begins
//! 3. **Descriptions are display-only**: they never gate a save
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sitekit_editor::{EditSession, SaveRequest};
//!
//! let mut session = EditSession::new(content.get(SectionKey::Faq));
//! session.open();
//! session.update(draft)?;
//!
//! if let SaveRequest::Confirm(changes) = session.request_save()? {
//!     let ticket = session.begin_save()?;
//!     let ok = facade.save(ticket.key(), ticket.content()).await;
//!     session.complete_save(ticket, ok)?;
//! }
//! ```

mod changes;
mod errors;
mod session;

pub use changes::{describe_changes, format_field_name, ChangeLog, Describe, GENERIC_CHANGE};
pub use errors::EditorError;
pub use session::{EditSession, Phase, SaveRequest, SaveTicket};
