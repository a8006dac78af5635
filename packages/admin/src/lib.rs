//! # Sitekit Admin
//!
//! The admin panel's state, without any rendering.
//!
//! [`AdminPanel`] owns the content facade, the published baseline for every
//! section ([`Originals`]), one edit session per section and the single
//! [`Dialog`] the panel may show. A front end renders from its queries and
//! forwards user actions to its operations.

mod dialog;
mod error;
mod notice;
mod options;
mod originals;
mod panel;

pub use dialog::Dialog;
pub use error::AdminError;
pub use notice::{Notice, NoticeKind, SAVED_MESSAGE, SAVE_FAILED_MESSAGE};
pub use options::AdminOptions;
pub use originals::Originals;
pub use panel::{AdminPanel, SectionSummary, UNCONFIGURED_BANNER};

pub use sitekit_editor::{SaveRequest, SaveTicket};
