//! Error types for the editor

use sitekit_content::SectionKey;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("Section is not open for editing")]
    NotEditing,

    #[error("No unsaved changes")]
    NothingToSave,

    #[error("No save is awaiting confirmation")]
    NotConfirming,

    #[error("A save is already in progress")]
    SaveInProgress,

    #[error("Draft belongs to section '{found}', expected '{expected}'")]
    SectionMismatch {
        expected: SectionKey,
        found: SectionKey,
    },

    #[error("Save ticket does not match the pending save")]
    StaleTicket,
}
