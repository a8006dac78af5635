use sitekit_content::SectionKey;
use sitekit_editor::EditorError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdminError {
    #[error("No section is expanded")]
    NothingExpanded,

    #[error("Section '{0}' is not the expanded section")]
    NotExpanded(SectionKey),

    #[error("A save is already in progress")]
    SaveInProgress,

    #[error("No save is waiting for confirmation")]
    NoSavePending,

    #[error("No section switch is waiting for confirmation")]
    NoDiscardPending,

    #[error("Close the open dialog first")]
    DialogOpen,

    #[error(transparent)]
    Editor(#[from] EditorError),
}
