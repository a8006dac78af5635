use serde::Serialize;
use sitekit_content::SectionKey;

/// The one modal the admin panel can show at a time
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Dialog {
    #[default]
    None,
    /// Review of the pending changes before they are published
    ConfirmSave {
        key: SectionKey,
        changes: Vec<String>,
    },
    /// Switching sections would drop unsaved edits in `from`
    DiscardChanges { from: SectionKey, to: SectionKey },
}

impl Dialog {
    pub fn is_open(&self) -> bool {
        !matches!(self, Dialog::None)
    }
}
