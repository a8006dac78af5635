use sitekit_validator::DEFAULT_MAX_DISPLAYED;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminOptions {
    /// How long a save notice stays visible
    pub notice_duration: Duration,
    pub max_displayed_errors: usize,
}

impl Default for AdminOptions {
    fn default() -> Self {
        Self {
            notice_duration: Duration::from_secs(3),
            max_displayed_errors: DEFAULT_MAX_DISPLAYED,
        }
    }
}
