use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;

pub const SAVED_MESSAGE: &str = "Saved successfully!";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save. Check logs for details.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient save outcome message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

impl Notice {
    pub fn saved(now: DateTime<Utc>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: SAVED_MESSAGE.to_string(),
            raised_at: now,
        }
    }

    pub fn save_failed(now: DateTime<Utc>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: SAVE_FAILED_MESSAGE.to_string(),
            raised_at: now,
        }
    }

    /// Still on screen `lifetime` after being raised?
    pub fn is_visible(&self, now: DateTime<Utc>, lifetime: Duration) -> bool {
        match (now - self.raised_at).to_std() {
            Ok(elapsed) => elapsed < lifetime,
            // Clock went backwards
            Err(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_after_lifetime() {
        let raised = Utc::now();
        let notice = Notice::saved(raised);
        let lifetime = Duration::from_secs(3);

        assert!(notice.is_visible(raised, lifetime));
        assert!(notice.is_visible(raised + chrono::Duration::milliseconds(2999), lifetime));
        assert!(!notice.is_visible(raised + chrono::Duration::seconds(3), lifetime));
    }
}
