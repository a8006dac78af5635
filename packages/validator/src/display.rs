use crate::ValidationError;

/// How many error messages the admin panel lists before collapsing the rest
pub const DEFAULT_MAX_DISPLAYED: usize = 5;

/// Capped view of a validation error list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDisplay {
    pub messages: Vec<String>,
    /// Errors not listed in `messages`
    pub overflow: usize,
}

impl ErrorDisplay {
    pub fn new(errors: &[ValidationError], cap: usize) -> Self {
        Self {
            messages: errors.iter().take(cap).map(|e| e.message.clone()).collect(),
            overflow: errors.len().saturating_sub(cap),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.overflow == 0
    }

    /// Trailing line for the collapsed errors, if any
    pub fn overflow_line(&self) -> Option<String> {
        (self.overflow > 0).then(|| format!("...and {} more", self.overflow))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors(n: usize) -> Vec<ValidationError> {
        (1..=n)
            .map(|i| ValidationError::new(format!("FAQ {} Answer", i), format!("FAQ {} Answer is required", i)))
            .collect()
    }

    #[test]
    fn test_caps_at_five_with_overflow() {
        let display = ErrorDisplay::new(&errors(8), DEFAULT_MAX_DISPLAYED);
        assert_eq!(display.messages.len(), 5);
        assert_eq!(display.overflow, 3);
        assert_eq!(display.overflow_line().as_deref(), Some("...and 3 more"));
    }

    #[test]
    fn test_short_list_has_no_overflow() {
        let display = ErrorDisplay::new(&errors(2), DEFAULT_MAX_DISPLAYED);
        assert_eq!(display.messages.len(), 2);
        assert_eq!(display.overflow_line(), None);
        assert!(ErrorDisplay::new(&[], DEFAULT_MAX_DISPLAYED).is_empty());
    }
}
