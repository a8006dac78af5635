//! Field-level checks.
//!
//! Every check returns `None` when the value passes. Format checks skip
//! empty values so that optional fields are only validated when filled in;
//! pair them with [`required`] when the field is mandatory.

use crate::ValidationError;
use regex::Regex;
use std::sync::OnceLock;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"))
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // +91 12345 67890, (123) 456-7890, 123-456-7890, ...
    RE.get_or_init(|| Regex::new(r"^[+]?[0-9\s\-().]{7,20}$").expect("phone pattern compiles"))
}

pub fn required(value: &str, field: &str) -> Option<ValidationError> {
    if value.trim().is_empty() {
        return Some(ValidationError::new(field, format!("{} is required", field)));
    }
    None
}

pub fn email(value: &str, field: &str) -> Option<ValidationError> {
    if value.is_empty() || email_regex().is_match(value) {
        return None;
    }
    Some(ValidationError::new(field, format!("{} must be a valid email", field)))
}

/// Must parse as an absolute URL
pub fn url(value: &str, field: &str) -> Option<ValidationError> {
    if value.is_empty() || url::Url::parse(value).is_ok() {
        return None;
    }
    Some(ValidationError::new(field, format!("{} must be a valid URL", field)))
}

pub fn phone(value: &str, field: &str) -> Option<ValidationError> {
    if value.is_empty() || phone_regex().is_match(value) {
        return None;
    }
    Some(ValidationError::new(
        field,
        format!("{} must be a valid phone number", field),
    ))
}

/// `item` is the singular noun used in the message (`FAQ`, `plan`, ...)
pub fn non_empty_list(len: usize, item: &str) -> Option<ValidationError> {
    if len > 0 {
        return None;
    }
    Some(ValidationError::new(
        item,
        format!("At least one {} is required", item),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        assert!(required("  ", "Name").is_some());
        assert!(required("", "Name").is_some());
        assert!(required("Ritu", "Name").is_none());

        let err = required("", "Section Title").unwrap();
        assert_eq!(err.field, "Section Title");
        assert_eq!(err.message, "Section Title is required");
    }

    #[test]
    fn test_email_shapes() {
        assert!(email("ritu@example.com", "Email").is_none());
        assert!(email("", "Email").is_none());
        assert!(email("ritu@example", "Email").is_some());
        assert!(email("ritu example@x.com", "Email").is_some());
        assert_eq!(
            email("nope", "Email").unwrap().message,
            "Email must be a valid email"
        );
    }

    #[test]
    fn test_url_requires_absolute() {
        assert!(url("https://instagram.com/ritu", "Instagram").is_none());
        assert!(url("", "Instagram").is_none());
        assert!(url("#contact", "Link").is_some());
        assert!(url("instagram.com/ritu", "Instagram").is_some());
    }

    #[test]
    fn test_phone_pattern() {
        assert!(phone("+91 98XXX XXXXX", "Phone").is_some());
        assert!(phone("+91 98765 43210", "Phone").is_none());
        assert!(phone("(123) 456-7890", "Phone").is_none());
        assert!(phone("+919800000000", "WhatsApp").is_none());
        assert!(phone("12345", "Phone").is_some());
        assert!(phone("123456789012345678901", "Phone").is_some());
        // ASCII digits only
        assert!(phone("١٢٣٤٥٦٧", "Phone").is_some());
        assert!(phone("+91 ٩٨٧٦٥ ٤٣٢١٠", "Phone").is_some());
    }

    #[test]
    fn test_non_empty_list() {
        let err = non_empty_list(0, "FAQ").unwrap();
        assert_eq!(err.message, "At least one FAQ is required");
        assert!(non_empty_list(2, "FAQ").is_none());
    }
}
