mod display;
mod error;
mod rules;
mod sections;

pub use display::{ErrorDisplay, DEFAULT_MAX_DISPLAYED};
pub use error::{ValidationError, ValidationResult};
pub use rules::{email, non_empty_list, phone, required, url};
pub use sections::{validate_key, validate_section};
