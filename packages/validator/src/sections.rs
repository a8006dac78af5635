//! Per-section validation.
//!
//! One function per section record; [`validate_section`] dispatches with an
//! exhaustive match so a new section cannot be added without rules.

use crate::rules::{email, non_empty_list, phone, required, url};
use crate::{ValidationError, ValidationResult};
use serde_json::Value;
use sitekit_content::{
    CertificationsContent, ContactContent, ContactInfo, FaqContent, FeesContent, HeroContent,
    SectionContent, SectionKey, TestimonialsContent,
};

type Check = fn(&str, &str) -> Option<ValidationError>;

/// Run `check` only once the required check has passed
fn required_then(errors: &mut Vec<ValidationError>, value: &str, field: &str, check: Check) {
    match required(value, field) {
        Some(err) => errors.push(err),
        None => errors.extend(check(value, field)),
    }
}

/// Validate a section draft. Never mutates the draft.
pub fn validate_section(content: &SectionContent) -> ValidationResult {
    let errors = match content {
        SectionContent::Hero(c) => validate_hero(c),
        SectionContent::ContactInfo(c) => validate_contact_info(c),
        SectionContent::Certifications(c) => validate_certifications(c),
        SectionContent::Fees(c) => validate_fees(c),
        SectionContent::Faq(c) => validate_faq(c),
        SectionContent::Contact(c) => validate_contact(c),
        SectionContent::Testimonials(c) => validate_testimonials(c),
    };

    tracing::debug!(
        "Validated section {}: {} error(s)",
        content.key(),
        errors.len()
    );

    ValidationResult::from_errors(errors)
}

/// Validate a raw JSON draft for `key`.
///
/// A document that does not decode into the section's shape yields a single
/// `Content` error.
pub fn validate_key(key: SectionKey, draft: &Value) -> ValidationResult {
    match SectionContent::from_value(key, draft.clone()) {
        Ok(content) => validate_section(&content),
        Err(err) => ValidationResult::from_errors(vec![ValidationError::new(
            "Content",
            format!("Content does not match the {} section: {}", key.title(), err),
        )]),
    }
}

fn validate_hero(data: &HeroContent) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(required(&data.headline, "Headline"));
    errors.extend(required(&data.description, "Description"));
    required_then(&mut errors, &data.image, "Image URL", url);
    errors.extend(required(&data.primary_cta.text, "Primary CTA Text"));

    errors
}

fn validate_contact_info(data: &ContactInfo) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    required_then(&mut errors, &data.email, "Email", email);
    required_then(&mut errors, &data.phone, "Phone", phone);
    required_then(&mut errors, &data.whatsapp, "WhatsApp", phone);

    // Social links are optional
    errors.extend(url(&data.instagram, "Instagram"));
    errors.extend(url(&data.facebook, "Facebook"));
    errors.extend(url(&data.linkedin, "LinkedIn"));

    errors
}

fn validate_certifications(data: &CertificationsContent) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(required(&data.section_title, "Section Title"));
    errors.extend(non_empty_list(data.certifications.len(), "certification"));

    for (i, cert) in data.certifications.iter().enumerate() {
        let n = i + 1;
        errors.extend(required(&cert.title, &format!("Certification {} Title", n)));
        errors.extend(required(
            &cert.institution,
            &format!("Certification {} Institution", n),
        ));
    }

    errors
}

fn validate_fees(data: &FeesContent) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(required(&data.section_title, "Section Title"));
    errors.extend(required(&data.currency, "Currency"));
    errors.extend(non_empty_list(data.services.len(), "plan"));

    for (i, service) in data.services.iter().enumerate() {
        let n = i + 1;
        errors.extend(required(&service.name, &format!("Plan {} Name", n)));
        errors.extend(required(&service.price, &format!("Plan {} Price", n)));
    }

    errors
}

fn validate_faq(data: &FaqContent) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(required(&data.section_title, "Section Title"));
    errors.extend(non_empty_list(data.faqs.len(), "FAQ"));

    for (i, faq) in data.faqs.iter().enumerate() {
        let n = i + 1;
        errors.extend(required(&faq.question, &format!("FAQ {} Question", n)));
        errors.extend(required(&faq.answer, &format!("FAQ {} Answer", n)));
    }

    errors
}

fn validate_contact(data: &ContactContent) -> Vec<ValidationError> {
    required(&data.section_title, "Section Title").into_iter().collect()
}

fn validate_testimonials(data: &TestimonialsContent) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(required(&data.section_title, "Section Title"));

    for (i, testimonial) in data.testimonials.iter().enumerate() {
        let n = i + 1;
        errors.extend(required(&testimonial.name, &format!("Testimonial {} Name", n)));
        errors.extend(required(&testimonial.text, &format!("Testimonial {} Text", n)));
        // Blank image means "no portrait", only check what was filled in
        errors.extend(url(&testimonial.image, &format!("Testimonial {} Image", n)));
    }

    errors
}
