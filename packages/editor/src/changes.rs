//! # Change Descriptions
//!
//! Turns the difference between an original snapshot and a draft into the
//! short, human-readable lines shown in the save confirmation dialog.
//!
//! ## Rules
//!
//! One line per changed top-level field, in the draft's field order:
//!
//! - Lists: `Added N new <item>` / `Removed N <item>` from the length
//!   change, plus `Modified N <item>` for positions present in both lists
//!   that differ. Trailing items are only reflected in the count line.
//! - Text: `Added <Field>` (was empty), `Cleared <Field>` (now empty),
//!   otherwise `Updated <Field>`
//! - Flags: `Enabled <Field>` / `Disabled <Field>`
//! - Anything else: `Updated <Field>`
//!
//! Descriptions are display-only and never decide whether a save may happen.

use sitekit_content::{
    Availability, CallToAction, Certification, CertificationsContent, ContactContent, ContactInfo,
    Faq, FaqContent, FeesContent, HeroContent, Highlight, SectionContent, Service, Testimonial,
    TestimonialsContent,
};

/// Line used when a difference exists but no field-level line applies
pub const GENERIC_CHANGE: &str = "Content has been modified";

/// Records that can list their field-level changes.
///
/// Implementations call the [`ChangeLog`] methods once per field, in
/// declaration order, passing the field's stored (JSON) name.
pub trait Describe {
    fn describe_fields(&self, original: &Self, log: &mut ChangeLog);
}

/// Describe how `draft` differs from `original`.
///
/// Equal inputs give an empty list.
pub fn describe_changes<T: Describe + PartialEq>(original: &T, draft: &T) -> Vec<String> {
    if original == draft {
        return Vec::new();
    }

    let mut log = ChangeLog::default();
    draft.describe_fields(original, &mut log);

    if log.entries.is_empty() {
        vec![GENERIC_CHANGE.to_string()]
    } else {
        log.entries
    }
}

/// `sectionTitle` → `Section Title`, `contact_info` → `Contact info`
pub fn format_field_name(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        match ch {
            'A'..='Z' => {
                spaced.push(' ');
                spaced.push(ch);
            }
            '_' => spaced.push(' '),
            _ => spaced.push(ch),
        }
    }

    let mut chars = spaced.chars();
    let capitalized: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };

    capitalized.trim().to_string()
}

/// Noun used for the entries of a list field
fn item_label(key: &str) -> &'static str {
    match key {
        "certifications" => "certification",
        "services" => "plan",
        "faqs" => "FAQ",
        "testimonials" => "testimonial",
        _ => "item",
    }
}

fn counted(count: usize, label: &str) -> String {
    format!("{} {}{}", count, label, if count > 1 { "s" } else { "" })
}

/// Accumulates change lines for one record
#[derive(Debug, Default)]
pub struct ChangeLog {
    entries: Vec<String>,
}

impl ChangeLog {
    pub fn text(&mut self, key: &str, original: &str, draft: &str) {
        if original == draft {
            return;
        }

        let field = format_field_name(key);
        let line = if original.is_empty() {
            format!("Added {}", field)
        } else if draft.is_empty() {
            format!("Cleared {}", field)
        } else {
            format!("Updated {}", field)
        };
        self.entries.push(line);
    }

    pub fn flag(&mut self, key: &str, original: bool, draft: bool) {
        if original == draft {
            return;
        }

        let verb = if draft { "Enabled" } else { "Disabled" };
        self.entries.push(format!("{} {}", verb, format_field_name(key)));
    }

    pub fn list<T: PartialEq>(&mut self, key: &str, original: &[T], draft: &[T]) {
        if original == draft {
            return;
        }

        let label = item_label(key);

        if draft.len() > original.len() {
            let added = draft.len() - original.len();
            self.entries.push(format!("Added {} new {}", added, plural_noun(added, label)));
        } else if draft.len() < original.len() {
            let removed = original.len() - draft.len();
            self.entries.push(format!("Removed {}", counted(removed, label)));
        }

        let modified = original
            .iter()
            .zip(draft.iter())
            .filter(|(old, new)| old != new)
            .count();
        if modified > 0 {
            self.entries.push(format!("Modified {}", counted(modified, label)));
        }
    }

    /// Numbers and nested records
    pub fn value<T: PartialEq>(&mut self, key: &str, original: &T, draft: &T) {
        if original != draft {
            self.entries.push(format!("Updated {}", format_field_name(key)));
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

fn plural_noun(count: usize, label: &str) -> String {
    format!("{}{}", label, if count > 1 { "s" } else { "" })
}

impl Describe for SectionContent {
    fn describe_fields(&self, original: &Self, log: &mut ChangeLog) {
        match (self, original) {
            (SectionContent::Hero(new), SectionContent::Hero(old)) => new.describe_fields(old, log),
            (SectionContent::ContactInfo(new), SectionContent::ContactInfo(old)) => {
                new.describe_fields(old, log)
            }
            (SectionContent::Certifications(new), SectionContent::Certifications(old)) => {
                new.describe_fields(old, log)
            }
            (SectionContent::Fees(new), SectionContent::Fees(old)) => new.describe_fields(old, log),
            (SectionContent::Faq(new), SectionContent::Faq(old)) => new.describe_fields(old, log),
            (SectionContent::Contact(new), SectionContent::Contact(old)) => {
                new.describe_fields(old, log)
            }
            (SectionContent::Testimonials(new), SectionContent::Testimonials(old)) => {
                new.describe_fields(old, log)
            }
            // Different sections: only the generic line applies
            _ => {}
        }
    }
}

impl Describe for HeroContent {
    fn describe_fields(&self, o: &Self, log: &mut ChangeLog) {
        log.text("headline", &o.headline, &self.headline);
        log.text("tagline", &o.tagline, &self.tagline);
        log.text("description", &o.description, &self.description);
        log.value("primaryCTA", &o.primary_cta, &self.primary_cta);
        log.value("secondaryCTA", &o.secondary_cta, &self.secondary_cta);
        log.text("image", &o.image, &self.image);
        log.text("imageAlt", &o.image_alt, &self.image_alt);
        log.list("highlights", &o.highlights, &self.highlights);
    }
}

impl Describe for ContactInfo {
    fn describe_fields(&self, o: &Self, log: &mut ChangeLog) {
        log.text("phone", &o.phone, &self.phone);
        log.text("whatsapp", &o.whatsapp, &self.whatsapp);
        log.text("email", &o.email, &self.email);
        log.text("city", &o.city, &self.city);
        log.text("address", &o.address, &self.address);
        log.text("instagram", &o.instagram, &self.instagram);
        log.text("facebook", &o.facebook, &self.facebook);
        log.text("linkedin", &o.linkedin, &self.linkedin);
        log.text("whatsappMessage", &o.whatsapp_message, &self.whatsapp_message);
    }
}

impl Describe for CertificationsContent {
    fn describe_fields(&self, o: &Self, log: &mut ChangeLog) {
        log.text("sectionTitle", &o.section_title, &self.section_title);
        log.text("sectionSubtitle", &o.section_subtitle, &self.section_subtitle);
        log.list("certifications", &o.certifications, &self.certifications);
    }
}

impl Describe for FeesContent {
    fn describe_fields(&self, o: &Self, log: &mut ChangeLog) {
        log.text("sectionTitle", &o.section_title, &self.section_title);
        log.text("sectionSubtitle", &o.section_subtitle, &self.section_subtitle);
        log.text("currency", &o.currency, &self.currency);
        log.list("services", &o.services, &self.services);
        log.text("note", &o.note, &self.note);
    }
}

impl Describe for FaqContent {
    fn describe_fields(&self, o: &Self, log: &mut ChangeLog) {
        log.text("sectionTitle", &o.section_title, &self.section_title);
        log.text("sectionSubtitle", &o.section_subtitle, &self.section_subtitle);
        log.list("faqs", &o.faqs, &self.faqs);
    }
}

impl Describe for ContactContent {
    fn describe_fields(&self, o: &Self, log: &mut ChangeLog) {
        log.text("sectionTitle", &o.section_title, &self.section_title);
        log.text("sectionSubtitle", &o.section_subtitle, &self.section_subtitle);
        log.text("message", &o.message, &self.message);
        log.text("ctaText", &o.cta_text, &self.cta_text);
        log.value("availability", &o.availability, &self.availability);
    }
}

impl Describe for TestimonialsContent {
    fn describe_fields(&self, o: &Self, log: &mut ChangeLog) {
        log.text("sectionTitle", &o.section_title, &self.section_title);
        log.text("sectionSubtitle", &o.section_subtitle, &self.section_subtitle);
        log.list("testimonials", &o.testimonials, &self.testimonials);
    }
}

// List entries and nested records, for describing a single item

impl Describe for Service {
    fn describe_fields(&self, o: &Self, log: &mut ChangeLog) {
        log.value("id", &o.id, &self.id);
        log.text("name", &o.name, &self.name);
        log.text("price", &o.price, &self.price);
        log.text("duration", &o.duration, &self.duration);
        log.text("description", &o.description, &self.description);
        log.list("features", &o.features, &self.features);
        log.flag("popular", o.popular, self.popular);
    }
}

impl Describe for Certification {
    fn describe_fields(&self, o: &Self, log: &mut ChangeLog) {
        log.value("id", &o.id, &self.id);
        log.text("title", &o.title, &self.title);
        log.text("institution", &o.institution, &self.institution);
        log.text("description", &o.description, &self.description);
        log.text("icon", &o.icon, &self.icon);
    }
}

impl Describe for Faq {
    fn describe_fields(&self, o: &Self, log: &mut ChangeLog) {
        log.value("id", &o.id, &self.id);
        log.text("question", &o.question, &self.question);
        log.text("answer", &o.answer, &self.answer);
    }
}

impl Describe for Testimonial {
    fn describe_fields(&self, o: &Self, log: &mut ChangeLog) {
        log.value("id", &o.id, &self.id);
        log.text("name", &o.name, &self.name);
        log.text("role", &o.role, &self.role);
        log.text("image", &o.image, &self.image);
        log.value("rating", &o.rating, &self.rating);
        log.text("text", &o.text, &self.text);
    }
}

impl Describe for Highlight {
    fn describe_fields(&self, o: &Self, log: &mut ChangeLog) {
        log.value("id", &o.id, &self.id);
        log.text("value", &o.value, &self.value);
        log.text("label", &o.label, &self.label);
    }
}

impl Describe for CallToAction {
    fn describe_fields(&self, o: &Self, log: &mut ChangeLog) {
        log.text("text", &o.text, &self.text);
        log.text("link", &o.link, &self.link);
    }
}

impl Describe for Availability {
    fn describe_fields(&self, o: &Self, log: &mut ChangeLog) {
        log.text("days", &o.days, &self.days);
        log.text("hours", &o.hours, &self.hours);
        log.text("note", &o.note, &self.note);
    }
}
