use crate::ContentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of an editable site section.
///
/// The serialized form is the store key, which must match exactly between
/// the read and write paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    Hero,
    ContactInfo,
    Certifications,
    Fees,
    Faq,
    Contact,
    Testimonials,
}

impl SectionKey {
    /// All sections, in the order the admin panel lists them
    pub const ALL: [SectionKey; 7] = [
        SectionKey::Hero,
        SectionKey::ContactInfo,
        SectionKey::Certifications,
        SectionKey::Fees,
        SectionKey::Faq,
        SectionKey::Contact,
        SectionKey::Testimonials,
    ];

    /// Key of the row holding this section in the content store
    pub fn store_key(self) -> &'static str {
        match self {
            SectionKey::Hero => "hero",
            SectionKey::ContactInfo => "contact_info",
            SectionKey::Certifications => "certifications",
            SectionKey::Fees => "fees",
            SectionKey::Faq => "faq",
            SectionKey::Contact => "contact",
            SectionKey::Testimonials => "testimonials",
        }
    }

    /// Heading shown for the section in the admin panel
    pub fn title(self) -> &'static str {
        match self {
            SectionKey::Hero => "Hero Section",
            SectionKey::ContactInfo => "Contact Information",
            SectionKey::Certifications => "Certifications",
            SectionKey::Fees => "Plans & Fees",
            SectionKey::Faq => "FAQ",
            SectionKey::Contact => "Contact Section",
            SectionKey::Testimonials => "Testimonials",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.store_key())
    }
}

impl FromStr for SectionKey {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKey::ALL
            .into_iter()
            .find(|key| key.store_key() == s)
            .ok_or_else(|| ContentError::UnknownSection(s.to_string()))
    }
}
