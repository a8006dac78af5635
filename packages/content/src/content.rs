use crate::records::{
    CertificationsContent, ContactContent, ContactInfo, FaqContent, FeesContent, HeroContent,
    TestimonialsContent,
};
use crate::{ContentError, SectionKey};
use serde::Serialize;
use serde_json::Value;

/// Content of one section, tagged by which section it belongs to.
///
/// Serializes as the bare record so the stored JSON carries no tag; the
/// section is identified by the row's store key instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SectionContent {
    Hero(HeroContent),
    ContactInfo(ContactInfo),
    Certifications(CertificationsContent),
    Fees(FeesContent),
    Faq(FaqContent),
    Contact(ContactContent),
    Testimonials(TestimonialsContent),
}

impl SectionContent {
    pub fn key(&self) -> SectionKey {
        match self {
            SectionContent::Hero(_) => SectionKey::Hero,
            SectionContent::ContactInfo(_) => SectionKey::ContactInfo,
            SectionContent::Certifications(_) => SectionKey::Certifications,
            SectionContent::Fees(_) => SectionKey::Fees,
            SectionContent::Faq(_) => SectionKey::Faq,
            SectionContent::Contact(_) => SectionKey::Contact,
            SectionContent::Testimonials(_) => SectionKey::Testimonials,
        }
    }

    /// Decode a stored JSON document for `key`
    pub fn from_value(key: SectionKey, value: Value) -> Result<Self, ContentError> {
        let invalid = |source| ContentError::InvalidContent {
            key: key.store_key().to_string(),
            source,
        };

        let content = match key {
            SectionKey::Hero => SectionContent::Hero(serde_json::from_value(value).map_err(invalid)?),
            SectionKey::ContactInfo => {
                SectionContent::ContactInfo(serde_json::from_value(value).map_err(invalid)?)
            }
            SectionKey::Certifications => {
                SectionContent::Certifications(serde_json::from_value(value).map_err(invalid)?)
            }
            SectionKey::Fees => SectionContent::Fees(serde_json::from_value(value).map_err(invalid)?),
            SectionKey::Faq => SectionContent::Faq(serde_json::from_value(value).map_err(invalid)?),
            SectionKey::Contact => {
                SectionContent::Contact(serde_json::from_value(value).map_err(invalid)?)
            }
            SectionKey::Testimonials => {
                SectionContent::Testimonials(serde_json::from_value(value).map_err(invalid)?)
            }
        };

        Ok(content)
    }

    /// Encode as the JSON document written to the store
    pub fn to_value(&self) -> Result<Value, ContentError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Published content for every section.
///
/// All seven sections are always present; anything the store is missing
/// comes from [`ContentMap::defaults`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentMap {
    pub hero: HeroContent,
    pub contact_info: ContactInfo,
    pub certifications: CertificationsContent,
    pub fees: FeesContent,
    pub faq: FaqContent,
    pub contact: ContactContent,
    pub testimonials: TestimonialsContent,
}

impl ContentMap {
    pub fn get(&self, key: SectionKey) -> SectionContent {
        match key {
            SectionKey::Hero => SectionContent::Hero(self.hero.clone()),
            SectionKey::ContactInfo => SectionContent::ContactInfo(self.contact_info.clone()),
            SectionKey::Certifications => {
                SectionContent::Certifications(self.certifications.clone())
            }
            SectionKey::Fees => SectionContent::Fees(self.fees.clone()),
            SectionKey::Faq => SectionContent::Faq(self.faq.clone()),
            SectionKey::Contact => SectionContent::Contact(self.contact.clone()),
            SectionKey::Testimonials => SectionContent::Testimonials(self.testimonials.clone()),
        }
    }

    /// Replace the section matching the content's variant
    pub fn set(&mut self, content: SectionContent) {
        match content {
            SectionContent::Hero(c) => self.hero = c,
            SectionContent::ContactInfo(c) => self.contact_info = c,
            SectionContent::Certifications(c) => self.certifications = c,
            SectionContent::Fees(c) => self.fees = c,
            SectionContent::Faq(c) => self.faq = c,
            SectionContent::Contact(c) => self.contact = c,
            SectionContent::Testimonials(c) => self.testimonials = c,
        }
    }

    /// Overlay stored rows on top of the current content.
    ///
    /// Rows with an unknown key or a document that does not decode are
    /// skipped and the existing section is kept. Returns how many rows were
    /// applied.
    pub fn overlay<I>(&mut self, rows: I) -> usize
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let mut applied = 0;

        for (store_key, value) in rows {
            let key = match store_key.parse::<SectionKey>() {
                Ok(key) => key,
                Err(err) => {
                    tracing::warn!("Skipping stored row: {}", err);
                    continue;
                }
            };

            match SectionContent::from_value(key, value) {
                Ok(content) => {
                    self.set(content);
                    applied += 1;
                }
                Err(err) => tracing::warn!("Keeping default content: {}", err),
            }
        }

        applied
    }

    /// All sections as a `store key -> document` JSON object
    pub fn to_json(&self) -> Result<Value, ContentError> {
        let mut map = serde_json::Map::new();
        for key in SectionKey::ALL {
            map.insert(key.store_key().to_string(), self.get(key).to_value()?);
        }
        Ok(Value::Object(map))
    }
}

impl Default for ContentMap {
    fn default() -> Self {
        Self::defaults()
    }
}
