//! Section record types.
//!
//! Field names serialize in camelCase, matching the JSON documents kept in
//! the content store. Every record defaults missing fields so older rows
//! written before a field existed still decode, and a `null` decodes the
//! same as a missing field.

use crate::items::ListItem;
use serde::{Deserialize, Deserializer, Serialize};

/// Image used for a freshly added testimonial until the owner replaces it
pub const PLACEHOLDER_TESTIMONIAL_IMAGE: &str =
    "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=150&q=80";

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Button with a label and a target
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallToAction {
    #[serde(deserialize_with = "nullable")]
    pub text: String,
    #[serde(deserialize_with = "nullable")]
    pub link: String,
}

/// Headline statistic shown under the hero text.
///
/// Rows written by older site versions carry no `id`, and none is written
/// back for them. Highlights added in the editor get one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Highlight {
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(deserialize_with = "nullable")]
    pub value: String,
    #[serde(deserialize_with = "nullable")]
    pub label: String,
}

impl Highlight {
    pub fn blank(id: u32) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroContent {
    #[serde(deserialize_with = "nullable")]
    pub headline: String,
    #[serde(deserialize_with = "nullable")]
    pub tagline: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(rename = "primaryCTA", deserialize_with = "nullable")]
    pub primary_cta: CallToAction,
    #[serde(rename = "secondaryCTA", deserialize_with = "nullable")]
    pub secondary_cta: CallToAction,
    #[serde(deserialize_with = "nullable")]
    pub image: String,
    #[serde(deserialize_with = "nullable")]
    pub image_alt: String,
    #[serde(deserialize_with = "nullable")]
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(deserialize_with = "nullable")]
    pub phone: String,
    #[serde(deserialize_with = "nullable")]
    pub whatsapp: String,
    #[serde(deserialize_with = "nullable")]
    pub email: String,
    #[serde(deserialize_with = "nullable")]
    pub city: String,
    #[serde(deserialize_with = "nullable")]
    pub address: String,
    #[serde(deserialize_with = "nullable")]
    pub instagram: String,
    #[serde(deserialize_with = "nullable")]
    pub facebook: String,
    #[serde(deserialize_with = "nullable")]
    pub linkedin: String,
    #[serde(deserialize_with = "nullable")]
    pub whatsapp_message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    #[serde(deserialize_with = "nullable")]
    pub id: u32,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub institution: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub icon: String,
}

impl Certification {
    pub fn blank(id: u32) -> Self {
        Self {
            id,
            icon: "award".to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CertificationsContent {
    #[serde(deserialize_with = "nullable")]
    pub section_title: String,
    #[serde(deserialize_with = "nullable")]
    pub section_subtitle: String,
    #[serde(deserialize_with = "nullable")]
    pub certifications: Vec<Certification>,
}

/// A consultation plan on the fees section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    #[serde(deserialize_with = "nullable")]
    pub id: u32,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub price: String,
    #[serde(deserialize_with = "nullable")]
    pub duration: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    /// Bullet points, edited by position
    #[serde(deserialize_with = "nullable")]
    pub features: Vec<String>,
    /// Highlighted as the recommended plan
    #[serde(deserialize_with = "nullable")]
    pub popular: bool,
}

impl Service {
    pub fn blank(id: u32) -> Self {
        Self {
            id,
            features: vec![String::new()],
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeesContent {
    #[serde(deserialize_with = "nullable")]
    pub section_title: String,
    #[serde(deserialize_with = "nullable")]
    pub section_subtitle: String,
    #[serde(deserialize_with = "nullable")]
    pub currency: String,
    #[serde(deserialize_with = "nullable")]
    pub services: Vec<Service>,
    #[serde(deserialize_with = "nullable")]
    pub note: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Faq {
    #[serde(deserialize_with = "nullable")]
    pub id: u32,
    #[serde(deserialize_with = "nullable")]
    pub question: String,
    #[serde(deserialize_with = "nullable")]
    pub answer: String,
}

impl Faq {
    pub fn blank(id: u32) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FaqContent {
    #[serde(deserialize_with = "nullable")]
    pub section_title: String,
    #[serde(deserialize_with = "nullable")]
    pub section_subtitle: String,
    #[serde(deserialize_with = "nullable")]
    pub faqs: Vec<Faq>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Availability {
    #[serde(deserialize_with = "nullable")]
    pub days: String,
    #[serde(deserialize_with = "nullable")]
    pub hours: String,
    #[serde(deserialize_with = "nullable")]
    pub note: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactContent {
    #[serde(deserialize_with = "nullable")]
    pub section_title: String,
    #[serde(deserialize_with = "nullable")]
    pub section_subtitle: String,
    #[serde(deserialize_with = "nullable")]
    pub message: String,
    #[serde(deserialize_with = "nullable")]
    pub cta_text: String,
    #[serde(deserialize_with = "nullable")]
    pub availability: Availability,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    #[serde(deserialize_with = "nullable")]
    pub id: u32,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub role: String,
    /// Optional portrait URL; blank means no image
    #[serde(deserialize_with = "nullable")]
    pub image: String,
    #[serde(deserialize_with = "nullable")]
    pub rating: u8,
    #[serde(deserialize_with = "nullable")]
    pub text: String,
}

impl Testimonial {
    pub fn blank(id: u32) -> Self {
        Self {
            id,
            image: PLACEHOLDER_TESTIMONIAL_IMAGE.to_string(),
            rating: 5,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TestimonialsContent {
    #[serde(deserialize_with = "nullable")]
    pub section_title: String,
    #[serde(deserialize_with = "nullable")]
    pub section_subtitle: String,
    #[serde(deserialize_with = "nullable")]
    pub testimonials: Vec<Testimonial>,
}

macro_rules! impl_list_item {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ListItem for $ty {
                fn id(&self) -> u32 {
                    self.id
                }
            }
        )*
    };
}

// Highlights without an id count as 0 so the next one added still gets 1
impl ListItem for Highlight {
    fn id(&self) -> u32 {
        self.id.unwrap_or(0)
    }
}

impl_list_item!(Certification, Service, Faq, Testimonial);
