//! # Sitekit Content
//!
//! Typed content model for the practice's marketing site.
//!
//! The site is split into seven independently editable sections. Each one is
//! stored as a single JSON document under a fixed store key:
//!
//! ```text
//! hero ─ contact_info ─ certifications ─ fees ─ faq ─ contact ─ testimonials
//! ```
//!
//! [`SectionContent`] is the tagged union over the seven record types and is
//! what the validator, the change descriptor and the admin panel pass around.
//! [`ContentMap`] always holds all seven sections, falling back to the
//! built-in defaults for anything the store does not have.

mod content;
mod defaults;
mod error;
mod items;
mod key;
mod records;

pub use content::{ContentMap, SectionContent};
pub use error::ContentError;
pub use items::{next_id, push_item, remove_item, ListItem};
pub use key::SectionKey;
pub use records::{
    Availability, CallToAction, Certification, CertificationsContent, ContactContent, ContactInfo,
    Faq, FaqContent, FeesContent, HeroContent, Highlight, Service, Testimonial,
    TestimonialsContent, PLACEHOLDER_TESTIMONIAL_IMAGE,
};
