use sitekit_content::{ContentMap, SectionContent, SectionKey};
use std::collections::HashMap;

/// Last published content per section, the baseline every draft is
/// compared against.
#[derive(Debug, Clone)]
pub struct Originals {
    sections: HashMap<SectionKey, SectionContent>,
}

impl Originals {
    pub fn new(content: &ContentMap) -> Self {
        let mut originals = Self {
            sections: HashMap::new(),
        };
        originals.seed(content);
        originals
    }

    /// Replace every section with freshly loaded content
    pub fn seed(&mut self, content: &ContentMap) {
        for key in SectionKey::ALL {
            self.sections.insert(key, content.get(key));
        }
    }

    pub fn get(&self, key: SectionKey) -> Option<&SectionContent> {
        self.sections.get(&key)
    }

    /// Record a section after it was saved
    pub fn set(&mut self, content: SectionContent) {
        self.sections.insert(content.key(), content);
    }
}

impl Default for Originals {
    fn default() -> Self {
        Self::new(&ContentMap::defaults())
    }
}
