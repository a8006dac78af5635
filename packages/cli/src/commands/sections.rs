use anyhow::Result;
use colored::Colorize;
use sitekit_content::SectionKey;

pub fn sections() -> Result<()> {
    for key in SectionKey::ALL {
        println!("{:<16} {}", key.store_key().bright_white(), key.title());
    }
    Ok(())
}
