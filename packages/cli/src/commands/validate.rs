use super::{print_errors, read_json};
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use sitekit_content::SectionKey;
use sitekit_validator::{validate_key, ErrorDisplay};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Section the document belongs to
    pub section: SectionKey,

    /// JSON document to check
    pub file: PathBuf,
}

pub fn validate(args: ValidateArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let value = read_json(&args.file)?;
    let result = validate_key(args.section, &value);

    if result.is_valid {
        println!(
            "{} {} is valid",
            "✓".green(),
            args.section.title().bright_white()
        );
        return Ok(());
    }

    print_errors(&ErrorDisplay::new(&result.errors, config.max_displayed_errors));
    Err(anyhow!(
        "{} validation error(s) in {}",
        result.errors.len(),
        args.file.display()
    ))
}
