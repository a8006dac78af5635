use super::{open_store, print_changes, read_section};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use sitekit_content::SectionKey;
use sitekit_editor::describe_changes;
use sitekit_store::ContentFacade;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Section to compare
    pub section: SectionKey,

    /// JSON document holding the edited section
    pub file: PathBuf,

    /// Compare against the built-in content instead of the configured store
    #[arg(long)]
    pub memory: bool,
}

pub async fn diff(args: DiffArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let draft = read_section(args.section, &args.file)?;

    let mut facade = ContentFacade::new(open_store(&config, args.memory)?);
    facade.load().await;
    let original = facade.section(args.section);

    println!(
        "{} {}",
        "Changes to".bright_blue().bold(),
        args.section.title().bright_white()
    );
    print_changes(&describe_changes(&original, &draft));

    Ok(())
}
