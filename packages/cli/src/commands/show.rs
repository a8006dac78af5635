use super::open_store;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use sitekit_content::SectionKey;
use sitekit_store::ContentFacade;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Section to print (all sections when omitted)
    pub section: Option<SectionKey>,

    /// Read from an empty in-memory store instead of the configured one
    #[arg(long)]
    pub memory: bool,
}

pub async fn show(args: ShowArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut facade = ContentFacade::new(open_store(&config, args.memory)?);
    facade.load().await;

    if let Some(error) = facade.load_error() {
        eprintln!("{} {}", "⚠️".yellow(), error.yellow());
    }

    let json = match args.section {
        Some(key) => facade.section(key).to_value()?,
        None => facade.content().to_json()?,
    };
    println!("{}", serde_json::to_string_pretty(&json)?);

    Ok(())
}
