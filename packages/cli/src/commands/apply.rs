use super::{open_publishing_store, print_changes, print_errors, read_section};
use crate::config::Config;
use anyhow::{anyhow, Result};
use chrono::Utc;
use clap::Args;
use colored::Colorize;
use sitekit_admin::{AdminPanel, NoticeKind, SaveRequest};
use sitekit_content::SectionKey;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Section to publish
    pub section: SectionKey,

    /// JSON document holding the new section content
    pub file: PathBuf,

    /// Publish without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Run against an in-memory store (dry run)
    #[arg(long)]
    pub memory: bool,
}

pub async fn apply(args: ApplyArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let draft = read_section(args.section, &args.file)?;

    let mut panel = AdminPanel::new(
        open_publishing_store(&config, args.memory).await?,
        config.admin_options(),
    );
    panel.load().await;

    if let Some(banner) = panel.banner() {
        eprintln!("{} {}", "⚠️".yellow(), banner.yellow());
    }
    if let Some(error) = panel.facade().load_error() {
        eprintln!("{} {}", "⚠️".yellow(), error.yellow());
    }

    panel.toggle_section(args.section)?;
    panel.on_field_change(args.section, draft)?;

    if !panel.show_save_actions() {
        println!("{}", "Nothing to publish, content is unchanged".dimmed());
        return Ok(());
    }

    let changes = match panel.request_save()? {
        SaveRequest::Confirm(changes) => changes,
        SaveRequest::Rejected(_) => {
            print_errors(&panel.error_display());
            return Err(anyhow!("{} is not valid", args.section.title()));
        }
    };

    println!(
        "{} {}",
        "Publishing changes to".bright_blue().bold(),
        args.section.title().bright_white()
    );
    print_changes(&changes);

    if !args.yes && !ask("Publish these changes?")? {
        panel.cancel_save()?;
        println!("{}", "Cancelled, nothing was published".yellow());
        return Ok(());
    }

    panel.confirm_save().await?;

    match panel.notice(Utc::now()) {
        Some(notice) if notice.kind == NoticeKind::Success => {
            println!("{} {}", "✓".green(), notice.message.green().bold());
            Ok(())
        }
        Some(notice) => Err(anyhow!("{}", notice.message)),
        None => Err(anyhow!("Save finished without a result")),
    }
}

fn ask(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question.bright_white());
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
