mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{apply, diff, sections, show, validate, ApplyArgs, DiffArgs, ShowArgs, ValidateArgs};
use tracing_subscriber::EnvFilter;

/// Sitekit CLI - Edit and publish the practice website's content
#[derive(Parser, Debug)]
#[command(name = "sitekit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log state transitions and store requests
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print published content as JSON
    Show(ShowArgs),

    /// List the editable sections
    Sections,

    /// Check a section document against the content rules
    Validate(ValidateArgs),

    /// Describe how a section document differs from what is published
    Diff(DiffArgs),

    /// Validate, review and publish a section document
    Apply(ApplyArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?.display().to_string();

    match cli.command {
        Command::Show(args) => show(args, &cwd).await,
        Command::Sections => sections(),
        Command::Validate(args) => validate(args, &cwd),
        Command::Diff(args) => diff(args, &cwd).await,
        Command::Apply(args) => apply(args, &cwd).await,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
