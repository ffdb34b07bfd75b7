//! Paints CLI - Operator tool for the paint equivalence service.
//!
//! Commands:
//! - `paints fetch` - Run the endpoint pipeline against the live sheet
//! - `paints parse` - Group a local export offline
//! - `paints config` - Show or initialize configuration

mod commands;
mod config;
mod context;
mod output;
mod transport;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, FetchArgs, ParseArgs};

/// Paints CLI - Preview and debug the paint equivalence data
#[derive(Parser)]
#[command(name = "paints")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the sheet and print the grouped response
    Fetch(FetchArgs),

    /// Group a local sheet export
    Parse(ParseArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = context::Context::load(cli.config.as_deref(), output)?;

    let result = match cli.command {
        Commands::Fetch(args) => commands::fetch::run(args, &ctx).await,
        Commands::Parse(args) => commands::parse::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
