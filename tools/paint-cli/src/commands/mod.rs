//! CLI command implementations.

pub mod config;
pub mod fetch;
pub mod parse;

use clap::Args;

/// Arguments for the fetch command.
#[derive(Args)]
pub struct FetchArgs {
    /// Bypass every cache layer, as `?refresh=true` does.
    #[arg(short, long)]
    pub refresh: bool,

    /// Print the response headers.
    #[arg(long)]
    pub headers: bool,
}

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Local sheet export.
    pub file: String,

    /// Payload shape (rows or delimited). Defaults to the configured format.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Field delimiter for delimited text (`\t` or `tab` for tabs).
    #[arg(short, long)]
    pub delimiter: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    /// Write a default configuration file to this path.
    #[arg(long)]
    pub init: Option<String>,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}
