//! CLI command implementations.

pub mod config;
pub mod render;
pub mod replay;
pub mod shop;
pub mod show;

use clap::{Args, Subcommand};

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Select this variant (by swatch index) before printing.
    #[arg(short, long)]
    pub variant: Option<usize>,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Write the session's events to this file when done.
    #[arg(short, long)]
    pub record: Option<String>,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Output file path (default: stdout).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Replay this recorded session before rendering.
    #[arg(short, long)]
    pub session: Option<String>,
}

/// Arguments for the replay command.
#[derive(Args)]
pub struct ReplayArgs {
    /// Recording file to play back.
    pub recording: String,

    /// Also write the resulting page to this file.
    #[arg(long)]
    pub html: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,

        /// Brand to write into the new file.
        #[arg(long)]
        brand: Option<String>,

        /// File to create (a `.json` extension writes JSON).
        #[arg(long, default_value = "socks.toml")]
        path: String,
    },
    /// Validate the config file.
    Validate,
}
