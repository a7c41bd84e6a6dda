//! socks - terminal storefront for the SockShop product page.
//!
//! Commands:
//! - `socks show` - Print the product, cart and reviews
//! - `socks shop` - Browse and review interactively
//! - `socks render` - Render the product page as HTML
//! - `socks replay` - Replay a recorded shopping session
//! - `socks config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sock_observability::{LogFormat, LogLevel, SessionId, StructuredLogger};
use tracing_subscriber::EnvFilter;

use commands::{ConfigArgs, RenderArgs, ReplayArgs, ShopArgs, ShowArgs};

/// socks - Browse, review and render the sock storefront
#[derive(Parser)]
#[command(name = "socks")]
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

    /// Log format: json, human or tracing
    #[arg(long, global = true, default_value = "human")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the storefront
    Show(ShowArgs),

    /// Shop interactively
    Shop(ShopArgs),

    /// Render the product page as HTML
    Render(RenderArgs),

    /// Replay a recorded session
    Replay(ReplayArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Show(_) => "show",
            Commands::Shop(_) => "shop",
            Commands::Render(_) => "render",
            Commands::Replay(_) => "replay",
            Commands::Config(_) => "config",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.log_format == LogFormat::Tracing {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);
    let logger = StructuredLogger::new(SessionId::generate())
        .with_component("cli")
        .with_command(cli.command.name())
        .with_format(cli.log_format)
        .with_min_level(if cli.verbose {
            LogLevel::Debug
        } else {
            LogLevel::Warn
        });

    let ctx = match context::Context::load(cli.config.as_deref(), output.clone(), logger) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Show(args) => commands::show::run(args, &ctx),
        Commands::Shop(args) => commands::shop::run(args, &ctx),
        Commands::Render(args) => commands::render::run(args, &ctx),
        Commands::Replay(args) => commands::replay::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.logger
            .error_builder("Command failed")
            .field("error", format!("{:#}", e))
            .emit();
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
