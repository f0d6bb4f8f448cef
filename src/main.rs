//! Main entry point for the Hermes Translate CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hermes_translate::cli::commands::{self, Commands};
use hermes_translate::{TranslationAssistant, TranslatorConfig};

/// Hermes Translate - remembers what people said and translates it on demand
#[derive(Parser, Debug)]
#[command(name = "hermes-translate", version, about, long_about = None)]
struct Args {
    /// Provider API key (optional, defaults to HERMES_API_KEY env var)
    #[arg(long)]
    api_key: Option<String>,

    /// Configuration file (TOML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    let crate_target = env!("CARGO_PKG_NAME").replace('-', "_");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}={}", crate_target, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let Some(command) = args.command else {
        println!("Please specify a command. Use --help for more information.");
        return Ok(());
    };

    // CLI key overrides file and environment
    let config = TranslatorConfig::load_with_key(args.config.as_deref(), args.api_key)?;

    let assistant = TranslationAssistant::from_config(config)?;

    match command {
        Commands::Serve { host, port } => commands::handle_serve(assistant, host, port).await?,
        Commands::Chat { room, user } => commands::handle_chat(assistant, room, user).await?,
        Commands::Languages => commands::handle_languages(assistant).await?,
        Commands::Translate { phrase } => commands::handle_translate(assistant, phrase).await?,
    }

    Ok(())
}
