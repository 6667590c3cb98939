// src/main.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use guide_bot::config::Config;
use guide_bot::content::ContentManager;
use guide_bot::utils::{self, AppError};

/// Telegram inline-search bot for README code examples
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file (defaults are used when it does not exist)
    #[arg(short, long, default_value = "config/guide-bot.toml")]
    config: PathBuf,

    /// Directory with the content checkout (overrides config file)
    #[arg(long, env = "CONTENT_DIR")]
    content_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the bot (long polling)
    Run {
        /// Telegram bot token (overrides config file)
        #[arg(long, env = "BOT_TOKEN", hide_env_values = true)]
        bot_token: Option<String>,
    },
    /// Print the parsed catalog as JSON
    Catalog {
        /// Only keep entries matching this query
        #[arg(short, long, default_value = "")]
        query: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Parse CLI Arguments and load configuration
    let args = Args::parse();
    let mut config = match Config::load_or_default(&args.config) {
        Ok(config) => config,
        Err(e) => {
            // No logs_dir is known yet, so this goes to stderr only.
            utils::logging::setup_logging(None)?;
            tracing::error!("Failed to load config {}: {}", args.config.display(), e);
            return Err(e.into());
        }
    };
    if let Some(dir) = args.content_dir {
        config.content.base_dir = dir;
    }

    // 2. Setup Logging (reads RUST_LOG env var)
    // An empty logs_dir turns file logging off.
    let logs_dir = config
        .logging
        .logs_dir
        .as_deref()
        .filter(|dir| !dir.as_os_str().is_empty());
    utils::logging::setup_logging(logs_dir)?;
    tracing::info!("Starting with config file {}", args.config.display());

    match args.command {
        Command::Run { bot_token } => {
            if bot_token.is_some() {
                config.bot_token = bot_token;
            }
            guide_bot::bot::run(&config).await
        }
        Command::Catalog { query } => print_catalog(&config, &query).await,
    }
}

async fn print_catalog(config: &Config, query: &str) -> Result<(), AppError> {
    let manager = ContentManager::from_config(&config.content)?;
    let items = manager.search_items(query).await?;
    tracing::info!("Catalog has {} matching entries", items.len());

    let dump = serde_json::json!({
        "readme": manager.loader().base_dir().join(&config.content.readme),
        "query": query,
        "count": items.len(),
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "items": items,
    });
    println!("{}", serde_json::to_string_pretty(&dump)?);
    Ok(())
}
