// src/utils/logging.rs
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Framework event logging is noisy at info; keep only its warnings.
const DEFAULT_FILTER: &str = "info,teloxide=warn";

/// Sets up the logging framework using tracing_subscriber.
/// Reads log level filters from the `RUST_LOG` environment variable,
/// falling back to [`DEFAULT_FILTER`].
///
/// When `logs_dir` is given, the same events are also appended to
/// `<logs_dir>/bot.log` (plain text, no colors).
pub fn setup_logging(logs_dir: Option<&Path>) -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = match logs_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(dir.join("bot.log"))?;
            Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    tracing::debug!("Logging setup complete.");
    Ok(())
}
