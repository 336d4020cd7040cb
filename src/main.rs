use anyhow::Result;
use question_service::{
    config::{self, Config, Mode},
    server,
};
use tracing::{info, warn};

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

/// Reports which question source is active and whether it has a credential.
fn log_mode(config: &Config) {
    match config.mode {
        Mode::Demo => info!("Running in demo mode - no API key required"),
        Mode::Live if config.llm.api_key.is_empty() => {
            warn!("OPENAI_API_KEY not found in environment variables!")
        }
        Mode::Live => {
            let prefix: String = config.llm.api_key.chars().take(7).collect();
            info!("API key loaded successfully (starts with: {}...)", prefix);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; the environment may already be set.
    dotenvy::dotenv().ok();

    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Determine log level: environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&log_level))
        .json()
        .init();

    info!("Starting question service with log level: {}", log_level);
    log_mode(&config);

    server::run(config).await?;

    Ok(())
}
