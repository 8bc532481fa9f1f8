use anyhow::Result;
use onedrive_vision::{config, server};
use tracing::info;

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

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up a local .env if there is one; absence is fine.
    let _ = dotenvy::dotenv();

    let config = config::load();

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap()),
        )
        .json()
        .init();

    info!(
        "Starting OneDrive image analysis server with log level: {}",
        log_level
    );

    server::run(config).await?;

    Ok(())
}
