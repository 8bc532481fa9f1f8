mod types;

pub use types::*;

use std::env;
use tracing::debug;

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Reads configuration from the environment once at startup.
///
/// Missing secrets are kept as empty strings here; the handlers check them per
/// request so a misconfigured deployment fails loudly with a 500 instead of
/// refusing to boot (or worse, accepting every caller).
pub fn load() -> Config {
    let config = Config {
        server: ServerConfig {
            host: env_or("HOST", defaults::HOST),
            port: env_or("PORT", "").parse().unwrap_or(defaults::PORT),
        },
        api_key: env_or("API_KEY", ""),
        gemini: GeminiConfig {
            api_key: env_or("GEMINI_API_KEY", ""),
            model: env_or("GEMINI_MODEL", defaults::GEMINI_MODEL),
            base_url: env_or("GEMINI_BASE_URL", defaults::GEMINI_BASE_URL),
        },
    };

    debug!(
        model = %config.gemini.model,
        host = %config.server.host,
        port = config.server.port,
        "Configuration loaded"
    );

    config
}
