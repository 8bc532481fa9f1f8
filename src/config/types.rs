/// Process-wide configuration, loaded once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    /// Shared secret expected from inbound callers (`Authorization: Bearer <key>`).
    pub api_key: String,
    pub gemini: GeminiConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

pub mod defaults {
    pub const HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 8080;
    pub const GEMINI_MODEL: &str = "gemini-1.5-flash";
    pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
}
