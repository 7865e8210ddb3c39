use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so an empty environment yields a working local setup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Base URL of the Ollama-compatible model backend.
    pub ollama_url: String,
    pub embedding_model: String,
    pub chat_model: String,
    /// Directory holding the landing page and its assets.
    pub static_dir: String,
    pub model_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            port: var_or("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            ollama_url: var_or("OLLAMA_URL", "http://localhost:11434"),
            embedding_model: var_or("EMBEDDING_MODEL", "gemma:2b"),
            chat_model: var_or("CHAT_MODEL", "gemma:2b"),
            static_dir: var_or("STATIC_DIR", "build"),
            model_timeout_secs: var_or("MODEL_TIMEOUT_SECS", "120")
                .parse::<u64>()
                .context("MODEL_TIMEOUT_SECS must be a whole number of seconds")?,
            rust_log: var_or("RUST_LOG", "info"),
        })
    }
}
