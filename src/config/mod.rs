// src/config/mod.rs
// All values come from the environment (.env supported), with defaults that
// work for a local setup.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Clone, Deserialize)]
pub struct SelahConfig {
    // ── Server Configuration
    pub host: String,
    pub port: u16,

    // ── Database Configuration
    pub database_url: String,
    pub sqlite_max_connections: u32,

    // ── Inference Server Configuration
    pub generation_url: String,
    pub generation_timeout: u64,

    // ── Sampling (fixed per deployment, not per request)
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub top_k: u32,
    pub repetition_penalty: f32,
    pub no_repeat_ngram_size: u32,
    pub min_length: u32,

    // ── Conversation Shaping
    pub history_turn_cap: usize,
    pub sentence_limit: usize,
}

/// Read an env var, tolerating trailing comments and whitespace.
/// A missing or unparseable value falls back to the default.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl SelahConfig {
    pub fn from_env() -> Self {
        // Load .env first if present; plain env vars still win.
        let _ = dotenvy::dotenv();

        Self {
            host: env_var_or("SELAH_HOST", "0.0.0.0".to_string()),
            port: env_var_or("SELAH_PORT", 8900),
            database_url: env_var_or("DATABASE_URL", "sqlite:selah.db?mode=rwc".to_string()),
            sqlite_max_connections: env_var_or("SQLITE_MAX_CONNECTIONS", 5),
            generation_url: env_var_or(
                "SELAH_GENERATION_URL",
                "http://localhost:8080".to_string(),
            ),
            generation_timeout: env_var_or("SELAH_GENERATION_TIMEOUT", 120),
            max_new_tokens: env_var_or("SELAH_MAX_NEW_TOKENS", 70),
            temperature: env_var_or("SELAH_TEMPERATURE", 0.3),
            top_k: env_var_or("SELAH_TOP_K", 20),
            repetition_penalty: env_var_or("SELAH_REPETITION_PENALTY", 2.0),
            no_repeat_ngram_size: env_var_or("SELAH_NO_REPEAT_NGRAM_SIZE", 3),
            min_length: env_var_or("SELAH_MIN_LENGTH", 10),
            history_turn_cap: env_var_or("SELAH_HISTORY_TURN_CAP", 6),
            sentence_limit: env_var_or("SELAH_SENTENCE_LIMIT", 3),
        }
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get timeout for inference requests as a Duration
    pub fn generation_timeout_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.generation_timeout)
    }
}

// Global config instance - loaded once at startup
pub static CONFIG: Lazy<SelahConfig> = Lazy::new(SelahConfig::from_env);
