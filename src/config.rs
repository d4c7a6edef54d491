use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Engine: artificial latency before each analysis, in milliseconds.
    // Presentation affordance only; 0 disables it.
    pub analysis_delay_ms: u64,

    // Usage limiting
    pub daily_message_limit: u32,
    pub usage_file: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid port number")?,

            analysis_delay_ms: std::env::var("ANALYSIS_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),

            daily_message_limit: std::env::var("DAILY_MESSAGE_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(crate::usage::DAILY_MESSAGE_LIMIT),

            usage_file: std::env::var("USAGE_FILE")
                .unwrap_or_else(|_| "data/usage.json".to_string()),
        })
    }
}
