use anyhow::{Context, Result};
use converse_easy::analysis::Analyzer;
use converse_easy::config::Config;
use converse_easy::usage::UsageTracker;
use converse_easy::web::{self, AppState};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("converse_easy=info".parse()?),
        )
        .init();

    info!("Starting ConverseEasy analysis backend");

    // Load configuration from environment
    let config = Config::from_env()?;

    let usage = UsageTracker::load(&config.usage_file, config.daily_message_limit)
        .context("failed to load usage state")?;
    info!(
        count = usage.state().message_count,
        limit = config.daily_message_limit,
        pro = usage.state().is_pro_user,
        "Loaded usage state"
    );

    let state = Arc::new(AppState {
        analyzer: Analyzer::new(Duration::from_millis(config.analysis_delay_ms)),
        usage: Mutex::new(usage),
    });

    let app = web::router(state);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("Listening on {}", addr);
    axum::serve(listener, app)
        .await
        .context("server error")?;

    Ok(())
}
