//! HTTP surface for the demo workspace.
//!
//! Thin axum layer over the engine and the usage tracker. The handler for
//! `/api/analyze` is the "caller" from the engine's point of view: it
//! validates the message, checks the daily limit, increments the counter
//! exactly once per accepted analysis, and only then invokes the engine.

use crate::analysis::metrics::AnalysisMetrics;
use crate::analysis::{Analyzer, TranslationResult};
use crate::error::AnalysisError;
use crate::i18n::LanguageRegistry;
use crate::usage::UsageTracker;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tower_http::trace::TraceLayer;
use tracing::error;

/// Shared application state.
pub struct AppState {
    pub analyzer: Analyzer,
    pub usage: Mutex<UsageTracker>,
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/languages", get(list_languages))
        .route("/api/usage", get(usage_view))
        .route("/api/usage/upgrade", post(upgrade_to_pro))
        .route("/api/analyze", post(analyze))
        .route("/api/metrics", get(metrics_report))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

/// One entry in the language list shown by the workspace UI.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LanguageView {
    code: &'static str,
    name: &'static str,
    native_name: &'static str,
}

async fn list_languages() -> Json<Vec<LanguageView>> {
    let languages = LanguageRegistry::get()
        .list_enabled()
        .into_iter()
        .map(|lang| LanguageView {
            code: lang.code,
            name: lang.name,
            native_name: lang.native_name,
        })
        .collect();
    Json(languages)
}

/// Usage snapshot returned to the frontend.
///
/// `remaining_messages` is `null` for Pro users; there is no quota to
/// count down, and the UI renders "unlimited" instead of a number.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UsageView {
    message_count: u32,
    remaining_messages: Option<u32>,
    daily_limit: u32,
    is_pro_user: bool,
}

async fn usage_view(State(state): State<Arc<AppState>>) -> Result<Json<UsageView>, ApiError> {
    let mut usage = state.usage.lock().map_err(|_| ApiError::internal())?;
    let remaining = usage.remaining().map_err(ApiError::from_anyhow)?;
    Ok(Json(UsageView {
        message_count: usage.state().message_count,
        remaining_messages: remaining,
        daily_limit: usage.limit(),
        is_pro_user: usage.state().is_pro_user,
    }))
}

async fn upgrade_to_pro(State(state): State<Arc<AppState>>) -> Result<Json<UsageView>, ApiError> {
    let mut usage = state.usage.lock().map_err(|_| ApiError::internal())?;
    usage.upgrade_to_pro().map_err(ApiError::from_anyhow)?;
    let remaining = usage.remaining().map_err(ApiError::from_anyhow)?;
    Ok(Json(UsageView {
        message_count: usage.state().message_count,
        remaining_messages: remaining,
        daily_limit: usage.limit(),
        is_pro_user: usage.state().is_pro_user,
    }))
}

/// Body of `POST /api/analyze`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub message: String,
    pub target_language: String,
}

async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<TranslationResult>, ApiError> {
    if request.message.trim().is_empty() {
        return Err(ApiError::from(AnalysisError::EmptyInput));
    }

    // Check the limit and count the message inside one lock scope so a
    // double-submitting user cannot slip past the cap. The lock is
    // released before the engine runs.
    {
        let mut usage = state.usage.lock().map_err(|_| ApiError::internal())?;
        if !usage.can_send().map_err(ApiError::from_anyhow)? {
            AnalysisMetrics::global().record_limit_rejection();
            return Err(ApiError::from(AnalysisError::LimitExceeded {
                limit: usage.limit(),
            }));
        }
        usage.increment().map_err(ApiError::from_anyhow)?;
    }

    let result = state
        .analyzer
        .analyze(&request.message, &request.target_language)
        .await?;

    Ok(Json(result))
}

async fn metrics_report() -> Json<crate::analysis::metrics::MetricsReport> {
    Json(AnalysisMetrics::global().report())
}

/// Error response body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// HTTP-mapped error wrapper for the handlers.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "internal error".to_string(),
        }
    }

    fn from_anyhow(err: anyhow::Error) -> Self {
        error!(error = %err, "request failed");
        Self::internal()
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        let status = match &err {
            AnalysisError::EmptyInput => StatusCode::BAD_REQUEST,
            AnalysisError::LimitExceeded { .. } => StatusCode::TOO_MANY_REQUESTS,
            AnalysisError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}
