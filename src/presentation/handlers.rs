// HTTP request handlers
use crate::application::refresh_service::RefreshOutcome;
use crate::presentation::app_state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Current dashboard view: metrics, history, inputs, and error state
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let view = state.dashboard.lock().await.view();
    Json(view)
}

#[derive(Serialize)]
struct RefreshResponse {
    outcome: &'static str,
}

/// Triggers a refresh cycle. A no-op while one is already in flight, which
/// also covers the "use current location" action: re-running the cycle
/// re-reads the position source.
pub async fn request_refresh(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let outcome = match state.refresh_service.refresh().await {
        RefreshOutcome::Completed => "completed",
        RefreshOutcome::Skipped => "skipped",
        RefreshOutcome::Failed => "failed",
    };

    Json(RefreshResponse { outcome })
}

#[derive(Debug, Deserialize)]
pub struct ParameterChange {
    pub name: String,
    pub value: f64,
}

/// Applies a single parameter change, clamping the value into range
pub async fn set_parameter(
    State(state): State<Arc<AppState>>,
    Json(change): Json<ParameterChange>,
) -> impl IntoResponse {
    match state
        .dashboard
        .lock()
        .await
        .apply_parameter_change(&change.name, change.value)
    {
        Ok(parameters) => Json(parameters).into_response(),
        Err(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()).into_response(),
    }
}
