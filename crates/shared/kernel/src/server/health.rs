use crate::app::AppState;
use crate::discovery::SkipReason;
use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use serde::Serialize;

/// What the application mounted at start-up.
#[derive(Debug, Serialize)]
struct Health<'a> {
    /// `degraded` when a blueprint or structure failed to load or overlapped another mount.
    status: &'static str,
    app: &'a str,
    blueprints: Vec<&'a str>,
    structures: Vec<&'a str>,
    skipped: usize,
}

pub(super) async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let skipped = &state.report().skipped;
    let degraded = skipped.iter().any(|s| matches!(s.reason, SkipReason::Failed(_) | SkipReason::Overlap(_)));

    let body = Health {
        status: if degraded { "degraded" } else { "up" },
        app: state.name(),
        blueprints: state.blueprints().names().collect(),
        structures: state.structures().map(|s| s.name.as_str()).collect(),
        skipped: skipped.len(),
    };
    let body = serde_json::to_value(&body).unwrap_or_default();

    ([(header::CACHE_CONTROL, "no-store")], Json(body))
}
