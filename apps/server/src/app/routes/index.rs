use crate::app::{base_context, page};
use axum::extract::State;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use bigapp::{AppState, Routes};
use bigapp::kernel::session::SessionMap;

pub fn register(routes: Routes) -> Routes {
    routes.route("/", get(index)).route("/models", get(models))
}

async fn index(State(state): State<AppState>) -> Response {
    let mut session = SessionMap::new();
    state.init_session(&mut session);

    let mut context = base_context(&state);
    context.insert("session", &session);
    context.insert("blueprints", &state.blueprints().names().collect::<Vec<_>>());
    page(&state, "index.html", &context)
}

async fn models(State(state): State<AppState>) -> Response {
    let models: Vec<_> = state.models().names().filter_map(|name| state.model_meta(name).ok()).collect();
    Json(models).into_response()
}
