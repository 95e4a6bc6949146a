use crate::app::{base_context, page};
use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use bigapp::{AppState, Routes};

pub fn register(routes: Routes) -> Routes {
    routes.route("/", get(index))
}

async fn index(State(state): State<AppState>) -> Response {
    let mut context = base_context(&state);
    if let Some(theme) = state.structure("theme") {
        context.insert("theme_static", &theme.static_url_path);
    }
    page(&state, "www/index.html", &context)
}
