//! HTTP assembly of a built application.

mod health;
pub(crate) mod mounts;
pub mod templates;

use crate::app::AppState;
use crate::blueprint::{nest, serve_static};
use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;
use tracing::debug;

pub use templates::Templates;

pub const HEALTH_PATH: &str = "/health";

/// Application routes, `/health`, blueprints at their prefixes and static folders.
pub fn router(state: AppState) -> Router {
    let mut router = state.routes().router().clone().route(HEALTH_PATH, get(health::health_handler));

    for blueprint in state.blueprints().iter() {
        debug!(blueprint = %blueprint.name(), prefix = %blueprint.url_prefix(), "Mounting blueprint");
        router = nest(router, blueprint.url_prefix(), blueprint.router());
    }

    for structure in state.structures() {
        if let Some(folder) = &structure.static_folder {
            router = serve_static(router, &structure.static_url_path, folder);
        }
    }

    let config = state.config();
    if config.static_folder.is_dir() {
        router = serve_static(router, &config.static_url_path, &config.static_folder);
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}
