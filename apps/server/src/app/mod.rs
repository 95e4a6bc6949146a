//! The demo application. Everything below this folder is found by discovery at start-up;
//! the manifest maps each discovered module id to its Rust items.

pub mod blueprints;
pub mod models;
pub mod routes;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use bigapp::kernel::models::ModelSet;
use bigapp::tera::Context;
use bigapp::{AppOptions, AppState, BigApp, KernelResult, Manifest};
use std::path::PathBuf;

/// First segment of every module id in this application.
pub const PACKAGE: &str = "app";

/// `src/app` of this crate.
pub fn default_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src").join(PACKAGE)
}

pub fn manifest() -> Manifest {
    Manifest::new()
        .routes("app.routes.index", routes::index::register)
        .routes("app.routes.account", routes::account::register)
        .blueprint("app.blueprints.www", blueprints::www::blueprint)
        .models("app.models.users", ModelSet::new("db").with::<models::users::User>().with::<models::users::LoginAttempt>())
}

/// Loads the config and imports routes, blueprints, structures and models.
///
/// # Errors
/// Any config or template failure.
pub fn create(options: AppOptions) -> KernelResult<AppState> {
    let manifest = manifest();

    let mut app = BigApp::init(options)?;
    app.import_routes("routes", &manifest);
    app.import_blueprints("blueprints", &manifest);
    app.import_structures("structures");
    app.import_models("models", &manifest);
    app.build()
}

/// Renders `template` or answers 500 with the error.
pub(crate) fn page(state: &AppState, template: &str, context: &Context) -> Response {
    match state.render(template, context) {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!(%template, "Render failed: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        },
    }
}

/// Context every page starts from.
pub(crate) fn base_context(state: &AppState) -> Context {
    let mut context = Context::new();
    context.insert("site_name", state.config().get_str("SITE_NAME").unwrap_or_else(|| state.name()));
    context
}
