//! Kernel of BigApp.
//!
//! Loads the application config document, discovers routes, blueprints, structures and
//! models through an explicit [`manifest::Manifest`], and assembles the `axum` router.
//!
//! ```rust,ignore
//! use bigapp_kernel::app::{AppOptions, BigApp};
//!
//! let mut app = BigApp::init(AppOptions::new("demo", "src/app"))?;
//! app.import_routes("routes", &manifest);
//! app.import_blueprints("blueprints", &manifest);
//! let state = app.build()?;
//! let router = bigapp_kernel::server::router(state);
//! ```

pub mod app;
pub mod blueprint;
pub mod config;
pub mod discovery;
pub mod errors;
pub mod manifest;
pub mod models;
pub mod routes;
pub mod server;
pub mod session;
pub mod structure;

pub use bigapp_domain as domain;
