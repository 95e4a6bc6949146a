//! Facade crate for BigApp.
//! Re-exports the domain and kernel primitives plus the optional helper crates.
//! Keep this crate thin: it composes other crates and holds no logic of its own.
//!
//! ## Usage
//! - Depend on `bigapp` with the helpers you need (`auth`, `forms`, `logger`).
//! - Build the host with [`BigApp::init`], import routes, blueprints, structures and models,
//!   then serve [`server::router`].

#[cfg(feature = "auth")]
pub use bigapp_auth as auth;
pub use bigapp_domain as domain;
#[cfg(feature = "forms")]
pub use bigapp_forms as forms;
pub use bigapp_kernel as kernel;
#[cfg(feature = "logger")]
pub use bigapp_logger as logger;

pub use bigapp_kernel::app::{AppContext, AppOptions, AppState, BigApp};
pub use bigapp_kernel::blueprint::Blueprint;
pub use bigapp_kernel::errors::{KernelError, KernelErrorExt, KernelResult};
pub use bigapp_kernel::manifest::{Manifest, Module};
pub use bigapp_kernel::routes::Routes;
pub use bigapp_kernel::server;

pub use axum;
pub use tera;

/// Build-time enabled helpers (by Cargo feature).
pub const ENABLED: &[&str] = &[
    #[cfg(feature = "auth")]
    "auth",
    #[cfg(feature = "forms")]
    "forms",
    #[cfg(feature = "logger")]
    "logger",
];
