//! Route collection that remembers its paths.
//!
//! `axum::Router` cannot list what it serves, so route modules register through [`Routes`]
//! and the kernel can check mount points before the final router is assembled.

use crate::app::AppState;
use axum::Router;
use axum::routing::MethodRouter;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default)]
pub struct Routes {
    router: Router<AppState>,
    paths: BTreeSet<String>,
}

impl Routes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same as [`Router::route`]. Different methods on one path can be added in separate calls.
    #[must_use]
    pub fn route(mut self, path: &str, method_router: MethodRouter<AppState>) -> Self {
        self.router = self.router.route(path, method_router);
        self.paths.insert(path.to_owned());
        self
    }

    /// Adds every route of `other`.
    ///
    /// # Panics
    /// Like [`Router::merge`], when both sides route the same method on the same path.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.router = self.router.merge(other.router);
        self.paths.extend(other.paths);
        self
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub(crate) const fn router(&self) -> &Router<AppState> {
        &self.router
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::{get, post};

    #[test]
    fn paths_are_recorded_once() {
        let routes = Routes::new()
            .route("/login", get(|| async { "form" }))
            .route("/login", post(|| async { "submit" }))
            .route("/", get(|| async { "home" }));

        assert_eq!(routes.paths().collect::<Vec<_>>(), ["/", "/login"]);
        assert!(routes.contains("/login"));
        assert_eq!(routes.len(), 2);
    }
}
