//! Path claims of everything [`super::router`] mounts.
//!
//! `axum` panics when two routers serve the same path, so overlaps are found here while the
//! application is built and the later claimant is left out.

use std::fmt;

/// Where a mount answers requests, as a full URL path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Mount {
    /// A single route. Parameter names are erased, so `/{id}` and `/{slug}` are equal.
    Route(String),
    /// A service nested at a path, answering it and everything below it.
    Service(String),
    /// Static files served at `/` of a router, as its fallback. Holds the router's prefix.
    Fallback(String),
}

impl Mount {
    pub(crate) fn route(path: &str) -> Self {
        Self::Route(erase_params(path))
    }

    pub(crate) fn service(path: &str) -> Self {
        if path == "/" { Self::Fallback("/".to_owned()) } else { Self::Service(path.to_owned()) }
    }

    fn overlaps(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Route(a), Self::Route(b)) | (Self::Service(a), Self::Service(b)) => a == b,
            (Self::Route(route), Self::Service(base)) | (Self::Service(base), Self::Route(route)) => {
                route == base || route.strip_prefix(base.as_str()).is_some_and(|rest| rest.starts_with('/'))
            },
            (Self::Fallback(a), Self::Fallback(b) | Self::Service(b))
            | (Self::Service(b), Self::Fallback(a)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Mount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Route(path) => write!(f, "route {path}"),
            Self::Service(path) => write!(f, "static files at {path}"),
            Self::Fallback(prefix) => write!(f, "static fallback of {prefix}"),
        }
    }
}

/// Two mounts that cannot both be served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Clash {
    pub(crate) mount: Mount,
    pub(crate) owner: String,
    pub(crate) existing: Mount,
    pub(crate) existing_owner: String,
}

impl fmt::Display for Clash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} overlaps {} of {}", self.mount, self.owner, self.existing, self.existing_owner)
    }
}

#[derive(Debug, Default)]
pub(crate) struct MountTable {
    claims: Vec<(Mount, String)>,
}

impl MountTable {
    /// Records every mount of `owner`, or none of them when one overlaps an earlier claim
    /// or another mount of the same owner.
    pub(crate) fn claim(&mut self, owner: &str, mounts: Vec<Mount>) -> Result<(), Clash> {
        for (index, mount) in mounts.iter().enumerate() {
            let own = mounts[..index].iter().map(|m| (m, owner));
            let earlier = self.claims.iter().map(|(m, o)| (m, o.as_str()));
            if let Some((existing, existing_owner)) = earlier.chain(own).find(|(m, _)| m.overlaps(mount)) {
                return Err(Clash {
                    mount: mount.clone(),
                    owner: owner.to_owned(),
                    existing: existing.clone(),
                    existing_owner: existing_owner.to_owned(),
                });
            }
        }
        self.claims.extend(mounts.into_iter().map(|m| (m, owner.to_owned())));
        Ok(())
    }
}

/// `path` nested under `prefix`, the way `Router::nest` joins them.
pub(crate) fn join(prefix: &str, path: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    match (prefix.is_empty(), path) {
        (true, "") => "/".to_owned(),
        (true, path) => path.to_owned(),
        (false, "" | "/") => prefix.to_owned(),
        (false, path) => format!("{prefix}{path}"),
    }
}

fn erase_params(path: &str) -> String {
    path.split('/')
        .map(|segment| match segment.strip_prefix('{') {
            Some(rest) if rest.starts_with('*') => "{*}",
            Some(_) if segment.ends_with('}') => "{}",
            _ => segment,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_like_nest() {
        assert_eq!(join("/shop", "/"), "/shop");
        assert_eq!(join("/shop", "/cart"), "/shop/cart");
        assert_eq!(join("/", "/cart"), "/cart");
        assert_eq!(join("/", "/"), "/");
        assert_eq!(join("", ""), "/");
    }

    #[test]
    fn parameter_names_do_not_matter() {
        assert_eq!(Mount::route("/users/{id}"), Mount::route("/users/{name}"));
        assert_eq!(Mount::route("/files/{*rest}"), Mount::route("/files/{*path}"));
        assert_ne!(Mount::route("/users/{id}"), Mount::route("/users/me"));
    }

    #[test]
    fn services_cover_their_subtree() {
        let static_files = Mount::service("/static");
        assert!(static_files.overlaps(&Mount::route("/static")));
        assert!(static_files.overlaps(&Mount::route("/static/app.css")));
        assert!(!static_files.overlaps(&Mount::route("/statics")));
        assert!(Mount::service("/").overlaps(&Mount::Fallback("/".to_owned())));
        assert!(!Mount::Fallback("/shop".to_owned()).overlaps(&Mount::route("/shop")));
    }

    #[test]
    fn overlapping_claim_is_rejected_whole() {
        let mut table = MountTable::default();
        table.claim("app", vec![Mount::route("/"), Mount::route("/health")]).unwrap();

        let clash = table.claim("www", vec![Mount::route("/about"), Mount::route("/")]).unwrap_err();
        assert_eq!(clash.existing_owner, "app");
        assert_eq!(clash.to_string(), "route / of www overlaps route / of app");

        table.claim("docs", vec![Mount::route("/about")]).unwrap();
    }

    #[test]
    fn owner_cannot_overlap_itself() {
        let mut table = MountTable::default();
        let clash = table
            .claim("shop", vec![Mount::route("/shop/static/logo"), Mount::service("/shop/static")])
            .unwrap_err();
        assert_eq!(clash.existing_owner, "shop");
    }
}
