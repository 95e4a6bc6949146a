//! Public pages mounted at `/www`.

pub mod routes;

use bigapp::{Blueprint, KernelResult, Manifest};
use std::path::Path;

pub fn blueprint(location: &Path) -> KernelResult<Blueprint> {
    let manifest = Manifest::new().routes("www.routes.index", routes::index::register);

    let mut blueprint = Blueprint::new(location)?;
    blueprint.import_routes("routes", &manifest);
    Ok(blueprint)
}
