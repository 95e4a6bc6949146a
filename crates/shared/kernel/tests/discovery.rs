pub mod fixtures;

use bigapp_kernel::app::{AppOptions, BigApp};
use bigapp_kernel::config::MapEnv;
use bigapp_kernel::discovery::{DiscoveryReport, ScanMode, SkipReason, scan};
use bigapp_kernel::manifest::Manifest;
use bigapp_kernel::models::{Model, ModelSet};
use bigapp_kernel::routes::Routes;
use axum::routing::get;
use fixtures::*;
use std::path::Path;
use std::sync::Arc;

const APP: &str = env!("CARGO_CRATE_NAME");

struct Widget;
impl Model for Widget {
    const TABLE_NAME: &'static str = "widgets";
}

struct Gadget;
impl Model for Gadget {
    const TABLE_NAME: &'static str = "gadgets";
    const BIND_KEY: Option<&'static str> = Some("reports");
}

fn index_routes(routes: Routes) -> Routes {
    routes.route("/", get(|| async { "index" }))
}

fn about_routes(routes: Routes) -> Routes {
    routes.route("/about", get(|| async { "about" }))
}

fn init(root: &Path) -> BigApp {
    BigApp::init(AppOptions::new(APP, root).env(Arc::new(MapEnv::new()))).expect("app init")
}

#[test]
fn scan_skips_each_invalid_entry_once() {
    let root = tempfile::tempdir().unwrap();
    for file in ["routes/index.rs", "routes/about.rs", "routes/users.rs", "routes/my routes.rs"] {
        write(root.path(), file, "");
    }

    let mut report = DiscoveryReport::default();
    let candidates = scan(&root.path().join("routes"), ScanMode::Routes, &mut report);

    let stems: Vec<_> = candidates.iter().map(|c| c.stem.as_str()).collect();
    assert_eq!(stems, ["about", "index", "users"]);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].entry, "my routes.rs");
    assert_eq!(report.skipped[0].reason, SkipReason::IllegalName);
}

#[test]
fn scan_filters_by_kind() {
    let root = tempfile::tempdir().unwrap();
    write(root.path(), "routes/index.rs", "");
    write(root.path(), "routes/notes.txt", "");
    write(root.path(), "routes/mod.rs", "");
    write(root.path(), "routes/nested/inner.rs", "");

    let mut report = DiscoveryReport::default();
    let candidates = scan(&root.path().join("routes"), ScanMode::Routes, &mut report);
    assert_eq!(candidates.len(), 1);
    // mod.rs is the folder's own module file and is not reported
    assert_eq!(report.skipped.len(), 2);

    let mut report = DiscoveryReport::default();
    let folders = scan(&root.path().join("routes"), ScanMode::Blueprints, &mut report);
    assert_eq!(folders.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(), ["nested"]);
}

#[test]
fn missing_folder_is_empty() {
    let root = tempfile::tempdir().unwrap();
    let mut report = DiscoveryReport::default();
    assert!(scan(&root.path().join("nope"), ScanMode::Models, &mut report).is_empty());
    assert_eq!(report, DiscoveryReport::default());
}

#[test]
fn routes_resolve_through_the_manifest() {
    let root = app_root(MINIMAL_CONFIG);
    for file in ["routes/index.rs", "routes/about.rs", "routes/orphan.rs"] {
        write(root.path(), file, "");
    }
    let manifest = Manifest::new()
        .routes(format!("{APP}.routes.index"), index_routes)
        .routes(format!("{APP}.routes.about"), about_routes);

    let mut app = init(root.path());
    let report = app.import_routes("routes", &manifest);

    assert_eq!(report.imported, [format!("{APP}.routes.about"), format!("{APP}.routes.index")]);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].reason, SkipReason::UnknownModule);
    assert_eq!(app.report(), &report);
}

#[test]
fn models_need_the_attribute() {
    let root = app_root(MINIMAL_CONFIG);
    write(root.path(), "models/shop.rs", "");
    write(root.path(), "models/legacy.rs", "");
    let manifest = Manifest::new()
        .models(format!("{APP}.models.shop"), ModelSet::new("db").with::<Widget>().with::<Gadget>())
        .models(format!("{APP}.models.legacy"), ModelSet::new("sql").with::<Widget>());

    let mut app = init(root.path());
    let report = app.import_models("models", &manifest);

    assert_eq!(report.imported, [format!("{APP}.models.shop")]);
    assert_eq!(report.skipped[0].reason, SkipReason::MissingAttribute("db".to_owned()));

    let state = app.build().unwrap();
    assert_eq!(state.model("Widget").unwrap().table_name, "widgets");
    let meta = state.model_meta("Gadget").unwrap();
    assert_eq!(meta.bind_key, Some("reports"));
    assert_eq!(meta.location, APP);
    let err = state.model("Nope").unwrap_err().to_string();
    assert!(err.contains("Gadget, Widget"), "{err}");
}

#[test]
fn foreign_models_are_not_registered() {
    let root = app_root(MINIMAL_CONFIG);
    write(root.path(), "models/shop.rs", "");
    let manifest = Manifest::new().models("elsewhere.models.shop", ModelSet::new("db").with::<Widget>());

    let mut app = BigApp::init(AppOptions::new("elsewhere", root.path()).env(Arc::new(MapEnv::new()))).unwrap();
    let report = app.import_models("models", &manifest);
    assert_eq!(report.imported.len(), 1);
    assert!(app.build().unwrap().models().is_empty());
}

#[test]
fn structures_need_templates() {
    let root = app_root(MINIMAL_CONFIG);
    write(root.path(), "structures/plain/templates/plain/base.html", "plain");
    write(root.path(), "structures/plain/static/site.css", "body {}");
    write(root.path(), "structures/hidden/templates/hidden/base.html", "");
    write(root.path(), "structures/hidden/config.toml", "enabled = 'no'");
    write(root.path(), "structures/bare/static/x.css", "");

    let mut app = init(root.path());
    let report = app.import_structures("structures");

    assert_eq!(report.imported, ["plain"]);
    let reasons: Vec<_> = report.skipped.iter().map(|s| (s.entry.as_str(), s.reason.clone())).collect();
    assert_eq!(reasons, [("bare", SkipReason::NoTemplates), ("hidden", SkipReason::Disabled)]);

    let state = app.build().unwrap();
    let plain = state.structure("plain").unwrap();
    assert_eq!(plain.static_url_path, "/plain/static");
    assert_eq!(state.structure_tmpl("plain", "base.html"), "plain/base.html");
    assert!(state.templates().contains("plain/base.html"));
}
