use bigapp_domain::config::{HostSettings, ServerConfig};
use serde_json::json;

#[test]
fn server_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 5000);
    assert!(server.address.is_unspecified());
}

#[test]
fn host_settings_deserialize() {
    let raw = json!({
        "server": { "address": "127.0.0.1", "port": 8080 },
        "app": { "root": "/srv/app", "strict_env": true }
    });

    let settings: HostSettings = serde_json::from_value(raw).expect("settings deserialize");
    assert_eq!(settings.server.port, 8080);
    assert!(settings.app.strict_env);
    assert_eq!(settings.app.root.as_deref(), Some(std::path::Path::new("/srv/app")));
    assert!(settings.app.config_file.is_none());
}
