use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn bigapp() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("bigapp")
}

#[test]
fn help_lists_commands() {
    bigapp()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("blueprint"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn blueprint_add_writes_the_layout() {
    let dir = tempdir().unwrap();

    bigapp()
        .args(["blueprint", "add", "--path"])
        .arg(dir.path())
        .args(["--name", "Admin Panel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created blueprint 'admin_panel'"));

    let folder = dir.path().join("admin_panel");
    for file in ["mod.rs", "config.toml", "routes/mod.rs", "routes/index.rs", "templates/admin_panel/index.html"] {
        assert!(folder.join(file).is_file(), "{file} missing");
    }
    assert!(folder.join("static").is_dir());

    let config: toml::Table = toml::from_str(&fs::read_to_string(folder.join("config.toml")).unwrap()).unwrap();
    assert_eq!(config["enabled"].as_str(), Some("yes"));
    assert_eq!(config["settings"]["url_prefix"].as_str(), Some("/admin_panel"));
}

#[test]
fn blueprint_add_refuses_existing_folder() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("shop")).unwrap();

    bigapp()
        .args(["blueprint", "add", "--path"])
        .arg(dir.path())
        .args(["--name", "shop"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn blueprint_add_refuses_missing_path_and_bad_names() {
    let dir = tempdir().unwrap();

    bigapp()
        .args(["blueprint", "add", "--path"])
        .arg(dir.path().join("nope"))
        .args(["--name", "shop"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));

    bigapp()
        .args(["blueprint", "add", "--path"])
        .arg(dir.path())
        .args(["--name", "readme"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("skipped by discovery"));

    bigapp()
        .args(["blueprint", "add", "--path"])
        .arg(dir.path())
        .args(["--name", "Type"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is a Rust keyword"));
    assert!(!dir.path().join("type").exists());
}

#[test]
fn blueprint_list_shows_state_and_prefix() {
    let dir = tempdir().unwrap();
    bigapp().args(["blueprint", "add", "--path"]).arg(dir.path()).args(["--name", "shop"]).assert().success();
    fs::create_dir_all(dir.path().join("draft")).unwrap();
    fs::write(dir.path().join("draft/config.toml"), "enabled = false\n[settings]\nurl_prefix = \"/wip\"\n").unwrap();

    bigapp()
        .args(["blueprint", "list", "--path"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"draft\s+no\s+/wip").unwrap())
        .stdout(predicate::str::is_match(r"shop\s+yes\s+/shop").unwrap());
}

#[test]
fn config_init_writes_once_unless_forced() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("default.config.toml");

    bigapp().args(["config", "init", "--path"]).arg(dir.path()).assert().success();
    let first = fs::read_to_string(&file).unwrap();
    let parsed: toml::Table = toml::from_str(&first).unwrap();
    assert_eq!(parsed["flask"]["secret_key"].as_str().map(str::len), Some(64));

    bigapp()
        .args(["config", "init", "--path"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    bigapp().args(["config", "init", "--force", "--path"]).arg(dir.path()).assert().success();
    assert_ne!(fs::read_to_string(&file).unwrap(), first);
}
