//! Configuration system tests
//!
//! Exercises loading, validation and init through the `config` command.

mod common;

use std::fs;

use common::{roles_cmd, ConfigFixture};
use predicates::prelude::*;

// ─────────────────────────────────────────────────────────────────
// Valid Configuration Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_config_validate_default() {
    roles_cmd()
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_config_found_in_home_directory() {
    let fixture = ConfigFixture::new();
    let home_config = fixture.dir().join(".academic-roles").join("config.toml");
    fs::create_dir_all(home_config.parent().unwrap()).unwrap();
    fs::write(&home_config, "[demo]\nbanners = false\n").unwrap();

    roles_cmd()
        .args(["demo", "--case", "student"])
        .env("HOME", fixture.dir())
        .assert()
        .success()
        .stdout(predicate::str::contains(">>>").not());

    // the default command never sees the caller's home
    roles_cmd()
        .args(["demo", "--case", "student"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(">>> ACADEMIC SYSTEM VIA COMPOSITION <<<"));
}

#[test]
fn test_minimal_config() {
    let fixture = ConfigFixture::with_content("[logging]\n\n[demo]\n");

    roles_cmd()
        .args(["config", "validate", "--config", fixture.path()])
        .assert()
        .success();
}

#[test]
fn test_full_config() {
    let fixture = ConfigFixture::new();
    let log_file = fixture.dir().join("logs").join("roles.log");
    fixture.write_config(&format!(
        r#"
[logging]
level = "debug"
file = "{}"
max_file_size_mb = 5
max_files = 2
json_format = true

[demo]
banners = false
show_identity = true
cases = ["teacher", "student"]
"#,
        log_file.display()
    ));

    roles_cmd()
        .args(["config", "validate", "--config", fixture.path()])
        .assert()
        .success();
}

#[test]
fn test_config_show_default() {
    roles_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[logging]"))
        .stdout(predicate::str::contains("[demo]"))
        .stdout(predicate::str::contains("hybrid"));
}

#[test]
fn test_config_show_custom() {
    let fixture = ConfigFixture::with_content("[demo]\ncases = [\"teacher\"]\nbanners = false\n");

    roles_cmd()
        .args(["config", "show", "--config", fixture.path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("banners = false"))
        .stdout(predicate::str::contains("\"teacher\""))
        .stdout(predicate::str::contains("hybrid").not());
}

// ─────────────────────────────────────────────────────────────────
// Invalid Configuration Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_config_validate_nonexistent_file() {
    roles_cmd()
        .args(["config", "validate", "--config", "/nonexistent/path/config.toml"])
        .assert()
        .code(10)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_invalid_log_level() {
    let fixture = ConfigFixture::with_content("[logging]\nlevel = \"loud\"\n");

    roles_cmd()
        .args(["config", "validate", "--config", fixture.path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid log level"));
}

#[test]
fn test_empty_cases() {
    let fixture = ConfigFixture::with_content("[demo]\ncases = []\n");

    roles_cmd()
        .args(["config", "validate", "--config", fixture.path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("E102"));
}

#[test]
fn test_unknown_case_in_file() {
    let fixture = ConfigFixture::with_content("[demo]\ncases = [\"dean\"]\n");

    roles_cmd()
        .args(["config", "validate", "--config", fixture.path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("E101"));
}

#[test]
fn test_malformed_toml() {
    let fixture = ConfigFixture::with_content("[demo\nbanners = ");

    roles_cmd()
        .args(["config", "validate", "--config", fixture.path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Hint"));
}

#[test]
fn test_env_override_log_level_is_validated() {
    roles_cmd()
        .args(["config", "validate"])
        .env("ACADEMIC_ROLES_LOG_LEVEL", "chatty")
        .assert()
        .failure();
}

// ─────────────────────────────────────────────────────────────────
// Init Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_config_init_creates_file() {
    let fixture = ConfigFixture::new();
    let target = fixture.dir().join("new").join("config.toml");

    roles_cmd()
        .args(["config", "init", "--path", target.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file created"));

    let written = fs::read_to_string(&target).unwrap();
    assert!(written.contains("[demo]"));

    roles_cmd()
        .args(["config", "validate", "--config", target.to_str().unwrap()])
        .assert()
        .success();
}

#[test]
fn test_config_init_refuses_overwrite() {
    let fixture = ConfigFixture::with_content("# keep me\n");

    roles_cmd()
        .args(["config", "init", "--path", fixture.path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    assert_eq!(fs::read_to_string(fixture.path()).unwrap(), "# keep me\n");
}

#[test]
fn test_config_init_force_overwrite() {
    let fixture = ConfigFixture::with_content("# replace me\n");

    roles_cmd()
        .args(["config", "init", "--path", fixture.path(), "--force"])
        .assert()
        .success();

    assert!(fs::read_to_string(fixture.path()).unwrap().contains("[logging]"));
}
