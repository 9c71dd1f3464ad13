//! Common test utilities and fixtures

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use assert_cmd::Command;
use tempfile::TempDir;

/// Empty directory standing in for the home, user config and working
/// directories, shared by every command in this test binary
fn isolated_home() -> &'static Path {
    static HOME: OnceLock<TempDir> = OnceLock::new();
    HOME.get_or_init(|| TempDir::new().unwrap()).path()
}

/// Command for the academic-roles binary, isolated from the caller's
/// `ACADEMIC_ROLES_*` and `RUST_LOG` environment and from any config file
/// in their home, user config or working directory
pub fn roles_cmd() -> Command {
    let home = isolated_home();
    let mut cmd = Command::cargo_bin("academic-roles").unwrap();
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"));
    for var in [
        "ACADEMIC_ROLES_CONFIG",
        "ACADEMIC_ROLES_LOG_LEVEL",
        "ACADEMIC_ROLES_LOG_FILE",
        "ACADEMIC_ROLES_LOG_JSON",
        "ACADEMIC_ROLES_BANNERS",
        "ACADEMIC_ROLES_SHOW_IDENTITY",
        "ACADEMIC_ROLES_CASES",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// A config file in its own temporary directory
pub struct ConfigFixture {
    temp_dir: TempDir,
    config_path: PathBuf,
}

impl ConfigFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        Self { temp_dir, config_path }
    }

    pub fn with_content(content: &str) -> Self {
        let fixture = Self::new();
        fixture.write_config(content);
        fixture
    }

    pub fn write_config(&self, content: &str) {
        fs::write(&self.config_path, content).unwrap();
    }

    pub fn path(&self) -> &str {
        self.config_path.to_str().unwrap()
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }
}
