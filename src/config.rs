//! Configuration for academic-roles
//!
//! Sources, highest precedence first:
//! 1. CLI arguments
//! 2. Environment variables (ACADEMIC_ROLES_* prefix)
//! 3. Configuration file (TOML)
//! 4. Default values
//!
//! The configuration only shapes output and logging. It never carries member
//! or role data.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::demo::DemoCase;
use crate::error::{Error, Result};

const ENV_PREFIX: &str = "ACADEMIC_ROLES_";

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RolesConfig {
    /// Logging configuration
    pub logging: LoggingSettings,

    /// Demonstration output settings
    pub demo: DemoSettings,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Log file path (unset = no file logging)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Maximum log file size in MB before rotation
    pub max_file_size_mb: u64,

    /// Number of rotated log files to keep
    pub max_files: u32,

    /// Enable JSON formatted logging
    pub json_format: bool,
}

/// Demonstration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Print the `>>> ... <<<` banners
    pub banners: bool,

    /// Print each member's identity line before the activities
    pub show_identity: bool,

    /// Cases to run, in order
    pub cases: Vec<DemoCase>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
            max_file_size_mb: 100,
            max_files: 5,
            json_format: false,
        }
    }
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            banners: true,
            show_identity: true,
            cases: DemoCase::all().to_vec(),
        }
    }
}

impl RolesConfig {
    /// Load configuration from file with environment variable overrides
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = Self::find_config_file(config_path)? {
            debug!(path = %path.display(), "Loading configuration file");
            let content = fs::read_to_string(&path).map_err(|e| Error::IoRead {
                path: path.clone(),
                source: e,
            })?;
            config = toml::from_str(&content).map_err(|e| {
                Error::config_parse(format!("{}: {}", path.display(), e.message()), e)
            })?;
            info!(path = %path.display(), "Configuration loaded from file");
        }

        config.apply_env_overrides()?;
        config.expand_paths();
        config.validate()?;

        Ok(config)
    }

    /// Find the configuration file to use
    fn find_config_file(explicit_path: Option<&str>) -> Result<Option<PathBuf>> {
        // An explicit path must exist
        if let Some(path) = explicit_path {
            let path = PathBuf::from(expand_path(path));
            if path.exists() {
                return Ok(Some(path));
            }
            return Err(Error::config_not_found(path));
        }

        let search_paths = [
            Some(PathBuf::from("academic-roles.toml")),
            dirs::config_dir().map(|p| p.join("academic-roles").join("config.toml")),
            dirs::home_dir().map(|p| p.join(".academic-roles").join("config.toml")),
            Some(PathBuf::from("/etc/academic-roles/config.toml")),
        ];

        for path in search_paths.iter().flatten() {
            if path.exists() {
                debug!(path = %path.display(), "Found configuration file");
                return Ok(Some(path.clone()));
            }
        }

        debug!("No configuration file found, using defaults");
        Ok(None)
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a `ACADEMIC_ROLES_*` lookup.
    ///
    /// Unparseable booleans are ignored; an unknown case name is an error.
    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        // Logging settings
        if let Some(val) = var("LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Some(val) = var("LOG_FILE") {
            self.logging.file = Some(val);
        }
        if let Some(val) = var("LOG_JSON") {
            if let Ok(b) = val.parse() {
                self.logging.json_format = b;
            }
        }

        // Demo settings
        if let Some(val) = var("BANNERS") {
            if let Ok(b) = val.parse() {
                self.demo.banners = b;
            }
        }
        if let Some(val) = var("SHOW_IDENTITY") {
            if let Ok(b) = val.parse() {
                self.demo.show_identity = b;
            }
        }
        if let Some(val) = var("CASES") {
            match val
                .split(',')
                .map(|s| s.trim().parse::<DemoCase>())
                .collect::<std::result::Result<Vec<_>, _>>()
            {
                Ok(cases) => self.demo.cases = cases,
                Err(e) => {
                    return Err(Error::config_field_invalid(
                        "demo.cases",
                        format!("{}CASES: {}", ENV_PREFIX, e),
                    ));
                }
            }
        }

        Ok(())
    }

    fn expand_paths(&mut self) {
        if let Some(ref file) = self.logging.file {
            self.logging.file = Some(expand_path(file));
        }
    }

    fn validate(&self) -> Result<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(Error::config_field_invalid(
                "logging.level",
                format!(
                    "Invalid log level '{}'. Must be one of: {}",
                    self.logging.level,
                    valid_levels.join(", ")
                ),
            ));
        }

        if self.demo.cases.is_empty() {
            return Err(Error::config_field_invalid(
                "demo.cases",
                "At least one demonstration case must be listed",
            ));
        }

        Ok(())
    }
}

/// Expand ~ and environment variables in paths
fn expand_path(path: &str) -> String {
    shellexpand::full(path)
        .unwrap_or_else(|_| std::borrow::Cow::Borrowed(path))
        .into_owned()
}

/// Write a commented default configuration file and return its path
pub fn init_config(path: Option<&str>, force: bool) -> Result<PathBuf> {
    let config_path = path
        .map(|p| PathBuf::from(expand_path(p)))
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".academic-roles")
                .join("config.toml")
        });

    if config_path.exists() && !force {
        return Err(Error::ConfigExists { path: config_path });
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::IoWrite {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    fs::write(&config_path, generate_default_config()).map_err(|e| Error::IoWrite {
        path: config_path.clone(),
        source: e,
    })?;

    info!(path = %config_path.display(), "Configuration file written");
    Ok(config_path)
}

fn generate_default_config() -> String {
    r#"# academic-roles configuration

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log file path (comment out to disable file logging)
# file = "~/.academic-roles/logs/roles.log"

# Maximum log file size in MB before rotation
max_file_size_mb = 100

# Number of rotated log files to keep
max_files = 5

# Enable JSON formatted logging
json_format = false

[demo]
# Print the ">>> ... <<<" banners
banners = true

# Print each member's identity line before the activities
show_identity = true

# Cases to run, in order: student, teacher, hybrid
cases = ["student", "teacher", "hybrid"]
"#
    .to_string()
}
