//! Configuration file support for depdesk.
//!
//! Provides YAML-based configuration through `depdesk.config.yml` files
//! placed next to `package.json`, including the schema, file loading and
//! validation. Command-line flags take precedence over every value here.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::ports::outbound::NotificationPermission;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "depdesk.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub filter_outdated_dependencies: Option<bool>,
    pub check_outdated_on_startup: Option<bool>,
    pub request_timeout_secs: Option<u64>,
    pub npm_command: Option<String>,
    pub notifications: Option<NotificationSetting>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Whether outdated-dependency notifications may be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationSetting {
    /// Ask on the terminal the first time a notification is due
    Ask,
    Granted,
    Denied,
}

impl NotificationSetting {
    pub fn permission(self) -> NotificationPermission {
        match self {
            NotificationSetting::Ask => NotificationPermission::Default,
            NotificationSetting::Granted => NotificationPermission::Granted,
            NotificationSetting::Denied => NotificationPermission::Denied,
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.request_timeout_secs == Some(0) {
        bail!(
            "Invalid config: request_timeout_secs must be greater than 0.\n\n\
             💡 Hint: Remove the field to use the default of 120 seconds."
        );
    }

    if let Some(ref npm_command) = config.npm_command {
        if npm_command.trim().is_empty() {
            bail!(
                "Invalid config: npm_command must not be empty.\n\n\
                 💡 Hint: Use a command name on PATH (e.g., \"npm\") or an absolute path."
            );
        }
    }

    if let Some(ref format) = config.format {
        if !matches!(format.to_lowercase().as_str(), "table" | "json") {
            bail!(
                "Invalid config: format '{}' is not supported.\n\n\
                 💡 Hint: Use 'table' or 'json'.",
                format
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
