//! Configuration file support for bitlocker-inventory.
//!
//! Provides YAML-based configuration through `bitlocker-inventory.config.yml`
//! files: the directory connection settings plus overridable policy defaults.
//! Unlike purely optional tool configuration, the directory connection cannot
//! be defaulted, so a missing file is an environment error.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::error::InventoryError;
use crate::shared::Result;

const CONFIG_FILENAME: &str = "bitlocker-inventory.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub directory: DirectorySettings,
    #[serde(default)]
    pub policy: PolicyDefaults,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Connection settings for the directory service.
#[derive(Clone, Deserialize)]
pub struct DirectorySettings {
    /// Domain controller hostname or IP address.
    pub host: String,

    /// LDAP port (389 for LDAP, 636 for LDAPS).
    #[serde(default = "default_ldap_port")]
    pub port: u16,

    /// Use SSL/TLS (LDAPS).
    #[serde(default)]
    pub use_ssl: bool,

    /// Use STARTTLS upgrade on a plain LDAP connection.
    #[serde(default)]
    pub use_starttls: bool,

    /// Base DN endpoint enumeration starts from when no scope is given
    /// (e.g., "DC=contoso,DC=com").
    pub base_dn: String,

    /// Bind DN for authentication.
    pub bind_dn: String,

    /// Bind password. Omit for an unauthenticated bind.
    #[serde(default)]
    pub bind_password: Option<String>,

    /// Per-query timeout in seconds; a timed-out escrow query fails that
    /// endpoint, not the run.
    #[serde(default = "default_query_timeout_secs")]
    pub query_timeout_secs: u64,

    /// Number of escrow child queries in flight at once.
    #[serde(default = "default_concurrent_queries")]
    pub concurrent_queries: usize,
}

impl std::fmt::Debug for DirectorySettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectorySettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("use_ssl", &self.use_ssl)
            .field("use_starttls", &self.use_starttls)
            .field("base_dn", &self.base_dn)
            .field("bind_dn", &self.bind_dn)
            .field(
                "bind_password",
                &self.bind_password.as_ref().map(|_| "***REDACTED***"),
            )
            .field("query_timeout_secs", &self.query_timeout_secs)
            .field("concurrent_queries", &self.concurrent_queries)
            .finish()
    }
}

/// Policy defaults, each overridable from the command line.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PolicyDefaults {
    #[serde(default)]
    pub include_servers: bool,
    #[serde(default)]
    pub max_last_logon_age_days: u32,
    #[serde(default)]
    pub scope: Option<String>,
}

fn default_ldap_port() -> u16 {
    389
}

fn default_query_timeout_secs() -> u64 {
    30
}

fn default_concurrent_queries() -> usize {
    8
}

/// Resolves the configuration: an explicit path must exist; otherwise the
/// default filename is looked up in the current directory.
pub fn resolve_config(explicit_path: Option<&str>) -> Result<ConfigFile> {
    let path = match explicit_path {
        Some(p) => Path::new(p).to_path_buf(),
        None => Path::new(CONFIG_FILENAME).to_path_buf(),
    };

    if !path.exists() {
        return Err(InventoryError::ConfigNotFound { path }.into());
    }

    load_config_from_path(&path)
}

/// Load config from a path known to exist.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| InventoryError::ConfigParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    let d = &config.directory;
    for (field, value) in [
        ("directory.host", &d.host),
        ("directory.base_dn", &d.base_dn),
        ("directory.bind_dn", &d.bind_dn),
    ] {
        if value.trim().is_empty() {
            return Err(InventoryError::Validation {
                message: format!("{} must not be empty", field),
            }
            .into());
        }
    }

    if d.concurrent_queries == 0 {
        return Err(InventoryError::Validation {
            message: "directory.concurrent_queries must be at least 1".to_string(),
        }
        .into());
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
