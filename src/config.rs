//! Configuration file support for cdktf-provider-project.
//!
//! Provides YAML (`cdktf-provider.config.yml`) or TOML configuration files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use owo_colors::OwoColorize;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::provider_project::domain::{NamingConventions, ProviderSettings};
use crate::provider_project::policies::ReservedNameTable;
use crate::shared::error::ProviderProjectError;
use crate::shared::security::{validate_regular_file, MAX_CONFIG_FILE_SIZE};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "cdktf-provider.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub terraform_provider: Option<String>,
    pub cdktf_version: Option<String>,
    pub constructs_version: Option<String>,
    pub jsii_version: Option<String>,
    pub min_node_version: Option<String>,
    pub workflow_container_image: Option<String>,
    pub force_major_version: Option<u64>,
    pub registry_timeout_secs: Option<u64>,
    /// Partial overrides of the naming conventions; omitted fields keep their defaults.
    pub naming: Option<NamingConventions>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Scalar settings carried by the file.
    pub fn settings(&self) -> ProviderSettings {
        ProviderSettings {
            cdktf_version: self.cdktf_version.clone(),
            constructs_version: self.constructs_version.clone(),
            jsii_version: self.jsii_version.clone(),
            min_node_version: self.min_node_version.clone(),
            workflow_container_image: self.workflow_container_image.clone(),
        }
    }

    /// Naming conventions with the file's overrides applied.
    ///
    /// Reserved names listed in the file are added to the default table.
    pub fn naming_conventions(&self) -> NamingConventions {
        let Some(naming) = self.naming.clone() else {
            return NamingConventions::default();
        };

        let mut reserved_names = ReservedNameTable::default();
        for (name, replacement) in naming.reserved_names.iter() {
            reserved_names.insert(name, replacement);
        }
        NamingConventions {
            reserved_names,
            ..naming
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
///
/// `.toml` files are parsed as TOML, everything else as YAML.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_regular_file(path, "config file", MAX_CONFIG_FILE_SIZE).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = if is_toml(path) {
        toml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid TOML syntax.",
                path.display()
            )
        })?
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    validate_config(path, &config)?;
    warn_unknown_fields(&config);
    tracing::debug!(path = %path.display(), "loaded config file");

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

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

/// Validate the loaded configuration.
fn validate_config(path: &Path, config: &ConfigFile) -> Result<()> {
    let invalid = |details: String| -> anyhow::Error {
        ProviderProjectError::ConfigFileError {
            path: path.to_path_buf(),
            details,
        }
        .into()
    };

    if config.registry_timeout_secs == Some(0) {
        return Err(invalid(
            "registry_timeout_secs must be greater than 0".to_string(),
        ));
    }

    if let Some(ref naming) = config.naming {
        let blank = naming.blank_fields();
        if !blank.is_empty() {
            return Err(invalid(format!(
                "naming.{} must not be empty",
                blank.join(", naming.")
            )));
        }
        if let Some((name, _)) = naming
            .reserved_names
            .iter()
            .find(|(name, replacement)| name.trim().is_empty() || replacement.trim().is_empty())
        {
            return Err(invalid(format!(
                "naming.reserved_names entry '{}' must have a non-empty name and replacement",
                name
            )));
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "{}",
            format!("⚠️  Warning: Unknown config field '{}' will be ignored.", key).yellow()
        );
    }
}
