//! Configuration loading.
//!
//! Loads settings from YAML configuration files.

use serde::Deserialize;
use std::path::Path;

use crate::fetch::DEFAULT_TIMEOUT_MS;
use crate::urls::DEFAULT_REGISTRY_BASE;

/// Main configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DocsConfig {
    /// Remote fetching settings
    pub remote: RemoteSettings,
    /// Registry endpoint settings
    pub registry: RegistrySettings,
    /// Static model settings
    pub model: ModelSettings,
}

/// Remote fetching settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RemoteSettings {
    /// Whether remote documentation fetching is enabled at all
    pub enabled: bool,
    /// Connect/read timeout in milliseconds
    pub timeout_ms: u64,
}

/// Registry endpoint settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistrySettings {
    /// Base URL of the registry
    pub base_url: String,
}

/// Static model settings
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ModelSettings {
    /// Optional path to a JSON model file merged over the built-in table
    pub data_path: Option<String>,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_REGISTRY_BASE.to_string(),
        }
    }
}

impl DocsConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        serde_yaml::from_str(&content).map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Load configuration from default locations
    pub fn load_default(workspace_root: &Path) -> Self {
        let candidates = [
            workspace_root.join(".tf-docs.yaml"),
            workspace_root.join(".tf-docs.yml"),
            workspace_root.join("tf-docs.yaml"),
            workspace_root.join("tf-docs.yml"),
        ];

        for candidate in &candidates {
            if candidate.exists() {
                if let Ok(config) = Self::load(candidate) {
                    return config;
                }
            }
        }

        Self::default()
    }
}
