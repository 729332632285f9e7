//! Static provider model.
//!
//! The fallback used when no lock file pins a provider: maps provider names
//! to their registry namespace, and optionally carries local static
//! descriptions shown when remote documentation is unavailable.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::DocsError;

/// Provider name to namespace mapping plus local descriptions.
///
/// Can be loaded from a JSON model file:
///
/// ```json
/// {
///   "namespaces": { "aws": "hashicorp" },
///   "descriptions": { "aws_instance": "Provides an EC2 instance resource." }
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderModel {
    /// Provider name -> registry namespace
    #[serde(default)]
    pub namespaces: HashMap<String, String>,

    /// Identifier -> local static description text
    #[serde(default)]
    pub descriptions: HashMap<String, String>,
}

impl ProviderModel {
    /// The built-in model covering the commonly used providers.
    pub fn builtin() -> Self {
        let hashicorp = [
            "aws",
            "google",
            "azurerm",
            "azuread",
            "kubernetes",
            "helm",
            "vault",
            "consul",
            "nomad",
            "random",
            "null",
            "local",
            "time",
            "tls",
            "http",
            "external",
            "template",
            "archive",
            "dns",
            "cloudinit",
        ];

        let mut namespaces: HashMap<String, String> = hashicorp
            .iter()
            .map(|name| (name.to_string(), "hashicorp".to_string()))
            .collect();
        namespaces.insert("cloudflare".to_string(), "cloudflare".to_string());
        namespaces.insert("datadog".to_string(), "DataDog".to_string());
        namespaces.insert("github".to_string(), "integrations".to_string());
        namespaces.insert("digitalocean".to_string(), "digitalocean".to_string());

        Self {
            namespaces,
            descriptions: HashMap::new(),
        }
    }

    /// Load a model from a JSON file, merged over the built-in table.
    ///
    /// Entries in the file take precedence over built-in ones.
    pub fn load(path: &Path) -> Result<Self, DocsError> {
        let content = std::fs::read_to_string(path)?;
        let loaded: ProviderModel = serde_json::from_str(&content)?;

        let mut model = Self::builtin();
        model.namespaces.extend(loaded.namespaces);
        model.descriptions.extend(loaded.descriptions);
        Ok(model)
    }

    /// Registry namespace for a provider name.
    pub fn namespace_of(&self, provider_name: &str) -> Option<&str> {
        self.namespaces.get(provider_name).map(String::as_str)
    }

    /// Local static description for an identifier.
    pub fn description_of(&self, identifier: &str) -> Option<&str> {
        self.descriptions.get(identifier).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_namespaces() {
        let model = ProviderModel::builtin();
        assert_eq!(model.namespace_of("aws"), Some("hashicorp"));
        assert_eq!(model.namespace_of("random"), Some("hashicorp"));
        assert_eq!(model.namespace_of("cloudflare"), Some("cloudflare"));
        assert_eq!(model.namespace_of("unheard_of"), None);
    }

    #[test]
    fn test_builtin_has_no_descriptions() {
        let model = ProviderModel::builtin();
        assert!(model.description_of("aws_instance").is_none());
    }

    #[test]
    fn test_load_merges_over_builtin() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("model.json");
        fs::write(
            &path,
            r#"{
                "namespaces": { "mycorp": "my-org", "aws": "my-aws-fork" },
                "descriptions": { "aws_instance": "Provides an EC2 instance resource." }
            }"#,
        )
        .unwrap();

        let model = ProviderModel::load(&path).unwrap();
        assert_eq!(model.namespace_of("mycorp"), Some("my-org"));
        // File entries override built-in ones.
        assert_eq!(model.namespace_of("aws"), Some("my-aws-fork"));
        // Built-in entries not mentioned in the file survive.
        assert_eq!(model.namespace_of("google"), Some("hashicorp"));
        assert_eq!(
            model.description_of("aws_instance"),
            Some("Provides an EC2 instance resource.")
        );
    }

    #[test]
    fn test_load_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("model.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            ProviderModel::load(&path),
            Err(DocsError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            ProviderModel::load(Path::new("/nonexistent/model.json")),
            Err(DocsError::Io(_))
        ));
    }
}
