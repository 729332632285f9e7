//! Core types for documentation resolution.
//!
//! This module contains the data structures used throughout tf-docs:
//! - [`ProviderData`] - A resolved provider org/name/version triple
//! - [`BlockData`] - The documentation target snapshot
//! - [`ProviderInfo`] / [`ProviderDocInfo`] - The registry's published doc manifest
//! - [`ResourceKind`] - What kind of block documentation is requested for

use serde::Deserialize;

/// Version string used when no version is pinned for a provider.
pub const LATEST_VERSION: &str = "latest";

/// What kind of block documentation is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// A managed resource (e.g., `aws_instance`)
    Resource,
    /// A data source (e.g., `aws_ami`)
    DataSource,
    /// The provider block itself (e.g., `aws`)
    Provider,
    /// A provider-defined function
    Function,
}

impl ResourceKind {
    /// The documentation category used by the registry manifest and in
    /// registry web URLs.
    pub fn doc_category(&self) -> &'static str {
        match self {
            ResourceKind::Resource => "resources",
            ResourceKind::DataSource => "data-sources",
            ResourceKind::Provider => "overview",
            ResourceKind::Function => "functions",
        }
    }

    /// The block keyword as written in configuration files.
    pub fn block_type(&self) -> &'static str {
        match self {
            ResourceKind::Resource => "resource",
            ResourceKind::DataSource => "data",
            ResourceKind::Provider => "provider",
            ResourceKind::Function => "function",
        }
    }
}

/// A provider registry namespace/name/version triple.
///
/// Constructed once per resolution and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderData {
    /// Registry namespace (e.g., "hashicorp")
    pub org: String,
    /// Provider name (e.g., "aws")
    pub provider: String,
    /// Pinned version, or [`LATEST_VERSION`]
    pub version: String,
}

impl ProviderData {
    /// Create provider data from its parts.
    pub fn new(
        org: impl Into<String>,
        provider: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            org: org.into(),
            provider: provider.into(),
            version: version.into(),
        }
    }

    /// Whether this provider is unpinned.
    pub fn is_latest(&self) -> bool {
        self.version == LATEST_VERSION
    }
}

/// The documentation target: a resource, data source, provider, or function,
/// plus an optional anchor parameter.
///
/// A read-only snapshot computed fresh per documentation request.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockData {
    /// Full identifier (e.g., "aws_instance"), if known
    pub identifier: Option<String>,
    /// Block keyword (e.g., "resource"), if known
    pub block_type: Option<String>,
    /// Attribute name used as a `#anchor` in web URLs
    pub parameter: Option<String>,
    /// The owning provider, if one could be resolved
    pub provider: Option<ProviderData>,
}

/// One entry in a provider's published documentation manifest.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProviderDocInfo {
    /// Document title (e.g., "instance" for `aws_instance`)
    #[serde(default)]
    pub title: String,

    /// Category: "resources", "data-sources", "overview", "guides", "functions"
    #[serde(default)]
    pub category: String,

    /// Path of the markdown file within the provider source repository
    #[serde(default)]
    pub path: String,
}

/// The manifest fetched from the registry for one provider version.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProviderInfo {
    /// Source repository URL (e.g., "https://github.com/hashicorp/terraform-provider-aws")
    #[serde(default)]
    pub source: String,

    /// Git tag of the published version (e.g., "v5.1.0")
    #[serde(default)]
    pub tag: String,

    /// Published documentation entries
    #[serde(default)]
    pub docs: Vec<ProviderDocInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_category() {
        assert_eq!(ResourceKind::Resource.doc_category(), "resources");
        assert_eq!(ResourceKind::DataSource.doc_category(), "data-sources");
        assert_eq!(ResourceKind::Provider.doc_category(), "overview");
        assert_eq!(ResourceKind::Function.doc_category(), "functions");
    }

    #[test]
    fn test_provider_data_latest() {
        let latest = ProviderData::new("hashicorp", "aws", LATEST_VERSION);
        assert!(latest.is_latest());

        let pinned = ProviderData::new("hashicorp", "aws", "5.1.0");
        assert!(!pinned.is_latest());
    }

    #[test]
    fn test_deserialize_provider_info() {
        let json = r#"{
            "source": "https://github.com/hashicorp/terraform-provider-aws",
            "tag": "v5.1.0",
            "docs": [
                {"title": "instance", "category": "resources", "path": "website/docs/r/instance.html.markdown"}
            ]
        }"#;

        let info: ProviderInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.tag, "v5.1.0");
        assert_eq!(info.docs.len(), 1);
        assert_eq!(info.docs[0].category, "resources");
    }

    #[test]
    fn test_deserialize_provider_info_missing_fields() {
        // Registry responses carry many fields we ignore; missing ones default.
        let json = r#"{"id": "hashicorp/aws/5.1.0"}"#;
        let info: ProviderInfo = serde_json::from_str(json).unwrap();
        assert!(info.source.is_empty());
        assert!(info.docs.is_empty());
    }
}
