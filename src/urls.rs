//! Documentation URL construction.
//!
//! Builds the three URL shapes the pipeline needs:
//! - registry web URLs, for opening documentation in a browser
//! - registry metadata URLs, for fetching a provider's doc manifest
//! - raw-content URLs, for fetching the markdown itself from the provider's
//!   source repository

use crate::types::{BlockData, ProviderData, ProviderInfo, ResourceKind};

/// Default registry endpoint.
pub const DEFAULT_REGISTRY_BASE: &str = "https://registry.terraform.io";

/// Metadata endpoint for a provider.
///
/// `{base}/v1/providers/{org}/{provider}`, with `/{version}` appended only
/// for pinned versions - the unversioned endpoint answers with the latest.
pub fn provider_registry_url(base: &str, provider: &ProviderData) -> String {
    let mut url = format!(
        "{}/v1/providers/{}/{}",
        base.trim_end_matches('/'),
        provider.org,
        provider.provider
    );
    if !provider.is_latest() {
        url.push('/');
        url.push_str(&provider.version);
    }
    url
}

/// Web URL for a documentation page on the registry.
///
/// Returns `None` when the block has no resolved provider, or when a
/// non-provider kind is missing its identifier.
pub fn doc_web_url(base: &str, block: &BlockData, kind: ResourceKind) -> Option<String> {
    let provider = block.provider.as_ref()?;
    let root = format!(
        "{}/providers/{}/{}/{}/docs",
        base.trim_end_matches('/'),
        provider.org,
        provider.provider,
        provider.version
    );

    let url = match kind {
        ResourceKind::Provider => root,
        ResourceKind::Resource | ResourceKind::DataSource => {
            let id = resource_id(block.identifier.as_deref()?);
            format!("{}/{}/{}", root, kind.doc_category(), id)
        }
        ResourceKind::Function => {
            format!("{}/functions/{}", root, block.identifier.as_deref()?)
        }
    };

    Some(match &block.parameter {
        Some(parameter) => format!("{url}#{parameter}"),
        None => url,
    })
}

/// Raw-content URL for the markdown behind a documentation page.
///
/// Cross-references the provider's published manifest against the requested
/// category and title, substitutes `github.com` with
/// `raw.githubusercontent.com` in the source address, and appends the
/// manifest's tag and path. Returns `None` when the manifest has no
/// matching entry.
pub fn raw_doc_url(info: &ProviderInfo, block: &BlockData, kind: ResourceKind) -> Option<String> {
    let title = match kind {
        ResourceKind::Provider => "index".to_string(),
        ResourceKind::Function => block.identifier.clone()?,
        ResourceKind::Resource | ResourceKind::DataSource => {
            resource_id(block.identifier.as_deref()?).to_string()
        }
    };

    let doc = info
        .docs
        .iter()
        .find(|d| d.category == kind.doc_category() && d.title == title)?;

    let source = info
        .source
        .replacen("github.com", "raw.githubusercontent.com", 1);
    Some(format!(
        "{}/{}/{}",
        source.trim_end_matches('/'),
        info.tag,
        doc.path
    ))
}

/// Strip the provider prefix from an identifier, up to the first `_`.
///
/// `aws_instance` -> `instance`; an identifier without `_` is returned
/// unchanged.
pub fn resource_id(identifier: &str) -> &str {
    identifier
        .split_once('_')
        .map(|(_, rest)| rest)
        .unwrap_or(identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ProviderData, ProviderDocInfo, LATEST_VERSION};

    fn block(identifier: &str, provider: Option<ProviderData>) -> BlockData {
        BlockData {
            identifier: Some(identifier.to_string()),
            block_type: None,
            parameter: None,
            provider,
        }
    }

    fn aws_pinned() -> ProviderData {
        ProviderData::new("hashicorp", "aws", "5.1.0")
    }

    #[test]
    fn test_resource_id_strips_prefix() {
        assert_eq!(resource_id("aws_instance"), "instance");
        assert_eq!(resource_id("aws_db_instance"), "db_instance");
        assert_eq!(resource_id("instance"), "instance");
    }

    #[test]
    fn test_provider_registry_url_pinned() {
        let url = provider_registry_url(DEFAULT_REGISTRY_BASE, &aws_pinned());
        assert_eq!(
            url,
            "https://registry.terraform.io/v1/providers/hashicorp/aws/5.1.0"
        );
    }

    #[test]
    fn test_provider_registry_url_latest_omits_version() {
        let latest = ProviderData::new("hashicorp", "aws", LATEST_VERSION);
        let url = provider_registry_url(DEFAULT_REGISTRY_BASE, &latest);
        assert_eq!(
            url,
            "https://registry.terraform.io/v1/providers/hashicorp/aws"
        );
    }

    #[test]
    fn test_web_url_resource() {
        let url = doc_web_url(
            DEFAULT_REGISTRY_BASE,
            &block("aws_instance", Some(aws_pinned())),
            ResourceKind::Resource,
        )
        .unwrap();
        assert_eq!(
            url,
            "https://registry.terraform.io/providers/hashicorp/aws/5.1.0/docs/resources/instance"
        );
    }

    #[test]
    fn test_web_url_data_source() {
        let url = doc_web_url(
            DEFAULT_REGISTRY_BASE,
            &block("aws_ami", Some(aws_pinned())),
            ResourceKind::DataSource,
        )
        .unwrap();
        assert!(url.ends_with("/docs/data-sources/ami"));
    }

    #[test]
    fn test_web_url_provider_with_anchor() {
        let mut b = block("aws", Some(aws_pinned()));
        b.parameter = Some("region".to_string());
        let url = doc_web_url(DEFAULT_REGISTRY_BASE, &b, ResourceKind::Provider).unwrap();
        assert_eq!(
            url,
            "https://registry.terraform.io/providers/hashicorp/aws/5.1.0/docs#region"
        );
    }

    #[test]
    fn test_web_url_function() {
        let url = doc_web_url(
            DEFAULT_REGISTRY_BASE,
            &block("arn_parse", Some(aws_pinned())),
            ResourceKind::Function,
        )
        .unwrap();
        assert!(url.ends_with("/docs/functions/arn_parse"));
    }

    #[test]
    fn test_web_url_without_provider_is_none() {
        let result = doc_web_url(
            DEFAULT_REGISTRY_BASE,
            &block("aws_instance", None),
            ResourceKind::Resource,
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_raw_doc_url_from_manifest() {
        let info = ProviderInfo {
            source: "https://github.com/org/terraform-provider-foo".to_string(),
            tag: "v1.2.0".to_string(),
            docs: vec![ProviderDocInfo {
                title: "bar".to_string(),
                category: "resources".to_string(),
                path: "docs/r/bar.md".to_string(),
            }],
        };

        let url = raw_doc_url(
            &info,
            &block("foo_bar", Some(aws_pinned())),
            ResourceKind::Resource,
        )
        .unwrap();
        assert_eq!(
            url,
            "https://raw.githubusercontent.com/org/terraform-provider-foo/v1.2.0/docs/r/bar.md"
        );
    }

    #[test]
    fn test_raw_doc_url_category_must_match() {
        let info = ProviderInfo {
            source: "https://github.com/org/terraform-provider-foo".to_string(),
            tag: "v1.2.0".to_string(),
            docs: vec![ProviderDocInfo {
                title: "bar".to_string(),
                category: "data-sources".to_string(),
                path: "docs/d/bar.md".to_string(),
            }],
        };

        let result = raw_doc_url(
            &info,
            &block("foo_bar", Some(aws_pinned())),
            ResourceKind::Resource,
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_raw_doc_url_provider_overview() {
        let info = ProviderInfo {
            source: "https://github.com/org/terraform-provider-foo".to_string(),
            tag: "v1.2.0".to_string(),
            docs: vec![ProviderDocInfo {
                title: "index".to_string(),
                category: "overview".to_string(),
                path: "docs/index.md".to_string(),
            }],
        };

        let url = raw_doc_url(&info, &block("foo", Some(aws_pinned())), ResourceKind::Provider)
            .unwrap();
        assert!(url.ends_with("/v1.2.0/docs/index.md"));
    }
}
