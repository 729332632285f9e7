//! The documentation pipeline facade.
//!
//! Ties the pieces together: resolve the provider, build the URL, consult
//! the cache, fetch, strip front-matter, render. Every failure degrades to
//! a local static description or the fixed placeholder - callers of
//! [`DocsProvider::documentation`] never see an error.

use std::path::Path;
use std::sync::Arc;

use crate::cache::ExpiringCache;
use crate::config::DocsConfig;
use crate::error::DocsError;
use crate::fetch::HttpFetcher;
use crate::frontmatter::strip_front_matter;
use crate::model::ProviderModel;
use crate::render::render_html;
use crate::resolver::{ProviderResolver, Workspace};
use crate::types::{BlockData, ProviderData, ProviderInfo, ResourceKind};
use crate::urls;

/// Placeholder shown when no documentation can be produced at all.
pub const NO_DOCUMENTATION: &str = "No documentation found";

/// Provides rendered documentation for Terraform blocks.
///
/// Registry metadata and rendered pages are cached process-wide with a
/// 5-minute TTL; concurrent requests for the same URL share one fetch.
pub struct DocsProvider {
    config: DocsConfig,
    resolver: ProviderResolver,
    fetcher: HttpFetcher,
    info_cache: ExpiringCache<Arc<ProviderInfo>>,
    doc_cache: ExpiringCache<String>,
}

impl DocsProvider {
    /// Create a provider from configuration.
    ///
    /// Loads the model file named in the configuration, or the built-in
    /// model when none is configured.
    pub fn new(config: DocsConfig) -> Result<Self, DocsError> {
        let model = match &config.model.data_path {
            Some(path) => ProviderModel::load(Path::new(path))?,
            None => ProviderModel::builtin(),
        };
        Self::with_model(config, model)
    }

    /// Create a provider with an explicit static model.
    pub fn with_model(config: DocsConfig, model: ProviderModel) -> Result<Self, DocsError> {
        let fetcher = HttpFetcher::new(config.remote.timeout_ms)?;
        Ok(Self {
            config,
            resolver: ProviderResolver::new(model),
            fetcher,
            info_cache: ExpiringCache::with_default_ttl(),
            doc_cache: ExpiringCache::with_default_ttl(),
        })
    }

    /// Rendered HTML documentation for a block, never failing.
    ///
    /// Remote errors are logged and converted to the local static
    /// description, or [`NO_DOCUMENTATION`] when none exists. With remote
    /// fetching disabled the local path is taken directly.
    pub async fn documentation(
        &self,
        identifier: &str,
        kind: ResourceKind,
        workspace: &Workspace,
    ) -> String {
        if self.config.remote.enabled {
            match self.remote_documentation(identifier, kind, workspace).await {
                Ok(html) => return html,
                Err(err) => {
                    tracing::warn!(
                        identifier,
                        error = %err,
                        "remote documentation unavailable, using local fallback"
                    );
                }
            }
        }
        self.local_documentation(identifier)
    }

    /// The local static description for an identifier, or the placeholder.
    pub fn local_documentation(&self, identifier: &str) -> String {
        self.resolver
            .model()
            .description_of(identifier)
            .map(str::to_string)
            .unwrap_or_else(|| NO_DOCUMENTATION.to_string())
    }

    /// Fetch and render documentation from the registry.
    pub async fn remote_documentation(
        &self,
        identifier: &str,
        kind: ResourceKind,
        workspace: &Workspace,
    ) -> Result<String, DocsError> {
        let provider = self
            .resolver
            .resolve(identifier, kind, workspace)
            .ok_or_else(|| DocsError::Resolution(identifier.to_string()))?;

        let block = BlockData {
            identifier: Some(identifier.to_string()),
            block_type: Some(kind.block_type().to_string()),
            parameter: None,
            provider: Some(provider.clone()),
        };

        let info = self.provider_info(&provider).await?;
        let url = urls::raw_doc_url(&info, &block, kind).ok_or_else(|| {
            DocsError::Resolution(format!("no documentation entry for {identifier}"))
        })?;

        let fetch_url = url.clone();
        self.doc_cache
            .get_or_fetch(&url, || async move {
                let text = self.fetcher.fetch_text(&fetch_url).await?;
                let markdown = strip_front_matter(&text);
                Ok(render_html(&markdown))
            })
            .await
    }

    /// The provider's registry manifest, cached by metadata URL.
    pub async fn provider_info(
        &self,
        provider: &ProviderData,
    ) -> Result<Arc<ProviderInfo>, DocsError> {
        let url = urls::provider_registry_url(&self.config.registry.base_url, provider);
        let fetch_url = url.clone();
        self.info_cache
            .get_or_fetch(&url, || async move {
                let text = self.fetcher.fetch_text(&fetch_url).await?;
                let info: ProviderInfo = serde_json::from_str(&text)?;
                Ok(Arc::new(info))
            })
            .await
    }

    /// The registry web URL for a block's documentation page.
    ///
    /// Pure resolution and string building; no network access.
    pub fn web_url(
        &self,
        identifier: &str,
        kind: ResourceKind,
        parameter: Option<&str>,
        workspace: &Workspace,
    ) -> Option<String> {
        let provider = self.resolver.resolve(identifier, kind, workspace)?;
        let block = BlockData {
            identifier: Some(identifier.to_string()),
            block_type: Some(kind.block_type().to_string()),
            parameter: parameter.map(str::to_string),
            provider: Some(provider),
        };
        urls::doc_web_url(&self.config.registry.base_url, &block, kind)
    }
}
