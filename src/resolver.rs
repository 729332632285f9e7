//! Provider metadata resolution.
//!
//! Given a block identifier and a workspace snapshot, determines the owning
//! provider's namespace, name, and version. The lock file wins when it pins
//! the provider; otherwise the static model supplies the namespace with an
//! unpinned version.

use crate::lock::LockFile;
use crate::model::ProviderModel;
use crate::types::{ProviderData, ResourceKind, LATEST_VERSION};

/// Immutable snapshot of the workspace state a documentation request runs
/// against.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    /// Parsed dependency lock file, when the workspace has one
    pub lock: Option<LockFile>,
}

impl Workspace {
    /// A workspace with no lock file.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A workspace pinned by the given lock file.
    pub fn with_lock(lock: LockFile) -> Self {
        Self { lock: Some(lock) }
    }
}

/// Resolves identifiers to provider metadata.
pub struct ProviderResolver {
    model: ProviderModel,
}

impl ProviderResolver {
    /// Create a resolver backed by the given static model.
    pub fn new(model: ProviderModel) -> Self {
        Self { model }
    }

    /// The static model backing this resolver.
    pub fn model(&self) -> &ProviderModel {
        &self.model
    }

    /// Resolve the provider owning `identifier`.
    ///
    /// Returns `None` when no provider can be determined, which signals
    /// "no documentation available" to the pipeline.
    pub fn resolve(
        &self,
        identifier: &str,
        kind: ResourceKind,
        workspace: &Workspace,
    ) -> Option<ProviderData> {
        let name = provider_name(identifier, kind);

        if let Some(lock) = &workspace.lock {
            if let Some(locked) = lock.find(name) {
                if let Some((org, provider)) = locked.source_parts() {
                    let version = locked
                        .version
                        .clone()
                        .unwrap_or_else(|| LATEST_VERSION.to_string());
                    return Some(ProviderData::new(org, provider, version));
                }
            }
        }

        let org = self.model.namespace_of(name)?;
        Some(ProviderData::new(org, name, LATEST_VERSION))
    }
}

/// The provider name implied by an identifier.
///
/// For provider blocks the identifier is the provider name itself; for
/// resources, data sources, and functions it is the prefix up to the first
/// underscore (e.g., "aws_instance" -> "aws").
pub fn provider_name(identifier: &str, kind: ResourceKind) -> &str {
    match kind {
        ResourceKind::Provider => identifier,
        _ => identifier.split('_').next().unwrap_or(identifier),
    }
}
