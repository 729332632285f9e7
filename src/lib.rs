//! # tf-docs
//!
//! Terraform registry documentation provider.
//!
//! Resolves a resource, data source, provider, or function identifier to
//! its owning provider, builds the canonical registry documentation URL,
//! fetches the markdown over HTTP, strips YAML front-matter, renders to
//! HTML, and caches the expensive steps. Designed to back editor hover and
//! quick-documentation features as well as the bundled CLI.
//!
//! ## Features
//!
//! - Provider resolution from a dependency lock file or a static model
//! - Registry web, metadata, and raw-content URL construction
//! - Async HTTP fetching with independent connect/read timeouts
//! - 5-minute expiring cache with single-flight de-duplication
//! - Graceful degradation: failures fall back to local descriptions
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tf_docs::{DocsConfig, DocsProvider, ResourceKind, Workspace};
//!
//! # async fn example() {
//! let provider = DocsProvider::new(DocsConfig::default()).unwrap();
//! let html = provider
//!     .documentation("aws_instance", ResourceKind::Resource, &Workspace::empty())
//!     .await;
//! println!("{}", html);
//! # }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! tf-docs aws_instance --kind resource --format url
//! ```

mod cache;
mod config;
mod error;
mod fetch;
mod frontmatter;
mod lock;
mod model;
mod provider;
mod render;
mod resolver;
mod types;
mod urls;

pub use cache::{ExpiringCache, DEFAULT_TTL};
pub use config::{DocsConfig, ModelSettings, RegistrySettings, RemoteSettings};
pub use error::DocsError;
pub use fetch::{HttpFetcher, DEFAULT_TIMEOUT_MS};
pub use frontmatter::strip_front_matter;
pub use lock::{LockFile, LockedProvider, LOCK_FILE_NAME};
pub use model::ProviderModel;
pub use provider::{DocsProvider, NO_DOCUMENTATION};
pub use render::render_html;
pub use resolver::{provider_name, ProviderResolver, Workspace};
pub use types::{
    BlockData, ProviderData, ProviderDocInfo, ProviderInfo, ResourceKind, LATEST_VERSION,
};
pub use urls::{doc_web_url, provider_registry_url, raw_doc_url, DEFAULT_REGISTRY_BASE};
