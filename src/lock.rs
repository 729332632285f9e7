//! Dependency lock file parsing.
//!
//! Reads the provider pins from a Terraform dependency lock file
//! (`.terraform.lock.hcl`):
//!
//! ```text
//! provider "registry.terraform.io/hashicorp/aws" {
//!   version     = "5.1.0"
//!   constraints = "~> 5.0"
//!   hashes = [ ... ]
//! }
//! ```
//!
//! Only the source address and pinned version are extracted; constraints
//! and hashes are ignored.

use std::path::Path;

use regex::Regex;

use crate::error::DocsError;

/// Standard lock file name in a workspace root.
pub const LOCK_FILE_NAME: &str = ".terraform.lock.hcl";

/// One pinned provider from the lock file.
#[derive(Debug, Clone, PartialEq)]
pub struct LockedProvider {
    /// Full source address (e.g., "registry.terraform.io/hashicorp/aws")
    pub source: String,
    /// Pinned version, if a `version` attribute was present
    pub version: Option<String>,
}

impl LockedProvider {
    /// Split the source address into `(org, name)`.
    ///
    /// Expects the 3-part `registry-domain/org/name` form; anything else
    /// yields `None`.
    pub fn source_parts(&self) -> Option<(&str, &str)> {
        let parts: Vec<&str> = self.source.split('/').collect();
        match parts.as_slice() {
            [_registry, org, name] => Some((org, name)),
            _ => None,
        }
    }

    /// The provider name: the final segment of the source address.
    pub fn name(&self) -> &str {
        self.source.rsplit('/').next().unwrap_or(&self.source)
    }
}

/// Parsed provider pins from a dependency lock file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LockFile {
    /// Providers in file order
    pub providers: Vec<LockedProvider>,
}

impl LockFile {
    /// Parse lock file text.
    ///
    /// Tolerant by design: unrecognized lines are skipped, and a provider
    /// block without a `version` attribute is kept with `version: None`.
    pub fn parse(text: &str) -> Self {
        let provider_re = Regex::new(r#"^\s*provider\s+"([^"]+)"\s*\{"#).unwrap();
        let version_re = Regex::new(r#"^\s*version\s*=\s*"([^"]+)""#).unwrap();

        let mut providers: Vec<LockedProvider> = Vec::new();
        for line in text.lines() {
            if let Some(caps) = provider_re.captures(line) {
                providers.push(LockedProvider {
                    source: caps[1].to_string(),
                    version: None,
                });
            } else if let Some(caps) = version_re.captures(line) {
                // Attach to the most recent provider block; the first
                // version line wins.
                if let Some(current) = providers.last_mut() {
                    if current.version.is_none() {
                        current.version = Some(caps[1].to_string());
                    }
                }
            }
        }

        Self { providers }
    }

    /// Load and parse a lock file from disk.
    pub fn load(path: &Path) -> Result<Self, DocsError> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// Find the pin for a provider by name (final source segment).
    pub fn find(&self, provider_name: &str) -> Option<&LockedProvider> {
        self.providers.iter().find(|p| p.name() == provider_name)
    }

    /// Whether the file pinned any providers.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
