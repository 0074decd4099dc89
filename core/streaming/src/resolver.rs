//! Qualified-name resolution.

use std::sync::Arc;

use tracing::debug;

use crate::filesystem::FilesystemProvider;
use crate::provider::StreamProvider;
use crate::registry::ProviderRegistry;
use datastream_common::{Error, Result};

/// Delimiter separating the provider key from the provider-local name in a
/// qualified name.
pub const KEY_DELIMITER: char = '|';

/// Resolves qualified names to a provider and a provider-local name.
///
/// A qualified name is either plain, served by the default provider with
/// the whole string passed through unmodified, or of the form `key|name`.
/// Only the first delimiter separates; the local name may itself contain
/// further delimiter characters.
pub struct StreamResolver {
    registry: ProviderRegistry,
    default_provider: Arc<dyn StreamProvider>,
}

impl StreamResolver {
    /// Create a resolver over `registry`, with an unkeyed filesystem
    /// provider serving plain names.
    pub fn new(registry: ProviderRegistry) -> Self {
        Self::with_default_provider(registry, Arc::new(FilesystemProvider::default()))
    }

    /// Create a resolver with an explicit default provider.
    pub fn with_default_provider(
        registry: ProviderRegistry,
        default_provider: Arc<dyn StreamProvider>,
    ) -> Self {
        Self {
            registry,
            default_provider,
        }
    }

    /// Resolve a qualified name to the provider serving it and the name to
    /// pass to that provider.
    ///
    /// # Errors
    /// - A non-empty key before the delimiter has no registered provider
    pub fn resolve<'a>(
        &self,
        qualified_name: &'a str,
    ) -> Result<(&Arc<dyn StreamProvider>, &'a str)> {
        let Some((key, local_name)) = qualified_name.split_once(KEY_DELIMITER) else {
            // No delimiter: the whole string is the local name.
            return Ok((&self.default_provider, qualified_name));
        };

        let provider = self.provider_by_key(key)?;
        debug!("Resolved key '{}' for local name '{}'", key, local_name);

        Ok((provider, local_name))
    }

    /// Look up a provider by key, without any delimiter parsing.
    ///
    /// An empty key selects the default provider.
    ///
    /// # Errors
    /// - A non-empty key has no registered provider
    pub fn provider_by_key(&self, key: &str) -> Result<&Arc<dyn StreamProvider>> {
        if key.is_empty() {
            return Ok(&self.default_provider);
        }

        self.registry
            .get(key)
            .ok_or_else(|| Error::UnknownProvider(key.to_string()))
    }

    /// The registry backing keyed lookups.
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// The provider serving plain and empty-keyed names.
    pub fn default_provider(&self) -> &Arc<dyn StreamProvider> {
        &self.default_provider
    }
}
