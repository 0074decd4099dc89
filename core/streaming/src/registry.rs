//! Provider registry for keyed stream provider lookup.

use std::collections::HashMap;
use std::sync::Arc;

use crate::provider::StreamProvider;
use datastream_common::{Error, Result};

/// Registry of stream providers, indexed by their own key.
///
/// Built once at configuration time and treated as read-only afterwards;
/// lookups are pure reads, safe for concurrent use without locking. Keys are
/// case-sensitive and unordered.
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn StreamProvider>>,
}

impl ProviderRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Register a provider under its own key.
    ///
    /// # Errors
    /// - The provider's key is empty
    /// - Another provider is already registered under the same key
    pub fn register(&mut self, provider: Arc<dyn StreamProvider>) -> Result<()> {
        let key = provider.key().to_string();
        if key.is_empty() {
            return Err(Error::InvalidInput(
                "Provider key cannot be empty".to_string(),
            ));
        }
        if self.providers.contains_key(&key) {
            return Err(Error::AlreadyExists(format!(
                "Provider '{}' is already registered",
                key
            )));
        }
        self.providers.insert(key, provider);
        Ok(())
    }

    /// Look up a provider by key.
    pub fn get(&self, key: &str) -> Option<&Arc<dyn StreamProvider>> {
        self.providers.get(key)
    }

    /// Check if a provider is registered under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.providers.contains_key(key)
    }

    /// Get list of registered provider keys.
    pub fn keys(&self) -> Vec<String> {
        self.providers.keys().cloned().collect()
    }

    /// Number of registered providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Check if no providers are registered.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
