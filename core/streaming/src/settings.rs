//! Declarative settings that populate a provider registry.
//!
//! The core treats the registry as supplied externally; this module is the
//! supplier, decoding a JSON settings document into registered providers.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::filesystem::FilesystemProvider;
use crate::memory::MemoryProvider;
use crate::provider::StreamProvider;
use crate::registry::ProviderRegistry;
use datastream_common::{Error, Result};

/// Settings for a single provider entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Key under which the provider is registered.
    pub key: String,
    /// Provider kind tag: "filesystem" or "memory".
    pub kind: String,
    /// Base path for filesystem providers; ignored by other kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<PathBuf>,
}

/// Collection of the configured providers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreamingSettings {
    /// Provider entries, registered in order.
    #[serde(default)]
    pub providers: Vec<ProviderSettings>,
}

impl StreamingSettings {
    /// Deserialize settings from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Serialize settings to JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Build a registry with one provider per entry.
    ///
    /// # Errors
    /// - An entry names an unknown provider kind
    /// - A filesystem base path cannot be created
    /// - An entry has an empty or duplicate key
    pub fn build_registry(&self) -> Result<ProviderRegistry> {
        let mut registry = ProviderRegistry::new();

        for entry in &self.providers {
            let provider: Arc<dyn StreamProvider> = match entry.kind.as_str() {
                "filesystem" => match &entry.base_path {
                    Some(base) => {
                        Arc::new(FilesystemProvider::with_base_path(entry.key.as_str(), base)?)
                    }
                    None => Arc::new(FilesystemProvider::new(entry.key.as_str())),
                },
                "memory" => Arc::new(MemoryProvider::new(entry.key.as_str())),
                other => {
                    return Err(Error::Config(format!(
                        "Unknown provider kind '{}' for key '{}'",
                        other, entry.key
                    )));
                }
            };

            registry.register(provider)?;
        }

        Ok(registry)
    }
}
