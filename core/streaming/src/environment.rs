//! Entry point for opening streams by qualified name.

use std::sync::Arc;

use tracing::debug;

use crate::provider::{ReadStream, StreamProvider, WriteStream};
use crate::registry::ProviderRegistry;
use crate::resolver::StreamResolver;
use crate::settings::StreamingSettings;
use datastream_common::Result;

/// The single entry point for opening read and write streams, by qualified
/// name or by explicit (key, filename) pair.
///
/// Construct one at process start (or per test, with a fake registry) and
/// pass it where it is needed; there is no process-wide instance. Each call
/// resolves independently and delegates to the selected provider; the
/// environment holds no reference to the streams it opens.
pub struct StreamingEnvironment {
    resolver: StreamResolver,
}

impl StreamingEnvironment {
    /// Create an environment over `registry`, with an unkeyed filesystem
    /// provider serving plain names.
    pub fn new(registry: ProviderRegistry) -> Self {
        Self {
            resolver: StreamResolver::new(registry),
        }
    }

    /// Create an environment with an explicit default provider.
    pub fn with_default_provider(
        registry: ProviderRegistry,
        default_provider: Arc<dyn StreamProvider>,
    ) -> Self {
        Self {
            resolver: StreamResolver::with_default_provider(registry, default_provider),
        }
    }

    /// Create an environment from declarative settings.
    ///
    /// # Errors
    /// - The settings name an unknown provider kind or carry bad entries
    pub fn from_settings(settings: &StreamingSettings) -> Result<Self> {
        Ok(Self::new(settings.build_registry()?))
    }

    /// Open a stream for reading from the provider the qualified name
    /// selects.
    ///
    /// # Errors
    /// - Unknown provider key
    /// - Resource not found, or other provider-level I/O errors
    pub fn open_read(&self, qualified_name: &str) -> Result<ReadStream> {
        let (provider, name) = self.resolver.resolve(qualified_name)?;
        debug!("Opening '{}' for reading via provider '{}'", name, provider.key());

        provider.open_read(name)
    }

    /// Open a stream for reading from the provider registered under `key`,
    /// without any delimiter parsing. An empty key selects the default
    /// provider.
    ///
    /// # Errors
    /// - Unknown provider key
    /// - Resource not found, or other provider-level I/O errors
    pub fn open_read_from(&self, key: &str, filename: &str) -> Result<ReadStream> {
        let provider = self.resolver.provider_by_key(key)?;

        provider.open_read(filename)
    }

    /// Open a stream for writing to the provider the qualified name
    /// selects. When `overwrite` is true an existing target is truncated;
    /// when false the call fails if the target is already present.
    ///
    /// # Errors
    /// - Unknown provider key
    /// - Target already exists and `overwrite` is false, or other
    ///   provider-level I/O errors
    pub fn open_write(&self, qualified_name: &str, overwrite: bool) -> Result<WriteStream> {
        let (provider, name) = self.resolver.resolve(qualified_name)?;
        debug!("Opening '{}' for writing via provider '{}'", name, provider.key());

        provider.open_write(name, overwrite)
    }

    /// Open a stream for writing to the provider registered under `key`,
    /// without any delimiter parsing. An empty key selects the default
    /// provider.
    ///
    /// # Errors
    /// - Unknown provider key
    /// - Target already exists and `overwrite` is false, or other
    ///   provider-level I/O errors
    pub fn open_write_to(&self, key: &str, filename: &str, overwrite: bool) -> Result<WriteStream> {
        let provider = self.resolver.provider_by_key(key)?;

        provider.open_write(filename, overwrite)
    }

    /// The resolver backing this environment.
    pub fn resolver(&self) -> &StreamResolver {
        &self.resolver
    }
}
