//! Stream provider trait definition.

use std::io;

use datastream_common::Result;

/// Readable byte stream handle, exclusively owned by the caller.
pub type ReadStream = Box<dyn io::Read + Send>;

/// Writable byte stream handle, exclusively owned by the caller.
pub type WriteStream = Box<dyn io::Write + Send>;

/// Contract for providers of byte streams.
///
/// Implementations resolve provider-local names against their own backing
/// store (local filesystem, in-memory map, etc.). All operations are
/// blocking; each call is independent and a provider holds no reference to
/// the streams it opens.
pub trait StreamProvider: Send + Sync {
    /// The key identifying this provider, used as the prefix before the
    /// delimiter in qualified names. Stable once the provider is registered.
    fn key(&self) -> &str;

    /// Open a stream for reading.
    ///
    /// # Errors
    /// - Resource not found
    /// - Other I/O errors, wrapping the underlying cause
    fn open_read(&self, name: &str) -> Result<ReadStream>;

    /// Open a stream for writing.
    ///
    /// When `overwrite` is true an existing resource is truncated; when
    /// false the call fails if the resource is already present. Either way
    /// a missing resource is created.
    ///
    /// # Errors
    /// - Resource already exists and `overwrite` is false
    /// - Other I/O errors, wrapping the underlying cause
    fn open_write(&self, name: &str, overwrite: bool) -> Result<WriteStream>;
}
