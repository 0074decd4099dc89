//! Stream provider abstraction for DataStream.
//!
//! This module lets callers open read/write byte streams by logical name
//! without hard-coding where the bytes live. A name is either plain
//! ("data/corpus.txt"), served by the default filesystem provider, or
//! qualified with a provider key ("blob|data/corpus.txt") selecting a
//! provider registered under that key.
//!
//! # Design Principles
//! - Provider isolation: callers depend on the `StreamProvider` trait only
//! - Explicit environment: no global state; a `StreamingEnvironment` is
//!   constructed once and passed where it is needed
//! - Unified error semantics: consistent error types across providers

pub mod environment;
pub mod filesystem;
pub mod memory;
pub mod provider;
pub mod registry;
pub mod resolver;
pub mod settings;

pub use environment::StreamingEnvironment;
pub use filesystem::FilesystemProvider;
pub use memory::MemoryProvider;
pub use provider::{ReadStream, StreamProvider, WriteStream};
pub use registry::ProviderRegistry;
pub use resolver::{StreamResolver, KEY_DELIMITER};
pub use settings::{ProviderSettings, StreamingSettings};
