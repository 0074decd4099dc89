//! In-memory stream provider for testing.

use std::collections::HashMap;
use std::io::{self, Cursor, Write};
use std::sync::{Arc, RwLock};

use crate::provider::{ReadStream, StreamProvider, WriteStream};
use datastream_common::{Error, Result};

type Store = Arc<RwLock<HashMap<String, Vec<u8>>>>;

/// Stream provider keeping all data in memory.
///
/// Useful for testing and development. Clones share the same store; all
/// data is lost when the last clone is dropped.
#[derive(Clone)]
pub struct MemoryProvider {
    key: String,
    store: Store,
}

impl MemoryProvider {
    /// Create a new empty memory provider.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            store: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Check if an entry exists under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.store.read().unwrap().contains_key(name)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.store.read().unwrap().len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.store.read().unwrap().is_empty()
    }
}

/// Writer accumulating bytes in a buffer; the buffer replaces the named
/// entry in the store when the writer is dropped.
struct MemoryWriter {
    name: String,
    buffer: Vec<u8>,
    store: Store,
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for MemoryWriter {
    fn drop(&mut self) {
        let buffer = std::mem::take(&mut self.buffer);
        let name = std::mem::take(&mut self.name);
        self.store.write().unwrap().insert(name, buffer);
    }
}

impl StreamProvider for MemoryProvider {
    fn key(&self) -> &str {
        &self.key
    }

    fn open_read(&self, name: &str) -> Result<ReadStream> {
        let store = self.store.read().unwrap();
        let data = store
            .get(name)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("No entry under '{}'", name)))?;

        Ok(Box::new(Cursor::new(data)))
    }

    fn open_write(&self, name: &str, overwrite: bool) -> Result<WriteStream> {
        if !overwrite && self.contains(name) {
            return Err(Error::AlreadyExists(format!(
                "Entry already exists under '{}'",
                name
            )));
        }

        Ok(Box::new(MemoryWriter {
            name: name.to_string(),
            buffer: Vec::new(),
            store: Arc::clone(&self.store),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_write_then_read_round_trip() {
        let provider = MemoryProvider::new("mem");
        let data = b"Hello, Memory!".to_vec();

        let mut stream = provider.open_write("a/b.txt", true).unwrap();
        stream.write_all(&data).unwrap();
        drop(stream);

        let mut read_back = Vec::new();
        provider
            .open_read("a/b.txt")
            .unwrap()
            .read_to_end(&mut read_back)
            .unwrap();

        assert_eq!(read_back, data);
    }

    #[test]
    fn test_read_missing_entry_is_not_found() {
        let provider = MemoryProvider::new("mem");
        let err = provider.open_read("absent").err().unwrap();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_write_without_overwrite_fails_on_existing() {
        let provider = MemoryProvider::new("mem");

        drop(provider.open_write("entry", true).unwrap());

        let err = provider.open_write("entry", false).err().unwrap();
        assert!(matches!(err, Error::AlreadyExists(_)));
    }

    #[test]
    fn test_overwrite_replaces_prior_content() {
        let provider = MemoryProvider::new("mem");

        provider
            .open_write("entry", true)
            .unwrap()
            .write_all(b"a longer first version")
            .unwrap();
        provider
            .open_write("entry", true)
            .unwrap()
            .write_all(b"short")
            .unwrap();

        let mut read_back = Vec::new();
        provider
            .open_read("entry")
            .unwrap()
            .read_to_end(&mut read_back)
            .unwrap();

        assert_eq!(read_back, b"short");
    }

    #[test]
    fn test_clones_share_the_store() {
        let provider = MemoryProvider::new("mem");
        let clone = provider.clone();

        provider
            .open_write("entry", true)
            .unwrap()
            .write_all(b"shared")
            .unwrap();

        assert!(clone.contains("entry"));
    }
}
