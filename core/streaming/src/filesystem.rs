//! Local filesystem stream provider.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::provider::{ReadStream, StreamProvider, WriteStream};
use datastream_common::{Error, Result};

/// Stream provider backed by the local filesystem.
///
/// Names are resolved against an optional base path; with an empty base
/// path the name is used as given, relative or absolute.
pub struct FilesystemProvider {
    key: String,
    base_path: PathBuf,
}

impl FilesystemProvider {
    /// Create a provider with an empty base path, passing names through
    /// unchanged.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            base_path: PathBuf::new(),
        }
    }

    /// Create a provider resolving names relative to `base_path`.
    ///
    /// The base directory is created if it does not exist.
    ///
    /// # Errors
    /// - Permission denied or other I/O failure creating the directory
    pub fn with_base_path(key: impl Into<String>, base_path: impl AsRef<Path>) -> Result<Self> {
        let base_path = base_path.as_ref().to_path_buf();

        if !base_path.as_os_str().is_empty() && !base_path.exists() {
            std::fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            key: key.into(),
            base_path,
        })
    }

    /// The configured base path; empty when names pass through unchanged.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn resolve_path(&self, name: &str) -> PathBuf {
        if self.base_path.as_os_str().is_empty() {
            PathBuf::from(name)
        } else {
            self.base_path.join(name)
        }
    }
}

impl Default for FilesystemProvider {
    /// The unkeyed, baseless provider used as the process default.
    fn default() -> Self {
        Self::new("")
    }
}

impl StreamProvider for FilesystemProvider {
    fn key(&self) -> &str {
        &self.key
    }

    fn open_read(&self, name: &str) -> Result<ReadStream> {
        let path = self.resolve_path(name);
        debug!("Opening {} for reading", path.display());

        let file = File::open(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => {
                Error::NotFound(format!("File not found: {}", path.display()))
            }
            _ => Error::Io(e),
        })?;

        Ok(Box::new(file))
    }

    fn open_write(&self, name: &str, overwrite: bool) -> Result<WriteStream> {
        let path = self.resolve_path(name);
        debug!(
            "Opening {} for writing (overwrite: {})",
            path.display(),
            overwrite
        );

        let mut options = OpenOptions::new();
        options.write(true);
        if overwrite {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }

        let file = options.open(&path).map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => {
                Error::AlreadyExists(format!("File already exists: {}", path.display()))
            }
            _ => Error::Io(e),
        })?;

        Ok(Box::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use tempfile::TempDir;

    #[test]
    fn test_empty_base_path_passes_name_through() {
        let provider = FilesystemProvider::new("fs");
        assert_eq!(provider.resolve_path("a/b.txt"), PathBuf::from("a/b.txt"));
    }

    #[test]
    fn test_base_path_is_joined() {
        let temp = TempDir::new().unwrap();
        let provider = FilesystemProvider::with_base_path("fs", temp.path()).unwrap();
        assert_eq!(provider.resolve_path("a.txt"), temp.path().join("a.txt"));
    }

    #[test]
    fn test_missing_base_directory_is_created() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("nested").join("dir");

        FilesystemProvider::with_base_path("fs", &base).unwrap();

        assert!(base.is_dir());
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let provider = FilesystemProvider::with_base_path("fs", temp.path()).unwrap();

        let err = provider.open_read("absent.txt").err().unwrap();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let temp = TempDir::new().unwrap();
        let provider = FilesystemProvider::with_base_path("fs", temp.path()).unwrap();
        let data = b"Hello, Filesystem!".to_vec();

        let mut stream = provider.open_write("data.bin", true).unwrap();
        stream.write_all(&data).unwrap();
        drop(stream);

        let mut read_back = Vec::new();
        provider
            .open_read("data.bin")
            .unwrap()
            .read_to_end(&mut read_back)
            .unwrap();

        assert_eq!(read_back, data);
    }

    #[test]
    fn test_write_without_overwrite_fails_on_existing() {
        let temp = TempDir::new().unwrap();
        let provider = FilesystemProvider::with_base_path("fs", temp.path()).unwrap();

        provider
            .open_write("data.bin", true)
            .unwrap()
            .write_all(b"first")
            .unwrap();

        let err = provider.open_write("data.bin", false).err().unwrap();
        assert!(matches!(err, Error::AlreadyExists(_)));
    }

    #[test]
    fn test_write_without_overwrite_creates_missing_file() {
        let temp = TempDir::new().unwrap();
        let provider = FilesystemProvider::with_base_path("fs", temp.path()).unwrap();

        provider
            .open_write("fresh.bin", false)
            .unwrap()
            .write_all(b"ok")
            .unwrap();

        let mut read_back = Vec::new();
        provider
            .open_read("fresh.bin")
            .unwrap()
            .read_to_end(&mut read_back)
            .unwrap();

        assert_eq!(read_back, b"ok");
    }

    #[test]
    fn test_overwrite_truncates_prior_content() {
        let temp = TempDir::new().unwrap();
        let provider = FilesystemProvider::with_base_path("fs", temp.path()).unwrap();

        provider
            .open_write("data.bin", true)
            .unwrap()
            .write_all(b"a longer first version")
            .unwrap();
        provider
            .open_write("data.bin", true)
            .unwrap()
            .write_all(b"short")
            .unwrap();

        let mut read_back = Vec::new();
        provider
            .open_read("data.bin")
            .unwrap()
            .read_to_end(&mut read_back)
            .unwrap();

        assert_eq!(read_back, b"short");
    }
}
