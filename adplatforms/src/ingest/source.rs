//! Where platform listings come from.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use super::error::IngestError;
use super::parser::parse_platform_lines;
use crate::location::PlatformMapping;

/// A provider of raw location → platforms mappings.
pub trait PlatformSource: Send + Sync {
    /// Read the full mapping. An empty mapping is not an error here.
    fn read_mapping(&self) -> Result<PlatformMapping, IngestError>;

    /// Short human-readable description for logs and messages.
    fn describe(&self) -> String;
}

/// Reads a UTF-8 listing file on every call.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for the listing at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the listing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the listing's parent directory if it does not exist yet.
    pub fn ensure_parent_dir(&self) -> io::Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                fs::create_dir_all(parent)
            }
            _ => Ok(()),
        }
    }
}

impl PlatformSource for FileSource {
    fn read_mapping(&self) -> Result<PlatformMapping, IngestError> {
        info!(path = %self.path.display(), "Reading platform listing");

        let text = fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                IngestError::NotFound {
                    path: self.path.clone(),
                }
            } else {
                IngestError::Io {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        let outcome = parse_platform_lines(&text);
        info!(
            path = %self.path.display(),
            locations = outcome.mapping.len(),
            accepted_lines = outcome.accepted_lines,
            skipped_lines = outcome.skipped_lines,
            skipped_locations = outcome.skipped_locations,
            "Platform listing parsed"
        );
        Ok(outcome.mapping)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Serves a fixed mapping held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    mapping: PlatformMapping,
}

impl MemorySource {
    /// Wrap an existing mapping.
    pub fn new(mapping: PlatformMapping) -> Self {
        Self { mapping }
    }

    /// Parse listing text once and serve the result.
    pub fn from_listing(text: &str) -> Self {
        Self::new(parse_platform_lines(text).mapping)
    }
}

impl PlatformSource for MemorySource {
    fn read_mapping(&self) -> Result<PlatformMapping, IngestError> {
        Ok(self.mapping.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory listing ({} locations)", self.mapping.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    fn write_listing(dir: &TempDir, contents: &[u8]) -> PathBuf {
        let path = dir.path().join("platforms.txt");
        fs::write(&path, contents).unwrap();
        path
    }

    // =========================================================================
    // FileSource
    // =========================================================================

    #[test]
    fn test_file_source_reads_listing() {
        let dir = TempDir::new().unwrap();
        let path = write_listing(&dir, b"A: /ru\nB: /ru/svrd, /ru\n");

        let mapping = FileSource::new(&path).read_mapping().unwrap();
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping["/ru"], vec!["A", "B"]);
        assert_eq!(mapping["/ru/svrd"], vec!["B"]);
    }

    #[test]
    fn test_file_source_missing_file() {
        let dir = TempDir::new().unwrap();
        let source = FileSource::new(dir.path().join("absent.txt"));

        let err = source.read_mapping().unwrap_err();
        assert!(matches!(err, IngestError::NotFound { .. }));
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_file_source_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = write_listing(&dir, &[b'A', b':', b' ', 0xff, 0xfe]);

        let err = FileSource::new(path).read_mapping().unwrap_err();
        assert!(matches!(err, IngestError::Io { .. }));
    }

    #[test]
    fn test_file_source_empty_file_is_empty_mapping() {
        let dir = TempDir::new().unwrap();
        let path = write_listing(&dir, b"\n\n");

        assert!(FileSource::new(path).read_mapping().unwrap().is_empty());
    }

    #[test]
    fn test_file_source_rereads_on_each_call() {
        let dir = TempDir::new().unwrap();
        let path = write_listing(&dir, b"A: /ru\n");
        let source = FileSource::new(&path);
        assert_eq!(source.read_mapping().unwrap().len(), 1);

        fs::write(&path, "A: /ru\nB: /kz\n").unwrap();
        assert_eq!(source.read_mapping().unwrap().len(), 2);
    }

    #[test]
    fn test_ensure_parent_dir() {
        let dir = TempDir::new().unwrap();
        let source = FileSource::new(dir.path().join("nested/deeper/platforms.txt"));

        source.ensure_parent_dir().unwrap();
        assert!(dir.path().join("nested/deeper").is_dir());
        // Second call is a no-op.
        source.ensure_parent_dir().unwrap();
    }

    #[test]
    fn test_describe_names_the_path() {
        let source = FileSource::new("/data/platforms.txt");
        assert_eq!(source.describe(), "file /data/platforms.txt");
        assert_eq!(source.path(), Path::new("/data/platforms.txt"));
    }

    // =========================================================================
    // MemorySource
    // =========================================================================

    #[test]
    fn test_memory_source_serves_mapping() {
        let source = MemorySource::from_listing("A: /ru\nB: /kz");
        let mapping = source.read_mapping().unwrap();
        assert_eq!(mapping.len(), 2);
        assert_eq!(source.describe(), "in-memory listing (2 locations)");
    }

    #[test]
    fn test_memory_source_default_is_empty() {
        assert!(MemorySource::default().read_mapping().unwrap().is_empty());
    }
}
