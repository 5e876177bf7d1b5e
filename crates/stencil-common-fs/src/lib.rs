//! File system utilities for Stencil.

pub mod path;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Largest template or description file read into memory.
pub const DEFAULT_MAX_READ: usize = 4 * 1024 * 1024;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// File system errors.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("file too large: {size} bytes (max: {max})")]
    TooLarge { path: PathBuf, size: u64, max: usize },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8 (invalid byte at offset {offset})", path.display())]
    InvalidUtf8 { path: PathBuf, offset: usize },
}

/// Result type for file system operations.
pub type Result<T> = std::result::Result<T, FsError>;

/// Read a UTF-8 file to string with size limit.
///
/// A leading byte order mark is dropped. Bytes that are not UTF-8 are an
/// error rather than being replaced.
pub fn read_to_string(path: impl AsRef<Path>, max_size: usize) -> Result<String> {
    let path = path.as_ref();

    let metadata = fs::metadata(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => FsError::NotFound {
            path: path.to_path_buf(),
        },
        _ => FsError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    if metadata.len() as usize > max_size {
        return Err(FsError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max: max_size,
        });
    }

    let mut bytes = fs::read(path).map_err(|e| FsError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes.starts_with(UTF8_BOM) {
        bytes.drain(..UTF8_BOM.len());
    }
    String::from_utf8(bytes).map_err(|e| FsError::InvalidUtf8 {
        path: path.to_path_buf(),
        offset: e.utf8_error().valid_up_to(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_to_string() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "hello").unwrap();
        assert_eq!(read_to_string(&path, 1024).unwrap(), "hello");
    }

    #[test]
    fn test_read_strips_bom() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bom.txt");
        fs::write(&path, [0xEF, 0xBB, 0xBF, b'h', b'i']).unwrap();
        assert_eq!(read_to_string(&path, 1024).unwrap(), "hi");
    }

    #[test]
    fn test_read_rejects_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin1.java.ft");
        fs::write(&path, [b'c', b'a', b'f', 0xE9, b'\n']).unwrap();

        match read_to_string(&path, 1024).unwrap_err() {
            FsError::InvalidUtf8 { path: bad, offset } => {
                assert_eq!(bad, path);
                assert_eq!(offset, 3);
            }
            other => panic!("Expected InvalidUtf8, got {other:?}"),
        }
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_to_string("/nonexistent/stencil/file", 1024).unwrap_err();
        assert!(matches!(err, FsError::NotFound { .. }));
    }

    #[test]
    fn test_read_too_large() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("big.txt");
        fs::write(&path, "0123456789").unwrap();
        let err = read_to_string(&path, 4).unwrap_err();
        match err {
            FsError::TooLarge { size, max, .. } => {
                assert_eq!(size, 10);
                assert_eq!(max, 4);
            }
            other => panic!("Expected TooLarge, got {other:?}"),
        }
    }
}
