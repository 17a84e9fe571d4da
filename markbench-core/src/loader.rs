// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Workload loading.
//!
//! The whole input is read into memory before timing begins so that file
//! I/O never shows up in the measurement. There is no streaming and no size
//! limit; this is meant for benchmark fixtures, not arbitrary data.

use std::path::{Path, PathBuf};

use crate::error::{BenchError, BenchResult, TransformError};

/// Immutable in-memory copy of the benchmark input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBuffer {
    origin: PathBuf,
    bytes: Box<[u8]>,
}

impl InputBuffer {
    /// Wrap bytes that did not come from the loader (fixtures, benches).
    pub fn from_bytes(origin: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            origin: origin.into(),
            bytes: bytes.into().into_boxed_slice(),
        }
    }

    /// Path the buffer was loaded from.
    pub fn origin(&self) -> &Path {
        &self.origin
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// UTF-8 view of the input.
    ///
    /// Validation runs on every call, so converters that need text pay for
    /// it inside the timed region just like a real caller would.
    pub fn as_str(&self) -> Result<&str, TransformError> {
        std::str::from_utf8(&self.bytes).map_err(|e| TransformError::InvalidUtf8 {
            valid_up_to: e.valid_up_to(),
        })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Reads a named resource into an [`InputBuffer`].
pub struct WorkloadLoader;

impl WorkloadLoader {
    /// Load the file at `path` in one read.
    /// Any failure is fatal for the benchmark.
    pub fn load(path: impl AsRef<Path>) -> BenchResult<InputBuffer> {
        let path = path.as_ref();

        let bytes = std::fs::read(path).map_err(|source| BenchError::ResourceLoad {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Loaded workload");

        Ok(InputBuffer::from_bytes(path, bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_existing_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"# Title\n\nBody text.").unwrap();

        let input = WorkloadLoader::load(file.path()).unwrap();
        assert_eq!(input.as_bytes(), b"# Title\n\nBody text.");
        assert_eq!(input.origin(), file.path());
        assert_eq!(input.as_str().unwrap(), "# Title\n\nBody text.");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.md");

        let err = WorkloadLoader::load(&missing).unwrap_err();
        match err {
            BenchError::ResourceLoad { path, source } => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_directory_fails() {
        let dir = TempDir::new().unwrap();
        let err = WorkloadLoader::load(dir.path()).unwrap_err();
        assert!(matches!(err, BenchError::ResourceLoad { .. }));
    }

    #[test]
    fn test_load_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let input = WorkloadLoader::load(file.path()).unwrap();
        assert!(input.is_empty());
        assert_eq!(input.as_str().unwrap(), "");
    }

    #[test]
    fn test_invalid_utf8_view() {
        let input = InputBuffer::from_bytes("bad.md", vec![b'o', b'k', 0xff, 0xfe]);
        assert_eq!(input.len(), 4);
        match input.as_str() {
            Err(TransformError::InvalidUtf8 { valid_up_to }) => assert_eq!(valid_up_to, 2),
            other => panic!("expected InvalidUtf8, got {other:?}"),
        }
    }
}
