//! Loading the text to validate.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that prevent a file from being validated at all.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The path does not exist.
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The path exists but could not be read as UTF-8 text.
    #[error("Error reading file: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    /// Path of the input that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            SourceError::NotFound { path } | SourceError::Read { path, .. } => path,
        }
    }
}

/// The full text of one input, with the path it is displayed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
}

impl SourceFile {
    /// Reads a file into memory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => Ok(Self {
                path: path.to_path_buf(),
                text,
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(SourceError::NotFound {
                path: path.to_path_buf(),
            }),
            Err(e) => Err(SourceError::Read {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    /// Wraps text that is already in memory.
    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_existing() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("settings.json");
        fs::write(&path, "{\"a\": 1}").unwrap();

        let source = SourceFile::load(&path).unwrap();
        assert_eq!(source.text, "{\"a\": 1}");
        assert_eq!(source.path, path);
    }

    #[test]
    fn test_load_missing() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("nope.json");

        let err = SourceFile::load(&path).unwrap_err();
        assert!(matches!(err, SourceError::NotFound { .. }));
        assert_eq!(err.path(), path.as_path());
        assert!(err.to_string().starts_with("File not found: "));
    }

    #[test]
    fn test_load_invalid_utf8() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("binary.json");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = SourceFile::load(&path).unwrap_err();
        assert!(matches!(err, SourceError::Read { .. }));
        assert!(err.to_string().starts_with("Error reading file: "));
    }

    #[test]
    fn test_load_directory_is_read_error() {
        let tmp = tempdir().unwrap();
        let err = SourceFile::load(tmp.path()).unwrap_err();
        assert!(matches!(err, SourceError::Read { .. }));
    }
}
