//! Error types for library resolution and container path parsing.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why the root directory of a resolution pass could not be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryErrorKind {
    /// Nothing exists at the configured root.
    NotFound,
    /// Something exists at the root but it is not a directory.
    NotADirectory,
    /// The root is a directory but listing it failed (permissions, I/O).
    Unreadable,
}

impl fmt::Display for DirectoryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryErrorKind::NotFound => write!(f, "directory not found"),
            DirectoryErrorKind::NotADirectory => write!(f, "not a directory"),
            DirectoryErrorKind::Unreadable => write!(f, "directory could not be listed"),
        }
    }
}

/// Fatal to a `resolve` call; no partial results are produced.
#[derive(Debug, Error)]
#[error("{kind}: {}", .path.display())]
pub struct DirectoryError {
    pub path: PathBuf,
    pub kind: DirectoryErrorKind,
    #[source]
    source: Option<io::Error>,
}

impl DirectoryError {
    pub fn not_found(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            kind: DirectoryErrorKind::NotFound,
            source: None,
        }
    }

    pub fn not_a_directory(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            kind: DirectoryErrorKind::NotADirectory,
            source: None,
        }
    }

    pub fn unreadable(path: &Path, source: io::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            kind: DirectoryErrorKind::Unreadable,
            source: Some(source),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("at least one file extension is required")]
    NoExtensions,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerPathError {
    #[error("not a directory container path (first segment is {found:?})")]
    WrongId { found: String },
    #[error("container path has no extension segment")]
    MissingExtensions,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn display_includes_kind_and_path() {
        let err = DirectoryError::not_found(Path::new("/tmp/nope"));
        assert_eq!(err.to_string(), "directory not found: /tmp/nope");
        assert_eq!(err.kind, DirectoryErrorKind::NotFound);
        assert!(err.source().is_none());
    }

    #[test]
    fn unreadable_keeps_io_source() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = DirectoryError::unreadable(Path::new("/srv/libs"), io_err);
        assert_eq!(err.kind, DirectoryErrorKind::Unreadable);
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("denied"));
    }

    #[test]
    fn container_path_error_wraps_config_error() {
        let err: ContainerPathError = ConfigError::NoExtensions.into();
        assert_eq!(err.to_string(), "at least one file extension is required");
    }
}
