//! Directory → library resolution.
//!
//! A single pass lists the immediate entries of the root directory, keeps the
//! archives whose extension is accepted and whose stem is not a companion
//! (`-src`, `-sources`, `-javadoc`, ...), then probes the filesystem for
//! companion archives next to each kept archive. Nothing is cached: every call
//! reflects the current state of the directory.

use crate::error::{ConfigError, DirectoryError};
use crate::naming::{
    classify_stem, normalize_extensions, split_extension, JAVADOC_SUFFIXES, SOURCE_SUFFIXES,
};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Root directory plus accepted extensions for one resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    root: PathBuf,
    /// Lowercase, no leading dot, never empty. Ordered so companion probes
    /// try extensions lexicographically.
    extensions: BTreeSet<String>,
}

impl ResolverConfig {
    pub fn new<I, S>(root: impl Into<PathBuf>, extensions: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            root: root.into(),
            extensions: normalize_extensions(extensions)?,
        })
    }

    /// For extension sets that already went through `normalize_extensions`.
    pub(crate) fn from_normalized(root: PathBuf, extensions: BTreeSet<String>) -> Self {
        Self { root, extensions }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn extensions(&self) -> &BTreeSet<String> {
        &self.extensions
    }

    /// Case-insensitive membership test.
    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.extensions.contains(&ext.to_lowercase())
    }
}

/// One main archive with its optional attachments. All paths are absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLibrary {
    main_path: PathBuf,
    source_path: Option<PathBuf>,
    javadoc_path: Option<PathBuf>,
}

impl ResolvedLibrary {
    pub fn main_path(&self) -> &Path {
        &self.main_path
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn javadoc_path(&self) -> Option<&Path> {
        self.javadoc_path.as_deref()
    }
}

/// Resolves every main archive directly inside `config.root()`.
///
/// Output follows directory listing order, which the filesystem defines; use
/// [`sort_libraries`] when a stable order is needed.
///
/// # Errors
///
/// Fails before producing anything when the root is missing, is not a
/// directory, or cannot be listed. Problems with individual entries or
/// companion probes are never errors: such files are treated as absent.
pub fn resolve(config: &ResolverConfig) -> Result<Vec<ResolvedLibrary>, DirectoryError> {
    let root = check_root(config.root())?;

    let mut libs = Vec::new();
    for entry in WalkDir::new(&root).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                let err = e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("directory walk failed"));
                return Err(DirectoryError::unreadable(&root, err));
            }
            Err(e) => {
                tracing::debug!("skipping unreadable entry: {}", e);
                continue;
            }
        };

        let Some(name) = entry.file_name().to_str() else {
            tracing::debug!("skipping non UTF-8 name {:?}", entry.file_name());
            continue;
        };
        let Some((stem, ext)) = split_extension(name) else {
            continue;
        };
        if classify_stem(stem).is_companion() || !config.accepts_extension(ext) {
            continue;
        }

        let source_path = find_companion(&root, stem, SOURCE_SUFFIXES, config.extensions());
        let javadoc_path = find_companion(&root, stem, JAVADOC_SUFFIXES, config.extensions());
        tracing::debug!(
            "library {} (source: {}, javadoc: {})",
            name,
            source_path.is_some(),
            javadoc_path.is_some()
        );

        libs.push(ResolvedLibrary {
            main_path: entry.into_path(),
            source_path,
            javadoc_path,
        });
    }
    Ok(libs)
}

/// True when `file` sits directly in the root and has an accepted extension.
///
/// Companion archives count as contained. The parent comparison is literal
/// `Path` equality; neither side is canonicalized.
pub fn is_contained(config: &ResolverConfig, file: &Path) -> bool {
    if file.parent() != Some(config.root()) {
        return false;
    }
    let Some(name) = file.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let Some((_, ext)) = split_extension(name) else {
        return false;
    };
    config.accepts_extension(ext)
}

/// Sorts by main path, for callers that need a deterministic order.
pub fn sort_libraries(libs: &mut [ResolvedLibrary]) {
    libs.sort_by(|a, b| a.main_path.cmp(&b.main_path));
}

/// Validates the root and returns it as an absolute path.
fn check_root(root: &Path) -> Result<PathBuf, DirectoryError> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => return Err(DirectoryError::not_a_directory(root)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(DirectoryError::not_found(root));
        }
        Err(e) => return Err(DirectoryError::unreadable(root, e)),
    }
    std::path::absolute(root).map_err(|e| DirectoryError::unreadable(root, e))
}

/// First existing `<dir>/<stem><suffix>.<ext>`, suffixes outermost.
fn find_companion(
    dir: &Path,
    stem: &str,
    suffixes: &[&str],
    extensions: &BTreeSet<String>,
) -> Option<PathBuf> {
    suffixes
        .iter()
        .flat_map(|suffix| {
            extensions
                .iter()
                .map(move |ext| dir.join(format!("{stem}{suffix}.{ext}")))
        })
        .find(|candidate| candidate.exists())
}
