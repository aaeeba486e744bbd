//! Directory classpath container: the encoded container path, the container
//! built from it for a given project, and the library entries it contributes.
//!
//! A container path looks like `<CONTAINER_ID>/<dir>/<ext,ext>`, where `<dir>`
//! is relative to the project root (one or more segments, or `-` for the
//! root itself) and the last segment lists accepted extensions without dots.

use crate::error::{ContainerPathError, DirectoryError};
use crate::naming::{normalize_extensions, parse_extension_list};
use crate::resolver::{self, ResolvedLibrary, ResolverConfig};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

pub const CONTAINER_ID: &str = "com.googlecode.eclipse.plugin.directorycpcontainer.DIR_CONTAINER";

/// Directory segment meaning "the project root".
pub const ROOT_DIR: &str = "-";

/// Attribute name the host uses for documentation locations.
pub const JAVADOC_LOCATION_ATTRIBUTE: &str = "javadoc_location";

/// Parsed container path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerPath {
    /// Project-relative directory; empty for the project root.
    dir_segments: Vec<String>,
    extensions: BTreeSet<String>,
}

impl ContainerPath {
    pub fn new<I, S>(dir: &str, extensions: I) -> Result<Self, ContainerPathError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            dir_segments: dir_segments(dir.split('/').filter(|s| !s.is_empty())),
            extensions: normalize_extensions(extensions)?,
        })
    }

    pub fn parse(raw: &str) -> Result<Self, ContainerPathError> {
        let mut segments: Vec<&str> = raw.split('/').filter(|s| !s.is_empty()).collect();
        let id = segments.first().copied().unwrap_or_default();
        if id != CONTAINER_ID {
            return Err(ContainerPathError::WrongId {
                found: id.to_string(),
            });
        }
        if segments.len() < 2 {
            return Err(ContainerPathError::MissingExtensions);
        }
        let ext_segment = segments.pop().unwrap_or_default();
        let extensions = parse_extension_list(ext_segment)?;
        Ok(Self {
            dir_segments: dir_segments(segments.into_iter().skip(1)),
            extensions,
        })
    }

    /// Whether `raw` names a directory container, whatever its other segments.
    pub fn is_container_path(raw: &str) -> bool {
        raw.split('/').find(|s| !s.is_empty()) == Some(CONTAINER_ID)
    }

    /// Project-relative directory, `""` for the project root.
    pub fn relative_dir(&self) -> String {
        self.dir_segments.join("/")
    }

    pub fn extensions(&self) -> &BTreeSet<String> {
        &self.extensions
    }
}

fn dir_segments<'a>(segments: impl Iterator<Item = &'a str>) -> Vec<String> {
    let segments: Vec<String> = segments.map(str::to_string).collect();
    if segments.len() == 1 && segments[0] == ROOT_DIR {
        Vec::new()
    } else {
        segments
    }
}

impl fmt::Display for ContainerPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = if self.dir_segments.is_empty() {
            ROOT_DIR.to_string()
        } else {
            self.relative_dir()
        };
        let exts: Vec<&str> = self.extensions.iter().map(String::as_str).collect();
        write!(f, "{}/{}/{}", CONTAINER_ID, dir, exts.join(","))
    }
}

/// Name/value pair attached to a library entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClasspathAttribute {
    pub name: String,
    pub value: String,
}

/// Library entry in the shape the host's build path expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryEntry {
    pub path: PathBuf,
    pub source_attachment_path: Option<PathBuf>,
    pub source_attachment_root_path: PathBuf,
    pub attributes: Vec<ClasspathAttribute>,
    pub exported: bool,
}

impl From<&ResolvedLibrary> for LibraryEntry {
    fn from(lib: &ResolvedLibrary) -> Self {
        let attributes = lib
            .javadoc_path()
            .map(|p| ClasspathAttribute {
                name: JAVADOC_LOCATION_ATTRIBUTE.to_string(),
                value: p.display().to_string(),
            })
            .into_iter()
            .collect();
        Self {
            path: lib.main_path().to_path_buf(),
            source_attachment_path: lib.source_path().map(Path::to_path_buf),
            source_attachment_root_path: PathBuf::from("/"),
            attributes,
            exported: false,
        }
    }
}

/// Container instance bound to one project.
#[derive(Debug, Clone)]
pub struct DirectoryContainer {
    path: ContainerPath,
    config: ResolverConfig,
    description: String,
}

impl DirectoryContainer {
    pub fn new(path: &ContainerPath, project_root: &Path) -> Self {
        let project_root =
            std::path::absolute(project_root).unwrap_or_else(|_| project_root.to_path_buf());
        let dir = path
            .dir_segments
            .iter()
            .fold(project_root, |acc, seg| acc.join(seg));
        Self {
            path: path.clone(),
            config: ResolverConfig::from_normalized(dir, path.extensions.clone()),
            description: format!("/{} Libraries", path.relative_dir()),
        }
    }

    pub fn path(&self) -> &ContainerPath {
        &self.path
    }

    /// Label shown for the container, e.g. `/lib Libraries`.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn dir(&self) -> &Path {
        self.config.root()
    }

    pub fn resolver_config(&self) -> &ResolverConfig {
        &self.config
    }

    /// The configured directory exists and is a directory.
    pub fn is_valid(&self) -> bool {
        self.dir().is_dir()
    }

    pub fn libraries(&self) -> Result<Vec<ResolvedLibrary>, DirectoryError> {
        resolver::resolve(&self.config)
    }

    pub fn classpath_entries(&self) -> Result<Vec<LibraryEntry>, DirectoryError> {
        Ok(self.libraries()?.iter().map(LibraryEntry::from).collect())
    }

    pub fn is_contained(&self, file: &Path) -> bool {
        resolver::is_contained(&self.config, file)
    }
}
