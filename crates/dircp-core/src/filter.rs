//! Project-tree visibility filter.
//!
//! Hides files that a directory container on the project's build path
//! already contributes, so they are not added a second time by hand.

use crate::container::{ContainerPath, DirectoryContainer};
use crate::diagnostics::{DiagnosticSink, Severity};
use std::path::{Path, PathBuf};

pub struct VisibilityFilter<S> {
    project_root: PathBuf,
    sink: S,
}

impl<S: DiagnosticSink> VisibilityFilter<S> {
    pub fn new(project_root: impl Into<PathBuf>, sink: S) -> Self {
        Self {
            project_root: project_root.into(),
            sink,
        }
    }

    /// Returns `false` when `file` should be hidden.
    ///
    /// `raw_entries` are the project's raw build path entries; anything that
    /// is not a directory container path is ignored. A container path that
    /// fails to parse is reported to the sink and skipped.
    pub fn select<I, E>(&self, raw_entries: I, file: &Path) -> bool
    where
        I: IntoIterator<Item = E>,
        E: AsRef<str>,
    {
        for raw in raw_entries {
            let raw = raw.as_ref();
            if !ContainerPath::is_container_path(raw) {
                continue;
            }
            let path = match ContainerPath::parse(raw) {
                Ok(path) => path,
                Err(e) => {
                    self.sink.log_message(
                        Severity::Error,
                        &format!("invalid directory container path {raw:?}: {e}"),
                    );
                    continue;
                }
            };
            let container = DirectoryContainer::new(&path, &self.project_root);
            if container.is_contained(file) {
                tracing::debug!(
                    "hiding {} (contributed by {})",
                    file.display(),
                    container.description()
                );
                return false;
            }
        }
        true
    }
}
