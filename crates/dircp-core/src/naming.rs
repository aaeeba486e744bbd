//! Filename helpers: extension splitting and companion suffix classification.
//!
//! A companion archive sits next to a main archive and carries the same stem
//! plus a suffix, e.g. `lib.jar` / `lib-sources.jar` / `lib-javadoc.jar`.

use crate::error::ConfigError;
use std::collections::BTreeSet;

/// Stem suffixes marking a source archive, probed in this order.
pub const SOURCE_SUFFIXES: &[&str] = &["-src", "-source", "-sources"];

/// Stem suffixes marking a documentation archive.
pub const JAVADOC_SUFFIXES: &[&str] = &["-javadoc"];

/// Role of a file derived from its stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixClass {
    Plain,
    Source,
    Javadoc,
}

impl SuffixClass {
    pub fn is_companion(self) -> bool {
        self != SuffixClass::Plain
    }
}

/// Splits `name` on its last `.` into `(stem, extension)`.
///
/// Returns `None` when the name has no `.`. The stem may be empty (`.jar`).
pub fn split_extension(name: &str) -> Option<(&str, &str)> {
    name.rsplit_once('.')
}

/// Classifies a stem, checking source suffixes before javadoc suffixes.
pub fn classify_stem(stem: &str) -> SuffixClass {
    if has_any_suffix(stem, SOURCE_SUFFIXES) {
        SuffixClass::Source
    } else if has_any_suffix(stem, JAVADOC_SUFFIXES) {
        SuffixClass::Javadoc
    } else {
        SuffixClass::Plain
    }
}

fn has_any_suffix(stem: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|s| stem.ends_with(s))
}

/// Parses a comma separated extension list (`"jar,zip"`).
///
/// Items are trimmed, lowercased and stripped of one leading `.`; empty
/// items are dropped. An empty result is an error.
pub fn parse_extension_list(list: &str) -> Result<BTreeSet<String>, ConfigError> {
    normalize_extensions(list.split(','))
}

/// Normalizes extensions the same way [`parse_extension_list`] does.
pub fn normalize_extensions<I, S>(items: I) -> Result<BTreeSet<String>, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let exts: BTreeSet<String> = items
        .into_iter()
        .map(|s| {
            let s = s.as_ref().trim();
            s.strip_prefix('.').unwrap_or(s).to_lowercase()
        })
        .filter(|s| !s.is_empty())
        .collect();
    if exts.is_empty() {
        return Err(ConfigError::NoExtensions);
    }
    Ok(exts)
}
