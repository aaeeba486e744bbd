//! `dircp resolve` – list the libraries of a project directory.

use anyhow::{Context, Result};
use dircp_core::container::{ContainerPath, DirectoryContainer, LibraryEntry};
use dircp_core::resolver::sort_libraries;
use std::path::Path;

pub fn run_resolve(project: &Path, dir: &str, exts: &[String], sort: bool, json: bool) -> Result<()> {
    let path = ContainerPath::new(dir, exts)?;
    let container = DirectoryContainer::new(&path, project);
    let mut libs = container
        .libraries()
        .with_context(|| format!("resolve {}", container.description()))?;
    if sort {
        sort_libraries(&mut libs);
    }
    tracing::info!("{} libraries in {}", libs.len(), container.dir().display());

    if json {
        let entries: Vec<LibraryEntry> = libs.iter().map(LibraryEntry::from).collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if libs.is_empty() {
        println!("No libraries in {}.", container.dir().display());
        return Ok(());
    }
    println!("{:<40} {:<40} {}", "LIBRARY", "SOURCE", "JAVADOC");
    for lib in &libs {
        println!(
            "{:<40} {:<40} {}",
            lib.main_path().display().to_string(),
            display_opt(lib.source_path()),
            display_opt(lib.javadoc_path())
        );
    }
    Ok(())
}

fn display_opt(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "-".to_string())
}
