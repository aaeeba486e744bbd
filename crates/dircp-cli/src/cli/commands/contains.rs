//! `dircp contains` – would the container include this file?

use anyhow::Result;
use dircp_core::container::{ContainerPath, DirectoryContainer};
use std::path::Path;

pub fn run_contains(project: &Path, dir: &str, exts: &[String], file: &Path) -> Result<()> {
    let path = ContainerPath::new(dir, exts)?;
    let container = DirectoryContainer::new(&path, project);
    let file = std::path::absolute(file)?;
    println!("{}", container.is_contained(&file));
    Ok(())
}
