//! `dircp describe` – decode a container path.

use anyhow::Result;
use dircp_core::container::{ContainerPath, DirectoryContainer};
use std::path::Path;

pub fn run_describe(project: &Path, raw: &str) -> Result<()> {
    let path = ContainerPath::parse(raw)?;
    let container = DirectoryContainer::new(&path, project);
    let exts: Vec<&str> = path.extensions().iter().map(String::as_str).collect();
    println!("description: {}", container.description());
    println!("directory:   {}", container.dir().display());
    println!("extensions:  {}", exts.join(","));
    println!("valid:       {}", container.is_valid());
    Ok(())
}
