//! `dircp filter` – would the project view show this file?

use anyhow::Result;
use dircp_core::diagnostics::TracingSink;
use dircp_core::filter::VisibilityFilter;
use std::path::Path;

pub fn run_filter(project: &Path, file: &Path, entries: &[String]) -> Result<()> {
    let filter = VisibilityFilter::new(project, TracingSink);
    let file = std::path::absolute(file)?;
    let shown = filter.select(entries, &file);
    println!("{}", if shown { "shown" } else { "hidden" });
    Ok(())
}
