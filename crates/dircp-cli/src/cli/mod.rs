//! CLI for the dircp directory library resolver.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dircp_core::config;
use std::path::PathBuf;

use commands::{run_contains, run_describe, run_filter, run_resolve};

/// Top-level CLI for dircp.
#[derive(Debug, Parser)]
#[command(name = "dircp")]
#[command(about = "dircp: resolve a directory of archives into library entries", long_about = None)]
pub struct Cli {
    /// Project root that container directories are relative to (default: current directory).
    #[arg(long, global = true, value_name = "DIR")]
    pub project: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List the libraries a project directory contributes.
    Resolve {
        /// Project-relative directory, or `-` for the project root.
        dir: String,
        /// Comma separated extensions (default: from config).
        #[arg(long, value_name = "LIST")]
        ext: Option<String>,
        /// Sort by path instead of directory listing order.
        #[arg(long)]
        sort: bool,
        /// Print library entries as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Check whether a file is contained in a project directory's container.
    Contains {
        /// Project-relative directory, or `-` for the project root.
        dir: String,
        /// File to check.
        file: PathBuf,
        /// Comma separated extensions (default: from config).
        #[arg(long, value_name = "LIST")]
        ext: Option<String>,
    },

    /// Show what an encoded container path refers to.
    Describe {
        /// Container path, e.g. `<container id>/lib/jar,zip`.
        container_path: String,
    },

    /// Decide whether the project view would show a file.
    Filter {
        /// File to check.
        file: PathBuf,
        /// Raw build path entry; repeat for each entry.
        #[arg(long = "entry", value_name = "ENTRY", required = true)]
        entries: Vec<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let project = match cli.project {
            Some(p) => p,
            None => std::env::current_dir()?,
        };

        match cli.command {
            CliCommand::Resolve {
                dir,
                ext,
                sort,
                json,
            } => {
                let exts = cfg.extensions_or_default(ext.as_deref());
                run_resolve(&project, &dir, &exts, sort || cfg.sort_output, json)?;
            }
            CliCommand::Contains { dir, file, ext } => {
                let exts = cfg.extensions_or_default(ext.as_deref());
                run_contains(&project, &dir, &exts, &file)?;
            }
            CliCommand::Describe { container_path } => run_describe(&project, &container_path)?,
            CliCommand::Filter { file, entries } => run_filter(&project, &file, &entries)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
