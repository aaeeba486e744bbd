//! Tracing setup for the `dircp` binary.
//!
//! Events go to `dircp.log` under the XDG state dir. `RUST_LOG` overrides the
//! default filter, which enables debug output for every dircp target.

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Library code logs under `dircp_core::*`, the binary under `dircp_cli`,
/// and `TracingSink` under `dircp`.
pub const DEFAULT_FILTER: &str = "info,dircp=debug,dircp_core=debug,dircp_cli=debug";

const LOG_FILE_NAME: &str = "dircp.log";

/// Shared append handle; each event writes through its own clone.
struct LogFile(File);

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = Box<dyn io::Write + 'a>;

    fn make_writer(&'a self) -> Self::Writer {
        match self.0.try_clone() {
            Ok(file) => Box::new(file),
            Err(_) => Box::new(io::stderr()),
        }
    }
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `<state dir>/dircp.log`.
pub fn log_file_path(state_dir: &Path) -> PathBuf {
    state_dir.join(LOG_FILE_NAME)
}

fn open_log(state_dir: &Path) -> Result<(File, PathBuf)> {
    fs::create_dir_all(state_dir)
        .with_context(|| format!("create log dir {}", state_dir.display()))?;
    let path = log_file_path(state_dir);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;
    Ok((file, path))
}

/// Log to `~/.local/state/dircp/dircp.log`.
///
/// Errors leave no subscriber installed, so the caller can still use
/// [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let state_dir = xdg::BaseDirectories::with_prefix("dircp")?
        .get_state_home()
        .join("dircp");
    let (file, path) = open_log(&state_dir)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(LogFile(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    tracing::debug!("logging to {}", path.display());
    Ok(())
}

/// Log to stderr; a no-op if a subscriber is already installed.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}
