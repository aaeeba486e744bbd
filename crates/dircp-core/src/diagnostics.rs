//! Diagnostic sink: where collaborators report faults they must not propagate.
//!
//! The resolver itself never logs failures; it returns typed errors. Callers
//! that have to degrade gracefully (the visibility filter, the CLI) hand the
//! error to a sink instead.

use std::error::Error;
use std::fmt::Write as _;

/// Severity of a diagnostic, mirroring the host's status levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Ok,
    Info,
    Warning,
    Error,
    Cancel,
}

pub trait DiagnosticSink {
    fn log_message(&self, severity: Severity, message: &str);

    /// Logs `err` with its whole source chain, `outer: inner: ...`.
    fn log_error(&self, severity: Severity, err: &dyn Error) {
        self.log_message(severity, &render_chain(err));
    }
}

/// Renders an error and its sources on one line.
pub fn render_chain(err: &dyn Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(out, ": {cause}");
        source = cause.source();
    }
    out
}

/// Routes diagnostics to `tracing` under the `dircp` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn log_message(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Error => tracing::error!(target: "dircp", "{}", message),
            Severity::Warning => tracing::warn!(target: "dircp", "{}", message),
            Severity::Info | Severity::Ok => tracing::info!(target: "dircp", "{}", message),
            Severity::Cancel => tracing::debug!(target: "dircp", "cancelled: {}", message),
        }
    }
}
