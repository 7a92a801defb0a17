//! Diagnostic reporting for the emitters
//!
//! Emitters never print. Anything worth reporting (an unknown margin side,
//! a degenerate grid) goes through a [`Diagnostics`] handed in by the caller.

/// Receiver for non-fatal render diagnostics
pub trait Diagnostics {
    /// Report a recoverable problem; rendering continues
    fn warn(&self, message: &str);

    /// Report render progress
    fn debug(&self, _message: &str) {}
}

/// Forwards diagnostics to the `tracing` macros
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "svg_graph", "{message}");
    }

    fn debug(&self, message: &str) {
        tracing::debug!(target: "svg_graph", "{message}");
    }
}

/// Discards all diagnostics
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn warn(&self, _message: &str) {}
}
