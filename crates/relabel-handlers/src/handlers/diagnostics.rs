//! Diagnostic sink backed by `tracing`

use relabel_handler_api::{DiagnosticSink, EngineError};
use tracing::error;

/// Emits engine failures as `error` events
pub struct TracingDiagnosticSink;

impl TracingDiagnosticSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingDiagnosticSink {
    fn log_exception(&self, message: &str, error: &EngineError) {
        error!(error = %error, "{}", message);
    }
}
