//! Diagnostic sink for failures that are logged rather than returned

use crate::engine::EngineError;

pub trait DiagnosticSink: Send + Sync {
    /// Record an engine failure with a human readable context message
    fn log_exception(&self, message: &str, error: &EngineError);
}
