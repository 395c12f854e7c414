//! Diagnostic sink that keeps everything it is given

use relabel_handler_api::{DiagnosticSink, EngineError};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticRecord {
    pub message: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct CapturingDiagnosticSink {
    records: Mutex<Vec<DiagnosticRecord>>,
}

impl CapturingDiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<DiagnosticRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl DiagnosticSink for CapturingDiagnosticSink {
    fn log_exception(&self, message: &str, error: &EngineError) {
        self.records.lock().unwrap().push(DiagnosticRecord {
            message: message.to_string(),
            error: error.to_string(),
        });
    }
}
