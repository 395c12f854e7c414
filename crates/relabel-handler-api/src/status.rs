//! Engine-native precondition status

use relabel_foundation::protocol::RefactoringSeverity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineStatusEntry {
    pub severity: RefactoringSeverity,
    pub message: String,
}

/// Diagnostics collected by a precondition check, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineStatus {
    entries: Vec<EngineStatusEntry>,
}

impl EngineStatus {
    /// A status without entries
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn with_entry(severity: RefactoringSeverity, message: impl Into<String>) -> Self {
        let mut status = Self::ok();
        status.add_entry(severity, message);
        status
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::with_entry(RefactoringSeverity::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_entry(RefactoringSeverity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::with_entry(RefactoringSeverity::Error, message)
    }

    pub fn fatal(message: impl Into<String>) -> Self {
        Self::with_entry(RefactoringSeverity::Fatal, message)
    }

    pub fn add_entry(&mut self, severity: RefactoringSeverity, message: impl Into<String>) {
        self.entries.push(EngineStatusEntry {
            severity,
            message: message.into(),
        });
    }

    /// Append all entries of `other` after the existing ones
    pub fn merge(&mut self, other: EngineStatus) {
        self.entries.extend(other.entries);
    }

    pub fn entries(&self) -> &[EngineStatusEntry] {
        &self.entries
    }

    /// Highest entry severity, `Ok` when there are no entries
    pub fn severity(&self) -> RefactoringSeverity {
        self.entries
            .iter()
            .map(|entry| entry.severity)
            .max()
            .unwrap_or_default()
    }

    /// Whether the change must not be built
    pub fn is_blocking(&self) -> bool {
        self.severity().is_blocking()
    }
}
