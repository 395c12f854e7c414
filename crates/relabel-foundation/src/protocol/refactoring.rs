//! Refactoring results returned to clients

use lsp_types::TextEdit;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Severity scale of a refactoring status, ordered from least to most severe
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefactoringSeverity {
    #[default]
    Ok,
    Info,
    Warning,
    Error,
    Fatal,
    /// The engine aborted its own check
    Cancelled,
}

impl RefactoringSeverity {
    /// Whether a status at this severity prevents the change from being built
    pub fn is_blocking(self) -> bool {
        self >= RefactoringSeverity::Fatal
    }
}

/// One diagnostic produced by a precondition check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefactoringStatusEntry {
    pub severity: RefactoringSeverity,
    pub message: String,
}

/// Overall outcome of the precondition check
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefactoringStatus {
    pub severity: RefactoringSeverity,
    /// Entries in the order the engine declared them
    #[serde(default)]
    pub messages: Vec<RefactoringStatusEntry>,
}

/// A file or package move produced by the refactoring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceChange {
    pub current_uri: String,
    pub new_uri: String,
    pub pack: bool,
}

/// Transport-level description of textual changes across files
///
/// `changes` maps a file URI to its replacements in the order the engine
/// produced them. `resource_changes` lists moves to perform after the text
/// edits are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceEdit {
    #[serde(default)]
    pub changes: BTreeMap<String, Vec<TextEdit>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_changes: Vec<ResourceChange>,
}

impl WorkspaceEdit {
    pub fn is_empty(&self) -> bool {
        self.changes.values().all(Vec::is_empty) && self.resource_changes.is_empty()
    }

    /// Append edits for a file after any edits it already has
    pub fn push_edits(&mut self, uri: impl Into<String>, edits: impl IntoIterator<Item = TextEdit>) {
        self.changes.entry(uri.into()).or_default().extend(edits);
    }

    /// Total number of text edits across all files
    pub fn edit_count(&self) -> usize {
        self.changes.values().map(Vec::len).sum()
    }
}

/// Response envelope of the rename command
///
/// A missing status means no refactoring ran: the target could not be
/// resolved, or the engine failed before checking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefactoringResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refactoring_status: Option<RefactoringStatus>,
    #[serde(default)]
    pub workspace_edit: WorkspaceEdit,
}

impl RefactoringResult {
    /// The no-op outcome: no status and an empty edit
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn severity(&self) -> Option<RefactoringSeverity> {
        self.refactoring_status.as_ref().map(|status| status.severity)
    }
}
