//! Engine change trees and their serialization

use crate::engine::EngineResult;
use lsp_types::TextEdit;
use relabel_foundation::protocol::WorkspaceEdit;

/// Hierarchical description of a computed refactoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// Named group of child changes, applied in order
    Composite { name: String, children: Vec<Change> },
    /// Replacements inside one file, in engine order
    TextFile { uri: String, edits: Vec<TextEdit> },
    /// Move of a source file to a new URI
    RenameCompilationUnit { uri: String, new_uri: String },
    /// Move of a package folder to a new URI
    RenamePackage { uri: String, new_uri: String },
}

impl Change {
    pub fn composite(name: impl Into<String>, children: Vec<Change>) -> Self {
        Change::Composite {
            name: name.into(),
            children,
        }
    }

    pub fn text_file(uri: impl Into<String>, edits: Vec<TextEdit>) -> Self {
        Change::TextFile {
            uri: uri.into(),
            edits,
        }
    }

    /// Whether applying this change would do nothing
    pub fn is_empty(&self) -> bool {
        match self {
            Change::Composite { children, .. } => children.iter().all(Change::is_empty),
            Change::TextFile { edits, .. } => edits.is_empty(),
            Change::RenameCompilationUnit { .. } | Change::RenamePackage { .. } => false,
        }
    }
}

/// Converts engine change trees into transport-safe workspace edits
pub trait ChangeSerializer: Send + Sync {
    fn serialize(&self, change: &Change) -> EngineResult<WorkspaceEdit>;
}
