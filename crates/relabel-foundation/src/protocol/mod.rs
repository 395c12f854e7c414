//! Rename command protocol definitions
//!
//! These are the transport-safe shapes exchanged with clients. They carry no
//! engine state and serialize to camelCase JSON.

pub mod refactoring;
pub mod rename;

pub use refactoring::{
    RefactoringResult, RefactoringSeverity, RefactoringStatus, RefactoringStatusEntry,
    ResourceChange, WorkspaceEdit,
};
pub use rename::{
    DocumentIdentifier, MatchStrategy, RenameArguments, RenameKind, RenameParams,
    RenameSettings, RenameTarget,
};
