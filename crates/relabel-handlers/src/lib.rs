#![allow(clippy::new_without_default)]

pub mod handlers;

// Re-export for convenience
pub use handlers::{
    CommandRegistry, RenameCommand, TracingDiagnosticSink, WorkspaceEditSerializer,
};
