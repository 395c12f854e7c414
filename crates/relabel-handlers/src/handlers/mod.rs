//! Workspace command handlers module

pub mod change_serializer;
pub mod command_registry;
pub mod diagnostics;
pub mod rename_command;

pub use change_serializer::WorkspaceEditSerializer;
pub use command_registry::CommandRegistry;
pub use diagnostics::TracingDiagnosticSink;
pub use rename_command::RenameCommand;
