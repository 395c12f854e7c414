//! Handler API for relabel
//!
//! This crate defines the contracts between command handlers and the
//! collaborators they drive: symbol resolution, the refactoring engine, change
//! serialization and diagnostics. Handlers only see these traits, so any
//! engine (or a test double) can be plugged in.

pub mod change;
pub mod diagnostics;
pub mod element;
pub mod engine;
pub mod status;

pub use change::{Change, ChangeSerializer};
pub use diagnostics::DiagnosticSink;
pub use element::{ElementHandle, ElementKind, ElementResolver};
pub use engine::{
    Capability, EngineError, EngineResult, PackageRenameProcessor, RefactoringEngine,
    RenameSession,
};
pub use status::{EngineStatus, EngineStatusEntry};

use async_trait::async_trait;
use relabel_foundation::{CancellationToken, RelabelResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Collaborators shared by all command handlers
pub struct RefactoringServices {
    /// Resolves URIs and positions to program elements
    pub resolver: Arc<dyn ElementResolver>,
    /// Creates refactoring sessions
    pub engine: Arc<dyn RefactoringEngine>,
    /// Turns engine change trees into workspace edits
    pub serializer: Arc<dyn ChangeSerializer>,
    /// Receives engine failures that are not returned to the caller
    pub diagnostics: Arc<dyn DiagnosticSink>,
}

/// Context provided to command handlers for one invocation
pub struct CommandContext {
    pub services: Arc<RefactoringServices>,
    /// Polled by handlers at their checkpoints
    pub cancellation: CancellationToken,
}

impl CommandContext {
    pub fn new(services: Arc<RefactoringServices>, cancellation: CancellationToken) -> Self {
        Self {
            services,
            cancellation,
        }
    }
}

/// A workspace command invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandCall {
    pub command: String,
    #[serde(default)]
    pub arguments: Vec<Value>,
}

impl CommandCall {
    pub fn new(command: impl Into<String>, arguments: Vec<Value>) -> Self {
        Self {
            command: command.into(),
            arguments,
        }
    }
}

/// Unified trait for workspace command handlers
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Command identifiers this handler is responsible for
    fn command_names(&self) -> &[String];

    /// Handles an incoming command call
    async fn handle_command(
        &self,
        context: &CommandContext,
        call: &CommandCall,
    ) -> RelabelResult<Value>;
}
