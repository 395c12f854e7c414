//! Refactoring engine contracts
//!
//! A rename session advertises optional update behaviors through a small set
//! of tagged capabilities. Callers ask `supports` and `can_enable` before
//! using the matching setters; sessions ignore setters they do not support.

use crate::change::Change;
use crate::element::ElementHandle;
use crate::status::EngineStatus;
use async_trait::async_trait;
use relabel_foundation::protocol::MatchStrategy;
use relabel_foundation::{CancellationToken, RelabelError};

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised by the resolver, the engine or the change serializer
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The engine could not complete the operation
    #[error("Engine error: {message}")]
    Core { message: String },

    /// The engine observed cancellation
    #[error("Operation cancelled")]
    Cancelled,

    #[error("Operation not supported: {operation}")]
    NotSupported { operation: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EngineError {
    pub fn core(message: impl Into<String>) -> Self {
        Self::Core {
            message: message.into(),
        }
    }

    pub fn not_supported(operation: impl Into<String>) -> Self {
        Self::NotSupported {
            operation: operation.into(),
        }
    }
}

impl From<EngineError> for RelabelError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Cancelled => RelabelError::cancelled("refactoring engine"),
            EngineError::NotSupported { operation } => RelabelError::NotSupported {
                operation,
                reason: None,
            },
            EngineError::Core { message } => RelabelError::Engine {
                message,
                source: None,
            },
            EngineError::Other(source) => RelabelError::Engine {
                message: source.to_string(),
                source: Some(source.into()),
            },
        }
    }
}

/// Optional update behaviors a rename session may offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Keep the old declaration as a delegate to the renamed one
    DelegateUpdating,
    /// Rewrite fully qualified names in non-source files
    QualifiedNameUpdating,
    /// Rewrite references to the renamed element
    ReferenceUpdating,
    /// Rename similarly named declarations (fields, locals, accessors)
    SimilarDeclarationUpdating,
    /// Rewrite textual occurrences in comments and strings
    TextualMatchUpdating,
}

/// Processor-specific configuration of package renames
pub trait PackageRenameProcessor: Send {
    fn set_rename_subpackages(&mut self, rename_subpackages: bool);
}

/// A configured, single-use rename refactoring
#[async_trait]
pub trait RenameSession: Send {
    /// Whether this session offers `capability` at all
    fn supports(&self, _capability: Capability) -> bool {
        false
    }

    /// Whether a supported capability can be switched on for this target
    fn can_enable(&self, capability: Capability) -> bool {
        self.supports(capability)
    }

    fn set_delegate_updating(&mut self, _enabled: bool) {}

    fn set_deprecate_delegates(&mut self, _deprecate: bool) {}

    fn set_update_qualified_names(&mut self, _update: bool) {}

    fn set_file_patterns(&mut self, _patterns: Option<&str>) {}

    fn set_update_references(&mut self, _update: bool) {}

    fn set_update_similar_declarations(&mut self, _update: bool) {}

    fn set_match_strategy(&mut self, _strategy: MatchStrategy) {}

    fn set_update_textual_matches(&mut self, _update: bool) {}

    /// Present only on sessions renaming a package
    fn package_processor(&mut self) -> Option<&mut dyn PackageRenameProcessor> {
        None
    }

    /// Run initial and final precondition checks
    async fn check_all_conditions(&mut self, cancel: &CancellationToken)
        -> EngineResult<EngineStatus>;

    /// Build the change for a session whose checks did not block
    ///
    /// `Ok(None)` means the engine produced nothing to apply.
    async fn create_change(&mut self, cancel: &CancellationToken) -> EngineResult<Option<Change>>;
}

/// Factory for refactoring sessions
pub trait RefactoringEngine: Send + Sync {
    /// Start a rename of `element` to `new_name` with reference updating requested
    fn create_rename_session(
        &self,
        element: &ElementHandle,
        new_name: &str,
    ) -> EngineResult<Box<dyn RenameSession>>;
}
