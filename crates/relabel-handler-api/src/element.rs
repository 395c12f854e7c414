//! Program element handles and their resolution

use crate::engine::EngineResult;
use async_trait::async_trait;
use lsp_types::Position;
use relabel_foundation::CancellationToken;

/// Coarse classification of a resolved element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Symbol,
    CompilationUnit,
    Package,
}

/// Opaque reference to a resolved symbol, file or package
///
/// Only the engine that produced the handle interprets `id`. Handles live for
/// one command invocation and are never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementHandle {
    pub id: String,
    pub kind: ElementKind,
    pub uri: String,
}

impl ElementHandle {
    pub fn new(id: impl Into<String>, kind: ElementKind, uri: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            uri: uri.into(),
        }
    }

    pub fn symbol(id: impl Into<String>, uri: impl Into<String>) -> Self {
        Self::new(id, ElementKind::Symbol, uri)
    }

    pub fn compilation_unit(id: impl Into<String>, uri: impl Into<String>) -> Self {
        Self::new(id, ElementKind::CompilationUnit, uri)
    }

    pub fn package(id: impl Into<String>, uri: impl Into<String>) -> Self {
        Self::new(id, ElementKind::Package, uri)
    }
}

/// Symbol resolution backed by the code index
///
/// Every method returns `Ok(None)` when nothing can be found at the given
/// location; errors are reserved for index failures.
#[async_trait]
pub trait ElementResolver: Send + Sync {
    /// Element declared or referenced at `position` in the document at `uri`
    async fn element_at(
        &self,
        uri: &str,
        position: Position,
        cancel: &CancellationToken,
    ) -> EngineResult<Option<ElementHandle>>;

    /// Source file addressed by `uri`
    async fn compilation_unit(&self, uri: &str) -> EngineResult<Option<ElementHandle>>;

    /// Package whose folder is addressed by `uri`
    async fn package(&self, uri: &str) -> EngineResult<Option<ElementHandle>>;
}
