//! Mock implementations for testing

use async_trait::async_trait;
use lsp_types::Position;
use mockall::mock;
use relabel_foundation::protocol::WorkspaceEdit;
use relabel_foundation::CancellationToken;
use relabel_handler_api::{
    Change, ChangeSerializer, DiagnosticSink, ElementHandle, ElementResolver, EngineError,
    EngineResult, RefactoringEngine, RenameSession,
};

mock! {
    pub ElementResolver {}

    #[async_trait]
    impl ElementResolver for ElementResolver {
        async fn element_at(
            &self,
            uri: &str,
            position: Position,
            cancel: &CancellationToken,
        ) -> EngineResult<Option<ElementHandle>>;
        async fn compilation_unit(&self, uri: &str) -> EngineResult<Option<ElementHandle>>;
        async fn package(&self, uri: &str) -> EngineResult<Option<ElementHandle>>;
    }
}

mock! {
    pub RefactoringEngine {}

    impl RefactoringEngine for RefactoringEngine {
        fn create_rename_session(
            &self,
            element: &ElementHandle,
            new_name: &str,
        ) -> EngineResult<Box<dyn RenameSession>>;
    }
}

mock! {
    pub ChangeSerializer {}

    impl ChangeSerializer for ChangeSerializer {
        fn serialize(&self, change: &Change) -> EngineResult<WorkspaceEdit>;
    }
}

mock! {
    pub DiagnosticSink {}

    impl DiagnosticSink for DiagnosticSink {
        fn log_exception(&self, message: &str, error: &EngineError);
    }
}

/// Create a mock resolver for testing
pub fn mock_resolver() -> MockElementResolver {
    MockElementResolver::new()
}

/// Create a mock engine for testing
pub fn mock_engine() -> MockRefactoringEngine {
    MockRefactoringEngine::new()
}
