//! Target resolution: one lookup strategy per rename kind

use relabel_foundation::protocol::RenameTarget;
use relabel_foundation::CancellationToken;
use relabel_handler_api::{ElementHandle, ElementResolver, EngineResult};
use tracing::debug;

/// Maps a rename target to the program element it designates
pub struct TargetResolver<'a> {
    resolver: &'a dyn ElementResolver,
}

impl<'a> TargetResolver<'a> {
    pub fn new(resolver: &'a dyn ElementResolver) -> Self {
        Self { resolver }
    }

    /// Resolve `target`, or `None` when nothing renamable is there
    pub async fn resolve(
        &self,
        target: &RenameTarget,
        cancel: &CancellationToken,
    ) -> EngineResult<Option<ElementHandle>> {
        debug!(kind = ?target.kind(), uri = %target.uri(), "Resolving rename target");

        match target {
            RenameTarget::Element { uri, position } => {
                self.resolver.element_at(uri, *position, cancel).await
            }
            RenameTarget::CompilationUnit { uri } => self.resolver.compilation_unit(uri).await,
            RenameTarget::Package { uri } => self.resolver.package(uri).await,
        }
    }
}
