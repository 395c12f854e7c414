//! Cooperative cancellation shared between a caller and a running command

use crate::errors::{RelabelError, RelabelResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cancellation flag polled by commands at defined checkpoints
///
/// Clones share the same flag, so the transport can keep one handle and pass
/// another into the command. Once cancelled, a token stays cancelled.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal cancellation to every clone of this token
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Checkpoint: fail with `RelabelError::Cancelled` if cancellation was signalled
    pub fn ensure_not_cancelled(&self, operation: &str) -> RelabelResult<()> {
        if self.is_cancelled() {
            Err(RelabelError::cancelled(operation))
        } else {
            Ok(())
        }
    }
}
