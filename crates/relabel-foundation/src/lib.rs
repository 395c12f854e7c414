//! Foundation Layer - Core types and protocol definitions
//!
//! This crate provides the building blocks shared by every relabel crate:
//! - The unified error type (`RelabelError`)
//! - Rename command DTOs: request arguments, settings and results
//! - Cooperative cancellation (`CancellationToken`)
//!
//! It has no dependencies on other relabel crates.

pub mod core;
pub mod errors;
pub mod protocol;

// Re-export commonly used types for convenience
pub use crate::core::cancellation::CancellationToken;
pub use errors::{RelabelError, RelabelResult};
