//! Test doubles and fixtures for relabel crates
//!
//! - `mocks`: `mockall` mocks of every collaborator trait
//! - `session`: a rename session that records how it was configured
//! - `engine`: an engine handing out one prepared session
//! - `diagnostics`: a sink that keeps logged failures for assertions
//! - `fixtures`: request and change builders

pub mod diagnostics;
pub mod engine;
pub mod fixtures;
pub mod mocks;
pub mod session;

pub use diagnostics::CapturingDiagnosticSink;
pub use engine::StubEngine;
pub use session::{RecordingSession, SessionCall, SessionLog};
