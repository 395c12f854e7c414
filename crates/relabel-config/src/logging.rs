//! Centralized logging initialization with environment variable support

use crate::{AppConfig, LogFormat};
use relabel_foundation::{RelabelError, RelabelResult};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber
///
/// Environment variables (in priority order):
/// - `RUST_LOG`: Standard Rust log filter (takes precedence over all)
/// - `LOG_FORMAT`: Override format (json, pretty)
///
/// Fails if a global subscriber is already installed.
///
/// # Examples
///
/// ```bash
/// # Module-specific filtering
/// RUST_LOG=relabel_handlers=debug ./host
///
/// # Production with JSON logs
/// LOG_FORMAT=json ./host
/// ```
pub fn initialize(config: &AppConfig) -> RelabelResult<()> {
    let log_level = config
        .logging
        .level
        .parse()
        .unwrap_or(tracing::Level::INFO);

    // RUST_LOG takes precedence over the configured level
    let env_filter = EnvFilter::from_default_env().add_directive(log_level.into());

    let format = std::env::var("LOG_FORMAT")
        .ok()
        .and_then(|f| match f.to_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "pretty" | "human" => Some(LogFormat::Pretty),
            _ => None,
        })
        .unwrap_or_else(|| config.logging.format.clone());

    // Always write to stderr so stdout stays free for the protocol stream
    let result = match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| RelabelError::config(format!("Failed to initialize logging: {}", e)))
}

/// Create a span wrapping one command invocation
///
/// All logs emitted inside the span carry the command id and invocation id.
///
/// # Example
///
/// ```rust
/// use relabel_config::logging::command_span;
///
/// let span = command_span("relabel.refactoring.rename", "3f1c");
/// let _enter = span.enter();
/// tracing::info!("Processing command");
/// ```
pub fn command_span(command: &str, invocation_id: &str) -> tracing::Span {
    tracing::info_span!(
        "command",
        command = %command,
        invocation_id = %invocation_id
    )
}
