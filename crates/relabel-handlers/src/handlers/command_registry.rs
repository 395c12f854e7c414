//! Routing of workspace command calls to their handlers

use relabel_foundation::{RelabelError, RelabelResult};
use relabel_handler_api::{CommandCall, CommandContext, CommandHandler};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Command id to handler routes, kept sorted by id
#[derive(Default)]
pub struct CommandRegistry {
    routes: BTreeMap<String, Arc<dyn CommandHandler>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route every id in `handler.command_names()` to `handler`; the last registration wins
    pub fn register(&mut self, handler: impl CommandHandler + 'static) {
        let handler: Arc<dyn CommandHandler> = Arc::new(handler);
        for command in handler.command_names() {
            if self
                .routes
                .insert(command.clone(), Arc::clone(&handler))
                .is_some()
            {
                warn!(command = %command, "Command registered twice, keeping the latest handler");
            }
        }
    }

    pub async fn dispatch(&self, call: &CommandCall, context: &CommandContext) -> RelabelResult<Value> {
        let handler = self.routes.get(&call.command).ok_or_else(|| {
            RelabelError::not_supported(format!("Unknown command: '{}'", call.command))
        })?;

        debug!(command = %call.command, arguments = call.arguments.len(), "Dispatching command");
        handler.handle_command(context, call).await
    }

    pub fn has_command(&self, command: &str) -> bool {
        self.routes.contains_key(command)
    }

    /// Registered command ids in sorted order
    pub fn list_commands(&self) -> Vec<String> {
        self.routes.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WorkspaceEditSerializer;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use relabel_foundation::CancellationToken;
    use relabel_handler_api::EngineError;
    use relabel_test_support::fixtures::services;
    use relabel_test_support::{mocks, CapturingDiagnosticSink, StubEngine};
    use serde_json::json;

    /// Answers every call with its own label
    struct EchoHandler {
        label: &'static str,
        commands: Vec<String>,
    }

    impl EchoHandler {
        fn new(label: &'static str, commands: &[&str]) -> Self {
            Self {
                label,
                commands: commands.iter().map(|c| c.to_string()).collect(),
            }
        }
    }

    #[async_trait]
    impl CommandHandler for EchoHandler {
        fn command_names(&self) -> &[String] {
            &self.commands
        }

        async fn handle_command(
            &self,
            _context: &CommandContext,
            call: &CommandCall,
        ) -> RelabelResult<Value> {
            Ok(json!({ "handler": self.label, "arguments": call.arguments.len() }))
        }
    }

    fn context() -> CommandContext {
        CommandContext::new(
            services(
                mocks::mock_resolver(),
                Arc::new(StubEngine::failing(EngineError::core("unused"))),
                Arc::new(WorkspaceEditSerializer::new()),
                Arc::new(CapturingDiagnosticSink::new()),
            ),
            CancellationToken::new(),
        )
    }

    #[test]
    fn test_routes_every_command_name() {
        let mut registry = CommandRegistry::new();
        registry.register(EchoHandler::new("rename", &["rename.b", "rename.a"]));
        registry.register(EchoHandler::new("organize", &["imports.organize"]));

        assert!(registry.has_command("rename.a"));
        assert!(!registry.has_command("rename.c"));
        assert_eq!(
            registry.list_commands(),
            vec!["imports.organize", "rename.a", "rename.b"]
        );
    }

    #[tokio::test]
    async fn test_dispatch_reaches_latest_registration() {
        let mut registry = CommandRegistry::new();
        registry.register(EchoHandler::new("old", &["rename"]));
        registry.register(EchoHandler::new("new", &["rename"]));

        let call = CommandCall::new("rename", vec![json!({}), json!(1)]);
        let value = registry.dispatch(&call, &context()).await.unwrap();

        assert_eq!(value, json!({ "handler": "new", "arguments": 2 }));
        assert_eq!(registry.list_commands(), vec!["rename"]);
    }

    #[tokio::test]
    async fn test_dispatch_unknown_command() {
        let registry = CommandRegistry::new();

        let error = registry
            .dispatch(&CommandCall::new("missing", vec![]), &context())
            .await
            .unwrap_err();

        assert!(matches!(error, RelabelError::NotSupported { .. }));
    }
}
