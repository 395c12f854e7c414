//! Rename workspace command
//!
//! Resolves the rename target named by the client, configures a refactoring
//! session with the requested optional behaviors, checks preconditions and
//! returns the status together with the resulting workspace edit.
//!
//! Failures inside the engine are not returned to the client. They are
//! reported to the diagnostic sink and the client receives whatever result was
//! assembled so far. Contract violations and cancellation are returned as
//! errors.

pub mod assembler;
pub mod settings;
pub mod target;

pub use assembler::{assemble, convert_status};
pub use settings::{CapabilityDescriptor, SettingsApplier, CAPABILITIES};
pub use target::TargetResolver;

use async_trait::async_trait;
use relabel_config::logging::command_span;
use relabel_config::RenameConfig;
use relabel_foundation::protocol::{RefactoringResult, RenameArguments};
use relabel_foundation::{RelabelError, RelabelResult};
use relabel_handler_api::{
    CommandCall, CommandContext, CommandHandler, ElementHandle, EngineError, EngineResult,
};
use serde_json::Value;
use tracing::{debug, info, Instrument};
use uuid::Uuid;

/// Reject an argument list the command cannot work with
pub fn validate_arguments(arguments: &[Value]) -> RelabelResult<()> {
    if arguments.is_empty() {
        return Err(RelabelError::invalid_parameter(
            "arguments",
            "Rename arguments are expected",
        ));
    }
    Ok(())
}

pub struct RenameCommand {
    command_names: Vec<String>,
    applier: SettingsApplier,
}

impl RenameCommand {
    pub fn new(config: &RenameConfig) -> Self {
        Self {
            command_names: vec![config.command_id.clone()],
            applier: SettingsApplier::new(config.default_match_strategy),
        }
    }

    pub fn command_id(&self) -> &str {
        &self.command_names[0]
    }

    /// Run one rename
    ///
    /// Returns the empty result when the kind is unrecognized or nothing
    /// renamable is found at the target.
    pub async fn execute(
        &self,
        context: &CommandContext,
        arguments: &[Value],
    ) -> RelabelResult<RefactoringResult> {
        let span = command_span(self.command_id(), &Uuid::new_v4().to_string());

        async {
            validate_arguments(arguments)?;
            context.cancellation.ensure_not_cancelled(self.command_id())?;

            let args = RenameArguments::from_value(&arguments[0])?;
            self.run(context, &args).await
        }
        .instrument(span)
        .await
    }

    async fn run(
        &self,
        context: &CommandContext,
        args: &RenameArguments,
    ) -> RelabelResult<RefactoringResult> {
        let cancel = &context.cancellation;

        let Some(target) = args.target()? else {
            debug!(uri = %args.uri(), "Unrecognized rename kind, nothing to do");
            return Ok(RefactoringResult::empty());
        };

        let resolved = TargetResolver::new(context.services.resolver.as_ref())
            .resolve(&target, cancel)
            .await;
        let element = match resolved {
            Ok(Some(element)) => element,
            Ok(None) => {
                debug!(kind = ?target.kind(), uri = %target.uri(), "No element found at rename target");
                return Ok(RefactoringResult::empty());
            }
            Err(error) => return self.recover(context, args, error, RefactoringResult::empty()),
        };

        cancel.ensure_not_cancelled(self.command_id())?;

        let mut result = RefactoringResult::empty();
        if let Err(error) = self.refactor(context, args, &element, &mut result).await {
            return self.recover(context, args, error, result);
        }

        info!(
            uri = %args.uri(),
            new_name = %args.new_name(),
            severity = ?result.severity(),
            edits = result.workspace_edit.edit_count(),
            "Rename completed"
        );
        Ok(result)
    }

    /// Drive the engine session, recording progress into `result`
    async fn refactor(
        &self,
        context: &CommandContext,
        args: &RenameArguments,
        element: &ElementHandle,
        result: &mut RefactoringResult,
    ) -> EngineResult<()> {
        let services = &context.services;
        let cancel = &context.cancellation;

        let mut session = services
            .engine
            .create_rename_session(element, args.new_name())?;
        self.applier.apply(session.as_mut(), &args.settings);

        let status = session.check_all_conditions(cancel).await?;
        result.refactoring_status = Some(convert_status(&status));

        if status.is_blocking() {
            debug!(severity = ?status.severity(), "Preconditions block the rename");
            return Ok(());
        }

        let change = session.create_change(cancel).await?;
        *result = assemble(&status, change.as_ref(), services.serializer.as_ref())?;
        Ok(())
    }

    /// Report an engine failure and fall back to the partial result
    fn recover(
        &self,
        context: &CommandContext,
        args: &RenameArguments,
        error: EngineError,
        partial: RefactoringResult,
    ) -> RelabelResult<RefactoringResult> {
        if matches!(error, EngineError::Cancelled) {
            return Err(error.into());
        }

        context
            .services
            .diagnostics
            .log_exception(&format!("Rename failed for {}", args.uri()), &error);
        Ok(partial)
    }
}

#[async_trait]
impl CommandHandler for RenameCommand {
    fn command_names(&self) -> &[String] {
        &self.command_names
    }

    async fn handle_command(
        &self,
        context: &CommandContext,
        call: &CommandCall,
    ) -> RelabelResult<Value> {
        let result = self.execute(context, &call.arguments).await?;
        Ok(serde_json::to_value(&result)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_arguments() {
        let error = validate_arguments(&[]).unwrap_err();
        assert!(matches!(error, RelabelError::InvalidRequest { .. }));

        assert!(validate_arguments(&[serde_json::json!({})]).is_ok());
    }

    #[test]
    fn test_command_id_comes_from_config() {
        let config = RenameConfig {
            command_id: "custom.rename".to_string(),
            ..RenameConfig::default()
        };

        let command = RenameCommand::new(&config);

        assert_eq!(command.command_id(), "custom.rename");
        assert_eq!(command.command_names(), ["custom.rename".to_string()]);
    }
}
