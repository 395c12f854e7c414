//! Result assembly from engine outputs

use relabel_foundation::protocol::{
    RefactoringResult, RefactoringStatus, RefactoringStatusEntry, WorkspaceEdit,
};
use relabel_handler_api::{Change, ChangeSerializer, EngineResult, EngineStatus};

/// Client view of an engine status, keeping entry order
pub fn convert_status(status: &EngineStatus) -> RefactoringStatus {
    RefactoringStatus {
        severity: status.severity(),
        messages: status
            .entries()
            .iter()
            .map(|entry| RefactoringStatusEntry {
                severity: entry.severity,
                message: entry.message.clone(),
            })
            .collect(),
    }
}

/// Combine a precondition status and an optional change into a result
///
/// A missing or empty change yields an empty workspace edit. Pure apart from
/// the serializer, so assembling the same inputs twice gives equal results.
pub fn assemble(
    status: &EngineStatus,
    change: Option<&Change>,
    serializer: &dyn ChangeSerializer,
) -> EngineResult<RefactoringResult> {
    let workspace_edit = match change {
        Some(change) if !change.is_empty() => serializer.serialize(change)?,
        _ => WorkspaceEdit::default(),
    };

    Ok(RefactoringResult {
        refactoring_status: Some(convert_status(status)),
        workspace_edit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WorkspaceEditSerializer;
    use pretty_assertions::assert_eq;
    use relabel_foundation::protocol::RefactoringSeverity;
    use relabel_handler_api::EngineError;
    use relabel_test_support::fixtures::{package_rename_change, text_edit};
    use relabel_test_support::mocks::MockChangeSerializer;

    #[test]
    fn test_convert_status_keeps_order() {
        let mut status = EngineStatus::warning("Shadowed field");
        status.add_entry(RefactoringSeverity::Info, "Updated 3 references");

        let converted = convert_status(&status);

        assert_eq!(converted.severity, RefactoringSeverity::Warning);
        assert_eq!(
            converted.messages,
            vec![
                RefactoringStatusEntry {
                    severity: RefactoringSeverity::Warning,
                    message: "Shadowed field".to_string(),
                },
                RefactoringStatusEntry {
                    severity: RefactoringSeverity::Info,
                    message: "Updated 3 references".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_assemble_is_idempotent() {
        let status = EngineStatus::info("Package has subpackages");
        let change = package_rename_change();
        let serializer = WorkspaceEditSerializer::new();

        let first = assemble(&status, Some(&change), &serializer).unwrap();
        let second = assemble(&status, Some(&change), &serializer).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.severity(), Some(RefactoringSeverity::Info));
        assert_eq!(first.workspace_edit.edit_count(), 6);
    }

    #[test]
    fn test_missing_or_empty_change_skips_serializer() {
        let mut serializer = MockChangeSerializer::new();
        serializer.expect_serialize().times(0);
        let empty = Change::composite("Nothing", vec![Change::text_file("file:///A.java", vec![])]);

        let without = assemble(&EngineStatus::ok(), None, &serializer).unwrap();
        let with_empty = assemble(&EngineStatus::ok(), Some(&empty), &serializer).unwrap();

        assert!(without.workspace_edit.is_empty());
        assert!(with_empty.workspace_edit.is_empty());
        assert_eq!(without.severity(), Some(RefactoringSeverity::Ok));
    }

    #[test]
    fn test_serializer_failure_propagates() {
        let mut serializer = MockChangeSerializer::new();
        serializer
            .expect_serialize()
            .times(1)
            .returning(|_| Err(EngineError::core("unsupported change kind")));
        let change = Change::text_file("file:///A.java", vec![text_edit(0, 0, 1, "B")]);

        let result = assemble(&EngineStatus::ok(), Some(&change), &serializer);

        assert!(matches!(result, Err(EngineError::Core { .. })));
    }
}
