//! Conversion of engine change trees into workspace edits

use relabel_foundation::protocol::{ResourceChange, WorkspaceEdit};
use relabel_handler_api::{Change, ChangeSerializer, EngineResult};

/// Flattens a change tree depth-first
///
/// Text edits of a file keep the order in which the tree lists them, even when
/// they are spread over several composite groups. File and package moves are
/// emitted as resource changes in tree order.
pub struct WorkspaceEditSerializer;

impl WorkspaceEditSerializer {
    pub fn new() -> Self {
        Self
    }

    fn collect(change: &Change, edit: &mut WorkspaceEdit) {
        match change {
            Change::Composite { children, .. } => {
                for child in children {
                    Self::collect(child, edit);
                }
            }
            Change::TextFile { uri, edits } => {
                if !edits.is_empty() {
                    edit.push_edits(uri.clone(), edits.iter().cloned());
                }
            }
            Change::RenameCompilationUnit { uri, new_uri } => {
                edit.resource_changes.push(ResourceChange {
                    current_uri: uri.clone(),
                    new_uri: new_uri.clone(),
                    pack: false,
                });
            }
            Change::RenamePackage { uri, new_uri } => {
                edit.resource_changes.push(ResourceChange {
                    current_uri: uri.clone(),
                    new_uri: new_uri.clone(),
                    pack: true,
                });
            }
        }
    }
}

impl ChangeSerializer for WorkspaceEditSerializer {
    fn serialize(&self, change: &Change) -> EngineResult<WorkspaceEdit> {
        let mut edit = WorkspaceEdit::default();
        Self::collect(change, &mut edit);
        Ok(edit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use relabel_test_support::fixtures::{package_rename_change, text_edit};

    #[test]
    fn test_edits_keep_engine_order_across_groups() {
        let change = Change::composite(
            "Rename field",
            vec![
                Change::composite(
                    "Declaration",
                    vec![Change::text_file(
                        "file:///A.java",
                        vec![text_edit(4, 8, 11, "total")],
                    )],
                ),
                Change::composite(
                    "References",
                    vec![
                        Change::text_file("file:///B.java", vec![text_edit(9, 2, 5, "total")]),
                        Change::text_file(
                            "file:///A.java",
                            vec![text_edit(12, 4, 7, "total"), text_edit(1, 0, 3, "total")],
                        ),
                    ],
                ),
            ],
        );

        let edit = WorkspaceEditSerializer::new().serialize(&change).unwrap();

        assert_eq!(
            edit.changes["file:///A.java"],
            vec![
                text_edit(4, 8, 11, "total"),
                text_edit(12, 4, 7, "total"),
                text_edit(1, 0, 3, "total"),
            ]
        );
        assert_eq!(edit.changes["file:///B.java"].len(), 1);
        assert!(edit.resource_changes.is_empty());
    }

    #[test]
    fn test_resource_moves() {
        let edit = WorkspaceEditSerializer::new()
            .serialize(&package_rename_change())
            .unwrap();

        assert_eq!(edit.changes.len(), 4);
        assert_eq!(edit.edit_count(), 6);
        assert_eq!(
            edit.resource_changes
                .iter()
                .map(|c| (c.current_uri.as_str(), c.new_uri.as_str(), c.pack))
                .collect::<Vec<_>>(),
            vec![
                ("pkg://a.b", "pkg://c", true),
                ("pkg://a.b.x", "pkg://c.x", true),
                ("pkg://a.b.y", "pkg://c.y", true),
            ]
        );
    }

    #[test]
    fn test_compilation_unit_move_and_empty_files() {
        let change = Change::composite(
            "Rename compilation unit",
            vec![
                Change::text_file("file:///Empty.java", vec![]),
                Change::text_file("file:///A.java", vec![text_edit(0, 13, 14, "B")]),
                Change::RenameCompilationUnit {
                    uri: "file:///A.java".to_string(),
                    new_uri: "file:///B.java".to_string(),
                },
            ],
        );

        let edit = WorkspaceEditSerializer::new().serialize(&change).unwrap();

        assert!(!edit.changes.contains_key("file:///Empty.java"));
        assert_eq!(
            edit.resource_changes,
            vec![ResourceChange {
                current_uri: "file:///A.java".to_string(),
                new_uri: "file:///B.java".to_string(),
                pack: false,
            }]
        );
    }
}
