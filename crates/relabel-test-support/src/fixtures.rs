//! Request, change and service fixtures

use lsp_types::{Position, Range, TextEdit};
use relabel_handler_api::{
    Change, ChangeSerializer, DiagnosticSink, ElementResolver, RefactoringEngine,
    RefactoringServices,
};
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Builder for the JSON argument of the rename command
pub struct RenameArgumentsBuilder {
    value: Map<String, Value>,
}

impl RenameArgumentsBuilder {
    fn new(kind: &str, params: Value) -> Self {
        let mut value = Map::new();
        value.insert("renameParams".to_string(), params);
        value.insert("renameKind".to_string(), json!(kind));
        Self { value }
    }

    /// Set a flat settings field such as `updateReferences`
    pub fn setting(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.value.insert(key.to_string(), value.into());
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.value)
    }
}

pub fn element_rename(
    uri: &str,
    line: u32,
    character: u32,
    new_name: &str,
) -> RenameArgumentsBuilder {
    RenameArgumentsBuilder::new(
        "ELEMENT",
        json!({
            "textDocument": { "uri": uri },
            "position": { "line": line, "character": character },
            "newName": new_name
        }),
    )
}

pub fn compilation_unit_rename(uri: &str, new_name: &str) -> RenameArgumentsBuilder {
    RenameArgumentsBuilder::new(
        "COMPILATION_UNIT",
        json!({
            "textDocument": { "uri": uri },
            "newName": new_name
        }),
    )
}

pub fn package_rename(uri: &str, new_name: &str) -> RenameArgumentsBuilder {
    RenameArgumentsBuilder::new(
        "PACKAGE",
        json!({
            "textDocument": { "uri": uri },
            "newName": new_name
        }),
    )
}

/// Single-line replacement
pub fn text_edit(line: u32, start: u32, end: u32, new_text: &str) -> TextEdit {
    TextEdit::new(
        Range::new(Position::new(line, start), Position::new(line, end)),
        new_text.to_string(),
    )
}

/// Change tree of renaming package `a.b` (with subpackages `a.b.x` and `a.b.y`) to `c`
pub fn package_rename_change() -> Change {
    Change::composite(
        "Rename package 'a.b' and subpackages",
        vec![
            Change::composite(
                "Update package declarations",
                vec![
                    Change::text_file(
                        "file:///src/a/b/Main.java",
                        vec![text_edit(0, 8, 11, "c")],
                    ),
                    Change::text_file(
                        "file:///src/a/b/x/X.java",
                        vec![text_edit(0, 8, 11, "c")],
                    ),
                    Change::text_file(
                        "file:///src/a/b/y/Y.java",
                        vec![text_edit(0, 8, 11, "c"), text_edit(2, 7, 10, "c")],
                    ),
                ],
            ),
            Change::composite(
                "Update imports",
                vec![Change::text_file(
                    "file:///src/app/App.java",
                    vec![text_edit(2, 7, 10, "c"), text_edit(3, 7, 10, "c")],
                )],
            ),
            Change::RenamePackage {
                uri: "pkg://a.b".to_string(),
                new_uri: "pkg://c".to_string(),
            },
            Change::RenamePackage {
                uri: "pkg://a.b.x".to_string(),
                new_uri: "pkg://c.x".to_string(),
            },
            Change::RenamePackage {
                uri: "pkg://a.b.y".to_string(),
                new_uri: "pkg://c.y".to_string(),
            },
        ],
    )
}

/// Bundle collaborators into the services handed to command handlers
pub fn services(
    resolver: impl ElementResolver + 'static,
    engine: Arc<dyn RefactoringEngine>,
    serializer: Arc<dyn ChangeSerializer>,
    diagnostics: Arc<dyn DiagnosticSink>,
) -> Arc<RefactoringServices> {
    Arc::new(RefactoringServices {
        resolver: Arc::new(resolver),
        engine,
        serializer,
        diagnostics,
    })
}
