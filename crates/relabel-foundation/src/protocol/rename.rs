//! Rename request arguments and settings

use crate::errors::{RelabelError, RelabelResult};
use lsp_types::Position;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// What the client asked to rename
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RenameKind {
    /// Symbol at a source position
    #[serde(alias = "JAVA_ELEMENT")]
    Element,
    /// A whole source file
    CompilationUnit,
    /// A package, addressed by its folder URI
    Package,
    /// Anything the server does not recognize; resolves to nothing
    #[default]
    #[serde(other)]
    Unknown,
}

/// Strategy used when renaming declarations similar to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStrategy {
    #[default]
    Exact,
    Embedded,
    Suffix,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentIdentifier {
    pub uri: String,
}

/// LSP-style rename parameters; the position is only meaningful for element renames
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameParams {
    pub text_document: DocumentIdentifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    pub new_name: String,
}

/// Read a toggle that clients may send as `null`
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}

/// Optional update behaviors requested by the client
///
/// Every toggle is independent and a `null` toggle reads as off. Values that
/// the resolved target cannot honor are dropped without notice, and so are
/// companions of a disabled toggle (`file_patterns` without
/// `update_qualified_names`, for instance).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenameSettings {
    #[serde(deserialize_with = "null_as_false")]
    pub update_references: bool,
    #[serde(deserialize_with = "null_as_false")]
    pub update_qualified_names: bool,
    /// Comma separated file name patterns, used with `update_qualified_names`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_patterns: Option<String>,
    #[serde(deserialize_with = "null_as_false")]
    pub update_similar_declarations: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_strategy: Option<MatchStrategy>,
    #[serde(deserialize_with = "null_as_false")]
    pub update_textual_matches: bool,
    /// Package renames only
    #[serde(deserialize_with = "null_as_false")]
    pub update_subpackages: bool,
    #[serde(deserialize_with = "null_as_false")]
    pub delegate_updating: bool,
    #[serde(deserialize_with = "null_as_false")]
    pub deprecate_delegates: bool,
}

impl RenameSettings {
    /// Fill in `match_strategy` when similar declarations are requested without one
    pub fn with_default_match_strategy(mut self, strategy: MatchStrategy) -> Self {
        if self.update_similar_declarations && self.match_strategy.is_none() {
            self.match_strategy = Some(strategy);
        }
        self
    }
}

/// First element of the rename command's argument list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameArguments {
    pub rename_params: RenameParams,
    #[serde(default)]
    pub rename_kind: RenameKind,
    #[serde(flatten)]
    pub settings: RenameSettings,
}

impl RenameArguments {
    /// Deserialize the command argument; a malformed argument is a contract violation
    pub fn from_value(value: &Value) -> RelabelResult<Self> {
        Self::deserialize(value).map_err(|e| {
            RelabelError::invalid_parameter(
                "arguments[0]",
                format!("Invalid rename arguments: {}", e),
            )
        })
    }

    pub fn uri(&self) -> &str {
        &self.rename_params.text_document.uri
    }

    pub fn new_name(&self) -> &str {
        &self.rename_params.new_name
    }

    /// Build the typed rename target
    ///
    /// Returns `Ok(None)` for an unrecognized kind. An element rename without
    /// a position breaks the request contract.
    pub fn target(&self) -> RelabelResult<Option<RenameTarget>> {
        let uri = self.uri().to_string();
        let target = match self.rename_kind {
            RenameKind::Element => {
                let position = self.rename_params.position.ok_or_else(|| {
                    RelabelError::invalid_parameter(
                        "renameParams.position",
                        "Element rename requires a position",
                    )
                })?;
                Some(RenameTarget::Element { uri, position })
            }
            RenameKind::CompilationUnit => Some(RenameTarget::CompilationUnit { uri }),
            RenameKind::Package => Some(RenameTarget::Package { uri }),
            RenameKind::Unknown => None,
        };
        Ok(target)
    }
}

/// A rename target carrying exactly what its resolution strategy needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameTarget {
    Element { uri: String, position: Position },
    CompilationUnit { uri: String },
    Package { uri: String },
}

impl RenameTarget {
    pub fn uri(&self) -> &str {
        match self {
            RenameTarget::Element { uri, .. }
            | RenameTarget::CompilationUnit { uri }
            | RenameTarget::Package { uri } => uri,
        }
    }

    pub fn kind(&self) -> RenameKind {
        match self {
            RenameTarget::Element { .. } => RenameKind::Element,
            RenameTarget::CompilationUnit { .. } => RenameKind::CompilationUnit,
            RenameTarget::Package { .. } => RenameKind::Package,
        }
    }
}
