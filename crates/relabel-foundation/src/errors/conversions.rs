//! From implementations for standard library and serde types

use super::RelabelError;

impl From<serde_json::Error> for RelabelError {
    fn from(err: serde_json::Error) -> Self {
        RelabelError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}
