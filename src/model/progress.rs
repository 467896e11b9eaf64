use crate::model::errors::SaveError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct SaveProgressRequest {
    pub folder_identifier: String,
    pub progress: Value,
}

impl SaveProgressRequest {
    /// Pulls the two required fields out of an arbitrary JSON body.
    ///
    /// A field counts as missing when it is absent, of the wrong type for the
    /// identifier, or falsy (see [`is_falsy`]).
    pub fn from_body(body: Value) -> Result<Self, SaveError> {
        let Value::Object(mut map) = body else {
            return Err(SaveError::MissingField);
        };

        let folder_identifier = match map.remove("folder_identifier") {
            Some(Value::String(s)) if !s.is_empty() => s,
            _ => return Err(SaveError::MissingField),
        };

        match map.remove("progress") {
            Some(progress) if !is_falsy(&progress) => Ok(SaveProgressRequest {
                folder_identifier,
                progress,
            }),
            _ => Err(SaveError::MissingField),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct SaveProgressResponse {
    pub message: String,
}

impl SaveProgressResponse {
    pub fn for_file(file_name: &str) -> Self {
        SaveProgressResponse {
            message: format!("Progress was saved on the server as '{}'.", file_name),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SavedFile {
    pub file_name: String,
    pub path: PathBuf,
}

pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map(|f| f == 0.0).unwrap_or(false),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_complete_request() {
        let request = SaveProgressRequest::from_body(json!({
            "folder_identifier": "session-42",
            "progress": { "level": 3 }
        }))
        .unwrap();
        assert_eq!(request.folder_identifier, "session-42");
        assert_eq!(request.progress, json!({ "level": 3 }));
    }

    #[test]
    fn rejects_missing_or_falsy_fields() {
        let bodies = [
            json!({ "progress": { "level": 3 } }),
            json!({ "folder_identifier": "", "progress": { "level": 3 } }),
            json!({ "folder_identifier": 42, "progress": { "level": 3 } }),
            json!({ "folder_identifier": "a" }),
            json!({ "folder_identifier": "a", "progress": null }),
            json!({ "folder_identifier": "a", "progress": {} }),
            json!({ "folder_identifier": "a", "progress": [] }),
            json!({ "folder_identifier": "a", "progress": 0 }),
            json!({ "folder_identifier": "a", "progress": false }),
            json!(["folder_identifier", "progress"]),
        ];

        for body in bodies {
            assert!(
                matches!(
                    SaveProgressRequest::from_body(body.clone()),
                    Err(SaveError::MissingField)
                ),
                "{} should be rejected",
                body
            );
        }
    }

    #[test]
    fn truthy_scalars_are_valid_progress() {
        assert!(!is_falsy(&json!(true)));
        assert!(!is_falsy(&json!(0.5)));
        assert!(!is_falsy(&json!("x")));
        assert!(is_falsy(&json!(0.0)));
    }
}
