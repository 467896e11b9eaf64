use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

pub const REQUEST_MUST_BE_JSON: &str = "Request must be JSON";
pub const MISSING_FIELDS: &str = "Missing folder_name or progress_data";
pub const UNUSABLE_IDENTIFIER: &str = "folder_identifier contains no usable characters";
pub const SAVE_FAILED: &str = "File could not be saved.";

pub type ApiError = (StatusCode, Json<ServerError>);

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ServerError {
    pub error: String,
}

impl ServerError {
    pub fn with_message<S: Into<String>>(message: S) -> Self {
        ServerError {
            error: message.into(),
        }
    }

    pub fn into_api_error(self, status_code: StatusCode) -> ApiError {
        (status_code, Json(self))
    }
}

/// Ways a save request can fail, from a missing field to a failed write.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("{}", MISSING_FIELDS)]
    MissingField,
    #[error("identifier {0:?} has no filename-safe characters")]
    UnsafeIdentifier(String),
    #[error("failed to serialize progress: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Persistence {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl SaveError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SaveError::MissingField | SaveError::UnsafeIdentifier(_) => StatusCode::BAD_REQUEST,
            SaveError::Serialization(_) | SaveError::Persistence { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The message sent over the wire. Server-side failures stay opaque.
    pub fn public_message(&self) -> &'static str {
        match self {
            SaveError::MissingField => MISSING_FIELDS,
            SaveError::UnsafeIdentifier(_) => UNUSABLE_IDENTIFIER,
            SaveError::Serialization(_) | SaveError::Persistence { .. } => SAVE_FAILED,
        }
    }
}

impl IntoResponse for SaveError {
    fn into_response(self) -> Response {
        ServerError::with_message(self.public_message())
            .into_api_error(self.status_code())
            .into_response()
    }
}
