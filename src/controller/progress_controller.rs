use crate::middleware::JsonPayload;
use crate::model::app_state::AppState;
use crate::model::errors::SaveError;
use crate::model::progress::{SaveProgressRequest, SaveProgressResponse};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

pub async fn save_json(State(state): State<AppState>, JsonPayload(body): JsonPayload) -> Response {
    let SaveProgressRequest {
        folder_identifier,
        progress,
    } = match SaveProgressRequest::from_body(body) {
        Ok(request) => request,
        Err(e) => return e.into_response(),
    };

    match state
        .progress_store
        .save(&folder_identifier, &progress)
        .await
    {
        Ok(saved_file) => {
            tracing::info!("Progress saved to: {}", saved_file.path.display());
            (
                StatusCode::OK,
                Json(SaveProgressResponse::for_file(&saved_file.file_name)),
            )
                .into_response()
        }
        Err(e) => {
            match &e {
                SaveError::UnsafeIdentifier(_) | SaveError::MissingField => {
                    tracing::warn!("Rejected save request: {}", e)
                }
                _ => tracing::error!("Failed to save progress file: {}", e),
            }
            e.into_response()
        }
    }
}
