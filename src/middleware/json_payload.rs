use crate::model::errors::{ApiError, ServerError, REQUEST_MUST_BE_JSON};
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::{async_trait, Json};
use serde_json::Value;

/// Any JSON request body. Missing `Content-Type` or a malformed body is
/// rejected with a JSON error instead of axum's plain-text rejection.
pub struct JsonPayload(pub Value);

#[async_trait]
impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(request, state).await {
            Ok(Json(value)) => Ok(JsonPayload(value)),
            Err(rejection) => {
                tracing::debug!("Rejected save request body: {}", rejection.body_text());
                Err(ServerError::with_message(REQUEST_MUST_BE_JSON)
                    .into_api_error(StatusCode::BAD_REQUEST))
            }
        }
    }
}
