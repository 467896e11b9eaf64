use crate::model::app_state::AppState;
use crate::shared::constants::STATIC_ROUTE;
use axum::routing::{get, post};
use axum::Router;
use std::path::Path;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub use index_controller::*;
pub use progress_controller::*;

mod index_controller;
mod progress_controller;

pub fn build_router<P: AsRef<Path>>(state: AppState, static_directory: P) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/save_json", post(save_json))
        .nest_service(STATIC_ROUTE, ServeDir::new(static_directory.as_ref()))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
