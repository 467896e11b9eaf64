use crate::shared::progress_store::ProgressStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub progress_store: Arc<ProgressStore>,
}

impl AppState {
    pub fn new(progress_store: ProgressStore) -> Self {
        AppState {
            progress_store: Arc::new(progress_store),
        }
    }
}
