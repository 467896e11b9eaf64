pub mod app_state;
pub mod configuration;
pub mod errors;
pub mod progress;
