pub mod configuration;
pub mod constants;
pub mod filename;
pub mod progress_store;
