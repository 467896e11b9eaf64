use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Configuration {
    pub server_bind_point: String,
    pub output_directory: String,
    pub static_directory: String,
    pub log_level: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            server_bind_point: "127.0.0.1:5000".to_string(),
            output_directory: "progress_files".to_string(),
            static_directory: "static".to_string(),
            log_level: "DEBUG".to_string(),
        }
    }
}
