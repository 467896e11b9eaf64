use crate::model::configuration::Configuration;
use crate::shared::constants::CONFIG_DIRECTORY;
use once_cell::sync::Lazy;

pub static CONFIGURATION: Lazy<Configuration> =
    Lazy::new(|| initialize().expect("Failed to initialize configuration."));

const CONFIGURATION_FILE_NAME: &str = "/config.toml";

fn initialize() -> anyhow::Result<Configuration> {
    if !std::path::Path::new(CONFIG_DIRECTORY).exists() {
        std::fs::create_dir(CONFIG_DIRECTORY)?;
    }

    let configuration_path = String::from(CONFIG_DIRECTORY) + CONFIGURATION_FILE_NAME;
    if !std::path::Path::new(&configuration_path).exists() {
        let configuration = from_environment();
        let serialized_toml = toml::to_string_pretty(&configuration)?;
        std::fs::write(&configuration_path, serialized_toml)?;
        Ok(configuration)
    } else {
        let toml = std::fs::read_to_string(&configuration_path)?;
        let deserialized_toml = toml::from_str::<Configuration>(&toml)?;
        Ok(deserialized_toml)
    }
}

// Read from environment variables, keeping defaults for anything unset.
fn from_environment() -> Configuration {
    let defaults = Configuration::default();
    Configuration {
        server_bind_point: std::env::var("SERVER_BIND_POINT").unwrap_or(defaults.server_bind_point),
        output_directory: std::env::var("OUTPUT_DIRECTORY").unwrap_or(defaults.output_directory),
        static_directory: std::env::var("STATIC_DIRECTORY").unwrap_or(defaults.static_directory),
        log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
    }
}

pub fn log_level(configuration: &Configuration) -> tracing::Level {
    configuration
        .log_level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::DEBUG)
}
