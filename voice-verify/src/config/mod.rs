use secrecy::Secret;
use serde::Deserialize;
use std::path::Path;

/// Environment variable read by earlier deployments of this app. Takes
/// precedence over `messagebird.api_key` from any other source.
pub const API_KEY_ENV: &str = "MESSAGEBIRD_API_KEY";

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub messagebird: MessageBirdSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

#[derive(Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize, Clone)]
pub struct MessageBirdSettings {
    /// Live or test access key from the MessageBird dashboard.
    pub api_key: Secret<String>,
    /// REST endpoint root, overridable so tests can point at a mock server.
    #[serde(default = "default_messagebird_base_url")]
    pub base_url: String,
}

fn default_messagebird_base_url() -> String {
    "https://rest.messagebird.com".to_string()
}

#[derive(Deserialize, Clone)]
pub struct TelemetrySettings {
    /// Fallback filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// OTLP gRPC collector (e.g., http://tempo:4317). Spans are only exported when set.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine the current directory: {}", e))
    })?;

    // Check if we're already in voice-verify directory or need to navigate to it
    let configuration_directory = if base_path.ends_with("voice-verify") {
        base_path.join("config")
    } else {
        base_path.join("voice-verify").join("config")
    };

    load_settings(
        &configuration_directory,
        app_environment(),
        std::env::var(API_KEY_ENV).ok(),
    )
}

/// `APP_<SECTION>__<KEY>` variables, e.g. `APP_SERVER__PORT`.
pub fn app_environment() -> config::Environment {
    config::Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
}

/// Layers `base.yaml` < `environment` < `api_key_override`.
pub fn load_settings(
    configuration_directory: &Path,
    environment: config::Environment,
    api_key_override: Option<String>,
) -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(true))
        .add_source(environment)
        .set_override_option("messagebird.api_key", api_key_override)?
        .build()?;

    settings.try_deserialize::<Settings>()
}
