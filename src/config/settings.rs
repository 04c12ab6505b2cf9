use serde::Deserialize;

use super::Environment;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";
pub const TOKEN_ENV_VAR: &str = "LEDGERFLOW_API_TOKEN";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(skip, default = "default_environment")]
    pub environment: Environment,
    pub api: ApiSettings,
    pub logging: LoggingSettings,
}

fn default_environment() -> Environment {
    Environment::Local
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    /// Backend origin plus API prefix. Falls back to the local development
    /// backend when unset.
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Env-var driven configuration; every field has a working default.
    pub fn from_env() -> Self {
        Self {
            environment: std::env::var("LEDGERFLOW_ENV")
                .ok()
                .and_then(|v| Environment::try_from(v).ok())
                .unwrap_or(Environment::Local),
            api: ApiSettings {
                base_url: std::env::var("LEDGERFLOW_API_BASE_URL")
                    .ok()
                    .filter(|v| !v.is_empty())
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            },
            logging: LoggingSettings {
                level: std::env::var("LEDGERFLOW_LOG_LEVEL")
                    .unwrap_or_else(|_| "info".to_string()),
                enable_json: std::env::var("LEDGERFLOW_LOG_JSON")
                    .map(|v| v.to_lowercase() == "true" || v == "1")
                    .unwrap_or(false),
            },
        }
    }
}
