mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{ApiSettings, LoggingSettings, Settings, DEFAULT_BASE_URL, TOKEN_ENV_VAR};
