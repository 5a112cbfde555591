use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::ConverterOptions;

const CONFIG_BASENAME: &str = "icsfix";
const ENV_PREFIX: &str = "ICSFIX";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub calendar: CalendarConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound for a whole upload request body.
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            port: 8080,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG` when that is set.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub product_id: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            product_id: ConverterOptions::default().product_id,
        }
    }
}

impl CalendarConfig {
    pub fn converter_options(&self) -> ConverterOptions {
        ConverterOptions {
            product_id: self.product_id.clone(),
        }
    }
}

impl Settings {
    /// Load settings from an optional `icsfix.{toml,json,...}` file in the
    /// working directory, then from `ICSFIX_*` environment variables
    /// (`ICSFIX_SERVER__PORT=9000`). Unset keys keep their defaults.
    ///
    /// ## Errors
    /// Returns an error if a source cannot be read or a value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(CONFIG_BASENAME).required(false))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
