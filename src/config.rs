use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_VERIFY_BASE_URL: &str = "https://verify.twilio.com";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub twilio: TwilioConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwilioConfig {
    #[serde(default)]
    pub account_sid: String,
    #[serde(default)]
    pub auth_token: String,
    #[serde(default)]
    pub verify_service_sid: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for TwilioConfig {
    fn default() -> Self {
        Self {
            account_sid: String::new(),
            auth_token: String::new(),
            verify_service_sid: String::new(),
            base_url: default_base_url(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_base_url() -> String {
    DEFAULT_VERIFY_BASE_URL.to_string()
}

impl Config {
    /// Loads `CONFIG_PATH` (default `config.toml`) if it exists, then applies
    /// environment overrides. A missing file means environment only.
    pub fn from_toml() -> AppResult<Self> {
        use std::io::ErrorKind;

        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());

        let file = match std::fs::read_to_string(&config_path) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                return Err(AppError::ConfigError(format!(
                    "cannot read config file {config_path}: {e}"
                )));
            }
        };

        Self::from_sources(file.as_deref(), |name| env::var(name).ok())
    }

    /// Builds the config from optional TOML text and an environment lookup.
    pub fn from_sources<F>(file: Option<&str>, get_env: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Config = match file {
            Some(contents) => toml::from_str(contents)
                .map_err(|e| AppError::ConfigError(format!("failed to parse config file: {e}")))?,
            None => Config::default(),
        };

        if let Some(v) = get_env("SERVER_HOST") {
            config.server.host = v;
        }
        if let Some(v) = get_env("PORT")
            && let Ok(p) = v.parse()
        {
            config.server.port = p;
        }
        if let Some(v) = get_env("TWILIO_ACCOUNT_SID") {
            config.twilio.account_sid = v;
        }
        if let Some(v) = get_env("TWILIO_AUTH_TOKEN") {
            config.twilio.auth_token = v;
        }
        if let Some(v) = get_env("TWILIO_VERIFY_SERVICE_SID") {
            config.twilio.verify_service_sid = v;
        }
        if let Some(v) = get_env("TWILIO_VERIFY_BASE_URL") {
            config.twilio.base_url = v;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> AppResult<()> {
        if self.twilio.account_sid.is_empty() {
            return Err(AppError::ConfigError("TWILIO_ACCOUNT_SID is required".to_string()));
        }
        if self.twilio.auth_token.is_empty() {
            return Err(AppError::ConfigError("TWILIO_AUTH_TOKEN is required".to_string()));
        }
        if self.twilio.verify_service_sid.is_empty() {
            log::warn!("TWILIO_VERIFY_SERVICE_SID is empty, provider calls will be rejected");
        }
        Ok(())
    }
}
