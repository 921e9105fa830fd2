use serde::Deserialize;

use crate::ConfigError;

pub const DEFAULT_ERROR_TOKEN: &str = "error";

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub driver: Driver,
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(level) = self.log_level.as_deref() {
            if !LOG_LEVELS.contains(&level) {
                return Err(ConfigError::Invalid(format!(
                    "unknown log_level `{}`, expected one of {:?}",
                    level, LOG_LEVELS
                )));
            }
        }
        self.driver.validate()
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Driver {
    pub error_token: String,
    pub strict: bool,
}

impl Default for Driver {
    fn default() -> Self {
        Self {
            error_token: DEFAULT_ERROR_TOKEN.to_string(),
            strict: false,
        }
    }
}

impl Driver {
    // the token shares the output stream with popped values, it must not look like one
    pub fn validate(&self) -> Result<(), ConfigError> {
        let token = self.error_token.as_str();
        if token.trim().is_empty() {
            return Err(ConfigError::Invalid("error_token is empty".to_string()));
        }
        if token.contains(char::is_whitespace) {
            return Err(ConfigError::Invalid(format!(
                "error_token `{}` contains whitespace",
                token
            )));
        }
        if token.parse::<i64>().is_ok() {
            return Err(ConfigError::Invalid(format!(
                "error_token `{}` is a valid value",
                token
            )));
        }
        Ok(())
    }
}
