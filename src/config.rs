//! Application configuration loaded from environment variables.

use serde::Deserialize;

use crate::error::AppError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Install the Prometheus recorder and expose `/metrics`.
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,

    // === Use Case ===
    /// Input handed to the pulse check use case by the CLI `check` command.
    #[serde(default = "default_input")]
    pub default_input: String,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,

    /// Emit logs as JSON lines instead of human-readable text.
    #[serde(default)]
    pub log_json: bool,
}

fn default_port() -> u16 {
    8080
}

fn default_true() -> bool {
    true
}

fn default_input() -> String {
    crate::pulse::DEFAULT_INPUT.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            metrics_enabled: default_true(),
            default_input: default_input(),
            rust_log: default_log_level(),
            verbose: false,
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.port == 0 {
            return Err(AppError::InvalidConfig("PORT must be non-zero".to_string()));
        }

        if self.default_input.trim().is_empty() {
            return Err(AppError::InvalidConfig(
                "DEFAULT_INPUT must not be blank".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_sensible() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert!(config.metrics_enabled);
        assert_eq!(config.default_input, "Default use case input.");
        assert_eq!(config.rust_log, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_port() {
        let config = Config {
            port: 0,
            ..Config::default()
        };

        assert!(matches!(config.validate(), Err(AppError::InvalidConfig(_))));
    }

    #[test]
    fn validate_rejects_blank_input() {
        let config = Config {
            default_input: "   ".to_string(),
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn deserializes_from_env_pairs() {
        let vars = vec![
            ("PORT".to_string(), "9090".to_string()),
            ("LOG_JSON".to_string(), "true".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();

        assert_eq!(config.port, 9090);
        assert!(config.log_json);
        assert!(!config.verbose);
        assert_eq!(config.default_input, "Default use case input.");
    }
}
