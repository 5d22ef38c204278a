use config::{builder::DefaultState, ConfigBuilder, Environment};
use serde::Deserialize;

use crate::domain::DomainError;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Loads `.env`, `config/default`, `config/local` and `APP__*` variables, in that order
    pub fn load() -> Result<Self, DomainError> {
        dotenvy::dotenv().ok();

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(env_source());

        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, DomainError> {
        builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| DomainError::configuration(e.to_string()))
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("APP")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat, Map};

    #[test]
    fn test_defaults_when_no_sources() {
        let config = AppConfig::from_builder(config::Config::builder()).unwrap();

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_file_source_overrides_defaults() {
        let builder = config::Config::builder().add_source(File::from_str(
            "[logging]\nlevel = \"debug\"\nformat = \"json\"\n",
            FileFormat::Toml,
        ));

        let config = AppConfig::from_builder(builder).unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_environment_overrides_file() {
        let mut vars = Map::new();
        vars.insert("APP__LOGGING__LEVEL".to_string(), "warn".to_string());

        let builder = config::Config::builder()
            .add_source(File::from_str(
                "[logging]\nlevel = \"debug\"\n",
                FileFormat::Toml,
            ))
            .add_source(env_source().source(Some(vars)));

        let config = AppConfig::from_builder(builder).unwrap();

        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_invalid_format_is_configuration_error() {
        let builder = config::Config::builder().add_source(File::from_str(
            "[logging]\nformat = \"xml\"\n",
            FileFormat::Toml,
        ));

        let result = AppConfig::from_builder(builder);

        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }
}
