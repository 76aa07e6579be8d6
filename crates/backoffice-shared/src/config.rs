//! Configuration management

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_APP_NAME, DEFAULT_CORS_ORIGIN, DEFAULT_ENV, DEFAULT_HOST, DEFAULT_LOG_FILTER,
    DEFAULT_MAX_CONNECTIONS, DEFAULT_MIN_CONNECTIONS, DEFAULT_PORT,
};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub telemetry: TelemetrySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub cors_origin: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub run_migrations: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TelemetrySettings {
    pub filter: String,
    #[serde(default)]
    pub log_dir: Option<String>,
}

impl AppConfig {
    /// Defaults, then `config/default`, then `config/{APP_ENV}`, then
    /// environment variables (`APP__PORT=9000`, `DATABASE__URL=...`).
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| DEFAULT_ENV.into());
        let builder = with_defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true));
        Ok(builder.build()?.try_deserialize()?)
    }
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    builder
        .set_default("app.env", DEFAULT_ENV)?
        .set_default("app.host", DEFAULT_HOST)?
        .set_default("app.port", i64::from(DEFAULT_PORT))?
        .set_default("app.name", DEFAULT_APP_NAME)?
        .set_default("app.cors_origin", DEFAULT_CORS_ORIGIN)?
        .set_default("database.url", "postgres://localhost/backoffice")?
        .set_default("database.max_connections", i64::from(DEFAULT_MAX_CONNECTIONS))?
        .set_default("database.min_connections", i64::from(DEFAULT_MIN_CONNECTIONS))?
        .set_default("database.run_migrations", true)?
        .set_default("telemetry.filter", DEFAULT_LOG_FILTER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_defaults_only() {
        let config: AppConfig = with_defaults(Config::builder())
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.app.host, DEFAULT_HOST);
        assert_eq!(config.app.port, DEFAULT_PORT);
        assert_eq!(config.database.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert!(config.database.run_migrations);
        assert!(config.telemetry.log_dir.is_none());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let toml = r#"
[app]
port = 3000
name = "backoffice-staging"

[database]
url = "postgres://db.internal/backoffice"
run_migrations = false

[telemetry]
filter = "debug"
log_dir = "/var/log/backoffice"
"#;
        let config: AppConfig = with_defaults(Config::builder())
            .unwrap()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.app.port, 3000);
        assert_eq!(config.app.name, "backoffice-staging");
        assert_eq!(config.app.host, DEFAULT_HOST);
        assert_eq!(config.database.url, "postgres://db.internal/backoffice");
        assert!(!config.database.run_migrations);
        assert_eq!(config.telemetry.filter, "debug");
        assert_eq!(config.telemetry.log_dir.as_deref(), Some("/var/log/backoffice"));
    }
}
