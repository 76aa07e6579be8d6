//! Application-wide constants

pub const DEFAULT_ENV: &str = "development";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_APP_NAME: &str = "backoffice-server";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_MIN_CONNECTIONS: u32 = 1;
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const LOG_FILE_PREFIX: &str = "backoffice.log";

