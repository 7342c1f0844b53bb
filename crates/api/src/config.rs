use std::path::PathBuf;

/// Default SQLite database location, relative to the working directory.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://mias_rotations.db";

/// Default JSON body limit. Photos travel base64-encoded inside JSON.
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// SQLite connection URL (default: `sqlite://mias_rotations.db`).
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `120`).
    pub request_timeout_secs: u64,
    /// Maximum request body size in bytes (default: 10 MiB).
    pub body_limit_bytes: usize,
    /// Directory holding the built frontend, served for non-API paths.
    pub static_dir: Option<PathBuf>,
    /// Image service settings.
    pub gemini: GeminiConfig,
}

/// Settings for the headshot image service.
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key; empty is tolerated but every transformation will fail.
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key_set", &!self.api_key.is_empty())
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                      |
    /// |------------------------|----------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                    |
    /// | `PORT`                 | `3000`                                       |
    /// | `DATABASE_URL`         | `sqlite://mias_rotations.db`                 |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`                      |
    /// | `REQUEST_TIMEOUT_SECS` | `120`                                        |
    /// | `BODY_LIMIT_BYTES`     | `10485760`                                   |
    /// | `STATIC_DIR`           | unset                                        |
    /// | `GEMINI_API_KEY`       | empty                                        |
    /// | `GEMINI_MODEL`         | `gemini-2.5-flash-image`                     |
    /// | `GEMINI_BASE_URL`      | `https://generativelanguage.googleapis.com`  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "120".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let body_limit_bytes: usize = std::env::var("BODY_LIMIT_BYTES")
            .map(|v| v.parse().expect("BODY_LIMIT_BYTES must be a valid usize"))
            .unwrap_or(DEFAULT_BODY_LIMIT_BYTES);

        let static_dir = std::env::var("STATIC_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            body_limit_bytes,
            static_dir,
            gemini: GeminiConfig::from_env(),
        }
    }
}

impl GeminiConfig {
    /// Load image service settings. A missing key becomes an empty string.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
            model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| mias_imaging::gemini::DEFAULT_MODEL.into()),
            base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| mias_imaging::gemini::DEFAULT_BASE_URL.into()),
        }
    }
}
