//! Runtime configuration, read from flags or the environment.

use std::path::PathBuf;

use axum::http::HeaderValue;
use clap::Parser;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;

const MEMORY_URL: &str = "sqlite::memory:";

#[derive(Debug, Clone, Parser)]
#[command(name = "lego-api", about = "Matemáticas LEGO backend", version)]
pub struct Config {
    /// Database connection string (a directory URL for SQLite)
    #[arg(long, env = "DB_URL", default_value = "sqlite://data")]
    pub db_url: String,

    /// Database name; becomes `<name>.sqlite3` under `db_url`
    #[arg(long, env = "DB_NAME", default_value = "matematicas_lego")]
    pub db_name: String,

    /// Comma-separated allowed CORS origins, `*` for any
    #[arg(long, env = "CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8001)]
    pub port: u16,

    /// Keep all data in process memory instead of SQLite
    #[arg(long)]
    pub in_memory: bool,
}

impl Config {
    /// Effective sqlx connection URL for the configured database.
    #[must_use]
    pub fn database_url(&self) -> String {
        if self.db_url == MEMORY_URL {
            return MEMORY_URL.to_owned();
        }
        format!(
            "{}/{}.sqlite3?mode=rwc",
            self.db_url.trim_end_matches('/'),
            self.db_name
        )
    }

    /// Directory that must exist before the database file can be created.
    #[must_use]
    pub fn database_dir(&self) -> Option<PathBuf> {
        if self.db_url == MEMORY_URL {
            return None;
        }
        let raw = self.db_url.trim_end_matches('/');
        let path = raw
            .strip_prefix("sqlite://")
            .or_else(|| raw.strip_prefix("sqlite:"))
            .unwrap_or(raw);
        if path.is_empty() {
            return None;
        }
        Some(PathBuf::from(path))
    }

    /// Parsed CORS origins; empty means any origin.
    #[must_use]
    pub fn allowed_origins(&self) -> Vec<String> {
        let origins: Vec<String> = self
            .cors_origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_owned)
            .collect();
        if origins.iter().any(|o| o == "*") {
            return Vec::new();
        }
        origins
    }

    #[must_use]
    pub fn cors_layer(&self) -> CorsLayer {
        let origins = self.allowed_origins();
        let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
        if origins.is_empty() {
            return layer.allow_origin(Any);
        }

        let values: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!(origin = %o, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        layer.allow_origin(AllowOrigin::list(values))
    }
}
