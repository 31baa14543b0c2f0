//! Environment-driven runtime configuration gathered once at startup.

use std::{env, fmt::Display, str::FromStr};

use tracing::warn;

const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017";
const DEFAULT_PORT: u16 = 8080;
/// Whole-request body cap applied to uploads.
const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Immutable runtime configuration shared across the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// MongoDB connection string (`MONGO_URI`).
    pub mongo_uri: String,
    /// Database name override (`MONGO_DB`); the DAO default applies when unset.
    pub mongo_db: Option<String>,
    /// TCP port the server binds (`PORT`, falling back to `SERVER_PORT`).
    pub port: u16,
    /// Upload size cap in bytes (`MAX_UPLOAD_BYTES`).
    pub max_upload_bytes: usize,
}

impl AppConfig {
    /// Gather the configuration from the environment, falling back to
    /// defaults with a logged warning on unparseable values.
    pub fn from_env() -> Self {
        let mongo_uri = env::var("MONGO_URI").unwrap_or_else(|_| DEFAULT_MONGO_URI.into());
        let mongo_db = env::var("MONGO_DB").ok().filter(|name| !name.is_empty());

        let port = parse_or_default(
            "PORT",
            env::var("PORT").or_else(|_| env::var("SERVER_PORT")).ok(),
            DEFAULT_PORT,
        );
        let max_upload_bytes = parse_or_default(
            "MAX_UPLOAD_BYTES",
            env::var("MAX_UPLOAD_BYTES").ok(),
            DEFAULT_MAX_UPLOAD_BYTES,
        );

        Self {
            mongo_uri,
            mongo_db,
            port,
            max_upload_bytes,
        }
    }
}

fn parse_or_default<T>(name: &str, value: Option<String>, default: T) -> T
where
    T: FromStr + Display + Copy,
{
    match value {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(%name, %raw, %default, "unparseable value; falling back to default");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_values() {
        assert_eq!(parse_or_default("PORT", Some("9090".into()), 8080u16), 9090);
    }

    #[test]
    fn falls_back_on_garbage_or_absence() {
        assert_eq!(parse_or_default("PORT", Some("nope".into()), 8080u16), 8080);
        assert_eq!(parse_or_default("PORT", None, 8080u16), 8080);
    }
}
