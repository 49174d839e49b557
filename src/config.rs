use std::path::PathBuf;
use std::str::FromStr;

use crate::application::use_cases::ingest_document::DEFAULT_MAX_UPLOAD_BYTES;

#[derive(Debug)]
pub enum ConfigError {
    Missing(String),
    Invalid { key: String, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} not set", key),
            ConfigError::Invalid { key, value } => {
                write!(f, "Invalid value for {}: '{}'", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_pool_size: u32,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub run_migrations: bool,
}

impl AppConfig {
    /// Reads the process environment. Call `dotenv::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::Missing("DATABASE_URL".to_string()))?;

        Ok(Self {
            database_url,
            database_pool_size: parse_or(&lookup, "DATABASE_POOL_SIZE", 10)?,
            upload_dir: PathBuf::from(
                lookup("UPLOAD_DIR").unwrap_or_else(|| "./uploads".to_string()),
            ),
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            port: parse_or(&lookup, "PORT", 8080)?,
            run_migrations: parse_or(&lookup, "RUN_MIGRATIONS", true)?,
        })
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) if value.trim().is_empty() => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            key: key.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/db")]))
            .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.database_pool_size, 10);
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.upload_dir, PathBuf::from("./uploads"));
        assert!(config.run_migrations);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/db"),
            ("PORT", "9000"),
            ("UPLOAD_DIR", "/srv/pdfs"),
            ("MAX_UPLOAD_BYTES", "1024"),
            ("RUN_MIGRATIONS", "false"),
        ]))
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.upload_dir, PathBuf::from("/srv/pdfs"));
        assert_eq!(config.max_upload_bytes, 1024);
        assert!(!config.run_migrations);
    }

    #[test]
    fn test_missing_database_url() {
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[])),
            Err(ConfigError::Missing(_))
        ));
    }

    #[test]
    fn test_invalid_number() {
        let result = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/db"),
            ("PORT", "eighty"),
        ]));
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }
}
