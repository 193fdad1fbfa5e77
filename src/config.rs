//! Server configuration from environment variables.

use crate::error::ConfigError;
use std::path::PathBuf;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/sayhi";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: String,
    /// Directory for uploaded photo bytes. Created on first upload if missing.
    pub upload_dir: PathBuf,
    /// Base for photo download URLs when the client does not pass `serverUrl`.
    pub public_base_url: String,
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Read config from process env. Call after `dotenvy::dotenv()`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|var| std::env::var(var).ok())
    }

    fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let max_upload_bytes = match get("MAX_UPLOAD_BYTES") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                var: "MAX_UPLOAD_BYTES",
                reason: format!("'{}' is not a byte count", raw),
            })?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };
        Ok(ServerConfig {
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
            upload_dir: get("UPLOAD_DIR")
                .unwrap_or_else(|| DEFAULT_UPLOAD_DIR.into())
                .into(),
            public_base_url: get("PUBLIC_BASE_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_PUBLIC_BASE_URL.into()),
            max_upload_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_map(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        ServerConfig::from_vars(|k| map.get(k).map(|v| v.to_string()))
    }

    #[test]
    fn defaults_apply_when_env_is_empty() {
        let cfg = from_map(&[]).unwrap();
        assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(cfg.upload_dir, PathBuf::from("uploads"));
        assert_eq!(cfg.public_base_url, DEFAULT_PUBLIC_BASE_URL);
        assert_eq!(cfg.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
    }

    #[test]
    fn explicit_values_win() {
        let cfg = from_map(&[
            ("DATABASE_URL", "postgres://db/sayhi_test"),
            ("UPLOAD_DIR", "/var/lib/sayhi/photos"),
            ("MAX_UPLOAD_BYTES", "1048576"),
        ])
        .unwrap();
        assert_eq!(cfg.database_url, "postgres://db/sayhi_test");
        assert_eq!(cfg.upload_dir, PathBuf::from("/var/lib/sayhi/photos"));
        assert_eq!(cfg.max_upload_bytes, 1_048_576);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let cfg = from_map(&[("PUBLIC_BASE_URL", "https://sayhi.example.com/")]).unwrap();
        assert_eq!(cfg.public_base_url, "https://sayhi.example.com");
    }

    #[test]
    fn bad_upload_limit_is_rejected() {
        let err = from_map(&[("MAX_UPLOAD_BYTES", "ten megabytes")]).unwrap_err();
        assert!(err.to_string().contains("MAX_UPLOAD_BYTES"));
    }
}
