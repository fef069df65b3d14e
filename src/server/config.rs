//! Environment-based application configuration.
//!
//! `Config::from_env` is called once at startup after `dotenvy` has loaded `.env`. Parsing
//! goes through `Config::from_lookup` so it can be exercised without touching the process
//! environment.

use std::path::PathBuf;

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_DOCUMENT_PATH: &str = "certificate.pdf";
const DEFAULT_UPLOAD_DIR: &str = ".";
const DEFAULT_MAIL_FROM: &str = "noreply@company.com";
const DEFAULT_MAIL_TO: &str = "admin@company.com";

/// Which `CityInfoStore` variant backs the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    InMemory,
    Database,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Decoded HMAC key used to sign and verify tokens.
    pub secret: Vec<u8>,
    pub issuer: String,
    pub audience: String,
    /// City a token's `city` claim must match for city-scoped endpoints.
    pub required_city: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone)]
pub struct FilesConfig {
    /// Document served by the download endpoint.
    pub document_path: PathBuf,
    /// Directory uploads are written to.
    pub upload_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub store: StoreKind,
    /// Only set when `store` is `StoreKind::Database`.
    pub database_url: Option<String>,
    pub auth: AuthConfig,
    pub mail: MailConfig,
    pub files: FilesConfig,
    /// Rotated log files are written here when set.
    pub log_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every required variable present and valid
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required = |name: &str| {
            optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let secret = STANDARD
            .decode(required("AUTH_SECRET_FOR_KEY")?.trim())
            .map_err(|err| ConfigError::InvalidEnvVar {
                name: "AUTH_SECRET_FOR_KEY".to_string(),
                reason: err.to_string(),
            })?;

        let store = match optional("CITYINFO_STORE") {
            None => StoreKind::Database,
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "database" => StoreKind::Database,
                "memory" => StoreKind::InMemory,
                other => {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "CITYINFO_STORE".to_string(),
                        reason: format!("expected 'database' or 'memory', got '{}'", other),
                    }
                    .into())
                }
            },
        };

        let database_url = match store {
            StoreKind::Database => Some(required("DATABASE_URL")?),
            StoreKind::InMemory => None,
        };

        Ok(Self {
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            store,
            database_url,
            auth: AuthConfig {
                secret,
                issuer: required("AUTH_ISSUER")?,
                audience: required("AUTH_AUDIENCE")?,
                required_city: optional("AUTH_REQUIRED_CITY"),
            },
            mail: MailConfig {
                from: optional("MAIL_FROM").unwrap_or_else(|| DEFAULT_MAIL_FROM.to_string()),
                to: optional("MAIL_TO").unwrap_or_else(|| DEFAULT_MAIL_TO.to_string()),
            },
            files: FilesConfig {
                document_path: optional("FILES_DOCUMENT_PATH")
                    .unwrap_or_else(|| DEFAULT_DOCUMENT_PATH.to_string())
                    .into(),
                upload_dir: optional("UPLOAD_DIR")
                    .unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string())
                    .into(),
            },
            log_dir: optional("LOG_DIR").map(PathBuf::from),
        })
    }
}
