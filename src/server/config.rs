use std::{path::PathBuf, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3069;
const DEFAULT_ACCESS_TOKEN_MINUTES: i64 = 15;
const DEFAULT_REFRESH_TOKEN_MINUTES: i64 = 7 * 24 * 60;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_PUBLIC_DIR: &str = "public";
const DEFAULT_BODY_LIMIT_BYTES: usize = 50 * 1024 * 1024;

pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,

    pub access_token_secret: String,
    pub refresh_token_secret: String,
    pub access_token_expires_minutes: i64,
    pub refresh_token_expires_minutes: i64,

    pub cors_origin: String,
    pub public_dir: PathBuf,
    pub body_limit_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            host: optional("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parsed("PORT", DEFAULT_PORT)?,
            access_token_secret: required("ACCESS_TOKEN_SECRET")?,
            refresh_token_secret: required("REFRESH_TOKEN_SECRET")?,
            access_token_expires_minutes: parsed(
                "ACCESS_TOKEN_EXPIRES_MINUTES",
                DEFAULT_ACCESS_TOKEN_MINUTES,
            )?,
            refresh_token_expires_minutes: parsed(
                "REFRESH_TOKEN_EXPIRES_MINUTES",
                DEFAULT_REFRESH_TOKEN_MINUTES,
            )?,
            cors_origin: optional("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
            public_dir: optional("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR)),
            body_limit_bytes: parsed("BODY_LIMIT_BYTES", DEFAULT_BODY_LIMIT_BYTES)?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a variable, treating an empty value as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parsed<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar(name.to_string(), e.to_string())),
        None => Ok(default),
    }
}
