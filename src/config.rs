use std::env;
use std::fmt::Display;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::AppError;

/// Up to one year.
const TOKEN_TTL_RANGE: RangeInclusive<i64> = 1..=525_600;
/// What `bcrypt::hash` accepts.
const BCRYPT_COST_RANGE: RangeInclusive<u32> = 4..=31;

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub server_port: u16,
    pub server_host: String,
    pub token_ttl_minutes: i64,
    pub bcrypt_cost: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            server_port: parsed_or("SERVER_PORT", 8080)?,
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            token_ttl_minutes: within(
                "TOKEN_TTL_MINUTES",
                parsed_or("TOKEN_TTL_MINUTES", 20)?,
                TOKEN_TTL_RANGE,
            )?,
            bcrypt_cost: within(
                "BCRYPT_COST",
                parsed_or("BCRYPT_COST", bcrypt::DEFAULT_COST)?,
                BCRYPT_COST_RANGE,
            )?,
        })
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}

fn required(key: &str) -> Result<String, AppError> {
    env::var(key).map_err(|_| AppError::InternalServerError(format!("{} must be set", key)))
}

fn parsed_or<T: FromStr>(key: &str, default: T) -> Result<T, AppError> {
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::InternalServerError(format!("{} must be a number", key))),
        Err(_) => Ok(default),
    }
}

fn within<T: PartialOrd + Display>(key: &str, value: T, range: RangeInclusive<T>) -> Result<T, AppError> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(AppError::InternalServerError(format!(
            "{} must be between {} and {}, got {}",
            key,
            range.start(),
            range.end(),
            value
        )))
    }
}
