use chrono::{Duration, Utc};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_JWT_TTL_SECONDS: i64 = 86_400;
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const MIN_JWT_SECRET_LEN: usize = 32;

/// Optional credentials for an administrator account created at startup.
pub struct AdminSeed {
    pub email: String,
    pub username: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    pub jwt_ttl_seconds: i64,

    pub bind_address: String,
    pub cors_allowed_origin: Option<String>,

    pub admin_seed: Option<AdminSeed>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let jwt_secret = required("JWT_SECRET")?;
        if jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::InvalidValue {
                name: "JWT_SECRET".to_string(),
                reason: format!("must be at least {} characters", MIN_JWT_SECRET_LEN),
            }
            .into());
        }

        let jwt_ttl_seconds = match optional("JWT_TTL_SECONDS") {
            Some(value) => parse_ttl(&value)?,
            None => DEFAULT_JWT_TTL_SECONDS,
        };

        let admin_seed = match (
            optional("ADMIN_EMAIL"),
            optional("ADMIN_USERNAME"),
            optional("ADMIN_PASSWORD"),
        ) {
            (Some(email), Some(username), Some(password)) => Some(AdminSeed {
                email,
                username,
                password,
            }),
            (None, None, None) => None,
            _ => {
                return Err(ConfigError::InvalidValue {
                    name: "ADMIN_EMAIL".to_string(),
                    reason: "ADMIN_EMAIL, ADMIN_USERNAME and ADMIN_PASSWORD must be set together"
                        .to_string(),
                }
                .into())
            }
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret,
            jwt_ttl_seconds,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            cors_allowed_origin: optional("CORS_ALLOWED_ORIGIN"),
            admin_seed,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

fn parse_ttl(value: &str) -> Result<i64, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidValue {
        name: "JWT_TTL_SECONDS".to_string(),
        reason: reason.to_string(),
    };

    let seconds = value
        .parse::<i64>()
        .map_err(|_| invalid("must be a whole number of seconds"))?;
    if seconds <= 0 {
        return Err(invalid("must be greater than zero"));
    }
    let fits = Duration::try_seconds(seconds)
        .and_then(|ttl| Utc::now().checked_add_signed(ttl))
        .is_some();
    if !fits {
        return Err(invalid("puts token expiry beyond the supported date range"));
    }

    Ok(seconds)
}
