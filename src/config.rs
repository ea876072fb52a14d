use std::{env, fmt::Display, str::FromStr, time::Duration};
use thiserror::Error;
use url::Url;

use crate::services::{business_search::DEFAULT_YELP_URL, event_search::DEFAULT_TICKETMASTER_URL};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const UPSTREAM_TIMEOUT_SECS: u64 = 10;
const STORE_TIMEOUT_SECS: u64 = 15;
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Cluster the credentials are spliced into when no full URI is given.
pub const CLUSTER_URI: &str =
    "mongodb+srv://cluster0.km2hn.mongodb.net/myFirstDatabase?retryWrites=true&w=majority";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub mongo_uri: String,
    pub ticketmaster_url: Url,
    pub yelp_url: Url,
    pub upstream_timeout: Duration,
    pub store_timeout: Duration,
    pub connect_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mongo_uri = match lookup("MONGODB_URI").filter(|uri| !uri.is_empty()) {
            Some(uri) => uri,
            None => {
                let username = lookup("MONGODB_USERNAME").ok_or(ConfigError::Missing("MONGODB_USERNAME"))?;
                let password = lookup("MONGODB_PASSWORD").ok_or(ConfigError::Missing("MONGODB_PASSWORD"))?;
                cluster_uri(&username, &password)?
            }
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| HOST.to_string()),
            port: parse_or(&lookup, "PORT", PORT)?,
            mongo_uri,
            ticketmaster_url: parse_or(&lookup, "TICKETMASTER_BASE_URL", parse_default(DEFAULT_TICKETMASTER_URL)?)?,
            yelp_url: parse_or(&lookup, "YELP_BASE_URL", parse_default(DEFAULT_YELP_URL)?)?,
            upstream_timeout: Duration::from_secs(parse_or(&lookup, "UPSTREAM_TIMEOUT_SECS", UPSTREAM_TIMEOUT_SECS)?),
            store_timeout: Duration::from_secs(parse_or(&lookup, "STORE_TIMEOUT_SECS", STORE_TIMEOUT_SECS)?),
            connect_timeout: Duration::from_secs(parse_or(&lookup, "CONNECT_TIMEOUT_SECS", CONNECT_TIMEOUT_SECS)?),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            message: e.to_string(),
        }),
        None => {
            log::debug!("{} not set, using default", key);
            Ok(default)
        }
    }
}

fn parse_default(url: &str) -> Result<Url, ConfigError> {
    Url::parse(url).map_err(|e| ConfigError::Invalid {
        key: "default upstream url",
        message: e.to_string(),
    })
}

/// Credentials are percent-encoded into the userinfo section.
pub fn cluster_uri(username: &str, password: &str) -> Result<String, ConfigError> {
    let invalid = |message: &str| ConfigError::Invalid {
        key: "MONGODB_USERNAME/MONGODB_PASSWORD",
        message: message.to_string(),
    };

    let mut uri = Url::parse(CLUSTER_URI).map_err(|e| invalid(&e.to_string()))?;
    uri.set_username(username)
        .map_err(|_| invalid("cluster uri cannot carry credentials"))?;
    uri.set_password(Some(password))
        .map_err(|_| invalid("cluster uri cannot carry credentials"))?;

    Ok(uri.to_string())
}
