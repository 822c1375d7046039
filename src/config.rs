use std::{env, net::SocketAddr, str::FromStr, time::Duration};

use crate::error::{configuration_error, Error};

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: String,
    pub api_base: String,
    pub radius_meters: u32,
    pub category: String,
    pub region: String,
    pub photo_max_width: u32,
    pub provider_timeout: Duration,
    pub session_idle: Duration,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Reads the process environment. `GOOGLE_MAPS_API_KEY` is the only
    /// required variable.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GOOGLE_MAPS_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| configuration_error("GOOGLE_MAPS_API_KEY"))?;

        Ok(Self {
            api_key,
            api_base: lookup("GOOGLE_MAPS_API_BASE").unwrap_or_else(|| "maps.googleapis.com".into()),
            radius_meters: parse_or(&lookup, "SEARCH_RADIUS_METERS", 1500)?,
            category: lookup("SEARCH_CATEGORY").unwrap_or_else(|| "restaurant".into()),
            region: lookup("PLACES_REGION").unwrap_or_else(|| "au".into()),
            photo_max_width: parse_or(&lookup, "PHOTO_MAX_WIDTH", 400)?,
            provider_timeout: Duration::from_secs(parse_or(&lookup, "PROVIDER_TIMEOUT_SECS", 10)?),
            session_idle: Duration::from_secs(parse_or(&lookup, "SESSION_IDLE_SECS", 1800)?),
            bind_addr: parse_or(&lookup, "BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3000)))?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, Error>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| {
            tracing::warn!("invalid {} value: {:?}", key, raw);
            configuration_error(key)
        }),
        None => Ok(default),
    }
}
