use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

const DEFAULT_PORT: u16 = 9000;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone)]
pub struct Config {
    /// Origin instance base URL, without a trailing slash
    pub mastodon_url: String,
    pub mastodon_token: String,
    /// Bare host of the instance used for share/search links (e.g. mastodon.social)
    pub home_instance: String,
    pub port: u16,
    /// Bound on every outbound call to the origin instance
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mastodon_url = get("MASTODON_INSTANCE")
            .ok_or(ConfigError::Missing("MASTODON_INSTANCE"))?
            .trim()
            .trim_end_matches('/')
            .to_string();
        if !mastodon_url.starts_with("http://") && !mastodon_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                var: "MASTODON_INSTANCE",
                reason: format!("expected an http(s) URL, got {}", mastodon_url),
            });
        }

        let mastodon_token = get("MASTODON_TOKEN").ok_or(ConfigError::Missing("MASTODON_TOKEN"))?;

        let home_instance = bare_host(&get("HOME_INSTANCE").unwrap_or_else(|| mastodon_url.clone()));

        let port = match get("PORT") {
            Some(p) => p.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                reason: format!("not a port number: {}", p),
            })?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match get("HTTP_TIMEOUT_SECS") {
            Some(t) => t.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "HTTP_TIMEOUT_SECS",
                reason: format!("not a number of seconds: {}", t),
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            mastodon_url,
            mastodon_token,
            home_instance,
            port,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

// Hand-written so the token never ends up in logs
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("mastodon_url", &self.mastodon_url)
            .field("mastodon_token", &"<redacted>")
            .field("home_instance", &self.home_instance)
            .field("port", &self.port)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

/// Strip scheme and path: "https://mastodon.social/" -> "mastodon.social"
fn bare_host(value: &str) -> String {
    let value = value.trim();
    let without_scheme = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
        .unwrap_or(value);
    without_scheme
        .split('/')
        .next()
        .unwrap_or_default()
        .to_string()
}
