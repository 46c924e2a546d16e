//! Configuration management for artistscope.
//!
//! Values are read from environment variables, which may be seeded from a
//! `.env` file in the local data directory:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (endpoints and retry tuning only)
//!
//! Credentials have no defaults. The CLI may override them with flags.

use std::{env, path::PathBuf, time::Duration};

use crate::{
    error::{FetchError, Result},
    http::{DEFAULT_BACKOFF_BASE, DEFAULT_MAX_RETRIES},
};

pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_MUSICBRAINZ_API_URL: &str = "https://musicbrainz.org/ws/2";
pub const DEFAULT_OPENCAGE_API_URL: &str = "https://api.opencagedata.com/geocode/v1/json";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file lives under `artistscope/.env` in the platform-specific local data
/// directory:
/// - Linux: `~/.local/share/artistscope/.env`
/// - macOS: `~/Library/Application Support/artistscope/.env`
/// - Windows: `%LOCALAPPDATA%/artistscope/.env`
///
/// The directory is created if needed. A missing file is fine, the process
/// environment is then the only source; an unreadable or malformed one is not.
pub async fn load_env() -> std::result::Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("artistscope/.env");
    path
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Base URLs of every remote service a lookup talks to.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    pub spotify_api_url: String,
    pub spotify_token_url: String,
    pub musicbrainz_api_url: String,
    pub opencage_api_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            spotify_api_url: DEFAULT_SPOTIFY_API_URL.to_string(),
            spotify_token_url: DEFAULT_SPOTIFY_TOKEN_URL.to_string(),
            musicbrainz_api_url: DEFAULT_MUSICBRAINZ_API_URL.to_string(),
            opencage_api_url: DEFAULT_OPENCAGE_API_URL.to_string(),
        }
    }
}

impl Endpoints {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            spotify_api_url: var_or("SPOTIFY_API_URL", defaults.spotify_api_url),
            spotify_token_url: var_or("SPOTIFY_API_TOKEN_URL", defaults.spotify_token_url),
            musicbrainz_api_url: var_or("MUSICBRAINZ_API_URL", defaults.musicbrainz_api_url),
            opencage_api_url: var_or("OPENCAGE_API_URL", defaults.opencage_api_url),
        }
    }

    /// Points every service at one host, the way a mock server serves them.
    pub fn rooted_at(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            spotify_api_url: format!("{}/v1", base),
            spotify_token_url: format!("{}/api/token", base),
            musicbrainz_api_url: format!("{}/ws/2", base),
            opencage_api_url: format!("{}/geocode/v1/json", base),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub credentials: Credentials,
    pub opencage_api_key: String,
    pub endpoints: Endpoints,
    pub max_retries: u32,
    pub backoff_base: Duration,
}

impl Settings {
    pub fn new(credentials: Credentials, opencage_api_key: impl Into<String>) -> Self {
        Self {
            credentials,
            opencage_api_key: opencage_api_key.into(),
            endpoints: Endpoints::default(),
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_base: DEFAULT_BACKOFF_BASE,
        }
    }

    /// Reads settings from the environment. Overrides win over the
    /// corresponding variables when present.
    pub fn from_env(overrides: Overrides) -> Result<Self> {
        let client_id = overrides
            .client_id
            .or_else(|| non_empty_var("SPOTIFY_API_AUTH_CLIENT_ID"))
            .ok_or(FetchError::MissingInput("client id"))?;
        let client_secret = overrides
            .client_secret
            .or_else(|| non_empty_var("SPOTIFY_API_AUTH_CLIENT_SECRET"))
            .ok_or(FetchError::MissingInput("client secret"))?;
        let opencage_api_key = overrides
            .opencage_api_key
            .or_else(|| non_empty_var("OPENCAGE_API_KEY"))
            .ok_or(FetchError::MissingInput("OpenCage API key"))?;

        let max_retries = parse_max_retries(non_empty_var("ARTISTSCOPE_MAX_RETRIES"))?;
        let backoff_base = parse_backoff_base(non_empty_var("ARTISTSCOPE_BACKOFF_BASE_SECS"))?;

        let settings = Self {
            credentials: Credentials {
                client_id,
                client_secret,
            },
            opencage_api_key,
            endpoints: Endpoints::from_env(),
            max_retries,
            backoff_base,
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.credentials.client_id.trim().is_empty() {
            return Err(FetchError::MissingInput("client id"));
        }
        if self.credentials.client_secret.trim().is_empty() {
            return Err(FetchError::MissingInput("client secret"));
        }
        if self.opencage_api_key.trim().is_empty() {
            return Err(FetchError::MissingInput("OpenCage API key"));
        }
        Ok(())
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub opencage_api_key: Option<String>,
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Unset means the default; a set value must be a non-negative integer.
fn parse_max_retries(value: Option<String>) -> Result<u32> {
    match value {
        None => Ok(DEFAULT_MAX_RETRIES),
        Some(v) => v.trim().parse().map_err(|_| FetchError::InvalidConfig {
            key: "ARTISTSCOPE_MAX_RETRIES",
            value: v,
        }),
    }
}

/// Unset means the default; a set value must be a non-negative number of seconds.
fn parse_backoff_base(value: Option<String>) -> Result<Duration> {
    let Some(v) = value else {
        return Ok(DEFAULT_BACKOFF_BASE);
    };
    v.trim()
        .parse::<f64>()
        .ok()
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .ok_or(FetchError::InvalidConfig {
            key: "ARTISTSCOPE_BACKOFF_BASE_SECS",
            value: v,
        })
}

fn var_or(key: &str, default: String) -> String {
    non_empty_var(key).unwrap_or(default)
}
