//! Retrying GET client shared by every remote call of a lookup.
//!
//! A request is answered by exactly one of:
//!
//! - status `200`: the body is decoded into the requested type
//! - status `429`, `500`, `502`, `503` or `504`: the request is repeated after a
//!   backoff wait, at most `max_retries` times, then [`FetchError::RetryExhausted`]
//! - any other status: [`FetchError::Http`] carrying the status and body, no retry
//!
//! Waits come from a [`Backoff`] policy and are slept with `tokio::time::sleep`.
//! Retries are invisible to the caller apart from the optional [`RetryNotice`] hook.

use std::{sync::Arc, time::Duration};

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    error::{FetchError, Result},
    types::AccessToken,
};

pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_BACKOFF_BASE: Duration = Duration::from_secs(1);

const RETRYABLE: [StatusCode; 5] = [
    StatusCode::TOO_MANY_REQUESTS,
    StatusCode::INTERNAL_SERVER_ERROR,
    StatusCode::BAD_GATEWAY,
    StatusCode::SERVICE_UNAVAILABLE,
    StatusCode::GATEWAY_TIMEOUT,
];

pub fn is_retryable(status: StatusCode) -> bool {
    RETRYABLE.contains(&status)
}

/// Maps the number of the upcoming retry (starting at 1) to the wait before it.
pub trait Backoff: Send + Sync {
    fn delay(&self, retry: u32) -> Duration;
}

/// `base * 2^retry`, no jitter.
#[derive(Debug, Clone, Copy)]
pub struct ExponentialBackoff {
    base: Duration,
}

impl ExponentialBackoff {
    pub fn new(base: Duration) -> Self {
        Self { base }
    }
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        Self::new(DEFAULT_BACKOFF_BASE)
    }
}

impl Backoff for ExponentialBackoff {
    fn delay(&self, retry: u32) -> Duration {
        self.base.saturating_mul(2u32.saturating_pow(retry))
    }
}

/// Published before every backoff wait. `attempt` is the number of the
/// request about to be sent again, starting at 1.
#[derive(Debug, Clone)]
pub struct RetryNotice {
    pub url: String,
    pub status: u16,
    pub body: String,
    pub attempt: u32,
    pub delay: Duration,
}

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

fn build_http(user_agent: &str) -> Result<Client> {
    Client::builder()
        .user_agent(user_agent)
        .build()
        .map_err(FetchError::ClientBuild)
}

type RetryHook = Arc<dyn Fn(&RetryNotice) + Send + Sync>;

#[derive(Clone)]
pub struct ResilientClient {
    http: Client,
    max_retries: u32,
    backoff: Arc<dyn Backoff>,
    on_retry: Option<RetryHook>,
}

impl ResilientClient {
    pub fn new(http: Client) -> Self {
        Self {
            http,
            max_retries: DEFAULT_MAX_RETRIES,
            backoff: Arc::new(ExponentialBackoff::default()),
            on_retry: None,
        }
    }

    /// Builds the underlying `reqwest` client with the crate's user agent,
    /// which MusicBrainz requires.
    pub fn with_user_agent() -> Result<Self> {
        let http = build_http(USER_AGENT)?;
        Ok(Self::new(http))
    }

    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn backoff(mut self, backoff: impl Backoff + 'static) -> Self {
        self.backoff = Arc::new(backoff);
        self
    }

    pub fn on_retry(mut self, hook: impl Fn(&RetryNotice) + Send + Sync + 'static) -> Self {
        self.on_retry = Some(Arc::new(hook));
        self
    }

    /// Raw `reqwest` client, for the one call that is not a retried GET.
    pub fn http(&self) -> &Client {
        &self.http
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        token: Option<&AccessToken>,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let mut retries = 0;

        loop {
            let mut request = self.http.get(url).query(params);
            if let Some(token) = token {
                request = request.bearer_auth(token.as_str());
            }

            let response = request.send().await.map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

            let status = response.status();
            let body = response.text().await.map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

            if status == StatusCode::OK {
                return serde_json::from_str(&body).map_err(|source| FetchError::Decode {
                    url: url.to_string(),
                    source,
                });
            }

            if !is_retryable(status) {
                return Err(FetchError::Http {
                    url: url.to_string(),
                    status: status.as_u16(),
                    body,
                });
            }

            if retries >= self.max_retries {
                return Err(FetchError::RetryExhausted {
                    url: url.to_string(),
                    retries,
                    status: status.as_u16(),
                });
            }

            retries += 1;
            let delay = self.backoff.delay(retries);
            if let Some(hook) = &self.on_retry {
                hook(&RetryNotice {
                    url: url.to_string(),
                    status: status.as_u16(),
                    body,
                    attempt: retries,
                    delay,
                });
            }

            tokio::time::sleep(delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponential_backoff_doubles_from_twice_the_base() {
        let backoff = ExponentialBackoff::new(Duration::from_millis(500));
        let delays: Vec<Duration> = (1..=3).map(|retry| backoff.delay(retry)).collect();
        assert_eq!(
            delays,
            vec![
                Duration::from_secs(1),
                Duration::from_secs(2),
                Duration::from_secs(4)
            ]
        );
    }

    #[test]
    fn exponential_backoff_saturates() {
        let backoff = ExponentialBackoff::new(Duration::MAX);
        assert_eq!(backoff.delay(40), Duration::MAX);
    }

    #[test]
    fn invalid_user_agent_fails_client_build() {
        let result = build_http("artistscope\n0.1");
        assert!(matches!(result, Err(FetchError::ClientBuild(_))));
        let message = result.unwrap_err().to_string();
        assert!(message.starts_with("could not build the HTTP client"));
    }

    #[test]
    fn user_agent_names_crate_and_version() {
        assert_eq!(USER_AGENT, format!("artistscope/{}", env!("CARGO_PKG_VERSION")));
        assert!(build_http(USER_AGENT).is_ok());
    }

    #[test]
    fn retryable_statuses() {
        for code in [429, 500, 502, 503, 504] {
            assert!(is_retryable(StatusCode::from_u16(code).unwrap()));
        }
        for code in [200, 400, 401, 403, 404, 501] {
            assert!(!is_retryable(StatusCode::from_u16(code).unwrap()));
        }
    }
}
