use reqwest::Client;

use crate::{
    config::Credentials,
    error::{FetchError, Result},
    types::{AccessToken, TokenResponse},
};

/// Exchanges client credentials for a bearer token.
///
/// One token per lookup; there is no expiry tracking or refresh.
pub struct TokenProvider<'a> {
    http: &'a Client,
    token_url: &'a str,
}

impl<'a> TokenProvider<'a> {
    pub fn new(http: &'a Client, token_url: &'a str) -> Self {
        Self { http, token_url }
    }

    /// Performs the `client_credentials` grant.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Transport`] if the token endpoint cannot be reached
    /// - [`FetchError::Auth`] if the response has no `access_token`, whatever
    ///   its status. Credential failures are not transient and never retried.
    pub async fn acquire(&self, credentials: &Credentials) -> Result<AccessToken> {
        let res = self
            .http
            .post(self.token_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", credentials.client_id.as_str()),
                ("client_secret", credentials.client_secret.as_str()),
            ])
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: self.token_url.to_string(),
                source,
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|source| FetchError::Transport {
            url: self.token_url.to_string(),
            source,
        })?;

        let token = serde_json::from_str::<TokenResponse>(&body)
            .ok()
            .and_then(|json| json.access_token)
            .filter(|token| !token.is_empty());

        match token {
            Some(token) => Ok(AccessToken::new(token)),
            None => Err(FetchError::Auth(format!(
                "no access token in response (status {}): {}",
                status.as_u16(),
                body
            ))),
        }
    }
}
