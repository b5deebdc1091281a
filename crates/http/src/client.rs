//! Typed API clients that enforce authentication requirements at compile time

use crate::error::ClientError;
use reqwest::{header, Client, ClientBuilder};

const USER_AGENT: &str = "smilecare-client/0.1.0";

/// Client for public endpoints that don't require a session token.
#[derive(Clone)]
pub struct PublicApiClient {
    client: Client,
    base_url: String,
}

/// Client for endpoints that require a valid session token. Every request it
/// builds carries `Authorization: Bearer <token>`.
#[derive(Clone)]
pub struct AuthedApiClient {
    client: Client,
    base_url: String,
    token: String,
}

impl PublicApiClient {
    /// Create a new public client.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::Configuration("base_url is required".into()));
        }

        let client = ClientBuilder::new().user_agent(USER_AGENT).build()?;

        Ok(Self { client, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        execute(request).await
    }

    /// Attach a session token to get an authenticated client.
    pub fn authenticate(self, token: impl Into<String>) -> AuthedApiClient {
        AuthedApiClient {
            client: self.client,
            base_url: self.base_url,
            token: token.into(),
        }
    }
}

impl AuthedApiClient {
    /// Create a new authenticated client.
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, ClientError> {
        Ok(PublicApiClient::new(base_url)?.authenticate(token))
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder with the bearer token attached.
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        execute(request).await
    }
}

async fn execute<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ClientError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        Ok(response.json().await?)
    } else {
        let message = response.text().await.unwrap_or_else(|_| status.to_string());
        Err(ClientError::from_status(status, message))
    }
}
