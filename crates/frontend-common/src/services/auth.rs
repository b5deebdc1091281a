//! Authentication API service

use crate::client::{authed_client, public_client};
use smilecare_http::types::{
    ApiResponse, LoginData, LoginRequest, RegisterRequest, UserInfo, VerifyData,
};
use smilecare_http::ClientError;

/// Authentication API service
#[derive(Clone)]
pub struct AuthApiService;

impl AuthApiService {
    /// Create a new auth API service
    pub fn new() -> Self {
        Self
    }

    /// Submit credentials; returns the identity and the access token on
    /// success. The caller stores the token via the session store.
    pub async fn login(
        &self,
        email: String,
        password: String,
    ) -> Result<(UserInfo, String), ClientError> {
        let client = public_client()?;
        let request = client
            .request(reqwest::Method::POST, "/api/users/login")
            .json(&LoginRequest { email, password });

        let response: ApiResponse<LoginData> = client.execute(request).await?;
        Ok((response.data.user, response.data.tokens.access_token))
    }

    /// Create an account. Does not establish a session.
    pub async fn register(&self, profile: RegisterRequest) -> Result<(), ClientError> {
        let client = public_client()?;
        let request = client
            .request(reqwest::Method::POST, "/api/users/register")
            .json(&profile);

        let _: ApiResponse<serde_json::Value> = client.execute(request).await?;
        Ok(())
    }

    /// Resolve whether the stored token still represents a valid session.
    pub async fn verify(&self) -> Result<UserInfo, ClientError> {
        let client = authed_client()?;
        let request = client.request(reqwest::Method::GET, "/api/users/verify-token");

        let response: ApiResponse<VerifyData> = client.execute(request).await?;
        Ok(response.data.user)
    }

    /// Invalidate the session server-side. Best effort; the cookie is
    /// cleared by the session store regardless.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let client = authed_client()?;
        let request = client.request(reqwest::Method::POST, "/auth/logout");

        let _: serde_json::Value = client.execute(request).await?;
        Ok(())
    }
}

impl Default for AuthApiService {
    fn default() -> Self {
        Self::new()
    }
}
