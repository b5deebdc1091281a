//! Client configuration and initialization

use crate::cookie;
use once_cell::sync::Lazy;
use smilecare_http::{AuthedApiClient, ClientError, PublicApiClient};
use std::sync::Mutex;
use web_sys::window;

/// Global public client instance
static PUBLIC_CLIENT: Lazy<Mutex<Option<PublicApiClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the base URL for API calls
fn get_base_url() -> String {
    if let Some(window) = window() {
        if let Ok(origin) = window.location().origin() {
            return origin;
        }
    }
    String::new()
}

/// Get the public client instance (for login and registration).
pub fn public_client() -> Result<PublicApiClient, ClientError> {
    let mut client_lock = PUBLIC_CLIENT
        .lock()
        .expect("Failed to acquire public client lock");

    if let Some(client) = client_lock.as_ref() {
        return Ok(client.clone());
    }

    let client = PublicApiClient::new(get_base_url())?;
    *client_lock = Some(client.clone());
    Ok(client)
}

/// Get an authenticated client carrying the current session token.
///
/// The token is read from the cookie at call time, so every request observes
/// the latest credential; there is no cached authenticated client to go
/// stale after login or logout.
pub fn authed_client() -> Result<AuthedApiClient, ClientError> {
    let token = cookie::session_token()
        .ok_or_else(|| ClientError::Configuration("Not authenticated".into()))?;
    Ok(public_client()?.authenticate(token))
}
