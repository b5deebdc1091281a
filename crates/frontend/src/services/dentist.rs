//! Dentist registry service

use reqwest::Method;
use smilecare_frontend_common::client::authed_client;
use smilecare_http::types::{ApiResponse, Dentist, DentistUpdate};
use smilecare_http::ClientError;

#[derive(Clone)]
pub struct DentistService;

impl DentistService {
    pub fn new() -> Self {
        Self
    }

    /// List the full dentist collection.
    pub async fn list(&self) -> Result<Vec<Dentist>, ClientError> {
        let client = authed_client()?;
        let response: ApiResponse<Vec<Dentist>> = client
            .execute(client.request(Method::GET, "/api/dentists"))
            .await?;
        Ok(response.data)
    }

    /// Update a dentist's profile fields.
    pub async fn update(&self, user_id: i64, form: DentistUpdate) -> Result<(), ClientError> {
        let client = authed_client()?;
        let _: ApiResponse<serde_json::Value> = client
            .execute(
                client
                    .request(Method::PUT, &format!("/api/dentists/{user_id}"))
                    .json(&form),
            )
            .await?;
        Ok(())
    }

    /// Remove a dentist from the registry.
    pub async fn delete(&self, user_id: i64) -> Result<(), ClientError> {
        let client = authed_client()?;
        let _: ApiResponse<serde_json::Value> = client
            .execute(client.request(Method::DELETE, &format!("/api/dentists/{user_id}")))
            .await?;
        Ok(())
    }
}

impl Default for DentistService {
    fn default() -> Self {
        Self::new()
    }
}
