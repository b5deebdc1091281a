//! Service registry service

use reqwest::Method;
use smilecare_frontend_common::client::authed_client;
use smilecare_http::types::{ApiResponse, ServiceInfo, ServicePayload};
use smilecare_http::ClientError;

#[derive(Clone)]
pub struct ServiceRegistryService;

impl ServiceRegistryService {
    pub fn new() -> Self {
        Self
    }

    /// List the full service collection.
    pub async fn list(&self) -> Result<Vec<ServiceInfo>, ClientError> {
        let client = authed_client()?;
        let response: ApiResponse<Vec<ServiceInfo>> = client
            .execute(client.request(Method::GET, "/api/services"))
            .await?;
        Ok(response.data)
    }

    /// Create a new service.
    pub async fn create(&self, description: String) -> Result<(), ClientError> {
        let client = authed_client()?;
        let _: ApiResponse<serde_json::Value> = client
            .execute(
                client
                    .request(Method::POST, "/api/services")
                    .json(&ServicePayload { description }),
            )
            .await?;
        Ok(())
    }

    /// Update a service's description.
    pub async fn update(&self, service_id: i64, description: String) -> Result<(), ClientError> {
        let client = authed_client()?;
        let _: ApiResponse<serde_json::Value> = client
            .execute(
                client
                    .request(Method::PUT, &format!("/api/services/{service_id}"))
                    .json(&ServicePayload { description }),
            )
            .await?;
        Ok(())
    }

    /// Delete a service.
    pub async fn delete(&self, service_id: i64) -> Result<(), ClientError> {
        let client = authed_client()?;
        let _: ApiResponse<serde_json::Value> = client
            .execute(client.request(Method::DELETE, &format!("/api/services/{service_id}")))
            .await?;
        Ok(())
    }
}

impl Default for ServiceRegistryService {
    fn default() -> Self {
        Self::new()
    }
}
