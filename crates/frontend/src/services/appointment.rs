//! Appointment API service

use reqwest::Method;
use smilecare_frontend_common::client::authed_client;
use smilecare_http::types::{ApiResponse, Appointment, AppointmentUpdate, NewAppointment};
use smilecare_http::ClientError;

#[derive(Clone)]
pub struct AppointmentService;

impl AppointmentService {
    pub fn new() -> Self {
        Self
    }

    /// Fetch the appointment list scoped to a user. The backend resolves
    /// whether the id is a patient or a dentist.
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Appointment>, ClientError> {
        let client = authed_client()?;
        let response: ApiResponse<Vec<Appointment>> = client
            .execute(client.request(Method::GET, &format!("/api/appointments/{user_id}")))
            .await?;
        Ok(response.data)
    }

    /// Book a new appointment.
    pub async fn create(&self, appointment: NewAppointment) -> Result<(), ClientError> {
        let client = authed_client()?;
        let _: ApiResponse<serde_json::Value> = client
            .execute(
                client
                    .request(Method::POST, "/api/appointments")
                    .json(&appointment),
            )
            .await?;
        Ok(())
    }

    /// Update an appointment, typically a status change. The backend wants
    /// the full scheduling tuple back.
    pub async fn update(
        &self,
        appointment_id: i64,
        update: AppointmentUpdate,
    ) -> Result<(), ClientError> {
        let client = authed_client()?;
        let _: ApiResponse<serde_json::Value> = client
            .execute(
                client
                    .request(Method::PUT, &format!("/api/appointments/{appointment_id}"))
                    .json(&update),
            )
            .await?;
        Ok(())
    }
}

impl Default for AppointmentService {
    fn default() -> Self {
        Self::new()
    }
}
