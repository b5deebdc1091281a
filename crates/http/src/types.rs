//! Wire types for the booking API.
//!
//! Field names mirror the backend's JSON verbatim (camelCase, with aliases
//! for the couple of fields the service registry capitalizes differently).
//! The client never owns these records; they are transient copies of whatever
//! the last fetch returned.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Standard response envelope: `{ "data": ..., "message"?: ... }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
}

/// Authenticated identity as returned by login and verify-token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub user_id: i64,
    pub role_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl UserInfo {
    pub fn role(&self) -> Option<Role> {
        Role::from_role_id(self.role_id)
    }

    pub fn is_dentist(&self) -> bool {
        self.role() == Some(Role::Dentist)
    }
}

/// The two roles the backend issues. Anything else matches no role
/// requirement and gets no role-gated screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Dentist,
    Patient,
}

impl Role {
    pub fn from_role_id(role_id: i32) -> Option<Self> {
        match role_id {
            1 => Some(Self::Dentist),
            2 => Some(Self::Patient),
            _ => None,
        }
    }

    pub fn role_id(self) -> i32 {
        match self {
            Self::Dentist => 1,
            Self::Patient => 2,
        }
    }
}

/// Appointment status code as the backend stores it: a single letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    /// Any code outside {P, C, D, X}. Rendered with a neutral badge,
    /// never an error.
    Unknown,
}

impl AppointmentStatus {
    pub fn from_code(code: &str) -> Self {
        match code {
            "P" => Self::Pending,
            "C" => Self::Confirmed,
            "D" => Self::Completed,
            "X" => Self::Cancelled,
            _ => Self::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Unknown => "Unknown",
        }
    }
}

/// Minimal person reference embedded in appointments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRef {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// A dentist record from the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dentist {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// A service record. The backend is inconsistent about capitalization on
/// this table, hence the aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    #[serde(alias = "ServiceId")]
    pub service_id: i64,
    #[serde(alias = "Description")]
    pub description: String,
}

/// An appointment as returned by `GET /api/appointments/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub appointment_id: i64,
    pub appointment_date: String,
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub patient: PersonRef,
    pub dentist: PersonRef,
    pub service: ServiceInfo,
}

impl Appointment {
    pub fn status(&self) -> AppointmentStatus {
        AppointmentStatus::from_code(&self.status)
    }

    /// The appointment instant in the client's local timezone, or None when
    /// the backend sent something unparseable.
    pub fn date_local(&self) -> Option<DateTime<Local>> {
        parse_local_datetime(&self.appointment_date)
    }
}

/// Parse the backend's date strings: full RFC 3339 or the truncated
/// `YYYY-MM-DDTHH:MM[:SS]` form the scheduling form submits.
pub fn parse_local_datetime(raw: &str) -> Option<DateTime<Local>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Local));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Local.from_local_datetime(&naive).single();
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    pub password: String,
    pub role_id: i32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub appointment_date: String,
    pub dentist_user_id: i64,
    pub service_id: i64,
    pub patient_user_id: i64,
    pub notes: String,
    pub status: String,
}

/// Body for `PUT /api/appointments/:id`; the backend requires the full
/// scheduling tuple even for a status-only change.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentUpdate {
    pub status: String,
    pub patient_user_id: i64,
    pub dentist_user_id: i64,
    pub appointment_date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServicePayload {
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DentistUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

// ---------------------------------------------------------------------------
// Response payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Payload of a successful login: the identity plus the session tokens.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    pub user: UserInfo,
    pub tokens: TokenPair,
}

/// Payload of `GET /api/users/verify-token`.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyData {
    pub user: UserInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_labels() {
        assert_eq!(AppointmentStatus::from_code("P").label(), "Pending");
        assert_eq!(AppointmentStatus::from_code("C").label(), "Confirmed");
        assert_eq!(AppointmentStatus::from_code("D").label(), "Completed");
        assert_eq!(AppointmentStatus::from_code("X").label(), "Cancelled");
    }

    #[test]
    fn unexpected_status_codes_fall_back_to_unknown() {
        for code in ["", "Z", "PX", "p", "pending"] {
            assert_eq!(AppointmentStatus::from_code(code), AppointmentStatus::Unknown);
            assert_eq!(AppointmentStatus::from_code(code).label(), "Unknown");
        }
    }

    #[test]
    fn role_ids_map_both_ways() {
        assert_eq!(Role::from_role_id(1), Some(Role::Dentist));
        assert_eq!(Role::from_role_id(2), Some(Role::Patient));
        assert_eq!(Role::from_role_id(0), None);
        assert_eq!(Role::Dentist.role_id(), 1);
    }

    #[test]
    fn service_aliases_accept_backend_capitalization() {
        let upper: ServiceInfo =
            serde_json::from_str(r#"{"ServiceId": 3, "Description": "Cleaning"}"#).unwrap();
        let lower: ServiceInfo =
            serde_json::from_str(r#"{"serviceId": 3, "description": "Cleaning"}"#).unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.description, "Cleaning");
    }

    #[test]
    fn appointment_deserializes_from_envelope() {
        let body = r#"{
            "data": [{
                "appointmentId": 12,
                "appointmentDate": "2026-08-29T10:30:00.000Z",
                "status": "P",
                "notes": "sensitive molar",
                "patient": {"userId": 7, "firstName": "Ana", "lastName": "Reyes"},
                "dentist": {"userId": 2, "firstName": "Luis", "lastName": "Cruz"},
                "service": {"ServiceId": 1, "Description": "Cleaning"}
            }]
        }"#;
        let parsed: ApiResponse<Vec<Appointment>> = serde_json::from_str(body).unwrap();
        let appointment = &parsed.data[0];
        assert_eq!(appointment.status(), AppointmentStatus::Pending);
        assert!(appointment.date_local().is_some());
    }

    #[test]
    fn parses_truncated_form_dates() {
        assert!(parse_local_datetime("2026-08-29T10:30").is_some());
        assert!(parse_local_datetime("2026-08-29T10:30:15").is_some());
        assert!(parse_local_datetime("not a date").is_none());
    }
}
