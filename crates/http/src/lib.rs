//! HTTP client and wire types for the SmileCare booking API.
//!
//! The backend owns every entity and every business rule; this crate only
//! knows how to reach it. The client is split into a public half (login,
//! registration) and an authenticated half that attaches the bearer token,
//! so a call site cannot forget which one it needs.

pub mod client;
pub mod error;
pub mod types;

pub use client::{AuthedApiClient, PublicApiClient};
pub use error::ClientError;
