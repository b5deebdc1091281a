//! Browser-side plumbing shared by every SmileCare screen: the session
//! store, the `token` cookie, the global API clients, and the handful of
//! presentational components each page reuses.

pub mod auth;
pub mod client;
pub mod components;
pub mod config;
pub mod cookie;
pub mod services;

pub use auth::context::{SessionAction, SessionContext, SessionPhase, SessionProvider};
pub use client::{authed_client, public_client};
pub use components::{EmptyState, ErrorBanner, Spinner, SuccessBanner};
pub use config::AuthConfig;
