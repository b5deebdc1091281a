mod auth;

pub use auth::AuthApiService;
