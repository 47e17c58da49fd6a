/// Account Service Library
///
/// Provides account lifecycle and credential management for the Storefront
/// backend: registration, credential verification, token issuance, and
/// self-service profile update/delete.
///
/// ## Modules
///
/// - `config`: Service configuration
/// - `db`: Account store contract and Postgres implementation
/// - `error`: Error types
/// - `http`: HTTP API (axum boundary layer)
/// - `models`: Data models
/// - `security`: Password hashing and token issuance
/// - `services`: Business logic (account lifecycle)
pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod security;
pub mod services;

// Re-export commonly used types
pub use error::{AccountError, Result};
pub use services::AccountService;
