//! FairHub job-fair management platform
//!
//! Backend for career-fair administration: events with company stand
//! assignments, job postings, seeker applications with an append-only status
//! history, dashboards, CSV reports, and a content-addressed upload store.

pub mod api;
pub mod config;
pub mod database;
pub mod middleware;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{FairHubError, Result};

// Re-export main components for easy access
pub use api::{build_router, AppState};
pub use database::DatabaseService;
pub use services::ServiceFactory;
pub use storage::BlobStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
