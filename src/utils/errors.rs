//! Error handling for FairHub
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the FairHub application
#[derive(Error, Debug)]
pub enum FairHubError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: i64 },

    #[error("Company not found: {company_id}")]
    CompanyNotFound { company_id: i64 },

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: i64 },

    #[error("Job not found: {job_id}")]
    JobNotFound { job_id: i64 },

    #[error("Application not found: {application_id}")]
    ApplicationNotFound { application_id: i64 },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate application for job {job_id}")]
    DuplicateApplication { job_id: i64 },

    #[error("Application limit of {limit} reached for event {event_id}")]
    ApplicationLimitExceeded { event_id: i64, limit: i64 },

    #[error("Company {company_id} already joined event {event_id}")]
    AlreadyJoined { company_id: i64, event_id: i64 },

    #[error("Stand {stand_number} is already taken for event {event_id}")]
    StandTaken { event_id: i64, stand_number: String },

    #[error("Company {company_id} still has jobs posted for event {event_id}")]
    JobsStillPosted { company_id: i64, event_id: i64 },

    #[error("Email already registered: {email}")]
    EmailTaken { email: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for FairHub operations
pub type Result<T> = std::result::Result<T, FairHubError>;

/// Error categories surfaced at the RPC boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller is not authenticated
    Unauthorized,
    /// Caller is authenticated but lacks the required role
    Forbidden,
    /// Input failed validation
    Validation,
    /// Referenced entity does not exist
    NotFound,
    /// A business rule rejected the operation
    Conflict,
    /// Everything else
    Internal,
}

impl FairHubError {
    /// Classify the error for transport-boundary mapping
    pub fn category(&self) -> ErrorCategory {
        match self {
            FairHubError::Authentication(_) => ErrorCategory::Unauthorized,
            FairHubError::PermissionDenied(_) => ErrorCategory::Forbidden,
            FairHubError::InvalidInput(_) => ErrorCategory::Validation,
            FairHubError::UserNotFound { .. }
            | FairHubError::CompanyNotFound { .. }
            | FairHubError::EventNotFound { .. }
            | FairHubError::JobNotFound { .. }
            | FairHubError::ApplicationNotFound { .. }
            | FairHubError::NotFound(_) => ErrorCategory::NotFound,
            FairHubError::DuplicateApplication { .. }
            | FairHubError::ApplicationLimitExceeded { .. }
            | FairHubError::AlreadyJoined { .. }
            | FairHubError::StandTaken { .. }
            | FairHubError::JobsStillPosted { .. }
            | FairHubError::EmailTaken { .. } => ErrorCategory::Conflict,
            _ => ErrorCategory::Internal,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Unauthorized | ErrorCategory::Forbidden => ErrorSeverity::Warning,
            ErrorCategory::Validation | ErrorCategory::NotFound | ErrorCategory::Conflict => {
                ErrorSeverity::Info
            }
            ErrorCategory::Internal => match self {
                FairHubError::Database(_)
                | FairHubError::Migration(_)
                | FairHubError::Config(_) => ErrorSeverity::Critical,
                _ => ErrorSeverity::Error,
            },
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_map_to_conflict() {
        let err = FairHubError::DuplicateApplication { job_id: 7 };
        assert_eq!(err.category(), ErrorCategory::Conflict);

        let err = FairHubError::StandTaken {
            event_id: 1,
            stand_number: "A-1".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Conflict);
    }

    #[test]
    fn test_auth_errors_categorize() {
        let err = FairHubError::Authentication("missing token".to_string());
        assert_eq!(err.category(), ErrorCategory::Unauthorized);

        let err = FairHubError::PermissionDenied("admin only".to_string());
        assert_eq!(err.category(), ErrorCategory::Forbidden);
        assert_eq!(err.severity(), ErrorSeverity::Warning);
    }
}
