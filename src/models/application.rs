//! Job application model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Application lifecycle status, stored as a Postgres enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "application_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
    Reviewed,
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationStatus::Pending => write!(f, "PENDING"),
            ApplicationStatus::Accepted => write!(f, "ACCEPTED"),
            ApplicationStatus::Rejected => write!(f, "REJECTED"),
            ApplicationStatus::Reviewed => write!(f, "REVIEWED"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Application {
    pub id: i64,
    pub job_id: i64,
    pub job_seeker_id: i64,
    pub cover_letter: Option<String>,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Append-only record of a status mutation
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationStatusChange {
    pub id: i64,
    pub application_id: i64,
    pub old_status: ApplicationStatus,
    pub new_status: ApplicationStatus,
    pub changed_by: i64,
    pub changed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateApplicationRequest {
    pub job_id: i64,
    pub job_seeker_id: i64,
    pub cover_letter: Option<String>,
}
