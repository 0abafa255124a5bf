//! Job posting model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub id: i64,
    pub company_id: i64,
    pub event_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub is_open: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJobRequest {
    pub company_id: i64,
    pub event_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub requirements: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateJobRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub is_open: Option<bool>,
}
