//! Profile models for job seekers and companies

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobSeekerProfile {
    pub id: i64,
    pub user_id: i64,
    pub headline: Option<String>,
    pub skills: Option<String>,
    pub education: Option<String>,
    pub experience: Option<String>,
    /// Content hash of the uploaded resume, if any
    pub resume_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompanyProfile {
    pub id: i64,
    pub company_id: i64,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    /// Content hash of the uploaded logo, if any
    pub logo_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpsertJobSeekerProfileRequest {
    pub headline: Option<String>,
    pub skills: Option<String>,
    pub education: Option<String>,
    pub experience: Option<String>,
    pub resume_hash: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpsertCompanyProfileRequest {
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub logo_hash: Option<String>,
}
