//! Profile repository implementation

use chrono::Utc;
use sqlx::PgPool;

use crate::models::profile::{
    CompanyProfile, JobSeekerProfile, UpsertCompanyProfileRequest, UpsertJobSeekerProfileRequest,
};
use crate::utils::errors::FairHubError;

#[derive(Debug, Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a job seeker's profile
    pub async fn find_seeker_profile(
        &self,
        user_id: i64,
    ) -> Result<Option<JobSeekerProfile>, FairHubError> {
        let profile = sqlx::query_as::<_, JobSeekerProfile>(
            "SELECT id, user_id, headline, skills, education, experience, resume_hash, created_at, updated_at FROM job_seeker_profiles WHERE user_id = $1"
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    /// Create or update a job seeker's profile
    pub async fn upsert_seeker_profile(
        &self,
        user_id: i64,
        request: UpsertJobSeekerProfileRequest,
    ) -> Result<JobSeekerProfile, FairHubError> {
        let profile = sqlx::query_as::<_, JobSeekerProfile>(
            r#"
            INSERT INTO job_seeker_profiles (user_id, headline, skills, education, experience, resume_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            ON CONFLICT (user_id) DO UPDATE
            SET headline = COALESCE(EXCLUDED.headline, job_seeker_profiles.headline),
                skills = COALESCE(EXCLUDED.skills, job_seeker_profiles.skills),
                education = COALESCE(EXCLUDED.education, job_seeker_profiles.education),
                experience = COALESCE(EXCLUDED.experience, job_seeker_profiles.experience),
                resume_hash = COALESCE(EXCLUDED.resume_hash, job_seeker_profiles.resume_hash),
                updated_at = EXCLUDED.updated_at
            RETURNING id, user_id, headline, skills, education, experience, resume_hash, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(request.headline)
        .bind(request.skills)
        .bind(request.education)
        .bind(request.experience)
        .bind(request.resume_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(profile)
    }

    /// List all job seeker profiles (for reporting)
    pub async fn list_seeker_profiles(&self) -> Result<Vec<JobSeekerProfile>, FairHubError> {
        let profiles = sqlx::query_as::<_, JobSeekerProfile>(
            "SELECT id, user_id, headline, skills, education, experience, resume_hash, created_at, updated_at FROM job_seeker_profiles ORDER BY user_id ASC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(profiles)
    }

    /// Find a company's profile
    pub async fn find_company_profile(
        &self,
        company_id: i64,
    ) -> Result<Option<CompanyProfile>, FairHubError> {
        let profile = sqlx::query_as::<_, CompanyProfile>(
            "SELECT id, company_id, contact_email, contact_phone, logo_hash, created_at, updated_at FROM company_profiles WHERE company_id = $1"
        )
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    /// Create or update a company's profile
    pub async fn upsert_company_profile(
        &self,
        company_id: i64,
        request: UpsertCompanyProfileRequest,
    ) -> Result<CompanyProfile, FairHubError> {
        let profile = sqlx::query_as::<_, CompanyProfile>(
            r#"
            INSERT INTO company_profiles (company_id, contact_email, contact_phone, logo_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            ON CONFLICT (company_id) DO UPDATE
            SET contact_email = COALESCE(EXCLUDED.contact_email, company_profiles.contact_email),
                contact_phone = COALESCE(EXCLUDED.contact_phone, company_profiles.contact_phone),
                logo_hash = COALESCE(EXCLUDED.logo_hash, company_profiles.logo_hash),
                updated_at = EXCLUDED.updated_at
            RETURNING id, company_id, contact_email, contact_phone, logo_hash, created_at, updated_at
            "#,
        )
        .bind(company_id)
        .bind(request.contact_email)
        .bind(request.contact_phone)
        .bind(request.logo_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(profile)
    }
}
