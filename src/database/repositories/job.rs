//! Job repository implementation

use chrono::Utc;
use sqlx::PgPool;

use crate::models::job::{CreateJobRequest, Job, UpdateJobRequest};
use crate::utils::errors::FairHubError;

#[derive(Debug, Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new job posting
    pub async fn create(&self, request: CreateJobRequest) -> Result<Job, FairHubError> {
        let job = sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO jobs (company_id, event_id, title, description, requirements, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, company_id, event_id, title, description, requirements, is_open, created_at, updated_at
            "#,
        )
        .bind(request.company_id)
        .bind(request.event_id)
        .bind(request.title)
        .bind(request.description)
        .bind(request.requirements)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(job)
    }

    /// Find job by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Job>, FairHubError> {
        let job = sqlx::query_as::<_, Job>(
            "SELECT id, company_id, event_id, title, description, requirements, is_open, created_at, updated_at FROM jobs WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(job)
    }

    /// Update job
    pub async fn update(&self, id: i64, request: UpdateJobRequest) -> Result<Job, FairHubError> {
        let job = sqlx::query_as::<_, Job>(
            r#"
            UPDATE jobs
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                requirements = COALESCE($4, requirements),
                is_open = COALESCE($5, is_open),
                updated_at = $6
            WHERE id = $1
            RETURNING id, company_id, event_id, title, description, requirements, is_open, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(request.title)
        .bind(request.description)
        .bind(request.requirements)
        .bind(request.is_open)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(job)
    }

    /// Delete job
    pub async fn delete(&self, id: i64) -> Result<(), FairHubError> {
        sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// List jobs for an event
    pub async fn list_by_event(&self, event_id: i64) -> Result<Vec<Job>, FairHubError> {
        let jobs = sqlx::query_as::<_, Job>(
            "SELECT id, company_id, event_id, title, description, requirements, is_open, created_at, updated_at FROM jobs WHERE event_id = $1 ORDER BY created_at DESC"
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(jobs)
    }

    /// List jobs for a company
    pub async fn list_by_company(&self, company_id: i64) -> Result<Vec<Job>, FairHubError> {
        let jobs = sqlx::query_as::<_, Job>(
            "SELECT id, company_id, event_id, title, description, requirements, is_open, created_at, updated_at FROM jobs WHERE company_id = $1 ORDER BY created_at DESC"
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(jobs)
    }

    /// Count jobs a company has posted for a specific event
    pub async fn count_company_event_jobs(
        &self,
        company_id: i64,
        event_id: i64,
    ) -> Result<i64, FairHubError> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM jobs WHERE company_id = $1 AND event_id = $2")
                .bind(company_id)
                .bind(event_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count.0)
    }

    /// Count total jobs
    pub async fn count(&self) -> Result<i64, FairHubError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM jobs")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
