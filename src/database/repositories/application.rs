//! Application repository implementation
//!
//! Status history rows are append-only; nothing in this repository updates
//! or deletes them.

use chrono::Utc;
use sqlx::PgPool;

use crate::models::application::{
    Application, ApplicationStatus, ApplicationStatusChange, CreateApplicationRequest,
};
use crate::utils::errors::FairHubError;

#[derive(Debug, Clone)]
pub struct ApplicationRepository {
    pool: PgPool,
}

impl ApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new application
    ///
    /// The UNIQUE(job_id, job_seeker_id) constraint backstops the service
    /// pre-check; a violation surfaces as the same duplicate error.
    pub async fn create(
        &self,
        request: CreateApplicationRequest,
    ) -> Result<Application, FairHubError> {
        let job_id = request.job_id;
        let application = sqlx::query_as::<_, Application>(
            r#"
            INSERT INTO applications (job_id, job_seeker_id, cover_letter, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, job_id, job_seeker_id, cover_letter, status, created_at, updated_at
            "#,
        )
        .bind(request.job_id)
        .bind(request.job_seeker_id)
        .bind(request.cover_letter)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db) if db.is_unique_violation() => {
                FairHubError::DuplicateApplication { job_id }
            }
            _ => e.into(),
        })?;

        Ok(application)
    }

    /// Find application by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Application>, FairHubError> {
        let application = sqlx::query_as::<_, Application>(
            "SELECT id, job_id, job_seeker_id, cover_letter, status, created_at, updated_at FROM applications WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(application)
    }

    /// Check if a seeker already applied to a job
    pub async fn exists(&self, job_id: i64, job_seeker_id: i64) -> Result<bool, FairHubError> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM applications WHERE job_id = $1 AND job_seeker_id = $2",
        )
        .bind(job_id)
        .bind(job_seeker_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0 > 0)
    }

    /// Count a seeker's applications within one event
    pub async fn count_for_event(
        &self,
        event_id: i64,
        job_seeker_id: i64,
    ) -> Result<i64, FairHubError> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM applications a
            INNER JOIN jobs j ON a.job_id = j.id
            WHERE j.event_id = $1 AND a.job_seeker_id = $2
            "#,
        )
        .bind(event_id)
        .bind(job_seeker_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }

    /// List applications for a job
    pub async fn list_by_job(&self, job_id: i64) -> Result<Vec<Application>, FairHubError> {
        let applications = sqlx::query_as::<_, Application>(
            "SELECT id, job_id, job_seeker_id, cover_letter, status, created_at, updated_at FROM applications WHERE job_id = $1 ORDER BY created_at ASC"
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(applications)
    }

    /// List a seeker's applications
    pub async fn list_by_seeker(
        &self,
        job_seeker_id: i64,
    ) -> Result<Vec<Application>, FairHubError> {
        let applications = sqlx::query_as::<_, Application>(
            "SELECT id, job_id, job_seeker_id, cover_letter, status, created_at, updated_at FROM applications WHERE job_seeker_id = $1 ORDER BY created_at DESC"
        )
        .bind(job_seeker_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(applications)
    }

    /// Update application status and append a history row in one transaction
    pub async fn set_status(
        &self,
        id: i64,
        new_status: ApplicationStatus,
        changed_by: i64,
    ) -> Result<Application, FairHubError> {
        let mut tx = self.pool.begin().await?;

        // Lock the row so the history entry records the status we replace
        let old_status: (ApplicationStatus,) =
            sqlx::query_as("SELECT status FROM applications WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;

        let application = sqlx::query_as::<_, Application>(
            r#"
            UPDATE applications
            SET status = $2, updated_at = $3
            WHERE id = $1
            RETURNING id, job_id, job_seeker_id, cover_letter, status, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(new_status)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO application_status_changes (application_id, old_status, new_status, changed_by, changed_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(old_status.0)
        .bind(new_status)
        .bind(changed_by)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(application)
    }

    /// Get the status change history for an application
    pub async fn get_status_history(
        &self,
        application_id: i64,
    ) -> Result<Vec<ApplicationStatusChange>, FairHubError> {
        let changes = sqlx::query_as::<_, ApplicationStatusChange>(
            "SELECT id, application_id, old_status, new_status, changed_by, changed_at FROM application_status_changes WHERE application_id = $1 ORDER BY changed_at ASC"
        )
        .bind(application_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(changes)
    }

    /// Count total applications
    pub async fn count(&self) -> Result<i64, FairHubError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM applications")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    /// Count applications per status
    pub async fn count_by_status(&self, status: ApplicationStatus) -> Result<i64, FairHubError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM applications WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
