//! Application service implementation
//!
//! Enforces the application rules: one application per (seeker, job) pair
//! and at most `EVENT_APPLICATION_LIMIT` applications per seeker within one
//! event. Status changes append to the history log.

use tracing::{info, warn};

use crate::database::DatabaseService;
use crate::models::application::{
    Application, ApplicationStatus, ApplicationStatusChange, CreateApplicationRequest,
};
use crate::utils::errors::{FairHubError, Result};

/// Maximum applications one seeker may create within a single event
pub const EVENT_APPLICATION_LIMIT: i64 = 5;

/// Application service for seeker applications and reviewer decisions
#[derive(Clone)]
pub struct ApplicationService {
    db: DatabaseService,
}

impl ApplicationService {
    /// Create a new ApplicationService instance
    pub fn new(db: DatabaseService) -> Self {
        Self { db }
    }

    /// Create an application for a job
    pub async fn create_application(
        &self,
        request: CreateApplicationRequest,
    ) -> Result<Application> {
        let job = self
            .db
            .jobs
            .find_by_id(request.job_id)
            .await?
            .ok_or(FairHubError::JobNotFound {
                job_id: request.job_id,
            })?;

        if !job.is_open {
            return Err(FairHubError::InvalidInput(format!(
                "Job {} is closed for applications",
                job.id
            )));
        }

        if self
            .db
            .applications
            .exists(request.job_id, request.job_seeker_id)
            .await?
        {
            warn!(
                job_id = request.job_id,
                job_seeker_id = request.job_seeker_id,
                "Application rejected, duplicate"
            );
            return Err(FairHubError::DuplicateApplication {
                job_id: request.job_id,
            });
        }

        let current = self
            .db
            .applications
            .count_for_event(job.event_id, request.job_seeker_id)
            .await?;
        if current >= EVENT_APPLICATION_LIMIT {
            warn!(
                event_id = job.event_id,
                job_seeker_id = request.job_seeker_id,
                current = current,
                "Application rejected, event limit reached"
            );
            return Err(FairHubError::ApplicationLimitExceeded {
                event_id: job.event_id,
                limit: EVENT_APPLICATION_LIMIT,
            });
        }

        let application = self.db.applications.create(request).await?;
        info!(
            application_id = application.id,
            job_id = application.job_id,
            job_seeker_id = application.job_seeker_id,
            "Application created"
        );
        Ok(application)
    }

    /// Get application by ID
    pub async fn get_application(&self, application_id: i64) -> Result<Application> {
        self.db
            .applications
            .find_by_id(application_id)
            .await?
            .ok_or(FairHubError::ApplicationNotFound { application_id })
    }

    /// List applications for a job
    pub async fn list_for_job(&self, job_id: i64) -> Result<Vec<Application>> {
        self.db
            .jobs
            .find_by_id(job_id)
            .await?
            .ok_or(FairHubError::JobNotFound { job_id })?;
        self.db.applications.list_by_job(job_id).await
    }

    /// List a seeker's applications
    pub async fn list_for_seeker(&self, job_seeker_id: i64) -> Result<Vec<Application>> {
        self.db.applications.list_by_seeker(job_seeker_id).await
    }

    /// Change an application's status, recording the change in the history
    pub async fn set_status(
        &self,
        application_id: i64,
        new_status: ApplicationStatus,
        changed_by: i64,
    ) -> Result<Application> {
        let existing = self.get_application(application_id).await?;
        let application = self
            .db
            .applications
            .set_status(application_id, new_status, changed_by)
            .await?;

        crate::utils::logging::log_status_change(
            application_id,
            &existing.status.to_string(),
            &new_status.to_string(),
            changed_by,
        );

        Ok(application)
    }

    /// Get the status history for an application
    pub async fn status_history(
        &self,
        application_id: i64,
    ) -> Result<Vec<ApplicationStatusChange>> {
        self.get_application(application_id).await?;
        self.db.applications.get_status_history(application_id).await
    }
}
