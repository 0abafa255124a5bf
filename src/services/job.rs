//! Job service implementation

use tracing::info;

use crate::database::DatabaseService;
use crate::models::job::{CreateJobRequest, Job, UpdateJobRequest};
use crate::utils::errors::{FairHubError, Result};

/// Job service for posting management
#[derive(Clone)]
pub struct JobService {
    db: DatabaseService,
}

impl JobService {
    /// Create a new JobService instance
    pub fn new(db: DatabaseService) -> Self {
        Self { db }
    }

    /// Create a job posting
    ///
    /// The company must already participate in the target event.
    pub async fn create_job(&self, request: CreateJobRequest) -> Result<Job> {
        if request.title.trim().is_empty() {
            return Err(FairHubError::InvalidInput(
                "Job title is required".to_string(),
            ));
        }

        self.db
            .events
            .find_by_id(request.event_id)
            .await?
            .ok_or(FairHubError::EventNotFound {
                event_id: request.event_id,
            })?;

        if !self
            .db
            .events
            .is_participating(request.event_id, request.company_id)
            .await?
        {
            return Err(FairHubError::PermissionDenied(format!(
                "Company {} does not participate in event {}",
                request.company_id, request.event_id
            )));
        }

        let job = self.db.jobs.create(request).await?;
        info!(job_id = job.id, company_id = job.company_id, event_id = job.event_id, "Job posted");
        Ok(job)
    }

    /// Get job by ID
    pub async fn get_job(&self, job_id: i64) -> Result<Job> {
        self.db
            .jobs
            .find_by_id(job_id)
            .await?
            .ok_or(FairHubError::JobNotFound { job_id })
    }

    /// Update job fields
    pub async fn update_job(&self, job_id: i64, request: UpdateJobRequest) -> Result<Job> {
        self.get_job(job_id).await?;
        self.db.jobs.update(job_id, request).await
    }

    /// Delete a job
    pub async fn delete_job(&self, job_id: i64) -> Result<()> {
        self.get_job(job_id).await?;
        self.db.jobs.delete(job_id).await?;
        info!(job_id = job_id, "Job deleted");
        Ok(())
    }

    /// List jobs for an event
    pub async fn list_by_event(&self, event_id: i64) -> Result<Vec<Job>> {
        self.db.jobs.list_by_event(event_id).await
    }

    /// List jobs for a company
    pub async fn list_by_company(&self, company_id: i64) -> Result<Vec<Job>> {
        self.db.jobs.list_by_company(company_id).await
    }
}
