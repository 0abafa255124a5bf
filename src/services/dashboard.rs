//! Dashboard service implementation
//!
//! Aggregates the platform totals shown on the admin overview.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::database::DatabaseService;
use crate::models::application::ApplicationStatus;
use crate::models::user::UserRole;
use crate::utils::errors::Result;

/// Platform-wide totals for the admin overview
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewStats {
    pub total_users: i64,
    pub admin_users: i64,
    pub company_users: i64,
    pub job_seeker_users: i64,
    pub total_companies: i64,
    pub total_events: i64,
    pub total_jobs: i64,
    pub total_applications: i64,
    pub pending_applications: i64,
    pub accepted_applications: i64,
    pub rejected_applications: i64,
    pub reviewed_applications: i64,
}

/// Dashboard service for aggregate queries
#[derive(Clone)]
pub struct DashboardService {
    db: DatabaseService,
}

impl DashboardService {
    /// Create a new DashboardService instance
    pub fn new(db: DatabaseService) -> Self {
        Self { db }
    }

    /// Collect the overview totals
    pub async fn overview_stats(&self) -> Result<OverviewStats> {
        debug!("Collecting overview stats");

        let stats = OverviewStats {
            total_users: self.db.users.count().await?,
            admin_users: self.db.users.count_by_role(UserRole::Admin).await?,
            company_users: self.db.users.count_by_role(UserRole::Company).await?,
            job_seeker_users: self.db.users.count_by_role(UserRole::JobSeeker).await?,
            total_companies: self.db.companies.count().await?,
            total_events: self.db.events.count().await?,
            total_jobs: self.db.jobs.count().await?,
            total_applications: self.db.applications.count().await?,
            pending_applications: self
                .db
                .applications
                .count_by_status(ApplicationStatus::Pending)
                .await?,
            accepted_applications: self
                .db
                .applications
                .count_by_status(ApplicationStatus::Accepted)
                .await?,
            rejected_applications: self
                .db
                .applications
                .count_by_status(ApplicationStatus::Rejected)
                .await?,
            reviewed_applications: self
                .db
                .applications
                .count_by_status(ApplicationStatus::Reviewed)
                .await?,
        };

        Ok(stats)
    }
}
