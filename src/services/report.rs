//! Report service implementation
//!
//! Generates the CSV exports: job seekers, all users, and companies with
//! their events.

use tracing::info;

use crate::database::DatabaseService;
use crate::models::user::UserRole;
use crate::utils::csv;
use crate::utils::errors::{FairHubError, Result};

/// The report kinds the export endpoint offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    JobSeekers,
    AllUsers,
    CompaniesWithEvents,
}

impl ReportKind {
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "job_seekers" => Ok(ReportKind::JobSeekers),
            "all_users" => Ok(ReportKind::AllUsers),
            "companies_with_events" => Ok(ReportKind::CompaniesWithEvents),
            other => Err(FairHubError::InvalidInput(format!(
                "Unknown report kind: {}",
                other
            ))),
        }
    }

    /// Suggested download filename
    pub fn file_name(&self) -> &'static str {
        match self {
            ReportKind::JobSeekers => "job_seekers.csv",
            ReportKind::AllUsers => "all_users.csv",
            ReportKind::CompaniesWithEvents => "companies_with_events.csv",
        }
    }
}

/// Report service for CSV exports
#[derive(Clone)]
pub struct ReportService {
    db: DatabaseService,
}

impl ReportService {
    /// Create a new ReportService instance
    pub fn new(db: DatabaseService) -> Self {
        Self { db }
    }

    /// Generate the CSV text for a report kind
    pub async fn generate(&self, kind: ReportKind) -> Result<String> {
        let text = match kind {
            ReportKind::JobSeekers => self.job_seekers_report().await?,
            ReportKind::AllUsers => self.all_users_report().await?,
            ReportKind::CompaniesWithEvents => self.companies_with_events_report().await?,
        };

        info!(report = kind.file_name(), bytes = text.len(), "Report generated");
        Ok(text)
    }

    async fn job_seekers_report(&self) -> Result<String> {
        let seekers = self.db.users.list_by_role(UserRole::JobSeeker).await?;
        let profiles = self.db.profiles.list_seeker_profiles().await?;

        let rows = seekers
            .iter()
            .map(|user| {
                let profile = profiles.iter().find(|p| p.user_id == user.id);
                vec![
                    user.id.to_string(),
                    user.full_name.clone(),
                    user.email.clone(),
                    profile
                        .and_then(|p| p.headline.clone())
                        .unwrap_or_default(),
                    profile.and_then(|p| p.skills.clone()).unwrap_or_default(),
                    user.created_at.to_rfc3339(),
                ]
            })
            .collect::<Vec<_>>();

        Ok(csv::write_document(
            &["id", "full_name", "email", "headline", "skills", "registered_at"],
            &rows,
        ))
    }

    async fn all_users_report(&self) -> Result<String> {
        // Pull pages until exhausted so the export is complete
        let mut rows = Vec::new();
        let page_size = 100;
        let mut offset = 0;
        loop {
            let users = self.db.users.list(page_size, offset).await?;
            let done = (users.len() as i64) < page_size;
            for user in users {
                rows.push(vec![
                    user.id.to_string(),
                    user.full_name,
                    user.email,
                    user.role.to_string(),
                    user.is_active.to_string(),
                    user.created_at.to_rfc3339(),
                ]);
            }
            if done {
                break;
            }
            offset += page_size;
        }

        Ok(csv::write_document(
            &["id", "full_name", "email", "role", "is_active", "registered_at"],
            &rows,
        ))
    }

    async fn companies_with_events_report(&self) -> Result<String> {
        let companies = self.db.companies.list_with_stats().await?;

        let mut rows = Vec::new();
        for company in companies {
            let events = self.db.events.get_company_events(company.id).await?;
            let event_titles = events
                .iter()
                .map(|e| e.title.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            rows.push(vec![
                company.id.to_string(),
                company.name,
                company.job_count.to_string(),
                company.application_count.to_string(),
                event_titles,
            ]);
        }

        Ok(csv::write_document(
            &["id", "name", "job_count", "application_count", "events"],
            &rows,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_kind_parse() {
        assert_eq!(
            ReportKind::parse("job_seekers").unwrap(),
            ReportKind::JobSeekers
        );
        assert_eq!(ReportKind::parse("all_users").unwrap(), ReportKind::AllUsers);
        assert!(ReportKind::parse("everything").is_err());
    }
}
