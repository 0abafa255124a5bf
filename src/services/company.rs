//! Company service implementation

use tracing::{debug, info};

use crate::database::DatabaseService;
use crate::models::company::{
    Company, CompanyWithStats, CreateCompanyRequest, UpdateCompanyRequest,
};
use crate::models::profile::{CompanyProfile, UpsertCompanyProfileRequest};
use crate::utils::errors::{FairHubError, Result};

/// Company service for company management operations
#[derive(Clone)]
pub struct CompanyService {
    db: DatabaseService,
}

impl CompanyService {
    /// Create a new CompanyService instance
    pub fn new(db: DatabaseService) -> Self {
        Self { db }
    }

    /// Create a company owned by a user
    pub async fn create_company(&self, request: CreateCompanyRequest) -> Result<Company> {
        if request.name.trim().is_empty() {
            return Err(FairHubError::InvalidInput(
                "Company name is required".to_string(),
            ));
        }

        self.db
            .users
            .find_by_id(request.owner_id)
            .await?
            .ok_or(FairHubError::UserNotFound {
                user_id: request.owner_id,
            })?;

        if self.db.companies.find_by_owner(request.owner_id).await?.is_some() {
            return Err(FairHubError::InvalidInput(format!(
                "User {} already owns a company",
                request.owner_id
            )));
        }

        let company = self.db.companies.create(request).await?;
        info!(company_id = company.id, owner_id = company.owner_id, "Company created");
        Ok(company)
    }

    /// Get company by ID
    pub async fn get_company(&self, company_id: i64) -> Result<Company> {
        self.db
            .companies
            .find_by_id(company_id)
            .await?
            .ok_or(FairHubError::CompanyNotFound { company_id })
    }

    /// Get the company owned by a user, if any
    pub async fn get_company_for_owner(&self, owner_id: i64) -> Result<Option<Company>> {
        self.db.companies.find_by_owner(owner_id).await
    }

    /// Update company fields
    pub async fn update_company(
        &self,
        company_id: i64,
        request: UpdateCompanyRequest,
    ) -> Result<Company> {
        self.get_company(company_id).await?;
        let company = self.db.companies.update(company_id, request).await?;
        debug!(company_id = company_id, "Company updated");
        Ok(company)
    }

    /// Delete a company
    pub async fn delete_company(&self, company_id: i64) -> Result<()> {
        self.get_company(company_id).await?;
        self.db.companies.delete(company_id).await?;
        info!(company_id = company_id, "Company deleted");
        Ok(())
    }

    /// List companies with pagination
    pub async fn list_companies(&self, limit: i64, offset: i64) -> Result<Vec<Company>> {
        if limit > 100 {
            return Err(FairHubError::InvalidInput(
                "Limit cannot exceed 100".to_string(),
            ));
        }
        self.db.companies.list(limit, offset).await
    }

    /// List companies with job/application/event counters
    pub async fn list_with_stats(&self) -> Result<Vec<CompanyWithStats>> {
        self.db.companies.list_with_stats().await
    }

    /// Get a company's profile, if set
    pub async fn get_profile(&self, company_id: i64) -> Result<Option<CompanyProfile>> {
        self.get_company(company_id).await?;
        self.db.profiles.find_company_profile(company_id).await
    }

    /// Create or update a company's profile
    pub async fn upsert_profile(
        &self,
        company_id: i64,
        request: UpsertCompanyProfileRequest,
    ) -> Result<CompanyProfile> {
        self.get_company(company_id).await?;
        self.db
            .profiles
            .upsert_company_profile(company_id, request)
            .await
    }
}
