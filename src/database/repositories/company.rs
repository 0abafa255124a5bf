//! Company repository implementation

use chrono::Utc;
use sqlx::PgPool;

use crate::models::company::{Company, CompanyWithStats, CreateCompanyRequest, UpdateCompanyRequest};
use crate::utils::errors::FairHubError;

#[derive(Debug, Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new company
    ///
    /// The unique index on owner_id backstops the service pre-check.
    pub async fn create(&self, request: CreateCompanyRequest) -> Result<Company, FairHubError> {
        let owner_id = request.owner_id;
        let company = sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO companies (name, description, website, owner_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, description, website, owner_id, created_at, updated_at
            "#,
        )
        .bind(request.name)
        .bind(request.description)
        .bind(request.website)
        .bind(request.owner_id)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db) if db.is_unique_violation() => FairHubError::InvalidInput(format!(
                "User {} already owns a company",
                owner_id
            )),
            _ => e.into(),
        })?;

        Ok(company)
    }

    /// Find company by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Company>, FairHubError> {
        let company = sqlx::query_as::<_, Company>(
            "SELECT id, name, description, website, owner_id, created_at, updated_at FROM companies WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(company)
    }

    /// Find company owned by a user
    pub async fn find_by_owner(&self, owner_id: i64) -> Result<Option<Company>, FairHubError> {
        let company = sqlx::query_as::<_, Company>(
            "SELECT id, name, description, website, owner_id, created_at, updated_at FROM companies WHERE owner_id = $1"
        )
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(company)
    }

    /// Update company
    pub async fn update(
        &self,
        id: i64,
        request: UpdateCompanyRequest,
    ) -> Result<Company, FairHubError> {
        let company = sqlx::query_as::<_, Company>(
            r#"
            UPDATE companies
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                website = COALESCE($4, website),
                updated_at = $5
            WHERE id = $1
            RETURNING id, name, description, website, owner_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(request.name)
        .bind(request.description)
        .bind(request.website)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(company)
    }

    /// Delete company
    pub async fn delete(&self, id: i64) -> Result<(), FairHubError> {
        sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// List companies with pagination
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Company>, FairHubError> {
        let companies = sqlx::query_as::<_, Company>(
            "SELECT id, name, description, website, owner_id, created_at, updated_at FROM companies ORDER BY name ASC LIMIT $1 OFFSET $2"
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(companies)
    }

    /// List companies with job, application, and event counters
    pub async fn list_with_stats(&self) -> Result<Vec<CompanyWithStats>, FairHubError> {
        let companies = sqlx::query_as::<_, CompanyWithStats>(
            r#"
            SELECT c.id, c.name, c.description, c.website, c.owner_id,
                   COUNT(DISTINCT j.id) AS job_count,
                   COUNT(DISTINCT a.id) AS application_count,
                   COUNT(DISTINCT ep.event_id) AS event_count,
                   c.created_at, c.updated_at
            FROM companies c
            LEFT JOIN jobs j ON j.company_id = c.id
            LEFT JOIN applications a ON a.job_id = j.id
            LEFT JOIN event_participations ep ON ep.company_id = c.id
            GROUP BY c.id
            ORDER BY c.name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(companies)
    }

    /// Count total companies
    pub async fn count(&self) -> Result<i64, FairHubError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM companies")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
