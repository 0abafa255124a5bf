//! User repository implementation

use chrono::Utc;
use sqlx::PgPool;

use crate::models::user::{CreateUserRequest, User, UserRole};
use crate::utils::errors::FairHubError;

#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user
    ///
    /// The unique index on email backstops the service pre-check.
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, FairHubError> {
        let email = request.email.clone();
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, full_name, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, email, password_hash, full_name, role, is_active, created_at, updated_at
            "#,
        )
        .bind(request.email)
        .bind(request.password_hash)
        .bind(request.full_name)
        .bind(request.role)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db) if db.is_unique_violation() => FairHubError::EmailTaken { email },
            _ => e.into(),
        })?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, FairHubError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash, full_name, role, is_active, created_at, updated_at FROM users WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, FairHubError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash, full_name, role, is_active, created_at, updated_at FROM users WHERE email = $1"
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// List all users with pagination
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<User>, FairHubError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash, full_name, role, is_active, created_at, updated_at FROM users ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// List users with a given role
    pub async fn list_by_role(&self, role: UserRole) -> Result<Vec<User>, FairHubError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash, full_name, role, is_active, created_at, updated_at FROM users WHERE role = $1 ORDER BY created_at DESC"
        )
        .bind(role)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// Count total users
    pub async fn count(&self) -> Result<i64, FairHubError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    /// Count users with a given role
    pub async fn count_by_role(&self, role: UserRole) -> Result<i64, FairHubError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE role = $1")
            .bind(role)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    /// Activate/deactivate user
    pub async fn set_active(&self, id: i64, is_active: bool) -> Result<User, FairHubError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET is_active = $2, updated_at = $3
            WHERE id = $1
            RETURNING id, email, password_hash, full_name, role, is_active, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(is_active)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }
}
