//! User service implementation
//!
//! This service handles registration, login, and account administration.

use regex::Regex;
use tracing::{debug, info, warn};

use crate::database::DatabaseService;
use crate::models::user::{CreateUserRequest, User, UserRole};
use crate::services::auth::AuthService;
use crate::utils::errors::{FairHubError, Result};

/// User service for account operations
#[derive(Clone)]
pub struct UserService {
    db: DatabaseService,
    auth: AuthService,
}

impl UserService {
    /// Create a new UserService instance
    pub fn new(db: DatabaseService, auth: AuthService) -> Self {
        Self { db, auth }
    }

    /// Register a new account
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
        role: UserRole,
    ) -> Result<User> {
        debug!(email = email, "Registering new user");

        let email = normalize_email(email)?;
        if full_name.trim().is_empty() {
            return Err(FairHubError::InvalidInput(
                "Full name is required".to_string(),
            ));
        }

        if self.db.users.find_by_email(&email).await?.is_some() {
            warn!(email = %email, "Registration rejected, email taken");
            return Err(FairHubError::EmailTaken { email });
        }

        let password_hash = self.auth.hash_password(password)?;
        let user = self
            .db
            .users
            .create(CreateUserRequest {
                email,
                password_hash,
                full_name: full_name.trim().to_string(),
                role,
            })
            .await?;

        info!(user_id = user.id, role = %user.role, "New user registered");
        Ok(user)
    }

    /// Authenticate a user and issue a bearer token
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String)> {
        let email = normalize_email(email)?;

        let user = self
            .db
            .users
            .find_by_email(&email)
            .await?
            .ok_or_else(|| FairHubError::Authentication("Invalid credentials".to_string()))?;

        if !user.is_active {
            warn!(user_id = user.id, "Login rejected, account deactivated");
            return Err(FairHubError::Authentication(
                "Account is deactivated".to_string(),
            ));
        }

        if !self.auth.verify_password(password, &user.password_hash)? {
            warn!(user_id = user.id, "Login rejected, bad password");
            return Err(FairHubError::Authentication(
                "Invalid credentials".to_string(),
            ));
        }

        let token = self.auth.issue_token(user.id, user.role)?;
        crate::utils::logging::log_user_action(user.id, "login", None);
        Ok((user, token))
    }

    /// Get user by ID
    pub async fn get_user(&self, user_id: i64) -> Result<User> {
        self.db
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(FairHubError::UserNotFound { user_id })
    }

    /// List users with pagination
    pub async fn list_users(&self, limit: i64, offset: i64) -> Result<Vec<User>> {
        if limit > 100 {
            return Err(FairHubError::InvalidInput(
                "Limit cannot exceed 100".to_string(),
            ));
        }

        self.db.users.list(limit, offset).await
    }

    /// Activate or deactivate an account
    pub async fn set_active(&self, user_id: i64, is_active: bool, admin_id: i64) -> Result<User> {
        self.get_user(user_id).await?;
        let user = self.db.users.set_active(user_id, is_active).await?;

        crate::utils::logging::log_admin_action(
            admin_id,
            if is_active { "activate_user" } else { "deactivate_user" },
            Some(&user_id.to_string()),
        );

        Ok(user)
    }
}

/// Lowercase, trim, and sanity-check an email address
fn normalize_email(email: &str) -> Result<String> {
    let email = email.trim().to_lowercase();
    let pattern = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("static regex");
    if !pattern.is_match(&email) {
        return Err(FairHubError::InvalidInput(format!(
            "Invalid email address: {}",
            email
        )));
    }
    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(
            normalize_email("  Alice@Example.COM ").unwrap(),
            "alice@example.com"
        );
        assert!(normalize_email("not-an-email").is_err());
        assert!(normalize_email("a b@example.com").is_err());
    }
}
