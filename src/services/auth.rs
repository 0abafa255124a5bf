//! Authentication service
//!
//! Password hashing with bcrypt and HS256 bearer tokens carrying the user id
//! and role.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::settings::AuthConfig;
use crate::models::user::UserRole;
use crate::utils::errors::{FairHubError, Result};

/// JWT claims for an authenticated user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: i64,
    pub role: UserRole,
    /// Expiry, seconds since epoch
    pub exp: i64,
    /// Issued at, seconds since epoch
    pub iat: i64,
}

#[derive(Clone)]
pub struct AuthService {
    config: AuthConfig,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Hash a password for storage
    pub fn hash_password(&self, password: &str) -> Result<String> {
        if password.len() < 8 {
            return Err(FairHubError::InvalidInput(
                "Password must be at least 8 characters".to_string(),
            ));
        }
        // bcrypt truncates beyond 72 bytes
        if password.len() > 72 {
            return Err(FairHubError::InvalidInput(
                "Password must be at most 72 bytes".to_string(),
            ));
        }

        Ok(bcrypt::hash(password, self.config.bcrypt_cost)?)
    }

    /// Verify a password against a stored hash
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        Ok(bcrypt::verify(password, hash)?)
    }

    /// Issue a bearer token for a user
    pub fn issue_token(&self, user_id: i64, role: UserRole) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            role,
            exp: (now + Duration::hours(self.config.token_ttl_hours)).timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )?;

        debug!(user_id = user_id, "Issued bearer token");
        Ok(token)
    }

    /// Verify a bearer token and return its claims
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| {
            warn!(error = %e, "Token verification failed");
            FairHubError::Authentication("Invalid or expired token".to_string())
        })?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> AuthService {
        AuthService::new(AuthConfig {
            jwt_secret: "0123456789abcdef0123456789abcdef".to_string(),
            token_ttl_hours: 1,
            bcrypt_cost: 4,
        })
    }

    #[test]
    fn test_password_round_trip() {
        let service = test_service();
        let hash = service.hash_password("correct horse").unwrap();
        assert!(service.verify_password("correct horse", &hash).unwrap());
        assert!(!service.verify_password("wrong horse", &hash).unwrap());
    }

    #[test]
    fn test_short_password_rejected() {
        let service = test_service();
        assert!(service.hash_password("short").is_err());
    }

    #[test]
    fn test_token_round_trip() {
        let service = test_service();
        let token = service.issue_token(42, UserRole::Company).unwrap();
        let claims = service.verify_token(&token).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.role, UserRole::Company);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_tampered_token_rejected() {
        let service = test_service();
        let token = service.issue_token(42, UserRole::Admin).unwrap();
        let mut tampered = token.clone();
        tampered.push('x');
        assert!(service.verify_token(&tampered).is_err());
    }
}
