//! Authentication middleware
//!
//! Extracts and verifies the bearer token on protected procedures and
//! exposes the caller's identity and role to handlers.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};
use tracing::{debug, warn};

use crate::api::{ApiError, AppState};
use crate::models::user::UserRole;
use crate::utils::errors::FairHubError;

/// The authenticated caller, extracted from the Authorization header
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub id: i64,
    pub role: UserRole,
}

impl AuthUser {
    /// Check the caller is an admin
    pub fn require_admin(&self) -> Result<(), FairHubError> {
        self.require_role(UserRole::Admin)
    }

    /// Check the caller has a specific role; admins pass every check
    pub fn require_role(&self, role: UserRole) -> Result<(), FairHubError> {
        if self.role == role || self.role == UserRole::Admin {
            debug!(user_id = self.id, role = %self.role, "Role check passed");
            Ok(())
        } else {
            warn!(user_id = self.id, role = %self.role, required = %role, "Role check failed");
            Err(FairHubError::PermissionDenied(format!(
                "{} role required",
                role
            )))
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                ApiError::from(FairHubError::Authentication(
                    "Missing Authorization header".to_string(),
                ))
            })?;

        let token = header_value.strip_prefix("Bearer ").ok_or_else(|| {
            ApiError::from(FairHubError::Authentication(
                "Authorization header must be a bearer token".to_string(),
            ))
        })?;

        let claims = state.services.auth_service.verify_token(token)?;

        Ok(AuthUser {
            id: claims.sub,
            role: claims.role,
        })
    }
}
