//! HTTP RPC layer
//!
//! Procedures are grouped by resource under `/api/<resource>/<procedure>`,
//! take JSON input, and return JSON output. Errors are mapped to status
//! codes here at the transport boundary.

pub mod applications;
pub mod companies;
pub mod dashboard;
pub mod events;
pub mod files;
pub mod jobs;
pub mod profile;
pub mod report;
pub mod users;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{header::CONTENT_TYPE, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use crate::config::settings::Settings;
use crate::middleware::AuthUser;
use crate::models::company::Company;
use crate::models::user::UserRole;
use crate::services::ServiceFactory;
use crate::utils::errors::{ErrorCategory, FairHubError};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<ServiceFactory>,
    pub settings: Arc<Settings>,
}

/// Transport-boundary wrapper that turns a [`FairHubError`] into a response
#[derive(Debug)]
pub struct ApiError(pub FairHubError);

impl From<FairHubError> for ApiError {
    fn from(err: FairHubError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0.category() {
            ErrorCategory::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCategory::Forbidden => StatusCode::FORBIDDEN,
            ErrorCategory::Validation => StatusCode::BAD_REQUEST,
            ErrorCategory::NotFound => StatusCode::NOT_FOUND,
            ErrorCategory::Conflict => StatusCode::CONFLICT,
            ErrorCategory::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self.0, "Request failed");
            // Do not leak internals to the client
            return (
                status,
                Json(serde_json::json!({ "error": "Internal server error" })),
            )
                .into_response();
        }

        warn!(error = %self.0, status = %status, "Request rejected");
        (status, Json(serde_json::json!({ "error": self.0.to_string() }))).into_response()
    }
}

/// Result alias for RPC handlers
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Resolve the company a caller acts for
///
/// Company users act for the company they own; admins must name the company
/// explicitly.
pub(crate) async fn resolve_company(
    state: &AppState,
    user: &AuthUser,
    explicit_company_id: Option<i64>,
) -> ApiResult<Company> {
    if let Some(company) = state
        .services
        .company_service
        .get_company_for_owner(user.id)
        .await?
    {
        return Ok(company);
    }

    if user.role == UserRole::Company {
        return Err(
            FairHubError::NotFound("Caller does not own a company yet".to_string()).into(),
        );
    }

    user.require_admin()?;
    let company_id = explicit_company_id.ok_or_else(|| {
        FairHubError::InvalidInput("company_id is required for admin callers".to_string())
    })?;
    Ok(state.services.company_service.get_company(company_id).await?)
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .settings
        .server
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, axum::http::header::AUTHORIZATION])
        .allow_origin(origins);

    let max_upload = state.settings.storage.max_upload_bytes as usize;

    Router::new()
        .route("/api/health", get(health_handler))
        // users
        .route("/api/users/register", post(users::register))
        .route("/api/users/login", post(users::login))
        .route("/api/users/me", get(users::me))
        .route("/api/users/list", get(users::list))
        .route("/api/users/set-active", post(users::set_active))
        // companies
        .route("/api/companies/create", post(companies::create))
        .route("/api/companies/update", post(companies::update))
        .route("/api/companies/delete", post(companies::delete))
        .route("/api/companies/list", get(companies::list))
        .route(
            "/api/companies/find-all-with-stats",
            get(companies::find_all_with_stats),
        )
        .route("/api/companies/mine", get(companies::mine))
        // events
        .route("/api/events/create", post(events::create))
        .route("/api/events/update", post(events::update))
        .route("/api/events/delete", post(events::delete))
        .route("/api/events/list", get(events::list))
        .route("/api/events/get", get(events::get_event))
        .route("/api/events/upcoming", get(events::upcoming))
        .route("/api/events/join-event", post(events::join_event))
        .route("/api/events/leave-event", post(events::leave_event))
        .route("/api/events/participants", get(events::participants))
        // jobs
        .route("/api/jobs/create", post(jobs::create))
        .route("/api/jobs/update", post(jobs::update))
        .route("/api/jobs/delete", post(jobs::delete))
        .route("/api/jobs/list", get(jobs::list))
        .route("/api/jobs/get", get(jobs::get_job))
        // applications
        .route("/api/applications/create", post(applications::create))
        .route(
            "/api/applications/list-for-job",
            get(applications::list_for_job),
        )
        .route("/api/applications/list-mine", get(applications::list_mine))
        .route("/api/applications/set-status", post(applications::set_status))
        .route("/api/applications/history", get(applications::history))
        // profiles
        .route("/api/profile/get-mine", get(profile::get_mine))
        .route("/api/profile/upsert-mine", post(profile::upsert_mine))
        .route("/api/profile/company", get(profile::company))
        .route("/api/profile/upsert-company", post(profile::upsert_company))
        // dashboard & reports
        .route(
            "/api/dashboard/get-overview-stats",
            get(dashboard::get_overview_stats),
        )
        .route("/api/report/generate-report", get(report::generate_report))
        // files
        .route("/api/files/upload", post(files::upload))
        .route("/api/files/download/:hash", get(files::download))
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(cors)
        .with_state(state)
}

/// Liveness endpoint
async fn health_handler(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> ApiResult<Json<serde_json::Value>> {
    crate::database::health_check(state.services.db.pool())
        .await
        .map_err(ApiError::from)?;
    Ok(Json(serde_json::json!({ "status": "ok" })))
}

/// Wait for Ctrl+C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
