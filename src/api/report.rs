//! Report procedures

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::api::{ApiResult, AppState};
use crate::middleware::AuthUser;
use crate::services::report::ReportKind;

#[derive(Debug, Deserialize)]
pub struct ReportParams {
    /// One of `job_seekers`, `all_users`, `companies_with_events`
    pub kind: String,
}

/// `report.generateReport` (admin): returns CSV text
pub async fn generate_report(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<ReportParams>,
) -> ApiResult<impl IntoResponse> {
    user.require_admin()?;

    let kind = ReportKind::parse(&params.kind)?;
    let csv = state.services.report_service.generate(kind).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", kind.file_name()),
            ),
        ],
        csv,
    ))
}
