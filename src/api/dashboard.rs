//! Dashboard procedures

use axum::extract::State;
use axum::Json;

use crate::api::{ApiResult, AppState};
use crate::middleware::AuthUser;
use crate::services::dashboard::OverviewStats;

/// `dashboard.getOverviewStats` (admin)
pub async fn get_overview_stats(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<OverviewStats>> {
    user.require_admin()?;
    let stats = state.services.dashboard_service.overview_stats().await?;
    Ok(Json(stats))
}
