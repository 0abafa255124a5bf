//! Event procedures: fair administration and company participation

use axum::extract::{Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::api::{resolve_company, ApiResult, AppState};
use crate::middleware::AuthUser;
use crate::models::event::{
    CreateEventRequest, Event, EventParticipation, JoinEventRequest, UpdateEventRequest,
};
use crate::models::user::UserRole;

#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    pub title: String,
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub location: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub event_id: i64,
    #[serde(flatten)]
    pub fields: UpdateEventRequest,
}

#[derive(Debug, Deserialize)]
pub struct EventIdParams {
    pub event_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    50
}

#[derive(Debug, Deserialize)]
pub struct UpcomingParams {
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct JoinRequest {
    pub event_id: i64,
    pub stand_number: String,
    /// Admins may act for a named company
    pub company_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct LeaveRequest {
    pub event_id: i64,
    pub company_id: Option<i64>,
}

/// `events.create` (admin)
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<CreateRequest>,
) -> ApiResult<Json<Event>> {
    user.require_admin()?;
    let event = state
        .services
        .event_service
        .create_event(CreateEventRequest {
            title: request.title,
            description: request.description,
            starts_at: request.starts_at,
            ends_at: request.ends_at,
            location: request.location,
            created_by: Some(user.id),
        })
        .await?;
    Ok(Json(event))
}

/// `events.update` (admin)
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<UpdateRequest>,
) -> ApiResult<Json<Event>> {
    user.require_admin()?;
    let event = state
        .services
        .event_service
        .update_event(request.event_id, request.fields)
        .await?;
    Ok(Json(event))
}

/// `events.delete` (admin)
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<EventIdParams>,
) -> ApiResult<Json<serde_json::Value>> {
    user.require_admin()?;
    state
        .services
        .event_service
        .delete_event(request.event_id)
        .await?;
    Ok(Json(serde_json::json!({ "deleted": request.event_id })))
}

/// `events.list`
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<Event>>> {
    let events = state
        .services
        .event_service
        .list_events(params.limit, params.offset)
        .await?;
    Ok(Json(events))
}

/// `events.get`
pub async fn get_event(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<EventIdParams>,
) -> ApiResult<Json<Event>> {
    let event = state.services.event_service.get_event(params.event_id).await?;
    Ok(Json(event))
}

/// `events.upcoming`
pub async fn upcoming(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<UpcomingParams>,
) -> ApiResult<Json<Vec<Event>>> {
    let events = state
        .services
        .event_service
        .upcoming_events(params.limit)
        .await?;
    Ok(Json(events))
}

/// `events.joinEvent` (company)
pub async fn join_event(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<JoinRequest>,
) -> ApiResult<Json<EventParticipation>> {
    user.require_role(UserRole::Company)?;
    let company = resolve_company(&state, &user, request.company_id).await?;

    let participation = state
        .services
        .event_service
        .join_event(JoinEventRequest {
            event_id: request.event_id,
            company_id: company.id,
            stand_number: request.stand_number,
        })
        .await?;
    Ok(Json(participation))
}

/// `events.leaveEvent` (company)
pub async fn leave_event(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<LeaveRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    user.require_role(UserRole::Company)?;
    let company = resolve_company(&state, &user, request.company_id).await?;

    state
        .services
        .event_service
        .leave_event(request.event_id, company.id)
        .await?;
    Ok(Json(serde_json::json!({ "left": request.event_id })))
}

/// `events.participants`
pub async fn participants(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<EventIdParams>,
) -> ApiResult<Json<Vec<EventParticipation>>> {
    let participations = state
        .services
        .event_service
        .participants(params.event_id)
        .await?;
    Ok(Json(participations))
}
