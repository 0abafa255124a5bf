//! Event repository implementation
//!
//! Also owns the event_participations join table that carries stand
//! assignments.

use chrono::Utc;
use sqlx::PgPool;

use crate::models::event::{
    CreateEventRequest, Event, EventParticipation, JoinEventRequest, UpdateEventRequest,
};
use crate::utils::errors::FairHubError;

#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new event
    pub async fn create(&self, request: CreateEventRequest) -> Result<Event, FairHubError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (title, description, starts_at, ends_at, location, created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, title, description, starts_at, ends_at, location, is_published, created_by, created_at, updated_at
            "#,
        )
        .bind(request.title)
        .bind(request.description)
        .bind(request.starts_at)
        .bind(request.ends_at)
        .bind(request.location)
        .bind(request.created_by)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    /// Find event by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Event>, FairHubError> {
        let event = sqlx::query_as::<_, Event>(
            "SELECT id, title, description, starts_at, ends_at, location, is_published, created_by, created_at, updated_at FROM events WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    /// Update event
    pub async fn update(&self, id: i64, request: UpdateEventRequest) -> Result<Event, FairHubError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                starts_at = COALESCE($4, starts_at),
                ends_at = COALESCE($5, ends_at),
                location = COALESCE($6, location),
                is_published = COALESCE($7, is_published),
                updated_at = $8
            WHERE id = $1
            RETURNING id, title, description, starts_at, ends_at, location, is_published, created_by, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(request.title)
        .bind(request.description)
        .bind(request.starts_at)
        .bind(request.ends_at)
        .bind(request.location)
        .bind(request.is_published)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    /// Delete event
    pub async fn delete(&self, id: i64) -> Result<(), FairHubError> {
        sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// List events with pagination
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Event>, FairHubError> {
        let events = sqlx::query_as::<_, Event>(
            "SELECT id, title, description, starts_at, ends_at, location, is_published, created_by, created_at, updated_at FROM events ORDER BY starts_at ASC LIMIT $1 OFFSET $2"
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Get upcoming published events
    pub async fn get_upcoming_events(&self, limit: Option<i64>) -> Result<Vec<Event>, FairHubError> {
        let limit = limit.unwrap_or(50);
        let events = sqlx::query_as::<_, Event>(
            "SELECT id, title, description, starts_at, ends_at, location, is_published, created_by, created_at, updated_at FROM events WHERE starts_at > NOW() AND is_published = true ORDER BY starts_at ASC LIMIT $1"
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Record a company joining an event with a stand assignment
    ///
    /// The two unique constraints backstop the service pre-checks; the
    /// constraint name tells the violations apart so a race surfaces the
    /// same domain error as the pre-check.
    pub async fn add_participation(
        &self,
        request: JoinEventRequest,
    ) -> Result<EventParticipation, FairHubError> {
        let participation = sqlx::query_as::<_, EventParticipation>(
            r#"
            INSERT INTO event_participations (event_id, company_id, stand_number, joined_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, event_id, company_id, stand_number, joined_at
            "#,
        )
        .bind(request.event_id)
        .bind(request.company_id)
        .bind(request.stand_number.clone())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e.as_database_error().and_then(|db| db.constraint()) {
            Some("event_participations_event_id_company_id_key") => {
                FairHubError::AlreadyJoined {
                    company_id: request.company_id,
                    event_id: request.event_id,
                }
            }
            Some("event_participations_event_id_stand_number_key") => {
                FairHubError::StandTaken {
                    event_id: request.event_id,
                    stand_number: request.stand_number,
                }
            }
            _ => e.into(),
        })?;

        Ok(participation)
    }

    /// Remove a company's participation in an event
    pub async fn remove_participation(
        &self,
        event_id: i64,
        company_id: i64,
    ) -> Result<(), FairHubError> {
        sqlx::query("DELETE FROM event_participations WHERE event_id = $1 AND company_id = $2")
            .bind(event_id)
            .bind(company_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Get participating companies and stands for an event
    pub async fn get_participations(
        &self,
        event_id: i64,
    ) -> Result<Vec<EventParticipation>, FairHubError> {
        let participations = sqlx::query_as::<_, EventParticipation>(
            "SELECT id, event_id, company_id, stand_number, joined_at FROM event_participations WHERE event_id = $1 ORDER BY joined_at ASC"
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(participations)
    }

    /// Get events a company participates in
    pub async fn get_company_events(&self, company_id: i64) -> Result<Vec<Event>, FairHubError> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT e.id, e.title, e.description, e.starts_at, e.ends_at, e.location, e.is_published, e.created_by, e.created_at, e.updated_at
            FROM events e
            INNER JOIN event_participations ep ON e.id = ep.event_id
            WHERE ep.company_id = $1
            ORDER BY e.starts_at ASC
            "#,
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Check if a company already joined an event
    pub async fn is_participating(
        &self,
        event_id: i64,
        company_id: i64,
    ) -> Result<bool, FairHubError> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM event_participations WHERE event_id = $1 AND company_id = $2",
        )
        .bind(event_id)
        .bind(company_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0 > 0)
    }

    /// Check if a stand number is already taken within an event
    pub async fn is_stand_taken(
        &self,
        event_id: i64,
        stand_number: &str,
    ) -> Result<bool, FairHubError> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM event_participations WHERE event_id = $1 AND stand_number = $2",
        )
        .bind(event_id)
        .bind(stand_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0 > 0)
    }

    /// Count total events
    pub async fn count(&self) -> Result<i64, FairHubError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
