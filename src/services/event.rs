//! Event service implementation
//!
//! Enforces the participation rules: one join per company per event, unique
//! stand numbers within an event, and no leaving while jobs remain posted.

use tracing::{debug, info, warn};

use crate::database::DatabaseService;
use crate::models::event::{
    CreateEventRequest, Event, EventParticipation, JoinEventRequest, UpdateEventRequest,
};
use crate::utils::errors::{FairHubError, Result};

/// Event service for fair administration and participation
#[derive(Clone)]
pub struct EventService {
    db: DatabaseService,
}

impl EventService {
    /// Create a new EventService instance
    pub fn new(db: DatabaseService) -> Self {
        Self { db }
    }

    /// Create a new event
    pub async fn create_event(&self, request: CreateEventRequest) -> Result<Event> {
        if request.title.trim().is_empty() {
            return Err(FairHubError::InvalidInput(
                "Event title is required".to_string(),
            ));
        }
        if request.ends_at <= request.starts_at {
            return Err(FairHubError::InvalidInput(
                "Event must end after it starts".to_string(),
            ));
        }

        let event = self.db.events.create(request).await?;
        info!(event_id = event.id, "Event created");
        Ok(event)
    }

    /// Get event by ID
    pub async fn get_event(&self, event_id: i64) -> Result<Event> {
        self.db
            .events
            .find_by_id(event_id)
            .await?
            .ok_or(FairHubError::EventNotFound { event_id })
    }

    /// Update event fields
    pub async fn update_event(
        &self,
        event_id: i64,
        request: UpdateEventRequest,
    ) -> Result<Event> {
        self.get_event(event_id).await?;
        self.db.events.update(event_id, request).await
    }

    /// Delete an event
    pub async fn delete_event(&self, event_id: i64) -> Result<()> {
        self.get_event(event_id).await?;
        self.db.events.delete(event_id).await?;
        info!(event_id = event_id, "Event deleted");
        Ok(())
    }

    /// List events with pagination
    pub async fn list_events(&self, limit: i64, offset: i64) -> Result<Vec<Event>> {
        if limit > 100 {
            return Err(FairHubError::InvalidInput(
                "Limit cannot exceed 100".to_string(),
            ));
        }
        self.db.events.list(limit, offset).await
    }

    /// Get upcoming published events
    pub async fn upcoming_events(&self, limit: Option<i64>) -> Result<Vec<Event>> {
        self.db.events.get_upcoming_events(limit).await
    }

    /// Join an event, claiming a stand number
    pub async fn join_event(&self, request: JoinEventRequest) -> Result<EventParticipation> {
        let stand_number = request.stand_number.trim().to_string();
        if stand_number.is_empty() {
            return Err(FairHubError::InvalidInput(
                "Stand number is required".to_string(),
            ));
        }

        self.get_event(request.event_id).await?;
        self.db
            .companies
            .find_by_id(request.company_id)
            .await?
            .ok_or(FairHubError::CompanyNotFound {
                company_id: request.company_id,
            })?;

        if self
            .db
            .events
            .is_participating(request.event_id, request.company_id)
            .await?
        {
            warn!(
                event_id = request.event_id,
                company_id = request.company_id,
                "Join rejected, already participating"
            );
            return Err(FairHubError::AlreadyJoined {
                company_id: request.company_id,
                event_id: request.event_id,
            });
        }

        if self
            .db
            .events
            .is_stand_taken(request.event_id, &stand_number)
            .await?
        {
            warn!(
                event_id = request.event_id,
                stand_number = %stand_number,
                "Join rejected, stand taken"
            );
            return Err(FairHubError::StandTaken {
                event_id: request.event_id,
                stand_number,
            });
        }

        let participation = self
            .db
            .events
            .add_participation(JoinEventRequest {
                stand_number,
                ..request
            })
            .await?;

        info!(
            event_id = participation.event_id,
            company_id = participation.company_id,
            stand_number = %participation.stand_number,
            "Company joined event"
        );
        Ok(participation)
    }

    /// Leave an event
    ///
    /// Rejected while the company still has jobs posted for this event.
    pub async fn leave_event(&self, event_id: i64, company_id: i64) -> Result<()> {
        if !self.db.events.is_participating(event_id, company_id).await? {
            return Err(FairHubError::InvalidInput(
                "Company is not participating in this event".to_string(),
            ));
        }

        let job_count = self
            .db
            .jobs
            .count_company_event_jobs(company_id, event_id)
            .await?;
        if job_count > 0 {
            warn!(
                event_id = event_id,
                company_id = company_id,
                job_count = job_count,
                "Leave rejected, jobs still posted"
            );
            return Err(FairHubError::JobsStillPosted {
                company_id,
                event_id,
            });
        }

        self.db
            .events
            .remove_participation(event_id, company_id)
            .await?;
        info!(event_id = event_id, company_id = company_id, "Company left event");
        Ok(())
    }

    /// Get participating companies and stands for an event
    pub async fn participants(&self, event_id: i64) -> Result<Vec<EventParticipation>> {
        self.get_event(event_id).await?;
        debug!(event_id = event_id, "Listing event participations");
        self.db.events.get_participations(event_id).await
    }
}
