//! Sport service implementation
//!
//! Sports are sub-resources of events. Creating one requires ownership of
//! the parent event; updating or deleting requires ownership of the sport
//! itself.

use tracing::info;

use crate::database::{EventRepository, SportRepository};
use crate::models::sport::{CreateSportRequest, Sport, UpdateSportRequest};
use crate::models::user::Role;
use crate::services::ensure_owner_or_admin;
use crate::utils::errors::{ApiError, Result};
use crate::utils::pagination::{PageParams, PageSpec};
use crate::utils::validation::{validate_create_sport, validate_update_sport};

const SPORT_SORT_FIELDS: &[&str] = &["title", "cost", "created_at"];
const DEFAULT_SPORT_SORT: &str = "-created_at";

#[derive(Debug, Clone)]
pub struct SportService {
    sports: SportRepository,
    events: EventRepository,
}

impl SportService {
    pub fn new(sports: SportRepository, events: EventRepository) -> Self {
        Self { sports, events }
    }

    /// Create a sport under an event. The requester must own the parent
    /// event or be an admin.
    pub async fn create(
        &self,
        event_id: i64,
        requester_id: i64,
        role: Role,
        request: CreateSportRequest,
    ) -> Result<Sport> {
        validate_create_sport(&request)?;

        let event = self
            .events
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Event not found with id of {event_id}")))?;
        ensure_owner_or_admin(event.user_id, requester_id, role, "add a sport to this event")?;

        let sport = self.sports.create(event_id, requester_id, &request).await?;
        info!(sport_id = sport.id, event_id = event_id, "Sport created");
        Ok(sport)
    }

    /// Update a sport. The requester must be the user who created it or an
    /// admin.
    pub async fn update(
        &self,
        sport_id: i64,
        requester_id: i64,
        role: Role,
        patch: UpdateSportRequest,
    ) -> Result<Sport> {
        validate_update_sport(&patch)?;

        let existing = self.find_required(sport_id).await?;
        ensure_owner_or_admin(existing.user_id, requester_id, role, "update this sport")?;

        let sport = self.sports.update(sport_id, &patch).await?;
        info!(sport_id = sport_id, user_id = requester_id, "Sport updated");
        Ok(sport)
    }

    /// Delete a sport. Same ownership rule as update.
    pub async fn delete(&self, sport_id: i64, requester_id: i64, role: Role) -> Result<()> {
        let existing = self.find_required(sport_id).await?;
        ensure_owner_or_admin(existing.user_id, requester_id, role, "delete this sport")?;

        self.sports.delete(sport_id).await?;
        info!(sport_id = sport_id, user_id = requester_id, "Sport deleted");
        Ok(())
    }

    pub async fn find_by_id(&self, sport_id: i64) -> Result<Sport> {
        self.find_required(sport_id).await
    }

    /// Sports under one event; 404 when the event does not exist
    pub async fn list_for_event(&self, event_id: i64) -> Result<Vec<Sport>> {
        if self.events.find_by_id(event_id).await?.is_none() {
            return Err(ApiError::NotFound(format!(
                "Event not found with id of {event_id}"
            )));
        }
        self.sports.list_for_event(event_id).await
    }

    /// Paginated listing across all events; returns the page plus the total
    pub async fn list(&self, params: &PageParams) -> Result<(Vec<Sport>, i64)> {
        let spec: PageSpec = params.to_spec(SPORT_SORT_FIELDS, DEFAULT_SPORT_SORT);
        let sports = self.sports.list(&spec).await?;
        let total = self.sports.count().await?;
        Ok((sports, total))
    }

    async fn find_required(&self, sport_id: i64) -> Result<Sport> {
        self.sports
            .find_by_id(sport_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Sport not found with id of {sport_id}")))
    }
}
