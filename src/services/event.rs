//! Event service implementation
//!
//! Owns event lifecycle orchestration: validation, the one-event-per-owner
//! rule, geocode-before-persist, radius queries and photo uploads.

use std::path::Path;

use tracing::{debug, info};

use crate::config::UploadConfig;
use crate::database::{EventRepository, SportRepository};
use crate::models::event::{
    CreateEventRequest, Event, EventWithSports, NewEvent, UpdateEventRequest,
};
use crate::models::user::Role;
use crate::services::geocoder::GeocodingService;
use crate::services::ensure_owner_or_admin;
use crate::utils::errors::{ApiError, Result};
use crate::utils::helpers::{photo_filename, slugify};
use crate::utils::pagination::{PageParams, PageSpec};
use crate::utils::validation::{validate_create_event, validate_update_event};
use crate::utils::geo;

const EVENT_SORT_FIELDS: &[&str] = &["name", "date", "created_at", "average_rating"];
const DEFAULT_EVENT_SORT: &str = "-created_at";

#[derive(Debug, Clone)]
pub struct EventService {
    events: EventRepository,
    sports: SportRepository,
    geocoder: GeocodingService,
    uploads: UploadConfig,
}

impl EventService {
    pub fn new(
        events: EventRepository,
        sports: SportRepository,
        geocoder: GeocodingService,
        uploads: UploadConfig,
    ) -> Self {
        Self {
            events,
            sports,
            geocoder,
            uploads,
        }
    }

    /// Create an event for `owner_id`.
    ///
    /// The address is geocoded before anything is persisted; a resolution
    /// failure fails the create outright. Non-admin owners may publish at
    /// most one event.
    pub async fn create(
        &self,
        owner_id: i64,
        role: Role,
        request: CreateEventRequest,
    ) -> Result<Event> {
        validate_create_event(&request)?;

        let location = self.geocoder.geocode(&request.address).await?;
        let new = NewEvent {
            slug: slugify(&request.name),
            name: request.name,
            description: request.description,
            date: request.date,
            location,
            phone: request.phone,
            email: request.email,
            user_id: owner_id,
        };

        let event = self
            .events
            .create(&new, role != Role::Admin)
            .await?;

        info!(event_id = event.id, user_id = owner_id, "Event created");
        Ok(event)
    }

    /// Update an event. Requester must be the owner or an admin. The
    /// address is re-geocoded only when present in the patch.
    pub async fn update(
        &self,
        event_id: i64,
        requester_id: i64,
        role: Role,
        patch: UpdateEventRequest,
    ) -> Result<Event> {
        validate_update_event(&patch)?;

        let existing = self.find_required(event_id).await?;
        ensure_owner_or_admin(existing.user_id, requester_id, role, "update this event")?;

        let slug = patch.name.as_deref().map(slugify);
        let mut event = self
            .events
            .update(
                event_id,
                patch.name.as_deref(),
                slug.as_deref(),
                patch.description.as_deref(),
                patch.date,
                patch.phone.as_deref(),
                patch.email.as_deref(),
            )
            .await?;

        if let Some(address) = &patch.address {
            let location = self.geocoder.geocode(address).await?;
            event = self.events.set_location(event_id, &location).await?;
        }

        info!(event_id = event_id, user_id = requester_id, "Event updated");
        Ok(event)
    }

    /// Delete an event. Requester must be the owner or an admin. Sports and
    /// reviews under the event are deleted with it.
    pub async fn delete(&self, event_id: i64, requester_id: i64, role: Role) -> Result<()> {
        let existing = self.find_required(event_id).await?;
        ensure_owner_or_admin(existing.user_id, requester_id, role, "delete this event")?;

        self.events.delete(event_id).await?;
        info!(event_id = event_id, user_id = requester_id, "Event deleted");
        Ok(())
    }

    /// Single event with its sports
    pub async fn find_by_id_with_sports(&self, event_id: i64) -> Result<EventWithSports> {
        let event = self.find_required(event_id).await?;
        let sports = self.sports.list_for_event(event_id).await?;
        Ok(EventWithSports { event, sports })
    }

    /// Paginated event listing; returns the page plus the total count
    pub async fn list(&self, params: &PageParams) -> Result<(Vec<Event>, i64)> {
        let spec: PageSpec = params.to_spec(EVENT_SORT_FIELDS, DEFAULT_EVENT_SORT);
        let events = self.events.list(&spec).await?;
        let total = self.events.count().await?;
        Ok((events, total))
    }

    /// All events within `distance_miles` of the location the zipcode
    /// resolves to. Containment is a spherical-cap test with angular radius
    /// `distance / 3963` (Earth radius in miles); results are unordered.
    pub async fn find_within_radius(
        &self,
        zipcode: &str,
        distance_miles: f64,
    ) -> Result<Vec<Event>> {
        if !distance_miles.is_finite() || distance_miles <= 0.0 {
            return Err(ApiError::Validation(vec![crate::utils::errors::FieldError::new(
                "distance",
                "Distance must be a positive number of miles",
            )]));
        }

        let center = self.geocoder.geocode(zipcode).await?;
        let radius = geo::miles_to_angular(distance_miles);

        let candidates = self.events.list_located().await?;
        let events = filter_within_radius(candidates, center.latitude, center.longitude, radius);

        debug!(
            zipcode = %zipcode,
            distance_miles = distance_miles,
            count = events.len(),
            "Radius query resolved"
        );
        Ok(events)
    }

    /// Store an uploaded photo for an event. Requester must be the owner or
    /// an admin; the file must be an image within the configured size limit.
    pub async fn upload_photo(
        &self,
        event_id: i64,
        requester_id: i64,
        role: Role,
        original_name: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<String> {
        let existing = self.find_required(event_id).await?;
        ensure_owner_or_admin(existing.user_id, requester_id, role, "update this event")?;

        if !content_type.starts_with("image") {
            return Err(ApiError::Upload("Please upload an image file".to_string()));
        }
        if bytes.len() > self.uploads.max_file_size {
            return Err(ApiError::Upload(format!(
                "Please upload an image less than {} bytes",
                self.uploads.max_file_size
            )));
        }

        let filename = photo_filename(event_id, original_name);
        let dir = Path::new(&self.uploads.dir);
        tokio::fs::create_dir_all(dir).await?;
        tokio::fs::write(dir.join(&filename), bytes).await?;

        self.events.set_photo(event_id, &filename).await?;
        info!(event_id = event_id, filename = %filename, "Event photo uploaded");
        Ok(filename)
    }

    async fn find_required(&self, event_id: i64) -> Result<Event> {
        self.events
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Event not found with id of {event_id}")))
    }
}

/// Keep only events whose stored point lies within the spherical cap of
/// `angular_radius` radians centered on (`lat`, `lng`)
fn filter_within_radius(events: Vec<Event>, lat: f64, lng: f64, angular_radius: f64) -> Vec<Event> {
    events
        .into_iter()
        .filter(|event| match (event.location.latitude, event.location.longitude) {
            (Some(event_lat), Some(event_lng)) => {
                geo::within_radius(lat, lng, event_lat, event_lng, angular_radius)
            }
            _ => false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::EventLocation;
    use chrono::Utc;

    fn event_at(id: i64, lat: Option<f64>, lng: Option<f64>) -> Event {
        Event {
            id,
            name: format!("Event {id}"),
            slug: format!("event-{id}"),
            description: "test".to_string(),
            date: Utc::now(),
            location: EventLocation {
                longitude: lng,
                latitude: lat,
                formatted_address: None,
                street: None,
                city: None,
                state: None,
                zipcode: None,
                country: None,
            },
            phone: None,
            email: None,
            photo: "no-photo.jpg".to_string(),
            average_rating: None,
            created_at: Utc::now(),
            user_id: 1,
        }
    }

    #[test]
    fn test_filter_keeps_center_and_nearby() {
        // Center on Beverly Hills; downtown LA is ~12 miles away
        let events = vec![
            event_at(1, Some(34.0901), Some(-118.4065)),
            event_at(2, Some(34.0522), Some(-118.2437)),
        ];
        let radius = geo::miles_to_angular(25.0);
        let matched = filter_within_radius(events, 34.0901, -118.4065, radius);
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn test_filter_excludes_distant_events() {
        // New York is far outside a 500 mile cap centered on Beverly Hills
        let events = vec![
            event_at(1, Some(34.0901), Some(-118.4065)),
            event_at(2, Some(40.7128), Some(-74.0060)),
        ];
        let radius = geo::miles_to_angular(500.0);
        let matched = filter_within_radius(events, 34.0901, -118.4065, radius);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, 1);
    }

    #[test]
    fn test_filter_skips_events_without_coordinates() {
        let events = vec![event_at(1, None, None), event_at(2, Some(34.0901), None)];
        let radius = geo::miles_to_angular(10_000.0);
        let matched = filter_within_radius(events, 34.0901, -118.4065, radius);
        assert!(matched.is_empty());
    }
}
