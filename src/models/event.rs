//! Event model
//!
//! The free-text `address` exists only on the create/update requests. It is
//! resolved to [`EventLocation`] columns before persisting and is never
//! stored, so the geocoded point is the single durable location.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::sport::Sport;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub date: DateTime<Utc>,
    #[sqlx(flatten)]
    #[serde(rename = "location")]
    pub location: EventLocation,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub photo: String,
    pub average_rating: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
}

/// Geocoded location columns embedded in an event row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventLocation {
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub formatted_address: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
    pub country: Option<String>,
}

/// Event with its sports, for the single-event read path
#[derive(Debug, Clone, Serialize)]
pub struct EventWithSports {
    #[serde(flatten)]
    pub event: Event,
    pub sports: Vec<Sport>,
}

/// Output of a successful geocoding resolution. Unlike [`EventLocation`]
/// the coordinates are always present.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub longitude: f64,
    pub latitude: f64,
    pub formatted_address: String,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
    pub country: Option<String>,
}

/// Fully validated and geocoded event, ready to persist
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: ResolvedLocation,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub user_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEventRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_location_nested() {
        let event = Event {
            id: 1,
            name: "Park Run".to_string(),
            slug: "park-run".to_string(),
            description: "Weekly run".to_string(),
            date: Utc::now(),
            location: EventLocation {
                longitude: Some(-122.08),
                latitude: Some(37.42),
                formatted_address: Some("1600 Amphitheatre Pkwy".to_string()),
                street: Some("Amphitheatre Pkwy".to_string()),
                city: Some("Mountain View".to_string()),
                state: Some("CA".to_string()),
                zipcode: Some("94043".to_string()),
                country: Some("US".to_string()),
            },
            phone: None,
            email: None,
            photo: "no-photo.jpg".to_string(),
            average_rating: None,
            created_at: Utc::now(),
            user_id: 7,
        };

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["location"]["city"], "Mountain View");
        assert_eq!(value["location"]["longitude"], -122.08);
        // The raw input address never appears on a persisted event
        assert!(value.get("address").is_none());
    }
}
