//! Data models
//!
//! Persisted entities plus the create/update request payloads consumed by
//! the HTTP layer.

pub mod event;
pub mod review;
pub mod sport;
pub mod user;

pub use event::{
    CreateEventRequest, Event, EventLocation, EventWithSports, NewEvent, ResolvedLocation,
    UpdateEventRequest,
};
pub use review::{CreateReviewRequest, Review, UpdateReviewRequest};
pub use sport::{CreateSportRequest, Sport, SportLevel, UpdateSportRequest};
pub use user::{Role, User};
