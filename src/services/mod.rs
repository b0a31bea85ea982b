//! Services module
//!
//! Business logic on top of the repositories: geocoding, events, sports,
//! reviews and the rating aggregate.

pub mod event;
pub mod geocoder;
pub mod rating;
pub mod review;
pub mod sport;

pub use event::EventService;
pub use geocoder::GeocodingService;
pub use rating::RatingAggregator;
pub use review::ReviewService;
pub use sport::SportService;

use crate::config::Settings;
use crate::database::DatabaseService;
use crate::models::user::Role;
use crate::utils::errors::{ApiError, Result};

/// Shared ownership rule: a resource may be mutated by the user it belongs
/// to or by an admin.
pub fn ensure_owner_or_admin(
    owner_id: i64,
    requester_id: i64,
    role: Role,
    action: &str,
) -> Result<()> {
    if requester_id == owner_id || role == Role::Admin {
        return Ok(());
    }
    Err(ApiError::Authorization(format!(
        "User {requester_id} is not authorized to {action}"
    )))
}

/// Factory bundling every service behind one injected handle
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub events: EventService,
    pub sports: SportService,
    pub reviews: ReviewService,
}

impl ServiceFactory {
    pub fn new(db: &DatabaseService, settings: &Settings) -> Result<Self> {
        let geocoder = GeocodingService::new(settings.geocoder.clone())?;
        let rating = RatingAggregator::new(db.events.clone(), db.reviews.clone());

        Ok(Self {
            events: EventService::new(
                db.events.clone(),
                db.sports.clone(),
                geocoder,
                settings.uploads.clone(),
            ),
            sports: SportService::new(db.sports.clone(), db.events.clone()),
            reviews: ReviewService::new(db.reviews.clone(), db.events.clone(), rating),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_may_mutate() {
        assert!(ensure_owner_or_admin(7, 7, Role::Publisher, "update this event").is_ok());
    }

    #[test]
    fn test_admin_may_mutate_any() {
        assert!(ensure_owner_or_admin(7, 99, Role::Admin, "delete this event").is_ok());
    }

    #[test]
    fn test_other_user_is_rejected() {
        let err = ensure_owner_or_admin(7, 8, Role::Publisher, "update this event").unwrap_err();
        assert!(matches!(err, ApiError::Authorization(_)));
    }
}
