//! Review service implementation
//!
//! Any authenticated user may review an event, once. Every review mutation
//! finishes by asking the aggregator to refresh the event's stored average
//! rating.

use tracing::info;

use crate::database::{EventRepository, ReviewRepository};
use crate::models::review::{CreateReviewRequest, Review, UpdateReviewRequest};
use crate::models::user::Role;
use crate::services::ensure_owner_or_admin;
use crate::services::rating::RatingAggregator;
use crate::utils::errors::{ApiError, Result};
use crate::utils::validation::{validate_create_review, validate_update_review};

#[derive(Debug, Clone)]
pub struct ReviewService {
    reviews: ReviewRepository,
    events: EventRepository,
    rating: RatingAggregator,
}

impl ReviewService {
    pub fn new(
        reviews: ReviewRepository,
        events: EventRepository,
        rating: RatingAggregator,
    ) -> Self {
        Self {
            reviews,
            events,
            rating,
        }
    }

    /// Create a review for an event. One review per user per event.
    pub async fn create(
        &self,
        event_id: i64,
        author_id: i64,
        request: CreateReviewRequest,
    ) -> Result<Review> {
        validate_create_review(&request)?;

        if self.events.find_by_id(event_id).await?.is_none() {
            return Err(ApiError::NotFound(format!(
                "Event not found with id of {event_id}"
            )));
        }

        let review = self.reviews.create(event_id, author_id, &request).await?;
        self.rating.recompute(event_id).await;

        info!(review_id = review.id, event_id = event_id, "Review created");
        Ok(review)
    }

    /// Update a review. The requester must be its author or an admin.
    pub async fn update(
        &self,
        review_id: i64,
        requester_id: i64,
        role: Role,
        patch: UpdateReviewRequest,
    ) -> Result<Review> {
        validate_update_review(&patch)?;

        let existing = self.find_required(review_id).await?;
        ensure_owner_or_admin(existing.user_id, requester_id, role, "update this review")?;

        let review = self.reviews.update(review_id, &patch).await?;
        self.rating.recompute(review.event_id).await;

        info!(review_id = review_id, user_id = requester_id, "Review updated");
        Ok(review)
    }

    /// Delete a review. Same ownership rule as update.
    pub async fn delete(&self, review_id: i64, requester_id: i64, role: Role) -> Result<()> {
        let existing = self.find_required(review_id).await?;
        ensure_owner_or_admin(existing.user_id, requester_id, role, "delete this review")?;

        // Capture the parent before the row disappears
        let event_id = existing.event_id;
        self.reviews.delete(review_id).await?;
        self.rating.recompute(event_id).await;

        info!(review_id = review_id, user_id = requester_id, "Review deleted");
        Ok(())
    }

    pub async fn find_by_id(&self, review_id: i64) -> Result<Review> {
        self.find_required(review_id).await
    }

    /// Reviews for one event; 404 when the event does not exist
    pub async fn list_for_event(&self, event_id: i64) -> Result<Vec<Review>> {
        if self.events.find_by_id(event_id).await?.is_none() {
            return Err(ApiError::NotFound(format!(
                "Event not found with id of {event_id}"
            )));
        }
        self.reviews.list_for_event(event_id).await
    }

    async fn find_required(&self, review_id: i64) -> Result<Review> {
        self.reviews
            .find_by_id(review_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Review not found with id of {review_id}")))
    }
}
