//! Denormalized rating aggregation
//!
//! Keeps `events.average_rating` equal to the mean of the event's review
//! ratings. Invoked as a side effect after every review create, update or
//! delete; the write itself has already committed, so a failed recompute is
//! logged and swallowed instead of failing the triggering request. The next
//! review mutation on the event repairs any stale value.

use tracing::{debug, warn};

use crate::database::{EventRepository, ReviewRepository};
use crate::utils::errors::ApiError;

#[derive(Debug, Clone)]
pub struct RatingAggregator {
    events: EventRepository,
    reviews: ReviewRepository,
}

impl RatingAggregator {
    pub fn new(events: EventRepository, reviews: ReviewRepository) -> Self {
        Self { events, reviews }
    }

    /// Recompute and store the average rating for an event.
    ///
    /// When the last review is deleted the aggregate is cleared to NULL
    /// rather than left stale.
    pub async fn recompute(&self, event_id: i64) {
        match self.try_recompute(event_id).await {
            Ok(average) => {
                debug!(event_id = event_id, average = ?average, "Average rating recomputed");
            }
            Err(e) => {
                warn!(
                    event_id = event_id,
                    error = %e,
                    "Average rating recompute failed; stored value may be stale"
                );
            }
        }
    }

    async fn try_recompute(&self, event_id: i64) -> Result<Option<f64>, ApiError> {
        let average = self.reviews.average_for_event(event_id).await?;
        self.events.set_average_rating(event_id, average).await?;
        Ok(average)
    }
}
