//! Review repository implementation

use sqlx::PgPool;

use crate::models::review::{CreateReviewRequest, Review, UpdateReviewRequest};
use crate::utils::errors::{is_unique_violation, ApiError};

const REVIEW_COLUMNS: &str = "id, title, comment, rating, created_at, event_id, user_id";

#[derive(Debug, Clone)]
pub struct ReviewRepository {
    pool: PgPool,
}

impl ReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a review. The (event_id, user_id) unique index rejects a
    /// second review by the same user for the same event.
    pub async fn create(
        &self,
        event_id: i64,
        user_id: i64,
        request: &CreateReviewRequest,
    ) -> Result<Review, ApiError> {
        let review = sqlx::query_as::<_, Review>(&format!(
            r#"
            INSERT INTO reviews (title, comment, rating, event_id, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {REVIEW_COLUMNS}
            "#
        ))
        .bind(&request.title)
        .bind(&request.comment)
        .bind(request.rating)
        .bind(event_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::Duplicate(format!(
                    "User {user_id} has already submitted a review for event {event_id}"
                ))
            } else {
                ApiError::Database(e)
            }
        })?;

        Ok(review)
    }

    /// Find review by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Review>, ApiError> {
        let review = sqlx::query_as::<_, Review>(&format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(review)
    }

    /// Update review; absent patch fields keep their stored value
    pub async fn update(&self, id: i64, patch: &UpdateReviewRequest) -> Result<Review, ApiError> {
        let review = sqlx::query_as::<_, Review>(&format!(
            r#"
            UPDATE reviews
            SET title = COALESCE($2, title),
                comment = COALESCE($3, comment),
                rating = COALESCE($4, rating)
            WHERE id = $1
            RETURNING {REVIEW_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&patch.title)
        .bind(&patch.comment)
        .bind(patch.rating)
        .fetch_one(&self.pool)
        .await?;

        Ok(review)
    }

    /// Delete review
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// All reviews for an event
    pub async fn list_for_event(&self, event_id: i64) -> Result<Vec<Review>, ApiError> {
        let reviews = sqlx::query_as::<_, Review>(&format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews WHERE event_id = $1 ORDER BY created_at DESC"
        ))
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reviews)
    }

    /// Arithmetic mean of all ratings for an event; None when no reviews exist
    pub async fn average_for_event(&self, event_id: i64) -> Result<Option<f64>, ApiError> {
        let row: (Option<f64>,) = sqlx::query_as(
            "SELECT AVG(rating)::DOUBLE PRECISION FROM reviews WHERE event_id = $1",
        )
        .bind(event_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.0)
    }
}
