//! Review model
//!
//! At most one review per (event, user) pair, enforced by a compound unique
//! index in the schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: i64,
    pub title: String,
    pub comment: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
    pub event_id: i64,
    pub user_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateReviewRequest {
    pub title: String,
    pub comment: String,
    pub rating: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateReviewRequest {
    pub title: Option<String>,
    pub comment: Option<String>,
    pub rating: Option<i32>,
}
