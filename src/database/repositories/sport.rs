//! Sport repository implementation

use sqlx::PgPool;

use crate::models::sport::{CreateSportRequest, Sport, UpdateSportRequest};
use crate::utils::errors::ApiError;
use crate::utils::pagination::PageSpec;

const SPORT_COLUMNS: &str =
    "id, title, description, rules, cost, level, created_at, event_id, user_id";

#[derive(Debug, Clone)]
pub struct SportRepository {
    pool: PgPool,
}

impl SportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a sport under an event
    pub async fn create(
        &self,
        event_id: i64,
        user_id: i64,
        request: &CreateSportRequest,
    ) -> Result<Sport, ApiError> {
        let sport = sqlx::query_as::<_, Sport>(&format!(
            r#"
            INSERT INTO sports (title, description, rules, cost, level, event_id, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {SPORT_COLUMNS}
            "#
        ))
        .bind(&request.title)
        .bind(&request.description)
        .bind(&request.rules)
        .bind(request.cost)
        .bind(request.level)
        .bind(event_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(sport)
    }

    /// Find sport by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Sport>, ApiError> {
        let sport = sqlx::query_as::<_, Sport>(&format!(
            "SELECT {SPORT_COLUMNS} FROM sports WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(sport)
    }

    /// Update sport; absent patch fields keep their stored value
    pub async fn update(&self, id: i64, patch: &UpdateSportRequest) -> Result<Sport, ApiError> {
        let sport = sqlx::query_as::<_, Sport>(&format!(
            r#"
            UPDATE sports
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                rules = COALESCE($4, rules),
                cost = COALESCE($5, cost),
                level = COALESCE($6, level)
            WHERE id = $1
            RETURNING {SPORT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&patch.title)
        .bind(&patch.description)
        .bind(&patch.rules)
        .bind(patch.cost)
        .bind(patch.level)
        .fetch_one(&self.pool)
        .await?;

        Ok(sport)
    }

    /// Delete sport
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        sqlx::query("DELETE FROM sports WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// All sports offered at an event
    pub async fn list_for_event(&self, event_id: i64) -> Result<Vec<Sport>, ApiError> {
        let sports = sqlx::query_as::<_, Sport>(&format!(
            "SELECT {SPORT_COLUMNS} FROM sports WHERE event_id = $1 ORDER BY created_at ASC"
        ))
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(sports)
    }

    /// List sports with pagination
    pub async fn list(&self, spec: &PageSpec) -> Result<Vec<Sport>, ApiError> {
        let sports = sqlx::query_as::<_, Sport>(&format!(
            "SELECT {SPORT_COLUMNS} FROM sports ORDER BY {} LIMIT $1 OFFSET $2",
            spec.order_by
        ))
        .bind(spec.limit)
        .bind(spec.offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(sports)
    }

    /// Count total sports
    pub async fn count(&self) -> Result<i64, ApiError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sports")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
