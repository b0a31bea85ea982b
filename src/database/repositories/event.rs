//! Event repository implementation

use sqlx::PgPool;

use crate::models::event::{Event, NewEvent, ResolvedLocation};
use crate::utils::errors::{is_unique_violation, ApiError};
use crate::utils::pagination::PageSpec;

const EVENT_COLUMNS: &str = "id, name, slug, description, date, longitude, latitude, \
     formatted_address, street, city, state, zipcode, country, phone, email, photo, \
     average_rating, created_at, user_id";

#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new event.
    ///
    /// When `enforce_single_owner` is set, at most one event may exist per
    /// owner. The check runs inside a transaction holding an advisory lock
    /// keyed on the owner id, closing the read-then-write race between
    /// concurrent creates by the same user.
    pub async fn create(
        &self,
        new: &NewEvent,
        enforce_single_owner: bool,
    ) -> Result<Event, ApiError> {
        let mut tx = self.pool.begin().await?;

        if enforce_single_owner {
            sqlx::query("SELECT pg_advisory_xact_lock($1)")
                .bind(new.user_id)
                .execute(&mut *tx)
                .await?;

            let existing: Option<(i64,)> =
                sqlx::query_as("SELECT id FROM events WHERE user_id = $1")
                    .bind(new.user_id)
                    .fetch_optional(&mut *tx)
                    .await?;

            if existing.is_some() {
                return Err(ApiError::Duplicate(format!(
                    "The user with ID {} has already published an event",
                    new.user_id
                )));
            }
        }

        let event = sqlx::query_as::<_, Event>(&format!(
            r#"
            INSERT INTO events (name, slug, description, date, longitude, latitude,
                formatted_address, street, city, state, zipcode, country, phone, email, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(&new.name)
        .bind(&new.slug)
        .bind(&new.description)
        .bind(new.date)
        .bind(new.location.longitude)
        .bind(new.location.latitude)
        .bind(&new.location.formatted_address)
        .bind(&new.location.street)
        .bind(&new.location.city)
        .bind(&new.location.state)
        .bind(&new.location.zipcode)
        .bind(&new.location.country)
        .bind(&new.phone)
        .bind(&new.email)
        .bind(new.user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::Duplicate(format!("An event named '{}' already exists", new.name))
            } else {
                ApiError::Database(e)
            }
        })?;

        tx.commit().await?;
        Ok(event)
    }

    /// Find event by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Event>, ApiError> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    /// Update scalar event fields; absent patch fields keep their stored value
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: i64,
        name: Option<&str>,
        slug: Option<&str>,
        description: Option<&str>,
        date: Option<chrono::DateTime<chrono::Utc>>,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> Result<Event, ApiError> {
        let event = sqlx::query_as::<_, Event>(&format!(
            r#"
            UPDATE events
            SET name = COALESCE($2, name),
                slug = COALESCE($3, slug),
                description = COALESCE($4, description),
                date = COALESCE($5, date),
                phone = COALESCE($6, phone),
                email = COALESCE($7, email)
            WHERE id = $1
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(name)
        .bind(slug)
        .bind(description)
        .bind(date)
        .bind(phone)
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::Duplicate("An event with that name already exists".to_string())
            } else {
                ApiError::Database(e)
            }
        })?;

        Ok(event)
    }

    /// Overwrite all geocoded location columns
    pub async fn set_location(
        &self,
        id: i64,
        location: &ResolvedLocation,
    ) -> Result<Event, ApiError> {
        let event = sqlx::query_as::<_, Event>(&format!(
            r#"
            UPDATE events
            SET longitude = $2, latitude = $3, formatted_address = $4, street = $5,
                city = $6, state = $7, zipcode = $8, country = $9
            WHERE id = $1
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(location.longitude)
        .bind(location.latitude)
        .bind(&location.formatted_address)
        .bind(&location.street)
        .bind(&location.city)
        .bind(&location.state)
        .bind(&location.zipcode)
        .bind(&location.country)
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    /// Record the uploaded photo filename
    pub async fn set_photo(&self, id: i64, filename: &str) -> Result<(), ApiError> {
        sqlx::query("UPDATE events SET photo = $2 WHERE id = $1")
            .bind(id)
            .bind(filename)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Write the denormalized average rating; NULL clears it
    pub async fn set_average_rating(&self, id: i64, average: Option<f64>) -> Result<(), ApiError> {
        let result = sqlx::query("UPDATE events SET average_rating = $2 WHERE id = $1")
            .bind(id)
            .bind(average)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!("Event not found with id of {id}")));
        }

        Ok(())
    }

    /// Delete event (sports and reviews cascade via foreign keys)
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// List events with pagination
    pub async fn list(&self, spec: &PageSpec) -> Result<Vec<Event>, ApiError> {
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY {} LIMIT $1 OFFSET $2",
            spec.order_by
        ))
        .bind(spec.limit)
        .bind(spec.offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// All events that have a stored geo-point
    pub async fn list_located(&self) -> Result<Vec<Event>, ApiError> {
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events \
             WHERE latitude IS NOT NULL AND longitude IS NOT NULL"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Count total events
    pub async fn count(&self) -> Result<i64, ApiError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
