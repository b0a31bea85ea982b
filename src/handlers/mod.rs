//! HTTP handlers module
//!
//! Route table and shared application state for the REST surface.

pub mod events;
pub mod reviews;
pub mod sports;

use axum::extract::{DefaultBodyLimit, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::config::Settings;
use crate::database::{self, DatabaseService};
use crate::services::ServiceFactory;
use crate::utils::errors::Result;

#[derive(Debug, Clone)]
pub struct AppState {
    pub db: DatabaseService,
    pub services: ServiceFactory,
    pub settings: Settings,
    pub pool: database::DatabasePool,
}

/// Build the full application router
pub fn api_router(state: AppState) -> Router {
    let photo_body_limit = state.settings.uploads.max_file_size + 1024;

    let api = Router::new()
        .route("/events", get(events::list).post(events::create))
        .route("/events/radius/{zipcode}/{distance}", get(events::within_radius))
        .route(
            "/events/{id}",
            get(events::get_one).put(events::update).delete(events::delete),
        )
        .route(
            "/events/{id}/photo",
            put(events::upload_photo).layer(DefaultBodyLimit::max(photo_body_limit)),
        )
        .route(
            "/events/{event_id}/sports",
            get(sports::list_for_event).post(sports::create),
        )
        .route(
            "/events/{event_id}/reviews",
            get(reviews::list_for_event).post(reviews::create),
        )
        .route("/sports", get(sports::list))
        .route(
            "/sports/{id}",
            get(sports::get_one).put(sports::update).delete(sports::delete),
        )
        .route(
            "/reviews/{id}",
            get(reviews::get_one).put(reviews::update).delete(reviews::delete),
        );

    Router::new()
        .nest("/api/v1", api)
        .route("/health", get(health))
        .with_state(state)
}

/// Liveness probe; checks the database connection
async fn health(State(state): State<AppState>) -> Result<Json<Value>> {
    database::health_check(&state.pool).await?;
    Ok(Json(json!({"success": true, "data": {"status": "ok"}})))
}

/// Standard single-resource response envelope
pub(crate) fn data_response<T: serde::Serialize>(data: &T) -> Json<Value> {
    Json(json!({"success": true, "data": data}))
}

/// Standard list response envelope with a count
pub(crate) fn list_response<T: serde::Serialize>(items: &[T], total: i64) -> Json<Value> {
    Json(json!({"success": true, "count": total, "data": items}))
}
