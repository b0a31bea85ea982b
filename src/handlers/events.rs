//! Event handlers

use axum::extract::{Multipart, Path, Query, State};
use axum::Json;
use serde_json::Value;

use crate::handlers::{data_response, list_response, AppState};
use crate::middleware::{require_role, CurrentUser};
use crate::models::event::{CreateEventRequest, UpdateEventRequest};
use crate::models::user::Role;
use crate::utils::errors::{ApiError, Result};
use crate::utils::pagination::PageParams;

/// GET /api/v1/events
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Value>> {
    let (events, total) = state.services.events.list(&params).await?;
    Ok(list_response(&events, total))
}

/// GET /api/v1/events/{id}
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>> {
    let event = state.services.events.find_by_id_with_sports(id).await?;
    Ok(data_response(&event))
}

/// GET /api/v1/events/radius/{zipcode}/{distance}
pub async fn within_radius(
    State(state): State<AppState>,
    Path((zipcode, distance)): Path<(String, f64)>,
) -> Result<Json<Value>> {
    let events = state
        .services
        .events
        .find_within_radius(&zipcode, distance)
        .await?;
    let total = events.len() as i64;
    Ok(list_response(&events, total))
}

/// POST /api/v1/events
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(request): Json<CreateEventRequest>,
) -> Result<Json<Value>> {
    require_role(&user, &[Role::Publisher, Role::Admin])?;
    let event = state
        .services
        .events
        .create(user.id, user.role, request)
        .await?;
    Ok(data_response(&event))
}

/// PUT /api/v1/events/{id}
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(patch): Json<UpdateEventRequest>,
) -> Result<Json<Value>> {
    require_role(&user, &[Role::Publisher, Role::Admin])?;
    let event = state
        .services
        .events
        .update(id, user.id, user.role, patch)
        .await?;
    Ok(data_response(&event))
}

/// DELETE /api/v1/events/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<Value>> {
    require_role(&user, &[Role::Publisher, Role::Admin])?;
    state.services.events.delete(id, user.id, user.role).await?;
    Ok(data_response(&Value::Object(Default::default())))
}

/// PUT /api/v1/events/{id}/photo
pub async fn upload_photo(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    mut multipart: Multipart,
) -> Result<Json<Value>> {
    require_role(&user, &[Role::Publisher, Role::Admin])?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Upload(format!("Problem with file upload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().unwrap_or("").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::Upload(format!("Problem with file upload: {e}")))?;

        let filename = state
            .services
            .events
            .upload_photo(id, user.id, user.role, &original_name, &content_type, &bytes)
            .await?;
        return Ok(data_response(&filename));
    }

    Err(ApiError::Upload("Please upload a file".to_string()))
}
