//! Review handlers

use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use crate::handlers::{data_response, list_response, AppState};
use crate::middleware::{require_role, CurrentUser};
use crate::models::review::{CreateReviewRequest, UpdateReviewRequest};
use crate::models::user::Role;
use crate::utils::errors::Result;

/// GET /api/v1/events/{event_id}/reviews
pub async fn list_for_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<Json<Value>> {
    let reviews = state.services.reviews.list_for_event(event_id).await?;
    let total = reviews.len() as i64;
    Ok(list_response(&reviews, total))
}

/// GET /api/v1/reviews/{id}
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>> {
    let review = state.services.reviews.find_by_id(id).await?;
    Ok(data_response(&review))
}

/// POST /api/v1/events/{event_id}/reviews
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(event_id): Path<i64>,
    Json(request): Json<CreateReviewRequest>,
) -> Result<Json<Value>> {
    require_role(&user, &[Role::User, Role::Admin])?;
    let review = state
        .services
        .reviews
        .create(event_id, user.id, request)
        .await?;
    Ok(data_response(&review))
}

/// PUT /api/v1/reviews/{id}
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(patch): Json<UpdateReviewRequest>,
) -> Result<Json<Value>> {
    require_role(&user, &[Role::User, Role::Admin])?;
    let review = state
        .services
        .reviews
        .update(id, user.id, user.role, patch)
        .await?;
    Ok(data_response(&review))
}

/// DELETE /api/v1/reviews/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<Value>> {
    require_role(&user, &[Role::User, Role::Admin])?;
    state.services.reviews.delete(id, user.id, user.role).await?;
    Ok(data_response(&Value::Object(Default::default())))
}
