//! Sport handlers

use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::Value;

use crate::handlers::{data_response, list_response, AppState};
use crate::middleware::{require_role, CurrentUser};
use crate::models::sport::{CreateSportRequest, UpdateSportRequest};
use crate::models::user::Role;
use crate::utils::errors::Result;
use crate::utils::pagination::PageParams;

/// GET /api/v1/sports
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Value>> {
    let (sports, total) = state.services.sports.list(&params).await?;
    Ok(list_response(&sports, total))
}

/// GET /api/v1/events/{event_id}/sports
pub async fn list_for_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<Json<Value>> {
    let sports = state.services.sports.list_for_event(event_id).await?;
    let total = sports.len() as i64;
    Ok(list_response(&sports, total))
}

/// GET /api/v1/sports/{id}
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>> {
    let sport = state.services.sports.find_by_id(id).await?;
    Ok(data_response(&sport))
}

/// POST /api/v1/events/{event_id}/sports
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(event_id): Path<i64>,
    Json(request): Json<CreateSportRequest>,
) -> Result<Json<Value>> {
    require_role(&user, &[Role::Publisher, Role::Admin])?;
    let sport = state
        .services
        .sports
        .create(event_id, user.id, user.role, request)
        .await?;
    Ok(data_response(&sport))
}

/// PUT /api/v1/sports/{id}
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(patch): Json<UpdateSportRequest>,
) -> Result<Json<Value>> {
    require_role(&user, &[Role::Publisher, Role::Admin])?;
    let sport = state
        .services
        .sports
        .update(id, user.id, user.role, patch)
        .await?;
    Ok(data_response(&sport))
}

/// DELETE /api/v1/sports/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<Value>> {
    require_role(&user, &[Role::Publisher, Role::Admin])?;
    state.services.sports.delete(id, user.id, user.role).await?;
    Ok(data_response(&Value::Object(Default::default())))
}
