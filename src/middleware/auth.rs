//! JWT authentication
//!
//! Bearer tokens carry the user id; the role is loaded from the database on
//! every request so a role change takes effect without reissuing tokens.

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::handlers::AppState;
use crate::models::user::Role;
use crate::utils::errors::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: i64,
    /// Expiry, seconds since the epoch
    pub exp: usize,
}

/// The authenticated caller, resolved from the bearer token
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub role: Role,
}

/// Decode and verify a bearer token
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, ApiError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| {
        debug!(error = %e, "Token verification failed");
        ApiError::Authentication("Not authorized to access this route".to_string())
    })
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or_else(|| {
            ApiError::Authentication("Not authorized to access this route".to_string())
        })?;

        let claims = decode_token(token, &state.settings.auth.jwt_secret)?;

        let user = state
            .db
            .users
            .find_by_id(claims.sub)
            .await?
            .ok_or_else(|| {
                ApiError::Authentication("Not authorized to access this route".to_string())
            })?;

        Ok(CurrentUser {
            id: user.id,
            role: user.role,
        })
    }
}

/// Reject callers whose role is not in `allowed`
pub fn require_role(user: &CurrentUser, allowed: &[Role]) -> Result<(), ApiError> {
    if allowed.contains(&user.role) {
        return Ok(());
    }
    Err(ApiError::Authorization(format!(
        "User role '{}' is not authorized to access this route",
        user.role.as_str()
    )))
}
