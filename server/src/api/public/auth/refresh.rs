use crate::api::public::auth::TokenResponse;
use crate::api::{ApiJson, ErrorResponse};
use crate::auth::rotate_session;
use crate::db::DbPool;
use crate::error::ApiError;
use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RefreshRequest {
    /// A currently valid token. It is revoked once the new one is issued.
    pub token: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/token/refresh",
    tag = "auth",
    request_body = RefreshRequest,
    responses(
        (status = 200, description = "New token issued", body = TokenResponse),
        (status = 401, description = "Invalid or expired token", body = ErrorResponse)
    )
)]
pub async fn refresh(
    State(pool): State<Arc<DbPool>>,
    ApiJson(req): ApiJson<RefreshRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let mut conn = pool.get()?;

    let issued = rotate_session(&mut conn, req.token.trim())?
        .ok_or_else(|| ApiError::Unauthorized("Invalid or expired token".to_string()))?;

    Ok(Json(issued.into()))
}
