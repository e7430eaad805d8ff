use crate::api::public::auth::TokenResponse;
use crate::api::{ApiJson, ErrorResponse};
use crate::auth::{create_session, verify_password};
use crate::db::DbPool;
use crate::error::ApiError;
use crate::models::User;
use crate::schema::users;
use axum::{extract::State, Json};
use diesel::prelude::*;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized("Invalid credentials".to_string())
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body(content = LoginRequest, example = json!({"username": "user", "password": "password"})),
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    )
)]
pub async fn login(
    State(pool): State<Arc<DbPool>>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let mut conn = pool.get()?;

    let user: User = users::table
        .filter(
            diesel::dsl::sql::<diesel::sql_types::Bool>("LOWER(username) = LOWER(")
                .bind::<diesel::sql_types::Text, _>(req.username.trim())
                .sql(")"),
        )
        .select(User::as_select())
        .first(&mut conn)
        .optional()?
        .ok_or_else(invalid_credentials)?;

    if !verify_password(&req.password, &user.password_hash) {
        return Err(invalid_credentials());
    }

    let issued = create_session(&mut conn, user.id)?;

    Ok(Json(issued.into()))
}
