use crate::api::{ApiJson, ErrorResponse};
use crate::auth::{create_session, hash_password};
use crate::db::DbPool;
use crate::error::ApiError;
use crate::models::{NewUser, User};
use crate::schema::users;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

pub const MAX_USERNAME_CHARS: usize = 150;
pub const MIN_PASSWORD_CHARS: usize = 8;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub user_id: Uuid,
    pub username: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

fn validate(req: &RegisterRequest) -> Result<(), ApiError> {
    let username = req.username.trim();
    if username.is_empty() {
        return Err(ApiError::validation("Username cannot be empty"));
    }
    if username.chars().count() > MAX_USERNAME_CHARS {
        return Err(ApiError::validation(format!(
            "Username cannot be longer than {MAX_USERNAME_CHARS} characters"
        )));
    }
    if req.password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(ApiError::validation(format!(
            "Password must be at least {MIN_PASSWORD_CHARS} characters"
        )));
    }
    Ok(())
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body(content = RegisterRequest, example = json!({"username": "user", "password": "password"})),
    responses(
        (status = 201, description = "User created successfully", body = RegisterResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 409, description = "Username already exists", body = ErrorResponse)
    )
)]
pub async fn register(
    State(pool): State<Arc<DbPool>>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate(&req)?;

    let password_hash = hash_password(&req.password)
        .map_err(|e| ApiError::Internal(format!("Failed to hash password: {e}")))?;

    let mut conn = pool.get()?;

    let new_user = NewUser {
        username: req.username.trim(),
        password_hash: &password_hash,
    };

    let user: User = match diesel::insert_into(users::table)
        .values(&new_user)
        .returning(User::as_returning())
        .get_result(&mut conn)
    {
        Ok(u) => u,
        Err(diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            _,
        )) => return Err(ApiError::Conflict("Username already exists".to_string())),
        Err(e) => return Err(e.into()),
    };

    let issued = create_session(&mut conn, user.id)?;

    tracing::info!(user_id = %user.id, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user_id: user.id,
            username: user.username,
            token: issued.token,
            expires_at: issued.expires_at,
        }),
    ))
}
