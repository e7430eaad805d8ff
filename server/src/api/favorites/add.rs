use crate::api::{ApiPath, ErrorResponse};
use crate::auth::AuthUser;
use crate::catalog::favorites;
use crate::db::DbPool;
use crate::error::ApiError;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FavoriteAddedResponse {
    pub message: String,
    pub recipe_id: i32,
}

#[utoipa::path(
    post,
    path = "/api/recipes/{id}/favorite",
    tag = "favorites",
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 201, description = "Recipe added to favorites", body = FavoriteAddedResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 409, description = "Recipe already in favorites", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn add_favorite(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let mut conn = pool.get()?;
    favorites::add_favorite(&mut conn, user.id, id)?;

    Ok((
        StatusCode::CREATED,
        Json(FavoriteAddedResponse {
            message: "Recipe added to favorites".to_string(),
            recipe_id: id,
        }),
    ))
}
