use crate::api::{ApiPath, ErrorResponse};
use crate::auth::AuthUser;
use crate::catalog::recipes;
use crate::db::DbPool;
use crate::error::ApiError;
use axum::{extract::State, http::StatusCode};
use std::sync::Arc;

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 204, description = "Recipe deleted successfully"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_recipe(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get()?;
    recipes::delete_owned(&mut conn, user.id, id)?;

    Ok(StatusCode::NO_CONTENT)
}
