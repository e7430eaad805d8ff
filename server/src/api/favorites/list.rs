use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::catalog::favorites;
use crate::db::DbPool;
use crate::error::ApiError;
use crate::types::RecipeListResponse;
use axum::{extract::State, Json};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/favorites",
    tag = "favorites",
    responses(
        (status = 200, description = "The caller's favorite recipes", body = RecipeListResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_favorites(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
) -> Result<Json<RecipeListResponse>, ApiError> {
    let mut conn = pool.get()?;
    let recipes = favorites::list_favorites(&mut conn, user.id)?;

    Ok(Json(recipes.into()))
}
