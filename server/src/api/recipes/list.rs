use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::catalog::recipes;
use crate::db::DbPool;
use crate::error::ApiError;
use crate::types::RecipeListResponse;
use axum::{extract::State, Json};
use std::sync::Arc;

/// Lists the caller's own recipes. The global search surface lives under
/// `/api/recipes/search` and friends.
#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "The caller's recipes in creation order", body = RecipeListResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_recipes(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
) -> Result<Json<RecipeListResponse>, ApiError> {
    let mut conn = pool.get()?;
    let owned = recipes::list_owned(&mut conn, user.id)?;

    Ok(Json(owned.into()))
}
