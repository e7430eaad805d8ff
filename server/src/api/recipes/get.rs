use crate::api::{ApiPath, ErrorResponse};
use crate::auth::AuthUser;
use crate::catalog::recipes;
use crate::db::DbPool;
use crate::error::ApiError;
use crate::types::RecipeResponse;
use axum::{extract::State, Json};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe details", body = RecipeResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_recipe(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let mut conn = pool.get()?;
    let recipe = recipes::get_owned(&mut conn, user.id, id)?;

    Ok(Json(recipe.into()))
}
