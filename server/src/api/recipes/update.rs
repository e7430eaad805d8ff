use crate::api::{ApiJson, ApiPath, ErrorResponse};
use crate::auth::AuthUser;
use crate::catalog::{recipes, RecipeFields, RecipePatch};
use crate::db::DbPool;
use crate::error::ApiError;
use crate::types::RecipeResponse;
use axum::{extract::State, Json};
use std::sync::Arc;

#[utoipa::path(
    put,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    request_body = RecipeFields,
    responses(
        (status = 200, description = "Recipe replaced", body = RecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn replace_recipe(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(request): ApiJson<RecipeFields>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let patch = RecipePatch::from(request);

    let mut conn = pool.get()?;
    let recipe = recipes::update_owned(&mut conn, user.id, id, &patch)?;

    Ok(Json(recipe.into()))
}

#[utoipa::path(
    patch,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    request_body = RecipePatch,
    responses(
        (status = 200, description = "Recipe updated", body = RecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_recipe(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(patch): ApiJson<RecipePatch>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let mut conn = pool.get()?;
    let recipe = recipes::update_owned(&mut conn, user.id, id, &patch)?;

    Ok(Json(recipe.into()))
}
