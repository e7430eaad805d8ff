use crate::api::{ApiJson, ErrorResponse};
use crate::auth::AuthUser;
use crate::catalog::{recipes, RecipeFields};
use crate::db::DbPool;
use crate::error::ApiError;
use crate::types::RecipeResponse;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "recipes",
    request_body(content = RecipeFields, example = json!({
        "title": "Pancakes",
        "description": "Weekend breakfast",
        "ingredients": "flour, eggs, milk, butter",
        "instructions": "Whisk, rest, fry.",
        "category": "Breakfast",
        "preparation_time": 10,
        "cooking_time": 15,
        "servings": 2
    })),
    responses(
        (status = 201, description = "Recipe created successfully", body = RecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_recipe(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    ApiJson(request): ApiJson<RecipeFields>,
) -> Result<impl IntoResponse, ApiError> {
    let mut conn = pool.get()?;
    let recipe = recipes::create(&mut conn, user.id, &request)?;

    Ok((StatusCode::CREATED, Json(RecipeResponse::from(recipe))))
}
