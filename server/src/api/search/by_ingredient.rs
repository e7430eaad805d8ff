use super::by_category::PageParams;
use crate::api::{ApiPath, ErrorResponse};
use crate::catalog::{query, PageRequest, RecipeFilter};
use crate::db::DbPool;
use crate::error::ApiError;
use crate::types::RecipePageResponse;
use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/recipes/ingredient/{name}",
    tag = "search",
    params(
        ("name" = String, Path, description = "Text to look for in the ingredients, case-insensitive"),
        PageParams
    ),
    responses(
        (status = 200, description = "Recipes whose ingredients mention the text", body = RecipePageResponse),
        (status = 400, description = "Invalid page", body = ErrorResponse),
        (status = 404, description = "Page out of range", body = ErrorResponse)
    )
)]
pub async fn recipes_by_ingredient(
    State(pool): State<Arc<DbPool>>,
    ApiPath(name): ApiPath<String>,
    Query(params): Query<PageParams>,
) -> Result<Json<RecipePageResponse>, ApiError> {
    let page = PageRequest::parse(params.page.as_deref())?;

    let mut conn = pool.get()?;
    let results = query::search(&mut conn, &RecipeFilter::Ingredient(name), page)?;

    Ok(Json(results.into()))
}
