use crate::api::{ApiPath, ErrorResponse};
use crate::catalog::{query, PageRequest, RecipeFilter};
use crate::db::DbPool;
use crate::error::ApiError;
use crate::types::RecipePageResponse;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct PageParams {
    /// Page number, starting at 1 (page size is 10)
    pub page: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/recipes/category/{name}",
    tag = "search",
    params(
        ("name" = String, Path, description = "Category name, matched case-insensitively"),
        PageParams
    ),
    responses(
        (status = 200, description = "Recipes in the category (empty for unknown categories)", body = RecipePageResponse),
        (status = 400, description = "Invalid page", body = ErrorResponse),
        (status = 404, description = "Page out of range", body = ErrorResponse)
    )
)]
pub async fn recipes_by_category(
    State(pool): State<Arc<DbPool>>,
    ApiPath(name): ApiPath<String>,
    Query(params): Query<PageParams>,
) -> Result<Json<RecipePageResponse>, ApiError> {
    let page = PageRequest::parse(params.page.as_deref())?;

    let mut conn = pool.get()?;
    let results = query::search(&mut conn, &RecipeFilter::Category(name), page)?;

    Ok(Json(results.into()))
}
