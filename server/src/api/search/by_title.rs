use crate::api::ErrorResponse;
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
pub struct TitleSearchParams {
    /// Text to look for in the title, case-insensitive. Omit to list everything.
    pub title: Option<String>,
    /// Page number, starting at 1 (page size is 10)
    pub page: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/recipes/search",
    tag = "search",
    params(TitleSearchParams),
    responses(
        (status = 200, description = "Matching recipes", body = RecipePageResponse),
        (status = 400, description = "Invalid page", body = ErrorResponse),
        (status = 404, description = "Page out of range", body = ErrorResponse)
    )
)]
pub async fn search_recipes(
    State(pool): State<Arc<DbPool>>,
    Query(params): Query<TitleSearchParams>,
) -> Result<Json<RecipePageResponse>, ApiError> {
    let page = PageRequest::parse(params.page.as_deref())?;

    let mut conn = pool.get()?;
    let results = query::search(&mut conn, &RecipeFilter::Title(params.title), page)?;

    Ok(Json(results.into()))
}
