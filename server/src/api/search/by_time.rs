use crate::api::ErrorResponse;
use crate::catalog::{query, PageRequest, RecipeFilter, TimeBounds};
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

/// Values are taken as raw strings so malformed numbers surface as a 400
/// with the usual error body.
#[derive(Debug, Deserialize, IntoParams)]
pub struct TimeFilterParams {
    /// Maximum preparation time in minutes (inclusive). Alias: `prep_time`.
    #[serde(alias = "prep_time")]
    pub preparation_time: Option<String>,
    /// Maximum cooking time in minutes (inclusive). Alias: `cook_time`.
    #[serde(alias = "cook_time")]
    pub cooking_time: Option<String>,
    /// Page number, starting at 1 (page size is 10)
    pub page: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/recipes/filter",
    tag = "search",
    params(TimeFilterParams),
    responses(
        (status = 200, description = "Recipes within the time bounds", body = RecipePageResponse),
        (status = 400, description = "Malformed time or page value", body = ErrorResponse),
        (status = 404, description = "Page out of range", body = ErrorResponse)
    )
)]
pub async fn filter_recipes(
    State(pool): State<Arc<DbPool>>,
    Query(params): Query<TimeFilterParams>,
) -> Result<Json<RecipePageResponse>, ApiError> {
    let bounds = TimeBounds::parse(
        params.preparation_time.as_deref(),
        params.cooking_time.as_deref(),
    )?;
    let page = PageRequest::parse(params.page.as_deref())?;

    let mut conn = pool.get()?;
    let results = query::search(&mut conn, &RecipeFilter::Time(bounds), page)?;

    Ok(Json(results.into()))
}
