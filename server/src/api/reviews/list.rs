use crate::api::{ApiPath, ErrorResponse};
use crate::catalog::reviews;
use crate::db::DbPool;
use crate::error::ApiError;
use crate::types::ReviewResponse;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReviewListResponse {
    pub reviews: Vec<ReviewResponse>,
}

#[utoipa::path(
    get,
    path = "/api/recipes/{id}/reviews",
    tag = "reviews",
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Reviews in creation order", body = ReviewListResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn list_reviews(
    State(pool): State<Arc<DbPool>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<ReviewListResponse>, ApiError> {
    let mut conn = pool.get()?;
    let reviews = reviews::list_reviews(&mut conn, id)?
        .into_iter()
        .map(ReviewResponse::from)
        .collect();

    Ok(Json(ReviewListResponse { reviews }))
}
