use crate::api::{ApiJson, ApiPath, ErrorResponse};
use crate::auth::AuthUser;
use crate::catalog::reviews;
use crate::db::DbPool;
use crate::error::ApiError;
use crate::types::ReviewResponse;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

/// Author and recipe come from the session and the URL, so the body only
/// carries the rating and comment.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateReviewRequest {
    /// 1 to 5
    #[schema(minimum = 1, maximum = 5)]
    pub rating: i32,
    pub comment: String,
}

#[utoipa::path(
    post,
    path = "/api/recipes/{id}/reviews",
    tag = "reviews",
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    request_body(content = CreateReviewRequest, example = json!({"rating": 5, "comment": "great"})),
    responses(
        (status = 201, description = "Review created", body = ReviewResponse),
        (status = 400, description = "Invalid rating or comment", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_review(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(request): ApiJson<CreateReviewRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut conn = pool.get()?;
    let review = reviews::create_review(&mut conn, user.id, id, request.rating, &request.comment)?;

    Ok((StatusCode::CREATED, Json(ReviewResponse::from(review))))
}
