pub mod create;
pub mod list;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for the review endpoints (full paths, merged at the root)
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/api/recipes/{id}/reviews",
        get(list::list_reviews).post(create::create_review),
    )
}

#[derive(OpenApi)]
#[openapi(
    paths(create::create_review, list::list_reviews),
    components(schemas(
        create::CreateReviewRequest,
        crate::types::ReviewResponse,
        list::ReviewListResponse,
    ))
)]
pub struct ApiDoc;
