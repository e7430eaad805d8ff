//! Global recipe search surface. Readable without authentication.

pub mod by_category;
pub mod by_ingredient;
pub mod by_time;
pub mod by_title;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for the search endpoints (full paths, merged at the root)
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/recipes/category/{name}",
            get(by_category::recipes_by_category),
        )
        .route(
            "/api/recipes/ingredient/{name}",
            get(by_ingredient::recipes_by_ingredient),
        )
        .route("/api/recipes/search", get(by_title::search_recipes))
        .route("/api/recipes/filter", get(by_time::filter_recipes))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        by_category::recipes_by_category,
        by_ingredient::recipes_by_ingredient,
        by_title::search_recipes,
        by_time::filter_recipes,
    ),
    components(schemas(crate::types::RecipePageResponse))
)]
pub struct ApiDoc;
