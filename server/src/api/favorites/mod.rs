pub mod add;
pub mod list;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for the favorites endpoints (full paths, merged at the root)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/recipes/{id}/favorite", post(add::add_favorite))
        .route("/api/favorites", get(list::list_favorites))
}

#[derive(OpenApi)]
#[openapi(
    paths(add::add_favorite, list::list_favorites),
    components(schemas(add::FavoriteAddedResponse))
)]
pub struct ApiDoc;
