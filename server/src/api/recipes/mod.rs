pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for the owner-scoped /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes).post(create::create_recipe))
        .route(
            "/{id}",
            get(get::get_recipe)
                .put(update::replace_recipe)
                .patch(update::update_recipe)
                .delete(delete::delete_recipe),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_recipe,
        list::list_recipes,
        get::get_recipe,
        update::replace_recipe,
        update::update_recipe,
        delete::delete_recipe,
    ),
    components(schemas(
        crate::catalog::Category,
        crate::catalog::RecipeFields,
        crate::catalog::RecipePatch,
        crate::types::RecipeResponse,
        crate::types::RecipeListResponse,
    ))
)]
pub struct ApiDoc;
