//! The user ↔ recipe favorites relation.

use super::recipes;
use crate::error::ApiError;
use crate::models::{NewFavorite, Recipe};
use crate::schema::{favorite_recipes, recipes as recipes_table};
use diesel::prelude::*;
use uuid::Uuid;

/// Adds `recipe_id` to the user's favorites.
///
/// The composite primary key on `favorite_recipes` decides races: the insert
/// is `ON CONFLICT DO NOTHING`, and an insert that touched no rows means the
/// edge was already there.
pub fn add_favorite(conn: &mut PgConnection, user_id: Uuid, recipe_id: i32) -> Result<(), ApiError> {
    if !recipes::exists(conn, recipe_id)? {
        return Err(ApiError::recipe_not_found());
    }

    let inserted = diesel::insert_into(favorite_recipes::table)
        .values(&NewFavorite { user_id, recipe_id })
        .on_conflict_do_nothing()
        .execute(conn);

    match inserted {
        Ok(0) => Err(ApiError::Conflict("Recipe already in favorites".to_string())),
        Ok(_) => {
            tracing::info!(recipe_id, user_id = %user_id, "recipe added to favorites");
            Ok(())
        }
        Err(e) => Err(recipes::recipe_reference_error(e)),
    }
}

/// All recipes the user has favorited, by recipe id.
pub fn list_favorites(conn: &mut PgConnection, user_id: Uuid) -> Result<Vec<Recipe>, ApiError> {
    Ok(favorite_recipes::table
        .inner_join(recipes_table::table)
        .filter(favorite_recipes::user_id.eq(user_id))
        .select(Recipe::as_select())
        .order(recipes_table::id.asc())
        .load(conn)?)
}
