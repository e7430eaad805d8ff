//! Ownership-scoped recipe CRUD.
//!
//! Reads and writes here are always filtered by `user_id = owner`, so a
//! recipe owned by someone else behaves exactly like a missing one.

use super::category::Category;
use crate::error::ApiError;
use crate::models::{NewRecipe, Recipe, RecipeChangeset};
use crate::schema::recipes;
use chrono::Utc;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

pub const MAX_TITLE_CHARS: usize = 100;

/// Full set of client-editable recipe fields (create and PUT).
///
/// Unknown fields are rejected, which keeps clients from supplying an owner.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RecipeFields {
    pub title: String,
    pub description: String,
    /// Free-form ingredient list
    pub ingredients: String,
    pub instructions: String,
    pub category: Category,
    /// Minutes
    pub preparation_time: i32,
    /// Minutes
    pub cooking_time: i32,
    pub servings: i32,
}

/// Partial update (PATCH). Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RecipePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub category: Option<Category>,
    pub preparation_time: Option<i32>,
    pub cooking_time: Option<i32>,
    pub servings: Option<i32>,
}

impl From<RecipeFields> for RecipePatch {
    fn from(fields: RecipeFields) -> Self {
        Self {
            title: Some(fields.title),
            description: Some(fields.description),
            ingredients: Some(fields.ingredients),
            instructions: Some(fields.instructions),
            category: Some(fields.category),
            preparation_time: Some(fields.preparation_time),
            cooking_time: Some(fields.cooking_time),
            servings: Some(fields.servings),
        }
    }
}

impl RecipeFields {
    pub fn validate(&self) -> Result<(), ApiError> {
        check_title(&self.title)?;
        check_text("description", &self.description)?;
        check_text("ingredients", &self.ingredients)?;
        check_text("instructions", &self.instructions)?;
        check_non_negative("preparation_time", self.preparation_time)?;
        check_non_negative("cooking_time", self.cooking_time)?;
        check_non_negative("servings", self.servings)
    }
}

impl RecipePatch {
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(title) = &self.title {
            check_title(title)?;
        }
        for (name, value) in [
            ("description", &self.description),
            ("ingredients", &self.ingredients),
            ("instructions", &self.instructions),
        ] {
            if let Some(value) = value {
                check_text(name, value)?;
            }
        }
        for (name, value) in [
            ("preparation_time", self.preparation_time),
            ("cooking_time", self.cooking_time),
            ("servings", self.servings),
        ] {
            if let Some(value) = value {
                check_non_negative(name, value)?;
            }
        }
        Ok(())
    }

    fn changeset(&self) -> RecipeChangeset<'_> {
        RecipeChangeset {
            title: self.title.as_deref().map(str::trim),
            description: self.description.as_deref(),
            ingredients: self.ingredients.as_deref(),
            instructions: self.instructions.as_deref(),
            category: self.category.map(Category::as_str),
            preparation_time: self.preparation_time,
            cooking_time: self.cooking_time,
            servings: self.servings,
            updated_at: Some(Utc::now()),
        }
    }
}

fn check_title(title: &str) -> Result<(), ApiError> {
    check_text("title", title)?;
    if title.trim().chars().count() > MAX_TITLE_CHARS {
        return Err(ApiError::validation(format!(
            "title cannot be longer than {MAX_TITLE_CHARS} characters"
        )));
    }
    Ok(())
}

fn check_text(name: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(format!("{name} cannot be empty")));
    }
    Ok(())
}

fn check_non_negative(name: &str, value: i32) -> Result<(), ApiError> {
    if value < 0 {
        return Err(ApiError::validation(format!("{name} cannot be negative")));
    }
    Ok(())
}

pub fn create(
    conn: &mut PgConnection,
    owner: Uuid,
    fields: &RecipeFields,
) -> Result<Recipe, ApiError> {
    fields.validate()?;

    let new_recipe = NewRecipe {
        user_id: owner,
        title: fields.title.trim(),
        description: &fields.description,
        ingredients: &fields.ingredients,
        instructions: &fields.instructions,
        category: fields.category.as_str(),
        preparation_time: fields.preparation_time,
        cooking_time: fields.cooking_time,
        servings: fields.servings,
    };

    let recipe = diesel::insert_into(recipes::table)
        .values(&new_recipe)
        .returning(Recipe::as_returning())
        .get_result(conn)?;

    tracing::info!(recipe_id = recipe.id, user_id = %owner, "recipe created");
    Ok(recipe)
}

/// The owner's recipes in creation order.
pub fn list_owned(conn: &mut PgConnection, owner: Uuid) -> Result<Vec<Recipe>, ApiError> {
    Ok(recipes::table
        .filter(recipes::user_id.eq(owner))
        .select(Recipe::as_select())
        .order(recipes::id.asc())
        .load(conn)?)
}

pub fn get_owned(conn: &mut PgConnection, owner: Uuid, id: i32) -> Result<Recipe, ApiError> {
    recipes::table
        .filter(recipes::id.eq(id))
        .filter(recipes::user_id.eq(owner))
        .select(Recipe::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(ApiError::recipe_not_found)
}

pub fn update_owned(
    conn: &mut PgConnection,
    owner: Uuid,
    id: i32,
    patch: &RecipePatch,
) -> Result<Recipe, ApiError> {
    patch.validate()?;

    diesel::update(
        recipes::table
            .filter(recipes::id.eq(id))
            .filter(recipes::user_id.eq(owner)),
    )
    .set(&patch.changeset())
    .returning(Recipe::as_returning())
    .get_result(conn)
    .optional()?
    .ok_or_else(ApiError::recipe_not_found)
}

/// Deletes an owned recipe. Reviews and favorite edges go with it via
/// `ON DELETE CASCADE`.
pub fn delete_owned(conn: &mut PgConnection, owner: Uuid, id: i32) -> Result<(), ApiError> {
    let deleted = diesel::delete(
        recipes::table
            .filter(recipes::id.eq(id))
            .filter(recipes::user_id.eq(owner)),
    )
    .execute(conn)?;

    if deleted == 0 {
        return Err(ApiError::recipe_not_found());
    }

    tracing::info!(recipe_id = id, user_id = %owner, "recipe deleted");
    Ok(())
}

/// Whether a recipe with this id exists, regardless of owner.
pub fn exists(conn: &mut PgConnection, id: i32) -> Result<bool, ApiError> {
    Ok(diesel::select(diesel::dsl::exists(recipes::table.find(id))).get_result(conn)?)
}

/// Maps an insert error on a row that references a recipe. A foreign key
/// violation means the recipe was deleted after the existence check.
pub(crate) fn recipe_reference_error(e: DieselError) -> ApiError {
    match e {
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            ApiError::recipe_not_found()
        }
        e => e.into(),
    }
}
