use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub password_hash: &'a str,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::sessions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct Session {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::sessions)]
pub struct NewSession<'a> {
    pub user_id: Uuid,
    pub token_hash: &'a str,
    pub expires_at: DateTime<Utc>,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Recipe {
    pub id: i32,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub ingredients: String,
    pub instructions: String,
    pub category: String,
    pub preparation_time: i32,
    pub cooking_time: i32,
    pub servings: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipe<'a> {
    pub user_id: Uuid,
    pub title: &'a str,
    pub description: &'a str,
    pub ingredients: &'a str,
    pub instructions: &'a str,
    pub category: &'a str,
    pub preparation_time: i32,
    pub cooking_time: i32,
    pub servings: i32,
}

/// Partial update of a recipe. `None` fields are left untouched. There is no
/// owner column here: ownership never changes after creation.
#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = crate::schema::recipes)]
pub struct RecipeChangeset<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub ingredients: Option<&'a str>,
    pub instructions: Option<&'a str>,
    pub category: Option<&'a str>,
    pub preparation_time: Option<i32>,
    pub cooking_time: Option<i32>,
    pub servings: Option<i32>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::reviews)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Review {
    pub id: i32,
    pub user_id: Uuid,
    pub recipe_id: i32,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::reviews)]
pub struct NewReview<'a> {
    pub user_id: Uuid,
    pub recipe_id: i32,
    pub rating: i32,
    pub comment: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::favorite_recipes)]
pub struct NewFavorite {
    pub user_id: Uuid,
    pub recipe_id: i32,
}
