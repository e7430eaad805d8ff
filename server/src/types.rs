//! Response bodies shared by several endpoint modules.

use crate::catalog::{AuthoredReview, Page};
use crate::models::Recipe;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeResponse {
    pub id: i32,
    /// Owner of the recipe
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub ingredients: String,
    pub instructions: String,
    #[schema(example = "Main Course")]
    pub category: String,
    /// Minutes
    pub preparation_time: i32,
    /// Minutes
    pub cooking_time: i32,
    pub servings: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Recipe> for RecipeResponse {
    fn from(r: Recipe) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            title: r.title,
            description: r.description,
            ingredients: r.ingredients,
            instructions: r.instructions,
            category: r.category,
            preparation_time: r.preparation_time,
            cooking_time: r.cooking_time,
            servings: r.servings,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeListResponse {
    pub recipes: Vec<RecipeResponse>,
}

impl From<Vec<Recipe>> for RecipeListResponse {
    fn from(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: recipes.into_iter().map(RecipeResponse::from).collect(),
        }
    }
}

/// One page of search results.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipePageResponse {
    /// Total number of matching recipes across all pages
    pub count: i64,
    /// Current page number (1-based)
    pub page: i64,
    /// Next page number, if there is one
    pub next: Option<i64>,
    /// Previous page number, if there is one
    pub previous: Option<i64>,
    pub results: Vec<RecipeResponse>,
}

impl From<Page<Recipe>> for RecipePageResponse {
    fn from(page: Page<Recipe>) -> Self {
        let next = page.next();
        let previous = page.previous();
        let page = page.map(RecipeResponse::from);

        Self {
            count: page.count,
            page: page.page,
            next,
            previous,
            results: page.items,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReviewResponse {
    pub id: i32,
    pub recipe_id: i32,
    /// Username of the reviewer
    pub author: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl From<AuthoredReview> for ReviewResponse {
    fn from(AuthoredReview { review, author }: AuthoredReview) -> Self {
        Self {
            id: review.id,
            recipe_id: review.recipe_id,
            author,
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at,
        }
    }
}
