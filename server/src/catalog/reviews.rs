//! Reviews attached to a recipe.

use super::recipes;
use crate::error::ApiError;
use crate::models::{NewReview, Review};
use crate::schema::{reviews, users};
use diesel::prelude::*;
use uuid::Uuid;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// A review together with its author's username.
#[derive(Debug, Clone)]
pub struct AuthoredReview {
    pub review: Review,
    pub author: String,
}

pub fn validate_review(rating: i32, comment: &str) -> Result<(), ApiError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(ApiError::validation(format!(
            "rating must be between {MIN_RATING} and {MAX_RATING}"
        )));
    }
    if comment.trim().is_empty() {
        return Err(ApiError::validation("comment cannot be empty"));
    }
    Ok(())
}

/// Creates a review by `user_id` on `recipe_id`. Author, recipe and
/// timestamp all come from the server side.
pub fn create_review(
    conn: &mut PgConnection,
    user_id: Uuid,
    recipe_id: i32,
    rating: i32,
    comment: &str,
) -> Result<AuthoredReview, ApiError> {
    validate_review(rating, comment)?;

    if !recipes::exists(conn, recipe_id)? {
        return Err(ApiError::recipe_not_found());
    }

    let review = diesel::insert_into(reviews::table)
        .values(&NewReview {
            user_id,
            recipe_id,
            rating,
            comment,
        })
        .returning(Review::as_returning())
        .get_result(conn)
        .map_err(recipes::recipe_reference_error)?;

    let author: String = users::table
        .find(user_id)
        .select(users::username)
        .first(conn)?;

    tracing::info!(review_id = review.id, recipe_id, "review created");
    Ok(AuthoredReview { review, author })
}

/// All reviews of a recipe in creation order.
pub fn list_reviews(
    conn: &mut PgConnection,
    recipe_id: i32,
) -> Result<Vec<AuthoredReview>, ApiError> {
    if !recipes::exists(conn, recipe_id)? {
        return Err(ApiError::recipe_not_found());
    }

    let rows: Vec<(Review, String)> = reviews::table
        .inner_join(users::table)
        .filter(reviews::recipe_id.eq(recipe_id))
        .select((Review::as_select(), users::username))
        .order(reviews::id.asc())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(review, author)| AuthoredReview { review, author })
        .collect())
}
