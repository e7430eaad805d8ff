//! Global recipe search: category, ingredient, title and time-bound filters.
//!
//! Every filter runs over all users' recipes, in creation order, and returns
//! one page of at most [`PAGE_SIZE`](super::pagination::PAGE_SIZE) rows.

use super::category::Category;
use super::pagination::{Page, PageRequest};
use crate::error::ApiError;
use crate::models::Recipe;
use crate::schema::recipes;
use diesel::pg::Pg;
use diesel::prelude::*;

/// Search criteria as received from a search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeFilter {
    /// Exact, case-insensitive category name. Unknown names match nothing.
    Category(String),
    /// Case-insensitive substring of the ingredients text.
    Ingredient(String),
    /// Case-insensitive substring of the title, compared as given. `None` or an
    /// all-whitespace needle matches everything.
    Title(Option<String>),
    /// Upper bounds on preparation and cooking time.
    Time(TimeBounds),
}

/// Optional upper bounds (inclusive, in minutes) on the two time fields.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TimeBounds {
    pub max_preparation_time: Option<i32>,
    pub max_cooking_time: Option<i32>,
}

impl TimeBounds {
    /// Parses raw query values. Absent or blank values impose no bound;
    /// anything that is not a non-negative integer is a validation error.
    pub fn parse(
        preparation_time: Option<&str>,
        cooking_time: Option<&str>,
    ) -> Result<Self, ApiError> {
        Ok(Self {
            max_preparation_time: parse_minutes("preparation_time", preparation_time)?,
            max_cooking_time: parse_minutes("cooking_time", cooking_time)?,
        })
    }
}

fn parse_minutes(name: &str, raw: Option<&str>) -> Result<Option<i32>, ApiError> {
    let value = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(value) => value,
    };

    match value.parse::<i32>() {
        Ok(minutes) if minutes >= 0 => Ok(Some(minutes)),
        _ => Err(ApiError::validation(format!(
            "{name} must be a non-negative integer number of minutes"
        ))),
    }
}

/// Builds an `ILIKE` pattern matching `needle` anywhere, with LIKE
/// metacharacters in the needle escaped.
pub fn contains_pattern(needle: &str) -> String {
    let escaped = needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// A filter resolved into something that can be turned into SQL.
enum Criteria {
    All,
    Category(Category),
    IngredientLike(String),
    TitleLike(String),
    Time(TimeBounds),
}

impl Criteria {
    /// Returns `None` when the filter can never match (unknown category).
    fn resolve(filter: &RecipeFilter) -> Option<Self> {
        match filter {
            RecipeFilter::Category(name) => Category::from_name(name).map(Criteria::Category),
            RecipeFilter::Ingredient(needle) => {
                Some(Criteria::IngredientLike(contains_pattern(needle)))
            }
            RecipeFilter::Title(Some(needle)) if !needle.trim().is_empty() => {
                Some(Criteria::TitleLike(contains_pattern(needle)))
            }
            RecipeFilter::Title(_) => Some(Criteria::All),
            RecipeFilter::Time(bounds) => Some(Criteria::Time(*bounds)),
        }
    }

    fn query(&self) -> recipes::BoxedQuery<'static, Pg> {
        let mut query = recipes::table.into_boxed();

        match self {
            Criteria::All => {}
            Criteria::Category(category) => {
                query = query.filter(recipes::category.eq(category.as_str()));
            }
            Criteria::IngredientLike(pattern) => {
                query = query.filter(recipes::ingredients.ilike(pattern.clone()));
            }
            Criteria::TitleLike(pattern) => {
                query = query.filter(recipes::title.ilike(pattern.clone()));
            }
            Criteria::Time(bounds) => {
                if let Some(max) = bounds.max_preparation_time {
                    query = query.filter(recipes::preparation_time.le(max));
                }
                if let Some(max) = bounds.max_cooking_time {
                    query = query.filter(recipes::cooking_time.le(max));
                }
            }
        }

        query
    }
}

/// Runs `filter` over all recipes and returns the requested page.
pub fn search(
    conn: &mut PgConnection,
    filter: &RecipeFilter,
    page: PageRequest,
) -> Result<Page<Recipe>, ApiError> {
    let Some(criteria) = Criteria::resolve(filter) else {
        page.check_in_range(0)?;
        return Ok(Page::empty());
    };

    let count: i64 = criteria.query().count().get_result(conn)?;
    page.check_in_range(count)?;

    let items = criteria
        .query()
        .select(Recipe::as_select())
        .order(recipes::id.asc())
        .limit(page.limit())
        .offset(page.offset())
        .load(conn)?;

    Ok(Page {
        items,
        count,
        page: page.number(),
    })
}
