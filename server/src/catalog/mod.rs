//! Recipe catalog services: stateless functions over a `PgConnection`.

pub mod category;
pub mod favorites;
pub mod pagination;
pub mod query;
pub mod recipes;
pub mod reviews;

pub use category::Category;
pub use pagination::{Page, PageRequest, PAGE_SIZE};
pub use query::{RecipeFilter, TimeBounds};
pub use recipes::{RecipeFields, RecipePatch};
pub use reviews::AuthoredReview;
